use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::Post;
use crate::fetcher::ImageSource;
use crate::tui::components::{image_line, meta_line, pane_block};

/// Centered rectangle taking the given share of `area`.
pub fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Post detail overlay. Returns the largest scroll offset that still
/// keeps content on screen; `scroll` is clamped to it.
pub fn render(
    frame: &mut Frame,
    post: &Post,
    image: Option<&ImageSource>,
    scroll: u16,
    area: Rect,
    colors: &ColorConfig,
) -> u16 {
    let popup = centered(area, 80, 85);
    frame.render_widget(Clear, popup);

    let block = pane_block(" Post Details ", true, colors);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let lines = detail_lines(post, image, colors);
    let max_scroll = body_height(&lines, chunks[0].width).saturating_sub(chunks[0].height);
    let body = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));
    frame.render_widget(body, chunks[0]);

    let actions = Line::from(vec![
        Span::styled(
            " [s] Share Post ",
            Style::default().fg(colors.button_fg).bg(colors.button_bg),
        ),
        Span::raw("   "),
        Span::styled(
            " [x] Close ",
            Style::default().fg(colors.tag_fg).bg(colors.tag_bg),
        ),
    ]);
    frame.render_widget(Paragraph::new(actions), chunks[1]);
    max_scroll
}

pub fn detail_lines(
    post: &Post,
    image: Option<&ImageSource>,
    colors: &ColorConfig,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        image_line(image, colors),
        Line::from(""),
        meta_line(post, colors),
        Line::from(Span::styled(
            post.display_title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(post.content.lines().map(|l| Line::from(l.to_string())));
    lines
}

/// Rows `lines` occupy once word-wrapped at `width` columns.
pub fn body_height(lines: &[Line], width: u16) -> u16 {
    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrapped_rows(&text, width as usize)
        })
        .sum();
    rows.min(u16::MAX as usize) as u16
}

fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }

    let mut rows = 1;
    let mut column = 0;
    for word in text.split(' ') {
        let len = word.chars().count();
        let needed = if column == 0 { len } else { column + 1 + len };
        if needed <= width {
            column = needed;
        } else if len <= width {
            rows += 1;
            column = len;
        } else {
            // Words longer than a row are broken across rows
            if column > 0 {
                rows += 1;
            }
            let extra = (len - 1) / width;
            rows += extra;
            column = len - extra * width;
        }
    }
    rows
}
