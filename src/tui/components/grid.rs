use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::Post;
use crate::fetcher::ImageSource;
use crate::format::{truncate, CARD_EXCERPT_LEN};
use crate::tui::app::{Pane, TuiApp};
use crate::tui::components::{image_line, meta_line, pane_block, pending_text};

const HEADER_HEIGHT: u16 = 3;

pub fn columns_for(width: u16) -> usize {
    match width {
        w if w >= 96 => 3,
        w if w >= 64 => 2,
        _ => 1,
    }
}

pub fn render(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let active = app.active_pane == Pane::Recent;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)])
        .split(area);

    render_header(frame, chunks[0], colors);

    let columns = columns_for(area.width);
    app.grid_columns = columns;

    if let Some(text) = pending_text(app.recent.state(), app.ticks, colors) {
        let block = pane_block("", active, colors);
        frame.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), chunks[1]);
        return;
    }

    let posts = app.recent.ready().map(Vec::as_slice).unwrap_or_default();
    if posts.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No posts to show yet.",
                Style::default().fg(colors.excerpt),
            )),
            chunks[1],
        );
        return;
    }

    let rows = posts.len().div_ceil(columns);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(chunks[1]);

    for (row, row_posts) in posts.chunks(columns).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[row]);

        for (col, post) in row_posts.iter().enumerate() {
            let index = row * columns + col;
            let selected = active && index == app.recent_index;
            let card = Paragraph::new(card_lines(post, app.image_for(post), colors))
                .block(pane_block("", selected, colors))
                .wrap(Wrap { trim: true });
            frame.render_widget(card, cells[col]);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Recent Posts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Stay updated with the latest insights and trends",
            Style::default().fg(colors.excerpt),
        )),
    ]);
    let all_posts = Paragraph::new(Line::from(Span::styled(
        " [a] All Posts → ",
        Style::default().fg(colors.button_fg).bg(colors.button_bg),
    )));

    frame.render_widget(title, chunks[0]);
    frame.render_widget(all_posts, chunks[1]);
}

/// Card body: image slot, title, excerpt and metadata.
pub fn card_lines(
    post: &Post,
    image: Option<&ImageSource>,
    colors: &ColorConfig,
) -> Vec<Line<'static>> {
    vec![
        image_line(image, colors),
        Line::from(Span::styled(
            post.display_title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&post.content, CARD_EXCERPT_LEN),
            Style::default().fg(colors.excerpt),
        )),
        Line::from(""),
        meta_line(post, colors),
    ]
}
