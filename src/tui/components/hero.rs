use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::Post;
use crate::fetcher::ImageSource;
use crate::format::{estimate_read_time, truncate, HERO_EXCERPT_LEN};
use crate::tui::app::{Pane, TuiApp};
use crate::tui::components::{image_line, pane_block, pending_text};

pub fn render(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let active = app.active_pane == Pane::Hero;
    let block = pane_block(" Featured Story ", active, colors);

    let text = match pending_text(app.hero.state(), app.ticks, colors) {
        Some(text) => text,
        None => match app.hero_post() {
            Some(post) => Text::from(hero_lines(post, app.image_for(post), active, colors)),
            None => Text::from(Line::from(Span::styled(
                "No posts published yet.",
                Style::default().fg(colors.excerpt),
            ))),
        },
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn hero_lines(
    post: &Post,
    image: Option<&ImageSource>,
    active: bool,
    colors: &ColorConfig,
) -> Vec<Line<'static>> {
    let button_style = if active {
        Style::default()
            .bg(colors.selection_bg_active)
            .fg(colors.selection_fg_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.button_fg).bg(colors.button_bg)
    };

    vec![
        image_line(image, colors),
        Line::from(""),
        Line::from(Span::styled(
            " LATEST ",
            Style::default().fg(colors.tag_fg).bg(colors.tag_bg),
        )),
        Line::from(Span::styled(
            post.display_title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&post.content, HERO_EXCERPT_LEN),
            Style::default().fg(colors.excerpt),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Read Full Article → ", button_style),
            Span::raw("  "),
            Span::styled(
                estimate_read_time(&post.content),
                Style::default().fg(colors.metadata),
            ),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HomeConfig;
    use crate::tui::components::testing::{draw, post};

    #[test]
    fn test_hero_shows_first_post() {
        let app = TuiApp::with_posts(vec![post(1), post(2)], &HomeConfig::default());
        let screen = draw(80, 12, |f| {
            let area = f.area();
            render(f, &app, area, &ColorConfig::default())
        });
        assert!(screen.contains("Post number 1"));
        assert!(screen.contains("Read Full Article"));
        assert!(screen.contains("1 min read"));
        assert!(!screen.contains("Post number 2"));
    }

    #[test]
    fn test_hero_excerpt_is_truncated() {
        let mut long = post(1);
        long.content = "word ".repeat(100);
        let lines = hero_lines(&long, None, false, &ColorConfig::default());
        let excerpt: String = lines[4].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(excerpt.ends_with("..."));
        assert!(excerpt.chars().count() <= HERO_EXCERPT_LEN + 3);
    }

    #[test]
    fn test_hero_empty_collection() {
        let app = TuiApp::with_posts(Vec::new(), &HomeConfig::default());
        let screen = draw(80, 6, |f| {
            let area = f.area();
            render(f, &app, area, &ColorConfig::default())
        });
        assert!(screen.contains("No posts published yet."));
    }
}
