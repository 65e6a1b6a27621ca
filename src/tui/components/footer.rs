use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::ColorConfig;

pub fn footer_line(count: usize, colors: &ColorConfig) -> Line<'static> {
    Line::from(Span::styled(
        format!("Showing latest posts • Total posts available: {}", count),
        Style::default().fg(colors.metadata),
    ))
}

/// Draws nothing unless the full collection loaded and is non-empty.
pub fn render(frame: &mut Frame, count: Option<usize>, area: Rect, colors: &ColorConfig) {
    if let Some(count) = count {
        frame.render_widget(
            Paragraph::new(footer_line(count, colors)).alignment(Alignment::Center),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::testing::draw;

    #[test]
    fn test_footer_shows_total() {
        let screen = draw(70, 1, |f| {
            let area = f.area();
            render(f, Some(12), area, &ColorConfig::default())
        });
        assert!(screen.contains("Total posts available: 12"));
    }

    #[test]
    fn test_footer_hidden_without_count() {
        let screen = draw(70, 1, |f| {
            let area = f.area();
            render(f, None, area, &ColorConfig::default())
        });
        assert!(screen.trim().is_empty());
    }
}
