//! Renderers for each homepage region.
//!
//! Components only read [`TuiApp`](crate::tui::app::TuiApp) state; they never
//! fetch or mutate anything except list scroll state and the grid's column
//! count.

pub mod all_posts;
pub mod footer;
pub mod grid;
pub mod hero;
pub mod modal;
pub mod navbar;
pub mod sidebar;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders},
};

use crate::config::ColorConfig;
use crate::domain::{Post, ViewState};
use crate::fetcher::ImageSource;
use crate::format::{display_date, estimate_read_time};

/// Author shown on every post; the API has no author field.
pub const AUTHOR: &str = "Admin";

pub fn pane_block<'a>(title: impl Into<Line<'a>>, active: bool, colors: &ColorConfig) -> Block<'a> {
    let border = if active {
        colors.active_border
    } else {
        colors.inactive_border
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Placeholder text for a view that is not `Ready`.
pub fn pending_text<T>(
    state: &ViewState<T>,
    ticks: u64,
    colors: &ColorConfig,
) -> Option<Text<'static>> {
    match state {
        ViewState::Ready(_) => None,
        ViewState::Loading => {
            let shade = if (ticks / 4) % 2 == 0 { "░" } else { "▒" };
            let style = Style::default().fg(colors.placeholder);
            Some(Text::from(
                [24, 36, 18]
                    .iter()
                    .map(|w| Line::from(Span::styled(shade.repeat(*w), style)))
                    .collect::<Vec<_>>(),
            ))
        }
        ViewState::Error(message) => Some(Text::from(vec![
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[r] Try again",
                Style::default().fg(colors.button_fg).bg(colors.button_bg),
            )),
        ])),
    }
}

/// The slot where a post image would be drawn.
pub fn image_line(source: Option<&ImageSource>, colors: &ColorConfig) -> Line<'static> {
    let label = match source {
        Some(ImageSource::Remote(url)) => format!("▣ {}", url),
        Some(ImageSource::Fallback(path)) => format!(
            "▣ {}",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        ),
        None => "▣ loading image…".to_string(),
    };
    Line::from(Span::styled(label, Style::default().fg(colors.image_slot)))
}

/// `Admin • January 5, 2024 • 1 min read`
pub fn meta_line(post: &Post, colors: &ColorConfig) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{} • {} • {}",
            AUTHOR,
            display_date(&post.created_at),
            estimate_read_time(&post.content)
        ),
        Style::default().fg(colors.metadata),
    ))
}

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    use crate::domain::Post;

    pub fn post(id: usize) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post number {}", id),
            content: format!("Body of post {} with a few words", id),
            image: format!("https://img.example.com/{}.jpg", id),
            created_at: "2024-01-05T10:00:00.000Z".into(),
        }
    }

    pub fn draw(width: u16, height: u16, f: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(f).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_pending_text_for_error_has_message_and_retry() {
        let state: ViewState<()> = ViewState::Error("API request failed: 500".into());
        let text = pending_text(&state, 0, &ColorConfig::default()).unwrap();
        let rendered: Vec<String> = text.lines.iter().map(line_text).collect();
        assert_eq!(rendered[0], "API request failed: 500");
        assert!(rendered.iter().any(|l| l.contains("Try again")));
    }

    #[test]
    fn test_pending_text_none_when_ready() {
        let state = ViewState::Ready(());
        assert!(pending_text(&state, 0, &ColorConfig::default()).is_none());
    }

    #[test]
    fn test_image_line_variants() {
        let colors = ColorConfig::default();
        assert_eq!(
            line_text(&image_line(Some(&ImageSource::Remote("https://x/a.jpg".into())), &colors)),
            "▣ https://x/a.jpg"
        );
        assert_eq!(
            line_text(&image_line(
                Some(&ImageSource::Fallback(PathBuf::from("/assets/fallback.svg"))),
                &colors
            )),
            "▣ fallback.svg"
        );
        assert_eq!(line_text(&image_line(None, &colors)), "▣ loading image…");
    }

    #[test]
    fn test_meta_line() {
        let post = testing::post(1);
        assert_eq!(
            line_text(&meta_line(&post, &ColorConfig::default())),
            "Admin • January 5, 2024 • 1 min read"
        );
    }
}
