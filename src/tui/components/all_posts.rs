use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::format::{display_date, estimate_read_time};
use crate::tui::app::AllPostsView;
use crate::tui::components::{pane_block, pending_text};

pub fn render(
    frame: &mut Frame,
    view: &mut AllPostsView,
    ticks: u64,
    area: Rect,
    colors: &ColorConfig,
) {
    if let Some(text) = pending_text(view.posts.state(), ticks, colors) {
        let block = pane_block(" All Posts ", true, colors);
        frame.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
        return;
    }

    let posts = view.posts.ready().map(Vec::as_slice).unwrap_or_default();
    let title = format!(" All Posts ({}) ", posts.len());

    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", display_date(&post.created_at)),
                    Style::default().fg(colors.metadata),
                ),
                Span::raw(post.display_title().to_string()),
                Span::styled(
                    format!("  {}", estimate_read_time(&post.content)),
                    Style::default().fg(colors.excerpt),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(title, true, colors))
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg_active)
                .fg(colors.selection_fg_active)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut view.list_state);
}
