use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::format::display_date;
use crate::tui::app::{Pane, TuiApp};
use crate::tui::components::{pane_block, pending_text};

pub fn render(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let active = app.active_pane == Pane::Featured;
    let block = pane_block(" Other featured posts ", active, colors);

    if let Some(text) = pending_text(app.featured.state(), app.ticks, colors) {
        frame.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
        return;
    }

    let posts = app.featured.ready().map(Vec::as_slice).unwrap_or_default();
    if posts.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "Nothing featured right now.",
            Style::default().fg(colors.excerpt),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| {
            ListItem::new(vec![
                Line::from(post.display_title().to_string()),
                Line::from(Span::styled(
                    display_date(&post.created_at),
                    Style::default().fg(colors.metadata),
                )),
            ])
        })
        .collect();

    let highlight_style = if active {
        Style::default()
            .bg(colors.selection_bg_active)
            .fg(colors.selection_fg_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(colors.selection_bg_inactive)
            .fg(colors.selection_fg_inactive)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.featured_list_state);
}
