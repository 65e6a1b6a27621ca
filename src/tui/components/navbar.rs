use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::config::ColorConfig;
use crate::tui::app::{Pane, TuiApp, NAV_ITEMS};
use crate::tui::components::pane_block;

/// Below this width the links collapse into a toggleable menu.
pub const COMPACT_WIDTH: u16 = 80;

const BRAND: &str = "▲ Beyond UI";

pub fn is_compact(area: Rect) -> bool {
    area.width < COMPACT_WIDTH
}

pub fn render(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let active = app.is_home() && app.active_pane == Pane::Navbar;
    let block = pane_block("", active, colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = Paragraph::new(Line::from(Span::styled(
        BRAND,
        Style::default().fg(colors.brand).add_modifier(Modifier::BOLD),
    )));

    if is_compact(area) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(9)])
            .split(inner);
        let toggle = if app.menu_open { "✕ Close" } else { "≡ Menu" };
        frame.render_widget(brand, chunks[0]);
        frame.render_widget(Paragraph::new(toggle), chunks[1]);
        return;
    }

    let cta_index = NAV_ITEMS.len() - 1;
    let cta = NAV_ITEMS[cta_index].name;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BRAND.chars().count() as u16 + 2),
            Constraint::Min(10),
            Constraint::Length(cta.len() as u16 + 4),
        ])
        .split(inner);

    let selected_style = Style::default()
        .bg(colors.selection_bg_active)
        .fg(colors.selection_fg_active)
        .add_modifier(Modifier::BOLD);

    let links: Vec<Line> = NAV_ITEMS[..cta_index]
        .iter()
        .map(|item| Line::from(item.name))
        .collect();
    let mut tabs = Tabs::new(links).divider(" ");
    if active && app.nav_index < cta_index {
        tabs = tabs.select(app.nav_index).highlight_style(selected_style);
    } else {
        tabs = tabs.highlight_style(Style::default());
    }

    let cta_style = if active && app.nav_index == cta_index {
        selected_style
    } else {
        Style::default().fg(colors.button_fg).bg(colors.button_bg)
    };

    frame.render_widget(brand, chunks[0]);
    frame.render_widget(tabs, chunks[1]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {} ", cta), cta_style))),
        chunks[2],
    );
}

/// Dropdown shown under the navbar in compact layouts.
pub fn render_menu(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let height = (NAV_ITEMS.len() as u16 + 2).min(area.height);
    let menu_area = Rect::new(area.x, area.y, area.width, height);

    let items: Vec<ListItem> = NAV_ITEMS.iter().map(|item| ListItem::new(item.name)).collect();
    let list = List::new(items)
        .block(pane_block(" Menu ", true, colors))
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg_active)
                .fg(colors.selection_fg_active),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.nav_index));

    frame.render_widget(Clear, menu_area);
    frame.render_stateful_widget(list, menu_area, &mut state);
}
