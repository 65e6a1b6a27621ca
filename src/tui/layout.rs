use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::config::ColorConfig;
use crate::tui::app::{Route, TuiApp};
use crate::tui::components::{all_posts, footer, grid, hero, modal, navbar, sidebar};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let area = frame.area();
    let footer_count = app.footer_count();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                             // Navbar
            Constraint::Min(10),                               // Route body
            Constraint::Length(footer_count.map_or(0, |_| 1)), // Footer
            Constraint::Length(1),                             // Status bar
        ])
        .split(area);

    navbar::render(frame, app, chunks[0], colors);

    let ticks = app.ticks;
    match &mut app.route {
        Route::AllPosts(view) => all_posts::render(frame, view, ticks, chunks[1], colors),
        Route::Home => render_home(frame, app, chunks[1], colors),
    }

    footer::render(frame, footer_count, chunks[2], colors);
    render_status_bar(frame, app, chunks[3], colors);

    if app.menu_open && navbar::is_compact(area) {
        navbar::render_menu(frame, app, chunks[1], colors);
    }

    let max_scroll = app.selected_post.as_ref().map(|post| {
        modal::render(frame, post, app.image_for(post), app.modal_scroll, area, colors)
    });
    if let Some(max_scroll) = max_scroll {
        app.modal_max_scroll = max_scroll;
        app.modal_scroll = app.modal_scroll.min(max_scroll);
    }
}

fn render_home(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(8)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(rows[0]);

    hero::render(frame, app, top[0], colors);
    sidebar::render(frame, app, top[1], colors);
    grid::render(frame, app, rows[1], colors);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if let Some(toast) = &app.toast {
        toast.message.clone()
    } else if app.selected_post.is_some() {
        "j/k:Scroll  n/p:Page  s:Share  i:Image  x/Esc:Close  q:Quit".to_string()
    } else if !app.is_home() {
        "j/k:Nav  n/p:Page  Enter:Open  Esc:Back  r:Retry  q:Quit".to_string()
    } else {
        "Tab:Pane  h/j/k/l:Nav  Enter:Open  a:All posts  m:Menu  r:Retry  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HomeConfig;
    use crate::domain::showcase;
    use crate::tui::app::AllPostsView;
    use crate::tui::components::testing::draw;
    use crate::tui::loader::ViewController;

    #[test]
    fn test_home_renders_every_region() {
        let mut app = TuiApp::with_posts(showcase::posts(), &HomeConfig::default());
        let screen = draw(120, 40, |f| render(f, &mut app, &ColorConfig::default()));

        assert!(screen.contains("Beyond UI"));
        assert!(screen.contains("Featured Story"));
        assert!(screen.contains("Other featured posts"));
        assert!(screen.contains("Recent Posts"));
        assert!(screen.contains("Total posts available: 8"));
        assert!(screen.contains("Tab:Pane"));
    }

    #[test]
    fn test_loading_home_has_no_footer() {
        let mut app = TuiApp::new(&HomeConfig::default());
        let screen = draw(120, 40, |f| render(f, &mut app, &ColorConfig::default()));
        assert!(!screen.contains("Total posts available"));
    }

    #[test]
    fn test_modal_overlays_home() {
        let posts = showcase::posts();
        let mut app = TuiApp::with_posts(posts.clone(), &HomeConfig::default());
        app.open_post(posts[1].clone());
        let screen = draw(120, 40, |f| render(f, &mut app, &ColorConfig::default()));
        assert!(screen.contains("Post Details"));
        assert!(screen.contains("x/Esc:Close"));
    }

    #[test]
    fn test_draw_clamps_modal_scroll() {
        let posts = showcase::posts();
        let mut app = TuiApp::with_posts(posts.clone(), &HomeConfig::default());
        app.open_post(posts[1].clone());
        app.modal_scroll = 40;
        app.modal_max_scroll = 40;
        draw(120, 60, |f| render(f, &mut app, &ColorConfig::default()));
        assert!(app.modal_scroll <= app.modal_max_scroll);
        assert!(app.modal_max_scroll < 40);
    }

    #[test]
    fn test_toast_replaces_hints() {
        let mut app = TuiApp::with_posts(showcase::posts(), &HomeConfig::default());
        app.set_toast("Link copied to clipboard!");
        let screen = draw(120, 40, |f| render(f, &mut app, &ColorConfig::default()));
        assert!(screen.contains("Link copied to clipboard!"));
        assert!(!screen.contains("Tab:Pane"));
    }

    #[test]
    fn test_all_posts_route() {
        let posts = showcase::posts();
        let mut app = TuiApp::with_posts(posts.clone(), &HomeConfig::default());
        app.show_all_posts(AllPostsView::new(ViewController::preloaded(posts)));
        let screen = draw(120, 30, |f| render(f, &mut app, &ColorConfig::default()));
        assert!(screen.contains("All Posts (8)"));
        assert!(!screen.contains("Featured Story"));
    }

    #[test]
    fn test_compact_menu_overlay() {
        let mut app = TuiApp::with_posts(showcase::posts(), &HomeConfig::default());
        app.toggle_menu();
        let screen = draw(60, 30, |f| render(f, &mut app, &ColorConfig::default()));
        assert!(screen.contains("Menu"));
        assert!(screen.contains("Contact us"));
    }
}
