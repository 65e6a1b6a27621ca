pub mod app;
pub mod clipboard;
pub mod components;
pub mod event;
pub mod layout;
pub mod loader;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::app::{AppContext, Result};
use crate::domain::{showcase, Post};
use crate::fetcher::ImageSource;

use self::app::{AllPostsView, Loaded, NavTarget, Pane, Route, TuiApp};
use self::clipboard::{Clipboard, SystemClipboard};
use self::event::{Action, AppEvent, EventHandler};
use self::loader::ViewController;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the terminal homepage. `demo` renders the built-in posts without
/// touching the network.
pub async fn run(ctx: Arc<AppContext>, demo: bool) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, demo).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, demo: bool) -> Result<()> {
    let config = ctx.config.clone();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut clipboard = SystemClipboard::new();

    let mut tui_app = if demo {
        TuiApp::with_posts(showcase::posts(), &config.home)
    } else {
        TuiApp::new(&config.home)
    };
    mount_home(&mut tui_app, &ctx, &tx);

    let event_handler = EventHandler::new(Duration::from_millis(100));

    loop {
        drain(&mut tui_app, &ctx, &tx, &mut rx);
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = config.keybindings.get_action(&key);
                handle_action(&mut tui_app, action, &ctx, &tx, &mut clipboard);
            }
            AppEvent::Tick => tui_app.on_tick(Instant::now()),
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Start every homepage fetch. Preloaded views are left alone.
fn mount_home(app: &mut TuiApp, ctx: &AppContext, tx: &UnboundedSender<Loaded>) {
    for view in HomeView::ALL {
        start_view(app, view, ctx, tx);
    }

    let visible: Vec<Post> = app
        .hero
        .ready()
        .into_iter()
        .chain(app.recent.ready())
        .flatten()
        .cloned()
        .collect();
    probe_images(app, ctx, tx, &visible);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeView {
    Hero,
    Featured,
    Recent,
    Total,
}

impl HomeView {
    const ALL: [HomeView; 4] = [
        HomeView::Hero,
        HomeView::Featured,
        HomeView::Recent,
        HomeView::Total,
    ];

    fn is_error(self, app: &TuiApp) -> bool {
        let controller = match self {
            HomeView::Hero => &app.hero,
            HomeView::Featured => &app.featured,
            HomeView::Recent => &app.recent,
            HomeView::Total => &app.total,
        };
        controller.state().is_error()
    }
}

fn start_view(app: &mut TuiApp, view: HomeView, ctx: &AppContext, tx: &UnboundedSender<Loaded>) {
    let source = ctx.source.clone();
    let home = &ctx.config.home;
    match view {
        HomeView::Hero => app.hero.start(
            async move { source.get_recent_posts(1).await },
            tx,
            Loaded::Hero,
        ),
        HomeView::Featured => {
            let (skip, limit) = (home.featured_skip, home.featured_limit);
            app.featured.start(
                async move { source.get_featured_posts(skip, limit).await },
                tx,
                Loaded::Featured,
            )
        }
        HomeView::Recent => {
            let limit = home.recent_limit;
            app.recent.start(
                async move { source.get_recent_posts(limit).await },
                tx,
                Loaded::Recent,
            )
        }
        HomeView::Total => app.total.start(
            async move { source.get_all_posts().await },
            tx,
            Loaded::Total,
        ),
    }
}

fn mount_all_posts(app: &mut TuiApp, ctx: &AppContext, tx: &UnboundedSender<Loaded>) {
    let controller = match &app.static_posts {
        Some(posts) => ViewController::preloaded(posts.clone()),
        None => {
            let mut controller = ViewController::idle();
            let source = ctx.source.clone();
            controller.start(
                async move { source.get_all_posts().await },
                tx,
                Loaded::AllPosts,
            );
            controller
        }
    };
    app.show_all_posts(AllPostsView::new(controller));
}

/// Apply every finished fetch waiting on the channel.
fn drain(
    app: &mut TuiApp,
    ctx: &AppContext,
    tx: &UnboundedSender<Loaded>,
    rx: &mut UnboundedReceiver<Loaded>,
) {
    while let Ok(loaded) = rx.try_recv() {
        // Only the hero and the grid draw images inline
        let shows_images = matches!(loaded, Loaded::Hero(..) | Loaded::Recent(..));
        let visible = app.apply(loaded);
        if shows_images {
            probe_images(app, ctx, tx, &visible);
        }
    }
}

fn probe_images(app: &mut TuiApp, ctx: &AppContext, tx: &UnboundedSender<Loaded>, posts: &[Post]) {
    for url in app.claim_image_probes(posts) {
        let images = ctx.images.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let source = images.resolve(&url).await;
            let _ = tx.send(Loaded::Image(url, source));
        });
    }
}

fn handle_action(
    app: &mut TuiApp,
    action: Action,
    ctx: &AppContext,
    tx: &UnboundedSender<Loaded>,
    clipboard: &mut dyn Clipboard,
) {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::MoveLeft => app.move_horizontal(-1),
        Action::MoveRight => app.move_horizontal(1),
        Action::PageUp => app.page(-1),
        Action::PageDown => app.page(1),
        Action::NextPane | Action::PrevPane => {
            if app.is_home() && app.selected_post.is_none() {
                app.active_pane = if action == Action::NextPane {
                    app.active_pane.next()
                } else {
                    app.active_pane.prev()
                };
                if app.active_pane != Pane::Navbar {
                    app.menu_open = false;
                }
            }
        }
        Action::ToggleMenu => {
            if app.selected_post.is_none() {
                app.toggle_menu();
            }
        }
        Action::Select => select(app, ctx, tx),
        Action::Close => {
            if app.selected_post.is_some() {
                app.close_post();
            } else if app.menu_open {
                app.menu_open = false;
            } else if !app.is_home() {
                app.show_home();
            }
        }
        Action::Share => share(app, ctx, clipboard),
        Action::Retry => retry(app, ctx, tx),
        Action::OpenImage => open_image(app, ctx),
        Action::AllPosts => {
            if app.selected_post.is_none() && app.is_home() {
                mount_all_posts(app, ctx, tx);
            }
        }
        Action::None => {}
    }
}

fn select(app: &mut TuiApp, ctx: &AppContext, tx: &UnboundedSender<Loaded>) {
    if app.selected_post.is_some() {
        return;
    }

    if app.is_home() && app.active_pane == Pane::Navbar {
        let item = app.focused_nav_item();
        match item.target {
            NavTarget::Home => app.show_home(),
            NavTarget::AllPosts => mount_all_posts(app, ctx, tx),
            NavTarget::Unavailable => {
                app.menu_open = false;
                app.set_toast(format!("{} is not available yet", item.name));
            }
        }
        return;
    }

    if let Some(post) = app.focused_post().cloned() {
        probe_images(app, ctx, tx, std::slice::from_ref(&post));
        app.open_post(post);
    }
}

fn share(app: &mut TuiApp, ctx: &AppContext, clipboard: &mut dyn Clipboard) {
    let Some(post) = &app.selected_post else {
        return;
    };

    let copied = ctx
        .source
        .post_url(&post.id)
        .and_then(|url| clipboard.set_text(url.as_str()));
    match copied {
        Ok(()) => app.set_toast("Link copied to clipboard!"),
        Err(e) => {
            tracing::warn!("Share failed: {}", e);
            app.set_toast(format!("Could not copy link: {}", e));
        }
    }
}

/// Restart the views that failed. Views already showing posts keep them.
fn retry(app: &mut TuiApp, ctx: &AppContext, tx: &UnboundedSender<Loaded>) {
    ctx.source.invalidate();

    if let Route::AllPosts(view) = &mut app.route {
        if view.posts.state().is_error() {
            let source = ctx.source.clone();
            view.posts.start(
                async move { source.get_all_posts().await },
                tx,
                Loaded::AllPosts,
            );
        }
        return;
    }

    let failed: Vec<HomeView> = HomeView::ALL
        .into_iter()
        .filter(|view| view.is_error(app))
        .collect();
    if failed.is_empty() {
        return;
    }

    tracing::info!("Retrying {:?}", failed);
    for view in failed {
        start_view(app, view, ctx, tx);
    }
}

fn open_image(app: &mut TuiApp, ctx: &AppContext) {
    let Some(post) = app.selected_post.as_ref().or_else(|| app.focused_post()) else {
        return;
    };

    let target = app
        .image_for(post)
        .map(ImageSource::target)
        .unwrap_or_else(|| ctx.images.fallback().target());
    if let Err(e) = open::that(&target) {
        app.set_toast(format!("Failed to open image: {}", e));
    }
}
