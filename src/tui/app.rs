use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::app::Result;
use crate::config::{ColorConfig, HomeConfig};
use crate::domain::Post;
use crate::fetcher::{featured_slice, recent_slice, ImageSource};
use crate::tui::components::modal;
use crate::tui::loader::{Generation, ViewController};

/// Homepage regions that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Navbar,
    Hero,
    Featured,
    Recent,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Navbar => Pane::Hero,
            Pane::Hero => Pane::Featured,
            Pane::Featured => Pane::Recent,
            Pane::Recent => Pane::Navbar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::Navbar => Pane::Recent,
            Pane::Hero => Pane::Navbar,
            Pane::Featured => Pane::Hero,
            Pane::Recent => Pane::Featured,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    AllPosts,
    Unavailable,
}

pub struct NavItem {
    pub name: &'static str,
    pub target: NavTarget,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Homepage", target: NavTarget::Home },
    NavItem { name: "About us", target: NavTarget::Unavailable },
    NavItem { name: "Features", target: NavTarget::Unavailable },
    NavItem { name: "Blog", target: NavTarget::AllPosts },
    NavItem { name: "Contact us", target: NavTarget::Unavailable },
    NavItem { name: "Demo", target: NavTarget::Unavailable },
    NavItem { name: "Get Started", target: NavTarget::Unavailable },
];

/// The "all posts" listing. Owns its own fetch; leaving the route drops it.
pub struct AllPostsView {
    pub posts: ViewController<Vec<Post>>,
    pub index: usize,
    pub list_state: ListState,
}

impl AllPostsView {
    pub fn new(posts: ViewController<Vec<Post>>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            posts,
            index: 0,
            list_state,
        }
    }

    fn move_by(&mut self, delta: isize) {
        let len = self.posts.ready().map_or(0, Vec::len);
        self.index = step(self.index, delta, len);
        self.list_state.select(Some(self.index));
    }
}

pub enum Route {
    Home,
    AllPosts(AllPostsView),
}

/// Finished background work delivered to the UI loop.
pub enum Loaded {
    Hero(Generation, Result<Vec<Post>>),
    Featured(Generation, Result<Vec<Post>>),
    Recent(Generation, Result<Vec<Post>>),
    Total(Generation, Result<Vec<Post>>),
    AllPosts(Generation, Result<Vec<Post>>),
    Image(String, ImageSource),
}

pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

pub const MODAL_PAGE: u16 = 10;

/// Root composition state for the terminal homepage.
pub struct TuiApp {
    pub route: Route,
    pub active_pane: Pane,
    pub hero: ViewController<Vec<Post>>,
    pub featured: ViewController<Vec<Post>>,
    pub recent: ViewController<Vec<Post>>,
    /// Full collection, only used for the footer count.
    pub total: ViewController<Vec<Post>>,
    pub nav_index: usize,
    pub featured_index: usize,
    pub featured_list_state: ListState,
    pub recent_index: usize,
    /// Cards per grid row, as last laid out.
    pub grid_columns: usize,
    pub selected_post: Option<Post>,
    pub modal_scroll: u16,
    /// Updated on every draw of the modal.
    pub modal_max_scroll: u16,
    pub menu_open: bool,
    /// `None` while a probe is in flight.
    pub images: HashMap<String, Option<ImageSource>>,
    pub toast: Option<Toast>,
    pub toast_duration: Duration,
    pub ticks: u64,
    pub should_quit: bool,
    /// Posts supplied up front; views built from them never fetch.
    pub static_posts: Option<Vec<Post>>,
}

impl TuiApp {
    pub fn new(home: &HomeConfig) -> Self {
        Self::build(
            home,
            ViewController::idle(),
            ViewController::idle(),
            ViewController::idle(),
            ViewController::idle(),
            None,
        )
    }

    pub fn with_posts(posts: Vec<Post>, home: &HomeConfig) -> Self {
        Self::build(
            home,
            ViewController::preloaded(recent_slice(posts.clone(), 1)),
            ViewController::preloaded(featured_slice(
                posts.clone(),
                home.featured_skip,
                home.featured_limit,
            )),
            ViewController::preloaded(recent_slice(posts.clone(), home.recent_limit)),
            ViewController::preloaded(posts.clone()),
            Some(posts),
        )
    }

    fn build(
        home: &HomeConfig,
        hero: ViewController<Vec<Post>>,
        featured: ViewController<Vec<Post>>,
        recent: ViewController<Vec<Post>>,
        total: ViewController<Vec<Post>>,
        static_posts: Option<Vec<Post>>,
    ) -> Self {
        let mut featured_list_state = ListState::default();
        featured_list_state.select(Some(0));

        Self {
            route: Route::Home,
            active_pane: Pane::Recent,
            hero,
            featured,
            recent,
            total,
            nav_index: 0,
            featured_index: 0,
            featured_list_state,
            recent_index: 0,
            grid_columns: 3,
            selected_post: None,
            modal_scroll: 0,
            modal_max_scroll: 0,
            menu_open: false,
            images: HashMap::new(),
            toast: None,
            toast_duration: Duration::from_secs(home.toast_secs),
            ticks: 0,
            should_quit: false,
            static_posts,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self.route, Route::Home)
    }

    pub fn hero_post(&self) -> Option<&Post> {
        self.hero.ready().and_then(|posts| posts.first())
    }

    /// The post the focused region currently points at.
    pub fn focused_post(&self) -> Option<&Post> {
        if let Route::AllPosts(view) = &self.route {
            return view.posts.ready().and_then(|posts| posts.get(view.index));
        }
        match self.active_pane {
            Pane::Navbar => None,
            Pane::Hero => self.hero_post(),
            Pane::Featured => self
                .featured
                .ready()
                .and_then(|posts| posts.get(self.featured_index)),
            Pane::Recent => self
                .recent
                .ready()
                .and_then(|posts| posts.get(self.recent_index)),
        }
    }

    pub fn open_post(&mut self, post: Post) {
        tracing::debug!("Opening post {}", post.id);
        // Unwrapped height until the first draw knows the real width
        let lines = modal::detail_lines(&post, None, &ColorConfig::default());
        self.modal_max_scroll = modal::body_height(&lines, u16::MAX).saturating_sub(1);
        self.selected_post = Some(post);
        self.modal_scroll = 0;
    }

    pub fn close_post(&mut self) {
        self.selected_post = None;
        self.modal_scroll = 0;
        self.modal_max_scroll = 0;
    }

    pub fn focused_nav_item(&self) -> &'static NavItem {
        &NAV_ITEMS[self.nav_index.min(NAV_ITEMS.len() - 1)]
    }

    pub fn show_all_posts(&mut self, view: AllPostsView) {
        self.route = Route::AllPosts(view);
        self.menu_open = false;
    }

    pub fn show_home(&mut self) {
        self.route = Route::Home;
        self.menu_open = false;
    }

    pub fn move_up(&mut self) {
        self.move_vertical(-1);
    }

    pub fn move_down(&mut self) {
        self.move_vertical(1);
    }

    fn move_vertical(&mut self, direction: isize) {
        if self.selected_post.is_some() {
            self.modal_scroll = scroll(self.modal_scroll, direction, 1).min(self.modal_max_scroll);
            return;
        }
        if let Route::AllPosts(view) = &mut self.route {
            view.move_by(direction);
            return;
        }
        match self.active_pane {
            Pane::Navbar if self.menu_open => self.move_horizontal(direction),
            Pane::Navbar | Pane::Hero => {}
            Pane::Featured => {
                let len = self.featured.ready().map_or(0, Vec::len);
                self.featured_index = step(self.featured_index, direction, len);
                self.featured_list_state.select(Some(self.featured_index));
            }
            Pane::Recent => {
                let len = self.recent.ready().map_or(0, Vec::len);
                let columns = self.grid_columns.max(1) as isize;
                let target = self.recent_index as isize + direction * columns;
                if target >= 0 && (target as usize) < len {
                    self.recent_index = target as usize;
                }
            }
        }
    }

    pub fn move_horizontal(&mut self, direction: isize) {
        if self.selected_post.is_some() || !self.is_home() {
            return;
        }
        match self.active_pane {
            Pane::Navbar => {
                self.nav_index = step(self.nav_index, direction, NAV_ITEMS.len());
            }
            Pane::Recent => {
                let len = self.recent.ready().map_or(0, Vec::len);
                self.recent_index = step(self.recent_index, direction, len);
            }
            Pane::Hero | Pane::Featured => {}
        }
    }

    pub fn page(&mut self, direction: isize) {
        if self.selected_post.is_some() {
            self.modal_scroll =
                scroll(self.modal_scroll, direction, MODAL_PAGE).min(self.modal_max_scroll);
        } else if let Route::AllPosts(view) = &mut self.route {
            view.move_by(direction * MODAL_PAGE as isize);
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.active_pane = Pane::Navbar;
        }
    }

    /// Route a finished fetch to its view. Returns the posts that became
    /// visible so their images can be probed.
    pub fn apply(&mut self, loaded: Loaded) -> Vec<Post> {
        let (controller, generation, result) = match loaded {
            Loaded::Hero(g, r) => (&mut self.hero, g, r),
            Loaded::Featured(g, r) => (&mut self.featured, g, r),
            Loaded::Recent(g, r) => (&mut self.recent, g, r),
            Loaded::Total(g, r) => (&mut self.total, g, r),
            Loaded::AllPosts(g, r) => match &mut self.route {
                Route::AllPosts(view) => (&mut view.posts, g, r),
                Route::Home => return Vec::new(),
            },
            Loaded::Image(url, source) => {
                self.images.insert(url, Some(source));
                return Vec::new();
            }
        };

        if !controller.apply(generation, result) {
            return Vec::new();
        }
        let visible = controller.ready().cloned().unwrap_or_default();
        self.clamp_selection();
        visible
    }

    fn clamp_selection(&mut self) {
        let featured_len = self.featured.ready().map_or(0, Vec::len);
        self.featured_index = self.featured_index.min(featured_len.saturating_sub(1));
        self.featured_list_state.select(Some(self.featured_index));

        let recent_len = self.recent.ready().map_or(0, Vec::len);
        self.recent_index = self.recent_index.min(recent_len.saturating_sub(1));
    }

    /// Image URLs of `posts` that have not been probed yet, marked as pending.
    pub fn claim_image_probes(&mut self, posts: &[Post]) -> Vec<String> {
        let mut urls = Vec::new();
        for post in posts {
            if !self.images.contains_key(&post.image) {
                self.images.insert(post.image.clone(), None);
                urls.push(post.image.clone());
            }
        }
        urls
    }

    pub fn image_for(&self, post: &Post) -> Option<&ImageSource> {
        self.images.get(&post.image).and_then(Option::as_ref)
    }

    /// Total shown in the footer; hidden while loading, on error, or when zero.
    pub fn footer_count(&self) -> Option<usize> {
        self.total.ready().map(Vec::len).filter(|n| *n > 0)
    }

    pub fn set_toast(&mut self, message: impl Into<String>) {
        self.set_toast_at(message, Instant::now());
    }

    pub fn set_toast_at(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: now + self.toast_duration,
        });
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
    }
}

fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = (len - 1) as isize;
    (index as isize + delta).clamp(0, max) as usize
}

fn scroll(offset: u16, direction: isize, amount: u16) -> u16 {
    if direction < 0 {
        offset.saturating_sub(amount)
    } else {
        offset.saturating_add(amount)
    }
}
