//! # Frontpage
//!
//! A terminal rendition of a blog homepage whose posts live in a hosted
//! mock REST API.
//!
//! ```text
//! PostSource (HTTP + cache) → ViewController → TuiApp → components
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the homepage
//! FRONTPAGE_PROJECT_SECRET=0123456789abcdef frontpage
//!
//! # No API at hand
//! frontpage tui --demo
//!
//! # Scripting
//! frontpage posts --featured
//! frontpage show 3
//! frontpage count
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the post
/// source, the image probe and the loaded configuration.
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/frontpage/config.toml`, supporting:
/// - API endpoint, project secret, timeout and cache lifetime
/// - Homepage slice sizes and the fallback image
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Command-line interface using clap.
///
/// - `tui [--demo]` - Launch the TUI (default)
/// - `posts [--recent N | --featured [--skip S] [--limit L]]` - Print a slice
/// - `show <id>` - Print one post
/// - `count` - Print the collection size
pub mod cli;

/// Core domain models.
///
/// - [`Post`](domain::Post): A blog post as served by the API
/// - [`ViewState`](domain::ViewState): Loading / Error / Ready
pub mod domain;

/// Access to the remote post collection.
///
/// - [`PostSource`](fetcher::PostSource): Async trait for post retrieval
/// - [`HttpPostClient`](fetcher::HttpPostClient): reqwest-based implementation
/// - [`CachedSource`](fetcher::CachedSource): Shared, single-flight cache
/// - [`ImageProbe`](fetcher::ImageProbe): Resolves post images or the fallback
pub mod fetcher;

/// Read time, excerpts and date formatting.
pub mod format;

/// Terminal user interface.
///
/// Homepage layout built with ratatui: navbar, featured story with a
/// sidebar of other featured posts, a recent posts grid, the footer count
/// and a post detail modal.
///
/// Keybindings: Tab cycles regions, h/j/k/l navigate, Enter opens, s
/// shares, r retries, a lists all posts, q quits.
pub mod tui;
