//! Configuration management for Frontpage.
//!
//! Configuration is read from `~/.config/frontpage/config.toml` at startup
//! (or the path given with `--config`). If the file doesn't exist, a default
//! configuration with comments is created.

pub mod api;
pub mod colors;
pub mod keybindings;

pub use api::ApiConfig;
pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub home: HomeConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Layout of the homepage: which positional slices feed each region.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub recent_limit: usize,
    pub featured_skip: usize,
    pub featured_limit: usize,
    /// Local image shown whenever a post image cannot be loaded.
    pub fallback_image: PathBuf,
    /// How long a notification stays in the status bar.
    pub toast_secs: u64,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            recent_limit: 3,
            featured_skip: 3,
            featured_limit: 5,
            fallback_image: default_fallback_image(),
            toast_secs: 3,
        }
    }
}

const FALLBACK_SVG: &[u8] = include_bytes!("../../assets/fallback.svg");

/// `~/.cache/frontpage/fallback.svg`, or under the temp dir without a cache dir.
pub fn default_fallback_image() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("frontpage")
        .join("fallback.svg")
}

impl HomeConfig {
    /// Write the bundled fallback image to `fallback_image` unless a file is
    /// already there.
    pub fn install_fallback_image(&self) -> Result<(), ConfigError> {
        let path = &self.fallback_image;
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(path, FALLBACK_SVG).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!("Wrote fallback image to {}", path.display());
        Ok(())
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file is created with commented defaults. Missing fields
    /// use default values; an unparseable file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/frontpage/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("frontpage").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

const DEFAULT_CONFIG: &str = r##"# Frontpage Configuration
#
# Colors can be named (Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
# DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
# LightCyan, White, Reset) or hex ("#RRGGBB" / "#RGB").
#
# Keys can be single characters ("a"), special keys (Enter, Tab, BackTab,
# Esc, Up, Down, Left, Right, PageUp, PageDown, Space, F1-F12) and may carry
# modifiers ("Ctrl+c", "Shift+Tab").

[api]
# Project identifier of the hosted mock API. Prefer the
# FRONTPAGE_PROJECT_SECRET environment variable or --project-secret.
# project_secret = "0123456789abcdef"

# "{secret}" is replaced with the project secret
endpoint = "https://{secret}.mockapi.io/api"
timeout_secs = 10

# Share one "all posts" response between views for this long (0 = off)
cache_ttl_secs = 30

[home]
recent_limit = 3
featured_skip = 3
featured_limit = 5
toast_secs = 3
# fallback_image = "/path/to/fallback.svg"

[colors]
active_border = "Cyan"
inactive_border = "DarkGray"
selection_bg_active = "Cyan"
selection_fg_active = "Black"
selection_bg_inactive = "DarkGray"
selection_fg_inactive = "White"
brand = "White"
tag_fg = "Black"
tag_bg = "White"
excerpt = "Gray"
metadata = "Yellow"
image_slot = "Blue"
placeholder = "DarkGray"
error = "LightRed"
button_fg = "White"
button_bg = "Blue"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
move_left = ["h", "Left"]
move_right = ["l", "Right"]
next_pane = ["Tab"]
prev_pane = ["BackTab", "Shift+Tab"]
select = ["Enter"]
close = ["Esc", "x"]
share = ["s"]
retry = ["r", "F5"]
open_image = ["i"]
all_posts = ["a"]
toggle_menu = ["m"]
page_up = ["p", "PageUp"]
page_down = ["n", "PageDown"]
"##;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
