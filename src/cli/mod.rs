pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::api::SECRET_ENV;
use crate::fetcher::{DEFAULT_FEATURED_LIMIT, DEFAULT_FEATURED_SKIP, DEFAULT_RECENT_LIMIT};

#[derive(Parser)]
#[command(name = "frontpage")]
#[command(about = "A terminal blog homepage backed by a hosted posts API", long_about = None)]
pub struct Cli {
    /// Project secret of the hosted posts API
    #[arg(long, env = SECRET_ENV, global = true, hide_env_values = true)]
    pub project_secret: Option<String>,

    /// Config file (default: ~/.config/frontpage/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default)
    Tui {
        /// Show built-in posts instead of fetching
        #[arg(long)]
        demo: bool,
    },
    /// Print a slice of the post collection
    Posts {
        /// The first N posts
        #[arg(
            long,
            value_name = "N",
            default_value_t = DEFAULT_RECENT_LIMIT,
            conflicts_with = "featured"
        )]
        recent: usize,

        /// The featured window instead of the most recent posts
        #[arg(long)]
        featured: bool,

        /// Posts skipped before the featured window
        #[arg(long, default_value_t = DEFAULT_FEATURED_SKIP, requires = "featured")]
        skip: usize,

        /// Size of the featured window
        #[arg(long, default_value_t = DEFAULT_FEATURED_LIMIT, requires = "featured")]
        limit: usize,
    },
    /// Print one post in full
    Show {
        /// Post identifier
        id: String,
    },
    /// Print the total number of posts
    Count,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["frontpage"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["frontpage", "count", "--project-secret", "abc"]).unwrap();
        assert_eq!(cli.project_secret.as_deref(), Some("abc"));
        assert!(matches!(cli.command, Some(Commands::Count)));
    }

    #[test]
    fn test_featured_window_flags() {
        let cli = Cli::try_parse_from([
            "frontpage", "posts", "--featured", "--skip", "1", "--limit", "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Posts {
                featured: true,
                skip: 1,
                limit: 2,
                ..
            }) => {}
            _ => panic!("unexpected parse"),
        }
    }

    #[test]
    fn test_recent_conflicts_with_featured() {
        assert!(
            Cli::try_parse_from(["frontpage", "posts", "--recent", "2", "--featured"]).is_err()
        );
        assert!(Cli::try_parse_from(["frontpage", "posts", "--skip", "2"]).is_err());
    }
}
