//! Pure helpers deriving display values from post content and dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::app::{FrontpageError, Result};

pub const WORDS_PER_MINUTE: usize = 200;

/// Excerpt length used by post cards in the grid.
pub const CARD_EXCERPT_LEN: usize = 150;

/// Excerpt length used by the hero section.
pub const HERO_EXCERPT_LEN: usize = 200;

const ELLIPSIS: &str = "...";

/// Estimate reading time as `"{minutes} min read"`.
///
/// Words are the pieces left after splitting on runs of whitespace, so
/// leading or trailing whitespace counts as an empty piece and an empty
/// string counts as one word.
pub fn estimate_read_time(content: &str) -> String {
    let minutes = split_piece_count(content).div_ceil(WORDS_PER_MINUTE);
    format!("{} min read", minutes)
}

fn split_piece_count(content: &str) -> usize {
    let mut runs = 0;
    let mut in_whitespace = false;
    for c in content.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                runs += 1;
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
        }
    }
    runs + 1
}

/// Shorten `content` to `max_len` characters, trimming trailing
/// whitespace and appending `...`.
///
/// Text that is already an excerpt of at most `max_len` characters plus
/// the ellipsis is returned unchanged.
pub fn truncate(content: &str, max_len: usize) -> String {
    if content.chars().count() <= max_len {
        return content.to_string();
    }

    if let Some(body) = content.strip_suffix(ELLIPSIS) {
        let body_len = body.chars().count();
        if body_len <= max_len && body.trim_end().chars().count() == body_len {
            return content.to_string();
        }
    }

    let head: String = content.chars().take(max_len).collect();
    format!("{}{}", head.trim_end(), ELLIPSIS)
}

/// Render an ISO-8601 timestamp as `"January 5, 2024"` (UTC).
pub fn format_date(iso: &str) -> Result<String> {
    let date = parse_date(iso.trim())
        .ok_or_else(|| FrontpageError::Format(iso.to_string()))?;
    Ok(date.format("%B %-d, %Y").to_string())
}

/// Like [`format_date`], rendering `"Invalid Date"` when parsing fails.
pub fn display_date(iso: &str) -> String {
    format_date(iso).unwrap_or_else(|_| "Invalid Date".to_string())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
