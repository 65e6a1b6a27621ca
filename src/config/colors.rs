//! Color configuration for the TUI.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// Configuration for all TUI colors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub active_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub inactive_border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg_active: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg_active: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg_inactive: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg_inactive: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub brand: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub tag_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub tag_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub excerpt: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub image_slot: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub placeholder: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub button_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub button_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            active_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            selection_bg_active: Color::Cyan,
            selection_fg_active: Color::Black,
            selection_bg_inactive: Color::DarkGray,
            selection_fg_inactive: Color::White,
            brand: Color::White,
            tag_fg: Color::Black,
            tag_bg: Color::White,
            excerpt: Color::Gray,
            metadata: Color::Yellow,
            image_slot: Color::Blue,
            placeholder: Color::DarkGray,
            error: Color::LightRed,
            button_fg: Color::White,
            button_bg: Color::Blue,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("gray", Color::Gray),
    ("grey", Color::Gray),
    ("darkgray", Color::DarkGray),
    ("darkgrey", Color::DarkGray),
    ("lightred", Color::LightRed),
    ("lightgreen", Color::LightGreen),
    ("lightyellow", Color::LightYellow),
    ("lightblue", Color::LightBlue),
    ("lightmagenta", Color::LightMagenta),
    ("lightcyan", Color::LightCyan),
    ("white", Color::White),
    ("reset", Color::Reset),
];

/// Parse a named color (case-insensitive) or a `#RRGGBB` / `#RGB` hex code.
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(|| format!("Invalid hex color: {}", s));
    }

    let lowered = s.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, color)| *color)
        .ok_or_else(|| format!("Unknown color: {}", s))
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        // #RGB expands each digit, so F becomes FF
        3 => Some(Color::Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_ignore_case() {
        assert_eq!(parse_color_string("LightRed").unwrap(), Color::LightRed);
        assert_eq!(parse_color_string("lightred").unwrap(), Color::LightRed);
        assert_eq!(parse_color_string(" grey ").unwrap(), Color::Gray);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color_string("#1E90FF").unwrap(), Color::Rgb(30, 144, 255));
        assert_eq!(parse_color_string("#abc").unwrap(), Color::Rgb(170, 187, 204));
    }

    #[test]
    fn test_invalid_colors() {
        assert!(parse_color_string("mauve").is_err());
        assert!(parse_color_string("#12345").is_err());
        assert!(parse_color_string("#zzzzzz").is_err());
        assert!(parse_color_string("#ééé").is_err());
    }

    #[test]
    fn test_color_config_partial_toml() {
        let config: ColorConfig = toml::from_str("error = \"#FF0000\"").unwrap();
        assert_eq!(config.error, Color::Rgb(255, 0, 0));
        assert_eq!(config.status_bg, Color::DarkGray);
    }
}
