//! Keybinding configuration for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Key strings bound to each action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub next_pane: Vec<String>,
    pub prev_pane: Vec<String>,
    pub select: Vec<String>,
    pub close: Vec<String>,
    pub share: Vec<String>,
    pub retry: Vec<String>,
    pub open_image: Vec<String>,
    pub all_posts: Vec<String>,
    pub toggle_menu: Vec<String>,
    pub page_up: Vec<String>,
    pub page_down: Vec<String>,
}

fn keys(bindings: &[&str]) -> Vec<String> {
    bindings.iter().map(|b| b.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            move_left: keys(&["h", "Left"]),
            move_right: keys(&["l", "Right"]),
            next_pane: keys(&["Tab"]),
            prev_pane: keys(&["BackTab", "Shift+Tab"]),
            select: keys(&["Enter"]),
            close: keys(&["Esc", "x"]),
            share: keys(&["s"]),
            retry: keys(&["r", "F5"]),
            open_image: keys(&["i"]),
            all_posts: keys(&["a"]),
            toggle_menu: keys(&["m"]),
            page_up: keys(&["p", "PageUp"]),
            page_down: keys(&["n", "PageDown"]),
        }
    }
}

impl KeybindingConfig {
    /// Resolve a key event to an action. Earlier entries win on conflicts.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table: [(&[String], Action); 16] = [
            (self.quit.as_slice(), Action::Quit),
            (self.close.as_slice(), Action::Close),
            (self.move_up.as_slice(), Action::MoveUp),
            (self.move_down.as_slice(), Action::MoveDown),
            (self.move_left.as_slice(), Action::MoveLeft),
            (self.move_right.as_slice(), Action::MoveRight),
            (self.next_pane.as_slice(), Action::NextPane),
            (self.prev_pane.as_slice(), Action::PrevPane),
            (self.select.as_slice(), Action::Select),
            (self.share.as_slice(), Action::Share),
            (self.retry.as_slice(), Action::Retry),
            (self.open_image.as_slice(), Action::OpenImage),
            (self.all_posts.as_slice(), Action::AllPosts),
            (self.toggle_menu.as_slice(), Action::ToggleMenu),
            (self.page_up.as_slice(), Action::PageUp),
            (self.page_down.as_slice(), Action::PageDown),
        ];

        table
            .iter()
            .find(|(bindings, _)| matches_any(key, bindings))
            .map(|(_, action)| *action)
            .unwrap_or(Action::None)
    }
}

fn matches_any(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings
        .iter()
        .filter_map(|b| parse_key_string(b).ok())
        .any(|binding| binding.matches(key))
}

/// A parsed key binding with code and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is ignored on the event side so "R" matches Shift+R.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == key.modifiers.difference(KeyModifiers::SHIFT))
    }
}

/// Parse strings such as `"j"`, `"Enter"`, `"Ctrl+c"` or `"Shift+Tab"`.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    // "+" alone is a key, not a separator
    let (modifier_parts, key_part) = match s.rsplit_once('+') {
        Some((mods, key)) if !mods.is_empty() && !key.is_empty() => (Some(mods), key),
        _ => (None, s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts.into_iter().flat_map(|m| m.split('+')) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(KeyBinding {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lowered = s.to_lowercase();
    if let Some(n) = lowered.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lowered.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "backspace" | "bs" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "space" => Ok(KeyCode::Char(' ')),
        _ => Err(format!("Unknown key: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_parse_plain_and_special_keys() {
        assert_eq!(parse_key_string("s").unwrap().code, KeyCode::Char('s'));
        assert_eq!(parse_key_string("Esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("F5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        assert!(parse_key_string("F13").is_err());
    }

    #[test]
    fn test_parse_modifiers() {
        let binding = parse_key_string("Ctrl+Shift+a").unwrap();
        assert_eq!(binding.code, KeyCode::Char('a'));
        assert_eq!(
            binding.modifiers,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        );
        assert!(parse_key_string("Hyper+a").is_err());
    }

    #[test]
    fn test_shift_is_tolerated_on_events() {
        let binding = parse_key_string("R").unwrap();
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)));
        let ctrl_c = parse_key_string("Ctrl+c").unwrap();
        assert!(!ctrl_c.matches(&press(KeyCode::Char('c'))));
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingConfig::default();
        assert_eq!(config.get_action(&press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(config.get_action(&press(KeyCode::Esc)), Action::Close);
        assert_eq!(config.get_action(&press(KeyCode::Enter)), Action::Select);
        assert_eq!(config.get_action(&press(KeyCode::Char('s'))), Action::Share);
        assert_eq!(config.get_action(&press(KeyCode::F(5))), Action::Retry);
        assert_eq!(config.get_action(&press(KeyCode::Char('a'))), Action::AllPosts);
        assert_eq!(config.get_action(&press(KeyCode::Char('z'))), Action::None);
    }

    #[test]
    fn test_custom_bindings_from_toml() {
        let config: KeybindingConfig = toml::from_str("share = [\"y\"]").unwrap();
        assert_eq!(config.get_action(&press(KeyCode::Char('y'))), Action::Share);
        assert_eq!(config.get_action(&press(KeyCode::Char('s'))), Action::None);
        assert_eq!(config.get_action(&press(KeyCode::Char('q'))), Action::Quit);
    }
}
