//! System clipboard access for the share action.

use crate::app::{FrontpageError, Result};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard.
///
/// Opened on first copy and held for the session. On X11 and Wayland the
/// copied text lives only as long as its owning handle.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| FrontpageError::Clipboard("clipboard unavailable".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(clipboard_error)
    }
}

fn clipboard_error(e: arboard::Error) -> FrontpageError {
    FrontpageError::Clipboard(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_opens_lazily() {
        let clipboard = SystemClipboard::new();
        assert!(!clipboard.is_open());
    }
}
