/// Tri-state of a single fetch-backed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ViewState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ViewState::Ready(data),
            Err(e) => {
                let message = e.to_string();
                if message.is_empty() {
                    ViewState::Error("An unexpected error occurred".to_string())
                } else {
                    ViewState::Error(message)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: ViewState<Vec<u8>> = ViewState::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
    }

    #[test]
    fn test_from_ok_is_ready() {
        let state: ViewState<u32> = Ok::<_, String>(3).into();
        assert_eq!(state.ready(), Some(&3));
    }

    #[test]
    fn test_from_err_keeps_message() {
        let state: ViewState<u32> = Err::<u32, _>("boom").into();
        assert_eq!(state.error_message(), Some("boom"));
        assert!(state.is_error());
    }

    #[test]
    fn test_empty_error_message_is_replaced() {
        let state: ViewState<u32> = Err::<u32, _>("").into();
        assert_eq!(state.error_message(), Some("An unexpected error occurred"));
    }
}
