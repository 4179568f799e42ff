//! Keyboard vocabulary understood by the carousel.

/// Keys with a carousel binding. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code` value such as `"ArrowLeft"`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// What the host should do with a key after the carousel saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Not bound; the host keeps its default behaviour.
    Ignored,
    /// Handled; the default behaviour may still run.
    Handled,
    /// Handled, and the host's default (e.g. scroll on Space) must be suppressed.
    DefaultPrevented,
}

impl KeyResponse {
    pub fn default_prevented(self) -> bool {
        self == KeyResponse::DefaultPrevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_codes() {
        assert_eq!(Key::from_code("Space"), Key::Space);
        assert_eq!(Key::from_code("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_code("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_code("KeyA"), Key::Other);
    }

    #[test]
    fn only_prevented_response_reports_prevented() {
        assert!(KeyResponse::DefaultPrevented.default_prevented());
        assert!(!KeyResponse::Handled.default_prevented());
        assert!(!KeyResponse::Ignored.default_prevented());
    }
}
