//! The decoded form of a title directive.
use serde::{Deserialize, Serialize};

/// Stacking preference. A window is pinned to at most one end of the stack.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pin {
    #[default]
    None,
    Bottom,
    Top,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Placement and visibility instructions extracted from a window title.
///
/// Every decode produces a complete directive; nothing is merged with what a previous title
/// said.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub position: Option<Position>,
    pub pin: Pin,
    /// Keep the window on whichever workspace is active.
    pub all_workspaces: bool,
    /// Hide the window from taskbars and window lists.
    pub skip_window_list: bool,
    /// Snap back to `position` whenever the window is moved.
    pub fixed: bool,
}

impl Directive {
    #[must_use]
    pub fn pins_bottom(&self) -> bool {
        self.pin == Pin::Bottom
    }

    #[must_use]
    pub fn pins_top(&self) -> bool {
        self.pin == Pin::Top
    }

    #[must_use]
    pub const fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// The position to enforce on every move, if any.
    #[must_use]
    pub fn fixed_position(&self) -> Option<Position> {
        self.position.filter(|_| self.fixed)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_position_requires_both_flag_and_position() {
        let mut directive = Directive {
            position: Some(Position::new(3, 4)),
            ..Directive::default()
        };
        assert_eq!(directive.fixed_position(), None);
        directive.fixed = true;
        assert_eq!(directive.fixed_position(), Some(Position::new(3, 4)));
        directive.position = None;
        assert_eq!(directive.fixed_position(), None);
    }

    #[test]
    fn default_directive_is_empty() {
        assert!(Directive::default().is_empty());
        assert!(!Directive::default().pins_bottom());
        assert!(!Directive::default().pins_top());
    }

    #[test]
    fn serializes_with_field_names() {
        let directive = Directive {
            position: Some(Position::new(1, 2)),
            pin: Pin::Bottom,
            ..Directive::default()
        };
        assert_eq!(
            serde_json::to_string(&directive).unwrap(),
            r#"{"position":{"x":1,"y":2},"pin":"Bottom","all_workspaces":false,"skip_window_list":false,"fixed":false}"#
        );
    }
}
