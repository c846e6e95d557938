use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    #[default]
    Normal,
}

impl WindowType {
    /// Windows that show up in the compositor's normal tab list and may receive focus when
    /// activation is handed around.
    #[must_use]
    pub const fn is_tabbable(self) -> bool {
        matches!(self, Self::Normal | Self::Dialog | Self::Utility)
    }
}
