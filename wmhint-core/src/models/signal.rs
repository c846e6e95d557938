use serde::{Deserialize, Serialize};

use super::{Handle, WindowHandle};

/// Signals emitted for a single window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSignal {
    Raised,
    PositionChanged,
    TitleChanged,
    AboveChanged,
    Unmanaged,
}

impl WindowSignal {
    /// The signals a controller listens to for the whole life of its window.
    pub const TRACKED: [Self; 4] = [
        Self::Raised,
        Self::PositionChanged,
        Self::TitleChanged,
        Self::AboveChanged,
    ];
}

/// Compositor-wide signals.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySignal {
    WindowMapped,
    WindowDestroyed,
    WorkspaceSwitched,
    OverviewShowing,
    OverviewHidden,
}

impl DisplaySignal {
    pub const ALL: [Self; 5] = [
        Self::WindowMapped,
        Self::WindowDestroyed,
        Self::WorkspaceSwitched,
        Self::OverviewShowing,
        Self::OverviewHidden,
    ];
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal<H: Handle> {
    #[serde(bound = "")]
    Window(WindowHandle<H>, WindowSignal),
    Display(DisplaySignal),
}

/// Opaque id handed out by the compositor for every connected signal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignalId(pub u64);
