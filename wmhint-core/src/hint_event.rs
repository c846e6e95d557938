use crate::models::{DisplaySignal, Handle, Mapped, Signal, WindowHandle, WindowSignal};

/// Everything the compositor reports that hint emulation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintEvent<H: Handle> {
    WindowRaised(WindowHandle<H>),
    WindowMoved(WindowHandle<H>),
    TitleChanged(WindowHandle<H>),
    AboveChanged(WindowHandle<H>),
    WindowUnmanaged(WindowHandle<H>),
    WindowMapped(Mapped<H>),
    WindowDestroyed(WindowHandle<H>),
    WorkspaceSwitched,
    OverviewShowing,
    OverviewHidden,
}

impl<H: Handle> HintEvent<H> {
    /// The signal a subscriber must have connected to receive this event.
    #[must_use]
    pub fn signal(&self) -> Signal<H> {
        match *self {
            Self::WindowRaised(h) => Signal::Window(h, WindowSignal::Raised),
            Self::WindowMoved(h) => Signal::Window(h, WindowSignal::PositionChanged),
            Self::TitleChanged(h) => Signal::Window(h, WindowSignal::TitleChanged),
            Self::AboveChanged(h) => Signal::Window(h, WindowSignal::AboveChanged),
            Self::WindowUnmanaged(h) => Signal::Window(h, WindowSignal::Unmanaged),
            Self::WindowMapped(_) => Signal::Display(DisplaySignal::WindowMapped),
            Self::WindowDestroyed(_) => Signal::Display(DisplaySignal::WindowDestroyed),
            Self::WorkspaceSwitched => Signal::Display(DisplaySignal::WorkspaceSwitched),
            Self::OverviewShowing => Signal::Display(DisplaySignal::OverviewShowing),
            Self::OverviewHidden => Signal::Display(DisplaySignal::OverviewHidden),
        }
    }
}
