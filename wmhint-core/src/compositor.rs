#[cfg(test)]
mod mock_compositor;

use crate::hint_event::HintEvent;
use crate::models::{
    ActorHandle, Handle, Position, Signal, SignalId, WindowHandle, WindowType, WorkspaceId,
};

#[cfg(test)]
pub use self::mock_compositor::{Call, MockCompositor, MockWindow};

/// The parts of a compositor hint emulation needs: window queries and commands, signal
/// subscriptions, and the queue of events those subscriptions produce.
///
/// Commands may queue further events (lowering a window can report a stacking change). They
/// are picked up through [`Compositor::take_events`] once the current event is handled.
pub trait Compositor<H: Handle> {
    /// Whether the compositor already honors legacy window-type hints itself.
    fn has_native_hints(&self) -> bool;

    fn window_for_actor(&self, actor: ActorHandle<H>) -> Option<WindowHandle<H>>;

    fn connect(&mut self, signal: Signal<H>) -> SignalId;

    fn disconnect(&mut self, id: SignalId);

    fn take_events(&mut self) -> Vec<HintEvent<H>>;

    fn title(&self, window: WindowHandle<H>) -> Option<String>;

    fn is_above(&self, window: WindowHandle<H>) -> bool;

    fn is_minimized(&self, window: WindowHandle<H>) -> bool;

    fn window_type(&self, window: WindowHandle<H>) -> WindowType;

    fn position(&self, window: WindowHandle<H>) -> Position;

    /// The workspace a window lives on, `None` for windows shown on every workspace.
    fn workspace(&self, window: WindowHandle<H>) -> Option<WorkspaceId>;

    fn located_on_workspace(&self, window: WindowHandle<H>, workspace: WorkspaceId) -> bool {
        self.workspace(window).map_or(true, |ws| ws == workspace)
    }

    fn active_workspace(&self) -> WorkspaceId;

    /// Windows on `workspace`, top-most first.
    fn stacking_order(&self, workspace: WorkspaceId) -> Vec<WindowHandle<H>>;

    fn move_to(&mut self, window: WindowHandle<H>, position: Position);

    fn lower(&mut self, window: WindowHandle<H>);

    fn make_above(&mut self, window: WindowHandle<H>);

    fn unmake_above(&mut self, window: WindowHandle<H>);

    fn change_workspace(&mut self, window: WindowHandle<H>, workspace: WorkspaceId);

    fn activate(&mut self, window: WindowHandle<H>);
}

/// Signal connections owned by one subscriber. Released all at once, exactly once.
#[derive(Debug, Default)]
pub struct Subscriptions(Vec<SignalId>);

impl Subscriptions {
    pub fn connect<H: Handle, C: Compositor<H>>(&mut self, compositor: &mut C, signal: Signal<H>) {
        self.0.push(compositor.connect(signal));
    }

    pub fn release<H: Handle, C: Compositor<H>>(self, compositor: &mut C) {
        for id in self.0 {
            compositor.disconnect(id);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
