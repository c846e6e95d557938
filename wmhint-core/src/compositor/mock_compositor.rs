use std::collections::VecDeque;

use super::Compositor;
use crate::hint_event::HintEvent;
use crate::models::{
    ActorHandle, Mapped, MockHandle, Position, Signal, SignalId, WindowHandle, WindowType,
    WorkspaceId,
};

/// Commands the core issued, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    MoveTo(WindowHandle<MockHandle>, Position),
    Lower(WindowHandle<MockHandle>),
    MakeAbove(WindowHandle<MockHandle>),
    UnmakeAbove(WindowHandle<MockHandle>),
    ChangeWorkspace(WindowHandle<MockHandle>, WorkspaceId),
    Activate(WindowHandle<MockHandle>),
}

#[derive(Debug, Clone)]
pub struct MockWindow {
    pub handle: WindowHandle<MockHandle>,
    pub title: Option<String>,
    pub above: bool,
    pub minimized: bool,
    pub r#type: WindowType,
    pub position: Position,
    pub workspace: Option<WorkspaceId>,
}

impl MockWindow {
    pub fn new(id: MockHandle, title: &str) -> Self {
        Self {
            handle: WindowHandle(id),
            title: Some(title.to_owned()),
            above: false,
            minimized: false,
            r#type: WindowType::Normal,
            position: Position::default(),
            workspace: Some(0),
        }
    }

    pub fn minimized(mut self) -> Self {
        self.minimized = true;
        self
    }

    pub fn on_workspace(mut self, workspace: WorkspaceId) -> Self {
        self.workspace = Some(workspace);
        self
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn with_type(mut self, r#type: WindowType) -> Self {
        self.r#type = r#type;
        self
    }
}

/// An in-memory compositor. Events are only queued for connected signals, the way a real
/// compositor only calls back connected handlers.
#[derive(Debug, Default)]
pub struct MockCompositor {
    pub windows: Vec<MockWindow>,
    /// Top-most first.
    pub stacking: Vec<WindowHandle<MockHandle>>,
    pub actors: Vec<(ActorHandle<MockHandle>, WindowHandle<MockHandle>)>,
    pub active_workspace: WorkspaceId,
    pub native_hints: bool,
    pub calls: Vec<Call>,
    connections: Vec<(SignalId, Signal<MockHandle>)>,
    next_signal: u64,
    events: VecDeque<HintEvent<MockHandle>>,
}

impl MockCompositor {
    /// Adds a window on top of the stack without announcing it.
    pub fn insert(&mut self, window: MockWindow) -> WindowHandle<MockHandle> {
        let handle = window.handle;
        self.stacking.insert(0, handle);
        self.windows.push(window);
        handle
    }

    /// Adds a window and reports it mapped.
    pub fn map(&mut self, window: MockWindow) -> WindowHandle<MockHandle> {
        let handle = self.insert(window);
        self.emit(HintEvent::WindowMapped(Mapped::Window(handle)));
        handle
    }

    /// Adds a window and reports its actor mapped.
    pub fn map_actor(&mut self, window: MockWindow, actor: MockHandle) -> ActorHandle<MockHandle> {
        let handle = self.insert(window);
        let actor = ActorHandle(actor);
        self.actors.push((actor, handle));
        self.emit(HintEvent::WindowMapped(Mapped::Actor(actor)));
        actor
    }

    /// The window goes away: unmanaged first, then destroyed.
    pub fn unmanage(&mut self, handle: WindowHandle<MockHandle>) {
        self.windows.retain(|w| w.handle != handle);
        self.stacking.retain(|h| h != &handle);
        self.actors.retain(|(_, h)| h != &handle);
        self.emit(HintEvent::WindowUnmanaged(handle));
        self.emit(HintEvent::WindowDestroyed(handle));
    }

    pub fn set_title(&mut self, handle: WindowHandle<MockHandle>, title: &str) {
        if let Some(w) = self.window_mut(handle) {
            w.title = Some(title.to_owned());
        }
        self.emit(HintEvent::TitleChanged(handle));
    }

    /// Something other than the core raised the window, e.g. a click.
    pub fn raise(&mut self, handle: WindowHandle<MockHandle>) {
        self.restack_top(handle);
        self.emit(HintEvent::WindowRaised(handle));
    }

    /// Something other than the core moved the window, e.g. a drag.
    pub fn drag(&mut self, handle: WindowHandle<MockHandle>, x: i32, y: i32) {
        if let Some(w) = self.window_mut(handle) {
            w.position = Position::new(x, y);
        }
        self.emit(HintEvent::WindowMoved(handle));
    }

    /// Something other than the core toggled "always on top".
    pub fn set_above(&mut self, handle: WindowHandle<MockHandle>, above: bool) {
        if let Some(w) = self.window_mut(handle) {
            w.above = above;
        }
        self.emit(HintEvent::AboveChanged(handle));
    }

    pub fn switch_workspace(&mut self, workspace: WorkspaceId) {
        self.active_workspace = workspace;
        self.emit(HintEvent::WorkspaceSwitched);
    }

    pub fn emit(&mut self, event: HintEvent<MockHandle>) {
        if self.is_connected(event.signal()) {
            self.events.push_back(event);
        }
    }

    pub fn is_connected(&self, signal: Signal<MockHandle>) -> bool {
        self.connections.iter().any(|(_, s)| s == &signal)
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn window(&self, handle: WindowHandle<MockHandle>) -> Option<&MockWindow> {
        self.windows.iter().find(|w| w.handle == handle)
    }

    fn window_mut(&mut self, handle: WindowHandle<MockHandle>) -> Option<&mut MockWindow> {
        self.windows.iter_mut().find(|w| w.handle == handle)
    }

    fn restack_top(&mut self, handle: WindowHandle<MockHandle>) {
        self.stacking.retain(|h| h != &handle);
        self.stacking.insert(0, handle);
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Compositor<MockHandle> for MockCompositor {
    fn has_native_hints(&self) -> bool {
        self.native_hints
    }

    fn window_for_actor(&self, actor: ActorHandle<MockHandle>) -> Option<WindowHandle<MockHandle>> {
        self.actors
            .iter()
            .find(|(a, _)| a == &actor)
            .map(|(_, h)| *h)
    }

    fn connect(&mut self, signal: Signal<MockHandle>) -> SignalId {
        self.next_signal += 1;
        let id = SignalId(self.next_signal);
        self.connections.push((id, signal));
        id
    }

    fn disconnect(&mut self, id: SignalId) {
        let before = self.connections.len();
        self.connections.retain(|(i, _)| i != &id);
        assert_eq!(before, self.connections.len() + 1, "{id:?} disconnected twice");
    }

    fn take_events(&mut self) -> Vec<HintEvent<MockHandle>> {
        self.events.drain(..).collect()
    }

    fn title(&self, window: WindowHandle<MockHandle>) -> Option<String> {
        self.window(window).and_then(|w| w.title.clone())
    }

    fn is_above(&self, window: WindowHandle<MockHandle>) -> bool {
        self.window(window).is_some_and(|w| w.above)
    }

    fn is_minimized(&self, window: WindowHandle<MockHandle>) -> bool {
        self.window(window).is_some_and(|w| w.minimized)
    }

    fn window_type(&self, window: WindowHandle<MockHandle>) -> WindowType {
        self.window(window).map(|w| w.r#type).unwrap_or_default()
    }

    fn position(&self, window: WindowHandle<MockHandle>) -> Position {
        self.window(window).map(|w| w.position).unwrap_or_default()
    }

    fn workspace(&self, window: WindowHandle<MockHandle>) -> Option<WorkspaceId> {
        self.window(window).and_then(|w| w.workspace)
    }

    fn active_workspace(&self) -> WorkspaceId {
        self.active_workspace
    }

    fn stacking_order(&self, workspace: WorkspaceId) -> Vec<WindowHandle<MockHandle>> {
        self.stacking
            .iter()
            .copied()
            .filter(|h| self.located_on_workspace(*h, workspace))
            .collect()
    }

    fn move_to(&mut self, window: WindowHandle<MockHandle>, position: Position) {
        self.calls.push(Call::MoveTo(window, position));
        if let Some(w) = self.window_mut(window) {
            w.position = position;
        }
        self.emit(HintEvent::WindowMoved(window));
    }

    fn lower(&mut self, window: WindowHandle<MockHandle>) {
        self.calls.push(Call::Lower(window));
        self.stacking.retain(|h| h != &window);
        self.stacking.push(window);
    }

    fn make_above(&mut self, window: WindowHandle<MockHandle>) {
        self.calls.push(Call::MakeAbove(window));
        if let Some(w) = self.window_mut(window) {
            w.above = true;
        }
        self.emit(HintEvent::AboveChanged(window));
    }

    fn unmake_above(&mut self, window: WindowHandle<MockHandle>) {
        self.calls.push(Call::UnmakeAbove(window));
        if let Some(w) = self.window_mut(window) {
            w.above = false;
        }
        self.emit(HintEvent::AboveChanged(window));
    }

    fn change_workspace(&mut self, window: WindowHandle<MockHandle>, workspace: WorkspaceId) {
        self.calls.push(Call::ChangeWorkspace(window, workspace));
        if let Some(w) = self.window_mut(window) {
            w.workspace = Some(workspace);
        }
    }

    fn activate(&mut self, window: WindowHandle<MockHandle>) {
        self.calls.push(Call::Activate(window));
        self.restack_top(window);
        self.emit(HintEvent::WindowRaised(window));
    }
}
