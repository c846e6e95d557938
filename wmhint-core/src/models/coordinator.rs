use crate::bridge::ProtocolBridge;
use crate::compositor::{Compositor, Subscriptions};
use crate::config::Config;
use crate::controller::WindowController;
use crate::errors::{HintError, Result};
use crate::models::{Directive, DisplaySignal, Handle, Mapped, Signal, WindowHandle, WindowSignal};
use crate::scheduler::{IdleScheduler, RefreshQueue};

/// Owns the managed windows and the coalesced refresh that keeps them in line.
#[derive(Debug)]
pub struct Coordinator<H: Handle, C, SERVER, BRIDGE, SCHED> {
    pub config: C,
    pub compositor: SERVER,
    pub bridge: BRIDGE,
    pub(crate) windows: Vec<WindowController<H>>,
    pub(crate) refresh: RefreshQueue<SCHED>,
    /// Compositor-wide connections, present while enabled.
    pub(crate) subscriptions: Option<Subscriptions>,
    /// Cleared while the overview is showing.
    pub(crate) refresh_enabled: bool,
}

impl<H, C, SERVER, BRIDGE, SCHED> Coordinator<H, C, SERVER, BRIDGE, SCHED>
where
    H: Handle,
    C: Config,
    SERVER: Compositor<H>,
    BRIDGE: ProtocolBridge<H>,
    SCHED: IdleScheduler,
{
    pub fn new(config: C, compositor: SERVER, bridge: BRIDGE, scheduler: SCHED) -> Self {
        let priority = config.refresh_priority();
        Self {
            config,
            compositor,
            bridge,
            windows: Vec::new(),
            refresh: RefreshQueue::new(scheduler, priority),
            subscriptions: None,
            refresh_enabled: true,
        }
    }

    /// Start listening for compositor-wide events. Does nothing when the compositor handles
    /// legacy hints itself, or when already enabled.
    pub fn enable(&mut self) {
        if self.subscriptions.is_some() {
            return;
        }
        if self.compositor.has_native_hints() {
            tracing::debug!("Compositor honors legacy hints natively, staying idle");
            return;
        }
        let mut subscriptions = Subscriptions::default();
        for signal in DisplaySignal::ALL {
            subscriptions.connect(&mut self.compositor, Signal::Display(signal));
        }
        self.subscriptions = Some(subscriptions);
        self.refresh_enabled = true;
        tracing::debug!("Hint emulation enabled");
    }

    /// Drop every managed window and connection. Afterwards the coordinator is in the same
    /// state as before the first `enable`.
    pub fn disable(&mut self) {
        // Cancel first so a queued pass never runs against released windows.
        self.refresh.cancel();
        for window in self.windows.drain(..) {
            window.teardown(&mut self.compositor);
        }
        if let Some(subscriptions) = self.subscriptions.take() {
            subscriptions.release(&mut self.compositor);
        }
        self.refresh_enabled = true;
        tracing::debug!("Hint emulation disabled");
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Manage a window, resolving actors to their window first. Returns whether a new record
    /// was created: a window already managed, or a compositor with native hint support,
    /// leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::UnresolvedActor`] if an actor has no window behind it.
    pub fn add_window(&mut self, mapped: impl Into<Mapped<H>>) -> Result<bool> {
        if self.compositor.has_native_hints() {
            return Ok(false);
        }
        let handle = self.resolve(mapped.into())?;
        if self.windows.iter().any(|w| w.handle() == handle) {
            return Ok(false);
        }
        let refresh = &mut self.refresh;
        let mut window = WindowController::create(
            handle,
            &mut self.compositor,
            &mut self.bridge,
            self.config.legacy_whitespace_markers(),
            || refresh.request(true),
        );
        window.subscribe(&mut self.compositor, WindowSignal::Unmanaged);
        self.windows.push(window);
        tracing::debug!("Managing window {:?}", handle);
        Ok(true)
    }

    /// Stop managing a window and release everything its record holds.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::NotManaged`] if the window has no record.
    pub fn forget_window(&mut self, handle: WindowHandle<H>) -> Result<()> {
        let index = self
            .windows
            .iter()
            .position(|w| w.handle() == handle)
            .ok_or_else(|| HintError::NotManaged(format!("{handle:?}")))?;
        let window = self.windows.remove(index);
        window.teardown(&mut self.compositor);
        Ok(())
    }

    pub(crate) fn resolve(&self, mapped: Mapped<H>) -> Result<WindowHandle<H>> {
        match mapped {
            Mapped::Window(handle) => Ok(handle),
            Mapped::Actor(actor) => self
                .compositor
                .window_for_actor(actor)
                .ok_or_else(|| HintError::UnresolvedActor(format!("{actor:?}"))),
        }
    }

    /// Queue a refresh pass, folding it into the pending one if there is one.
    pub fn schedule_refresh(&mut self, check_workspace: bool) {
        self.refresh.request(check_workspace);
    }

    #[must_use]
    pub fn refresh_pending(&self) -> bool {
        self.refresh.pending().is_some()
    }

    pub fn managed_windows(&self) -> impl Iterator<Item = WindowHandle<H>> + '_ {
        self.windows.iter().map(WindowController::handle)
    }

    #[must_use]
    pub fn is_managed(&self, handle: WindowHandle<H>) -> bool {
        self.windows.iter().any(|w| w.handle() == handle)
    }

    #[must_use]
    pub fn directive(&self, handle: WindowHandle<H>) -> Option<&Directive> {
        self.windows
            .iter()
            .find(|w| w.handle() == handle)
            .map(WindowController::directive)
    }

    pub(crate) fn pins_bottom(&self, handle: WindowHandle<H>) -> bool {
        self.directive(handle).is_some_and(Directive::pins_bottom)
    }
}

#[cfg(test)]
pub(crate) type TestCoordinator = Coordinator<
    crate::models::MockHandle,
    crate::config::TestConfig,
    crate::compositor::MockCompositor,
    crate::bridge::MockBridge,
    crate::scheduler::MockScheduler,
>;

#[cfg(test)]
impl TestCoordinator {
    pub fn new_test(bridge: crate::bridge::MockBridge) -> Self {
        Self::new(
            crate::config::TestConfig::default(),
            crate::compositor::MockCompositor::default(),
            bridge,
            crate::scheduler::MockScheduler::default(),
        )
    }

    /// Let the event loop go idle once: dispatch queued events, fire the pending refresh and
    /// dispatch whatever it caused.
    pub fn run_until_idle(&mut self) {
        self.process_events();
        let tokens = self.refresh.scheduler_mut().fire();
        for token in tokens {
            self.dispatch_idle(token);
        }
        self.process_events();
    }
}
