use super::{
    Compositor, Config, Coordinator, Handle, HintEvent, IdleScheduler, Mapped, ProtocolBridge,
    WindowHandle,
};

impl<H, C, SERVER, BRIDGE, SCHED> Coordinator<H, C, SERVER, BRIDGE, SCHED>
where
    H: Handle,
    C: Config,
    SERVER: Compositor<H>,
    BRIDGE: ProtocolBridge<H>,
    SCHED: IdleScheduler,
{
    /// Drain the compositor's event queue, including anything our own reactions add to it,
    /// until it stays empty.
    pub fn process_events(&mut self) {
        loop {
            let events = self.compositor.take_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.handle_event(event);
            }
        }
    }

    /// React to a single compositor event.
    pub fn handle_event(&mut self, event: HintEvent<H>) {
        match event {
            HintEvent::WindowRaised(handle) => {
                if let Some(window) = self.windows.iter().find(|w| w.handle() == handle) {
                    window.raised(&mut self.compositor);
                }
            }
            HintEvent::WindowMoved(handle) => {
                if let Some(window) = self.windows.iter().find(|w| w.handle() == handle) {
                    window.position_changed(&mut self.compositor);
                }
            }
            HintEvent::AboveChanged(handle) => {
                if let Some(window) = self.windows.iter().find(|w| w.handle() == handle) {
                    window.above_changed(&mut self.compositor);
                }
            }
            HintEvent::TitleChanged(handle) => {
                let refresh = &mut self.refresh;
                if let Some(window) = self.windows.iter_mut().find(|w| w.handle() == handle) {
                    window.title_changed(&mut self.compositor, &mut self.bridge, || {
                        refresh.request(true);
                    });
                }
            }
            HintEvent::WindowUnmanaged(handle) => self.window_unmanaged_handler(handle),
            HintEvent::WindowMapped(mapped) if self.is_enabled() => {
                self.window_mapped_handler(mapped);
            }
            HintEvent::WindowDestroyed(_) | HintEvent::WorkspaceSwitched if self.is_enabled() => {
                self.schedule_refresh(true);
            }
            HintEvent::OverviewShowing if self.is_enabled() => {
                if self.config.suspend_during_overview() {
                    self.refresh_enabled = false;
                }
            }
            HintEvent::OverviewHidden if self.is_enabled() => {
                self.refresh_enabled = true;
                self.schedule_refresh(true);
            }
            // Compositor-wide events that were queued before `disable`.
            HintEvent::WindowMapped(_)
            | HintEvent::WindowDestroyed(_)
            | HintEvent::WorkspaceSwitched
            | HintEvent::OverviewShowing
            | HintEvent::OverviewHidden => {}
        }
    }

    fn window_mapped_handler(&mut self, mapped: Mapped<H>) {
        match self.resolve(mapped) {
            Ok(handle) if self.bridge.belongs_to_trusted_client(handle) => {
                if let Err(err) = self.add_window(handle) {
                    tracing::warn!("Could not manage {:?}: {}", handle, err);
                }
            }
            Ok(_) => {}
            Err(err) => tracing::warn!("Ignoring mapped window: {}", err),
        }
        self.schedule_refresh(false);
    }

    fn window_unmanaged_handler(&mut self, handle: WindowHandle<H>) {
        if let Err(err) = self.forget_window(handle) {
            tracing::trace!("Unmanaged event dropped: {}", err);
        } else {
            tracing::debug!("Window {:?} unmanaged", handle);
        }
    }
}
