use super::{Compositor, Config, Coordinator, Handle, IdleScheduler, ProtocolBridge, WindowHandle};
use crate::controller::WindowController;
use crate::scheduler::{IdleToken, RefreshRequest};

impl<H, C, SERVER, BRIDGE, SCHED> Coordinator<H, C, SERVER, BRIDGE, SCHED>
where
    H: Handle,
    C: Config,
    SERVER: Compositor<H>,
    BRIDGE: ProtocolBridge<H>,
    SCHED: IdleScheduler,
{
    /// Called by the host when an idle callback fires. Tokens that are no longer pending,
    /// because they were cancelled or already ran, are ignored.
    pub fn dispatch_idle(&mut self, token: IdleToken) {
        match self.refresh.take(token) {
            Some(request) => self.refresh_handler(request),
            None => tracing::trace!("Stale idle callback {:?}", token),
        }
    }

    fn refresh_handler(&mut self, request: RefreshRequest) {
        if !self.refresh_enabled {
            tracing::debug!("Overview showing, skipping refresh");
            return;
        }
        tracing::debug!("Refreshing {} windows ({:?})", self.windows.len(), request);
        // Records only leave the registry through queued events, which are handled after
        // this pass.
        for window in &self.windows {
            window.reapply_if_pinned(&mut self.compositor, request.check_workspace);
        }
        if request.check_workspace && self.config.arbitrate_activation() {
            if let Some(handle) = self.activation_target() {
                tracing::debug!("Activating {:?}", handle);
                self.compositor.activate(handle);
            }
        }
    }

    /// The top-most window on the active workspace that is neither minimized nor pinned to
    /// the bottom. Failing that, a bottom-pinned window that is not minimized, so something
    /// stays focusable when that is all there is.
    pub fn activation_target(&self) -> Option<WindowHandle<H>> {
        let workspace = self.compositor.active_workspace();
        self.compositor
            .stacking_order(workspace)
            .into_iter()
            .filter(|h| self.compositor.window_type(*h).is_tabbable())
            .find(|h| !self.compositor.is_minimized(*h) && !self.pins_bottom(*h))
            .or_else(|| {
                self.windows
                    .iter()
                    .filter(|w| w.directive().pins_bottom())
                    .map(WindowController::handle)
                    .find(|h| !self.compositor.is_minimized(*h))
            })
    }
}
