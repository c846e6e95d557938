//! Per-window enforcement of a decoded directive.
#![allow(clippy::module_name_repetitions)]

use crate::bridge::ProtocolBridge;
use crate::codec;
use crate::compositor::{Compositor, Subscriptions};
use crate::models::{Directive, Handle, Position, Signal, WindowHandle, WindowSignal};

/// Keeps one window's stacking, position, window-list visibility and workspace in line with
/// the directive in its title.
///
/// Every enforcement call is skipped when the window is already in the wanted state, so that
/// the events a call produces settle instead of feeding back into the same reaction.
#[derive(Debug)]
pub struct WindowController<H: Handle> {
    handle: WindowHandle<H>,
    directive: Directive,
    subscriptions: Subscriptions,
    /// Whether the last decode pinned the window on top.
    pinned_top: bool,
    whitespace_markers: bool,
}

impl<H: Handle> WindowController<H> {
    /// Start tracking `handle`: connect its signals, decode its title and apply the result.
    /// `on_changed` runs once for the initial decode.
    pub fn create<C, B, F>(
        handle: WindowHandle<H>,
        compositor: &mut C,
        bridge: &mut B,
        whitespace_markers: bool,
        on_changed: F,
    ) -> Self
    where
        C: Compositor<H>,
        B: ProtocolBridge<H>,
        F: FnOnce(),
    {
        let mut subscriptions = Subscriptions::default();
        for signal in WindowSignal::TRACKED {
            subscriptions.connect(compositor, Signal::Window(handle, signal));
        }
        let mut controller = Self {
            handle,
            directive: Directive::default(),
            subscriptions,
            pinned_top: false,
            whitespace_markers,
        };
        controller.title_changed(compositor, bridge, on_changed);
        // Initial placement, whether or not the position is fixed.
        if let Some(position) = controller.directive.position {
            controller.snap_to(compositor, position);
        }
        controller
    }

    #[must_use]
    pub const fn handle(&self) -> WindowHandle<H> {
        self.handle
    }

    #[must_use]
    pub const fn directive(&self) -> &Directive {
        &self.directive
    }

    /// Connect one more signal for this window; released with the rest on teardown.
    pub fn subscribe<C: Compositor<H>>(&mut self, compositor: &mut C, signal: WindowSignal) {
        self.subscriptions
            .connect(compositor, Signal::Window(self.handle, signal));
    }

    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Stop tracking the window. Signals are disconnected before anything is touched, and an
    /// "always above" this controller set is cleared since the compositor keeps it otherwise.
    pub fn teardown<C: Compositor<H>>(self, compositor: &mut C) {
        self.subscriptions.release(compositor);
        if self.pinned_top && compositor.is_above(self.handle) {
            compositor.unmake_above(self.handle);
        }
        tracing::debug!("Released window {:?}", self.handle);
    }

    /// Coalesced refresh work: follow the active workspace and sink back to the bottom.
    pub fn reapply_if_pinned<C: Compositor<H>>(&self, compositor: &mut C, check_workspace: bool) {
        if self.directive.all_workspaces && check_workspace {
            let active = compositor.active_workspace();
            if !compositor.located_on_workspace(self.handle, active) {
                compositor.change_workspace(self.handle, active);
            }
        }
        if self.directive.pins_bottom() {
            self.lower(compositor);
        }
    }

    pub fn raised<C: Compositor<H>>(&self, compositor: &mut C) {
        if self.directive.pins_bottom() {
            self.lower(compositor);
        }
    }

    pub fn position_changed<C: Compositor<H>>(&self, compositor: &mut C) {
        if let Some(position) = self.directive.fixed_position() {
            self.snap_to(compositor, position);
        }
    }

    pub fn above_changed<C: Compositor<H>>(&self, compositor: &mut C) {
        if self.directive.pins_bottom() && compositor.is_above(self.handle) {
            tracing::trace!("Window {:?} is pinned to the bottom, clearing above", self.handle);
            compositor.unmake_above(self.handle);
        }
    }

    /// Re-decode the title, replacing the whole directive, and bring the window in line.
    pub fn title_changed<C, B, F>(&mut self, compositor: &mut C, bridge: &mut B, on_changed: F)
    where
        C: Compositor<H>,
        B: ProtocolBridge<H>,
        F: FnOnce(),
    {
        let title = compositor.title(self.handle);
        self.directive = codec::decode_with(title.as_deref(), self.whitespace_markers);
        tracing::debug!("Window {:?} directive: {:?}", self.handle, self.directive);

        if self.directive.skip_window_list {
            bridge.hide_from_window_list(self.handle);
        } else {
            bridge.show_in_window_list(self.handle);
        }

        let pin_top = self.directive.pins_top();
        if pin_top != self.pinned_top {
            self.pinned_top = pin_top;
            let above = compositor.is_above(self.handle);
            if pin_top && !above {
                compositor.make_above(self.handle);
            } else if !pin_top && above {
                compositor.unmake_above(self.handle);
            }
        }

        if self.directive.pins_bottom() {
            self.lower(compositor);
        }
        if let Some(position) = self.directive.fixed_position() {
            self.snap_to(compositor, position);
        }
        on_changed();
    }

    fn lower<C: Compositor<H>>(&self, compositor: &mut C) {
        let workspace = compositor
            .workspace(self.handle)
            .unwrap_or_else(|| compositor.active_workspace());
        if compositor.stacking_order(workspace).last() == Some(&self.handle) {
            tracing::trace!("Window {:?} already at the bottom", self.handle);
            return;
        }
        compositor.lower(self.handle);
    }

    fn snap_to<C: Compositor<H>>(&self, compositor: &mut C, position: Position) {
        if compositor.position(self.handle) != position {
            compositor.move_to(self.handle, position);
        }
    }
}
