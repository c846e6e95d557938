//! The protocol bridge to the trusted client.
use crate::models::{Handle, WindowHandle};

pub trait ProtocolBridge<H: Handle> {
    /// Whether `window` was created by the client allowed to embed directives.
    fn belongs_to_trusted_client(&self, window: WindowHandle<H>) -> bool;

    fn hide_from_window_list(&mut self, window: WindowHandle<H>);

    fn show_in_window_list(&mut self, window: WindowHandle<H>);
}

#[cfg(test)]
pub use self::mock::MockBridge;
