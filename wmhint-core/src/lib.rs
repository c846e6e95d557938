//! Legacy window-type hints for compositors that only speak a modern windowing protocol.
//!
//! Trusted clients put a directive such as `@!0,0;BDHF` in their window title. The
//! [`Coordinator`] tracks those windows, decodes the directive with [`codec::decode`] and keeps
//! stacking, placement, window-list visibility and workspace membership in line with it.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::type_complexity
)]
pub mod bridge;
pub mod codec;
pub mod compositor;
pub mod config;
pub mod controller;
pub mod errors;
mod handlers;
mod hint_event;
pub mod models;
pub mod scheduler;

pub use bridge::ProtocolBridge;
pub use compositor::{Compositor, Subscriptions};
pub use config::Config;
pub use controller::WindowController;
pub use errors::{HintError, Result};
pub use hint_event::HintEvent;
pub use models::{
    ActorHandle, Coordinator, Directive, Handle, Mapped, Pin, Position, WindowHandle, WindowType,
};
pub use scheduler::{IdlePriority, IdleScheduler, IdleToken};
