//! Objects (such as window handles and directives) shared across `wmhint`.
mod coordinator;
mod directive;
mod handle;
mod signal;
mod window_type;

pub use coordinator::Coordinator;
#[cfg(test)]
pub(crate) use coordinator::TestCoordinator;
pub use directive::{Directive, Pin, Position};
pub use handle::{ActorHandle, Handle, Mapped, WindowHandle};
#[cfg(test)]
pub(crate) use handle::MockHandle;
pub use signal::{DisplaySignal, Signal, SignalId, WindowSignal};
pub use window_type::WindowType;

pub type WorkspaceId = usize;
