mod hint_event_handler;
mod refresh_handler;

use super::bridge::ProtocolBridge;
use super::compositor::Compositor;
use super::config::Config;
use super::models::{Coordinator, Handle, Mapped, WindowHandle};
use super::scheduler::IdleScheduler;
use super::HintEvent;
