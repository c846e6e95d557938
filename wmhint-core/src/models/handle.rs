#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Generic newtypes need `#[serde(bound = "")]` wherever the generic is declared, otherwise the
/// derive macros ask for bounds on `H` that the `Handle` trait already provides.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// The compositor-side scene object drawing a window. Some signals hand these out instead of
/// windows, so they have to be resolved before use.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Whatever the compositor reported as mapped.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapped<H: Handle> {
    #[serde(bound = "")]
    Window(WindowHandle<H>),
    #[serde(bound = "")]
    Actor(ActorHandle<H>),
}

impl<H: Handle> From<WindowHandle<H>> for Mapped<H> {
    fn from(handle: WindowHandle<H>) -> Self {
        Self::Window(handle)
    }
}

impl<H: Handle> From<ActorHandle<H>> for Mapped<H> {
    fn from(handle: ActorHandle<H>) -> Self {
        Self::Actor(handle)
    }
}

/// Handle for testing purposes
#[cfg(test)]
pub type MockHandle = i32;
#[cfg(test)]
impl Handle for MockHandle {}
