//! Configuration, logging and debugging tools around `wmhint-core`.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
pub mod config;
pub mod utils;

pub use config::Config;
