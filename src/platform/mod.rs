//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard, on-screen buttons, pointer drag)
//! - Storage (LocalStorage on web)
//! - Logging and panic hooks

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{Command, Control, InputState};
