//! Orchard Catch - A falling-fruit catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, catching, difficulty)
//! - `session`: Simulation coupled with high score persistence
//! - `highscores`: Best-effort high score storage
//! - `platform`: Input mapping and browser bindings
//! - `audio`: Sound cues derived from simulation events
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScoreStore, MemoryStore};
pub use session::Session;
pub use settings::Settings;
pub use tuning::{Capabilities, Tuning, TuningError, World};

/// Game configuration constants
pub mod consts {
    /// Fixed step used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Longest step a single `advance` will simulate (tab stalls etc.)
    pub const MAX_STEP: f32 = 1.0 / 30.0;

    /// Playfield dimensions
    pub const WORLD_WIDTH: f32 = 500.0;
    pub const WORLD_HEIGHT: f32 = 640.0;
    /// Ground line; items touching it are missed
    pub const GROUND_Y: f32 = 600.0;
}

/// Clamp a host-supplied frame delta to a usable simulation step
///
/// A non-finite delta, or a non-positive or NaN `max_step`, yields 0.
#[inline]
pub fn clamp_step(dt: f32, max_step: f32) -> f32 {
    // f32::max drops NaN, so the upper bound is always >= 0
    let max_step = max_step.max(0.0);
    if dt.is_finite() {
        dt.clamp(0.0, max_step)
    } else {
        0.0
    }
}
