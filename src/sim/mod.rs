//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied time only, clamped per step
//! - Seeded RNG only
//! - Items resolved in spawn order
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod effects;
pub mod events;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CatchHitboxes, CatchZone, Rect};
pub use difficulty::level_for_score;
pub use effects::{Effects, Expression, FloatingText, Particle, TextTone};
pub use events::GameEvent;
pub use snapshot::Snapshot;
pub use state::{Basket, FallingItem, GameState, ItemKind, Mode};
pub use tick::advance;
