//! Item spawner
//!
//! One roll picks the kind from cumulative bands (heal, bonus, hazard, then
//! normal); two more place the item and jitter its speed.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, ItemKind};
use crate::tuning::Tuning;

/// Map a uniform roll in `[0, 1)` to an item kind at `level`
pub fn roll_kind(roll: f32, level: u32, tuning: &Tuning) -> ItemKind {
    let caps = &tuning.capabilities;
    let heal = if caps.heal_items { tuning.heal_chance } else { 0.0 };
    let bonus = if caps.bonus_items { tuning.bonus_chance } else { 0.0 };
    let hazard = if caps.hazard_items {
        tuning.hazard_chance(level)
    } else {
        0.0
    };

    if roll < heal {
        ItemKind::Heal
    } else if roll < heal + bonus {
        ItemKind::Bonus
    } else if roll < heal + bonus + hazard {
        ItemKind::Hazard
    } else {
        ItemKind::Normal
    }
}

/// Spawn one item under the tree. Returns its id.
pub fn spawn_item(state: &mut GameState) -> u32 {
    let kind_roll: f32 = state.rng().random();
    let x_roll: f32 = state.rng().random();
    let speed_roll: f32 = state.rng().random();

    let tuning = &state.tuning;
    let kind = roll_kind(kind_roll, state.level, tuning);
    let size = kind.size(tuning);
    let span = (tuning.world.width - size - 2.0 * tuning.spawn_margin).max(0.0);
    let pos = Vec2::new(tuning.spawn_margin + x_roll * span, tuning.spawn_y);
    let vy = state.speed + speed_roll * tuning.speed_jitter;

    let id = state.push_item(kind, pos, vy);
    log::debug!("Spawned {:?} #{} at x={:.0} vy={:.0}", kind, id, pos.x, vy);
    id
}
