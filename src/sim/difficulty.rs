//! Level, fall speed and spawn rate derived from score

use super::events::GameEvent;
use super::state::GameState;

/// `floor(score / step) + 1`
pub fn level_for_score(score: u64, step: u64) -> u32 {
    let level = score / step.max(1) + 1;
    u32::try_from(level).unwrap_or(u32::MAX)
}

/// Bring level, speed and spawn interval up to date with the score
///
/// A jump over several levels still counts as one level-up: speed and spawn
/// interval take a single step and one event is returned.
pub fn recompute(state: &mut GameState) -> Option<GameEvent> {
    let new_level = level_for_score(state.score, state.tuning.level_score_step);
    if new_level <= state.level {
        return None;
    }

    state.level = new_level;
    state.speed += state.tuning.speed_per_level;
    // Kept within [min, base] even for tuning that skipped validation
    state.spawn_interval = (state.spawn_interval - state.tuning.spawn_interval_step)
        .min(state.tuning.base_spawn_interval)
        .max(state.tuning.min_spawn_interval);
    state.effects.trigger_level_up();
    log::debug!(
        "Level {} (speed {:.0}, spawn every {:.2}s)",
        new_level,
        state.speed,
        state.spawn_interval
    );
    Some(GameEvent::LevelUp { level: new_level })
}
