//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by one host frame.

use glam::Vec2;

use super::difficulty;
use super::effects::{self, Expression, TextTone};
use super::events::GameEvent;
use super::spawn;
use super::state::{FallingItem, GameState, ItemKind};
use crate::clamp_step;

/// Miss text sits this far above the ground line
const MISS_TEXT_LIFT: f32 = 12.0;

/// Advance the game by `dt` seconds and report what happened
///
/// Does nothing unless the game is running and not paused. The step is
/// clamped to `tuning.max_step`. Order within a tick:
/// basket, spawner, falling, catch/miss (catch first), difficulty.
pub fn advance(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_active() {
        return events;
    }

    let dt = clamp_step(dt, state.tuning.max_step);
    state.elapsed += dt;
    state.effects.decay(dt);

    state.basket.step(dt);

    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_timer = 0.0;
        spawn::spawn_item(state);
    }

    for item in &mut state.items {
        item.pos.y += item.vy * dt;
    }

    resolve_items(state, &mut events);

    if let Some(level_up) = difficulty::recompute(state) {
        events.push(level_up);
    }

    state.effects.animate_score(state.score, dt);

    if state.lives == 0 {
        end_game(state, &mut events);
    }

    events
}

/// Catch or miss every item, in spawn order
///
/// Stops at the item that takes the last life; anything behind it stays
/// where it is.
fn resolve_items(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let hitboxes = state.catch_hitboxes();
    let ground = state.tuning.world.ground;

    let mut pending = std::mem::take(&mut state.items).into_iter();
    let mut kept = Vec::with_capacity(pending.len());

    for item in pending.by_ref() {
        if hitboxes.first_hit(&item.bounds()).is_some() {
            resolve_catch(state, &item, events);
        } else if item.bottom() >= ground {
            resolve_miss(state, &item, events);
        } else {
            kept.push(item);
        }

        if state.lives == 0 {
            break;
        }
    }

    kept.extend(pending);
    state.items = kept;
}

fn resolve_catch(state: &mut GameState, item: &FallingItem, events: &mut Vec<GameEvent>) {
    let (x, y) = (item.pos.x, item.pos.y);
    match item.kind {
        ItemKind::Hazard => {
            state.lives = state.lives.saturating_sub(1);
            state.effects.set_expression(Expression::Shock);
            state.effects.trigger_shake();
            state.effects.trigger_flash();
            catch_fx(state, item, String::from("-1"), TextTone::Damage);
            events.push(GameEvent::Hit { x, y });
        }
        ItemKind::Heal => {
            state.lives = state.lives.saturating_add(1).min(state.tuning.max_lives);
            state.effects.set_expression(Expression::Happy);
            catch_fx(state, item, String::from("+1 ❤️"), TextTone::Heal);
            events.push(GameEvent::Healed {
                lives: state.lives,
                x,
                y,
            });
        }
        ItemKind::Normal | ItemKind::Bonus => {
            state.score += u64::from(item.points);
            state.effects.set_expression(Expression::Happy);
            state.effects.trigger_basket_wobble();
            catch_fx(state, item, format!("+{}", item.points), TextTone::Score);
            events.push(GameEvent::Caught {
                kind: item.kind,
                points: item.points,
                x,
                y,
            });

            if state.score > state.high_score {
                state.high_score = state.score;
                events.push(GameEvent::NewHighScore {
                    value: state.high_score,
                });
            }
        }
    }
}

fn resolve_miss(state: &mut GameState, item: &FallingItem, events: &mut Vec<GameEvent>) {
    // Bombs and hearts just vanish
    if !item.kind.penalised_on_miss() {
        return;
    }
    state.lives = state.lives.saturating_sub(1);
    state.effects.set_expression(Expression::Sad);
    state.effects.trigger_shake();
    let ground = state.tuning.world.ground;
    state
        .effects
        .spawn_miss(Vec2::new(item.pos.x, ground - MISS_TEXT_LIFT));
    events.push(GameEvent::Missed {
        kind: item.kind,
        x: item.pos.x,
    });
}

/// Sparks and text at the item; always draws one burst from the RNG
fn catch_fx(state: &mut GameState, item: &FallingItem, text: String, tone: TextTone) {
    let velocities = effects::burst_velocities(state.rng());
    state.effects.spawn_catch(item.pos, text, tone, &velocities);
}

fn end_game(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.running = false;
    state.paused = false;
    state.ended = true;
    log::info!(
        "Game over: score {}, level {}, best {}",
        state.score,
        state.level,
        state.high_score
    );
    events.push(GameEvent::GameOver {
        score: state.score,
        high_score: state.high_score,
    });
}
