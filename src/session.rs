//! A playable session: simulation plus high score persistence
//!
//! The host builds one `Session`, forwards input, and calls `frame` once per
//! animation frame. Persistence happens here so the simulation stays pure.

use crate::highscores::HighScoreStore;
use crate::sim::{self, GameEvent, GameState, Snapshot};
use crate::tuning::Tuning;

pub struct Session<S: HighScoreStore> {
    state: GameState,
    store: S,
    /// Last value successfully written, to skip redundant saves
    saved_high_score: u64,
}

impl<S: HighScoreStore> Session<S> {
    /// Load the high score from `store` and build an idle game
    pub fn new(tuning: Tuning, seed: u64, store: S) -> Self {
        let high_score = if tuning.capabilities.persistence {
            store.load()
        } else {
            0
        };
        log::info!("Loaded high score {}", high_score);
        Self {
            state: GameState::new(tuning, seed).with_high_score(high_score),
            store,
            saved_high_score: high_score,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for input collaborators
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn start(&mut self) {
        self.state.start();
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.state.toggle_pause()
    }

    /// Advance one frame and persist any new best score
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        let events = sim::advance(&mut self.state, dt);
        if events.iter().any(GameEvent::requests_save) {
            self.persist();
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Best-effort write of the current high score
    fn persist(&mut self) {
        if !self.state.tuning.capabilities.persistence {
            return;
        }
        let value = self.state.high_score;
        if value == self.saved_high_score {
            return;
        }
        match self.store.save(value) {
            Ok(()) => {
                self.saved_high_score = value;
                log::debug!("High score {} saved", value);
            }
            Err(e) => log::warn!("High score {} not saved: {}", value, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use crate::consts::SIM_DT;
    use crate::sim::{ItemKind, Mode};
    use glam::Vec2;

    fn quiet_tuning() -> Tuning {
        Tuning {
            base_spawn_interval: 1000.0,
            min_spawn_interval: 999.0,
            ..Tuning::default()
        }
    }

    fn catch_one<S: HighScoreStore>(session: &mut Session<S>, kind: ItemKind) -> Vec<GameEvent> {
        session
            .state_mut()
            .push_item(kind, Vec2::new(240.0, 570.0), 0.0);
        session.frame(SIM_DT)
    }

    #[test]
    fn test_loads_stored_high_score() {
        let session = Session::new(quiet_tuning(), 1, MemoryStore::with_raw("25"));
        assert_eq!(session.state().high_score, 25);
        assert_eq!(session.state().mode(), Mode::Idle);
    }

    #[test]
    fn test_malformed_store_starts_at_zero() {
        let session = Session::new(quiet_tuning(), 1, MemoryStore::with_raw("garbage"));
        assert_eq!(session.state().high_score, 0);
    }

    #[test]
    fn test_saves_new_high_score() {
        let mut session = Session::new(quiet_tuning(), 1, MemoryStore::with_raw("1"));
        session.start();
        catch_one(&mut session, ItemKind::Normal);
        assert_eq!(session.store().raw(), Some("1"));
        catch_one(&mut session, ItemKind::Bonus);
        assert_eq!(session.store().raw(), Some("6"));
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut session = Session::new(quiet_tuning(), 1, MemoryStore::failing());
        session.start();
        let events = catch_one(&mut session, ItemKind::Normal);
        assert!(events.contains(&GameEvent::NewHighScore { value: 1 }));
        assert_eq!(session.state().high_score, 1);
        assert_eq!(session.state().mode(), Mode::Active);
        assert_eq!(session.store().raw(), None);
    }

    #[test]
    fn test_persistence_disabled() {
        let mut tuning = quiet_tuning();
        tuning.capabilities.persistence = false;
        let mut session = Session::new(tuning, 1, MemoryStore::with_raw("50"));
        assert_eq!(session.state().high_score, 0);
        session.start();
        catch_one(&mut session, ItemKind::Normal);
        assert_eq!(session.store().raw(), Some("50"));
    }

    #[test]
    fn test_game_over_keeps_best() {
        let mut session = Session::new(quiet_tuning(), 1, MemoryStore::with_raw("3"));
        session.start();
        session.state_mut().lives = 1;
        let events = catch_one(&mut session, ItemKind::Hazard);
        assert!(events.contains(&GameEvent::GameOver {
            score: 0,
            high_score: 3
        }));
        assert_eq!(session.store().load(), 3);
        assert_eq!(session.snapshot().mode, Mode::GameOver);
    }
}
