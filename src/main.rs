//! Orchard Catch entry point
//!
//! On the web the page drives `platform::web::WebGame`. Natively this runs a
//! headless autopilot game at a fixed step and logs what happens.
//!
//! Usage: `orchard-catch [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use orchard_catch::audio::{self, MusicCue};
    use orchard_catch::consts::SIM_DT;
    use orchard_catch::sim::{GameEvent, GameState, ItemKind, Mode};
    use orchard_catch::{MemoryStore, Session, Settings, Tuning};

    /// Give up after this much simulated time
    const MAX_GAME_SECONDS: f32 = 600.0;
    /// Don't jitter when already under the target
    const DEADZONE: f32 = 4.0;

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let tuning = args.next().map(|path| load_tuning(&path)).unwrap_or_default();
        let seed = match args.next().map(|s| s.parse::<u64>()) {
            Some(Ok(seed)) => seed,
            Some(Err(e)) => {
                log::warn!("Ignoring invalid seed: {}", e);
                rand::random()
            }
            None => rand::random(),
        };

        let settings = Settings::load();
        let mut session = Session::new(tuning, seed, MemoryStore::new());
        session.start();
        log::info!("Headless game started with seed: {}", seed);

        let mut frames: u64 = 0;
        while session.state().mode() == Mode::Active
            && session.state().elapsed < MAX_GAME_SECONDS
        {
            steer(session.state_mut());
            let before = session.state().mode();
            let events = session.frame(SIM_DT);
            frames += 1;
            for event in &events {
                log_event(event);
            }
            for cue in audio::cues_for(&events, &settings) {
                log::trace!("Cue: {}", cue.sample_name());
            }
            if let Some(music) = MusicCue::for_transition(before, session.state().mode(), &settings) {
                log::debug!("Music: {:?}", music);
            }
        }

        let state = session.state();
        if state.mode() == Mode::Active {
            log::info!("Time limit reached after {} frames", frames);
        }
        println!(
            "score {} level {} high score {} ({:.1}s)",
            state.score, state.level, state.high_score, state.elapsed
        );
    }

    fn load_tuning(path: &str) -> Tuning {
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
        match parsed {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    /// Chase the lowest item worth catching
    fn steer(state: &mut GameState) {
        let target = state
            .items
            .iter()
            .filter(|item| item.kind != ItemKind::Hazard)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|item| item.pos.x + item.size / 2.0);

        let dir = match target {
            Some(x) => {
                let centre = state.basket.x + state.basket.width / 2.0;
                let delta = x - centre;
                if delta.abs() <= DEADZONE {
                    0
                } else {
                    delta.signum() as i8
                }
            }
            None => 0,
        };
        state.set_move_dir(dir);
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::LevelUp { level } => log::info!("Level {}", level),
            GameEvent::NewHighScore { value } => log::debug!("New high score {}", value),
            GameEvent::GameOver { score, high_score } => {
                log::info!("Game over: score {} (best {})", score, high_score)
            }
            other => log::debug!("{:?}", other),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orchard Catch (native) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is `wasm_start` in the library
}
