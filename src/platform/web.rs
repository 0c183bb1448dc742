//! Browser bindings
//!
//! `WebGame` is driven from the page's `requestAnimationFrame` loop. Input
//! handlers call `key` / `button` / `pointer_drag`; each frame calls `frame`
//! and draws from `snapshot`. Data crosses the boundary as JSON strings.
//! Anything that can change the mode reports the music cue the page should
//! apply.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::input::{Command, Control, InputState};
use crate::audio::{self, MusicCue, SoundEffect};
use crate::highscores::LocalStorageStore;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::{GameEvent, Mode};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
}

/// What one frame produced
#[derive(Serialize)]
struct FrameOutput<'a> {
    events: &'a [GameEvent],
    cues: Vec<SoundEffect>,
    music: Option<MusicCue>,
}

/// Result of a start, pause, focus or mute action
#[derive(Serialize)]
struct ControlOutput {
    mode: Mode,
    cues: Vec<SoundEffect>,
    music: Option<MusicCue>,
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStorageStore>,
    input: InputState,
    settings: Settings,
}

#[wasm_bindgen]
impl WebGame {
    /// Build a game, optionally overriding tuning with a JSON document
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> WebGame {
        let tuning = match tuning_json.as_deref().map(Tuning::from_json) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Ignoring invalid tuning: {}", e);
                Tuning::default()
            }
            None => Tuning::default(),
        };
        let seed = js_sys::Date::now() as u64;
        WebGame {
            session: Session::new(tuning, seed, LocalStorageStore),
            input: InputState::default(),
            settings: Settings::load(),
        }
    }

    /// Start or restart; returns `{mode, cues, music}` as JSON
    pub fn start(&mut self) -> String {
        let before = self.mode();
        self.session.start();
        self.input = InputState::default();
        let cues = if self.settings.muted {
            Vec::new()
        } else {
            vec![SoundEffect::Start]
        };
        self.control_output(before, cues)
    }

    /// Returns `{mode, cues, music}` as JSON
    pub fn toggle_pause(&mut self) -> String {
        let before = self.mode();
        self.session.toggle_pause();
        self.control_output(before, Vec::new())
    }

    /// Tab hidden or window blurred; returns `{mode, cues, music}` as JSON
    pub fn blur(&mut self) -> String {
        let before = self.mode();
        if self.session.state_mut().pause() {
            log::info!("Auto-paused (focus lost)");
        }
        self.control_output(before, Vec::new())
    }

    /// Returns `{mode, cues, music}` as JSON
    pub fn toggle_mute(&mut self) -> String {
        let muted = self.settings.toggle_mute();
        self.settings.save();
        to_json(&ControlOutput {
            mode: self.mode(),
            cues: Vec::new(),
            music: MusicCue::for_mute(muted, self.mode()),
        })
    }

    pub fn is_muted(&self) -> bool {
        self.settings.muted
    }

    /// Keyboard event; `key` is `KeyboardEvent.key`
    ///
    /// Returns `{mode, cues, music}` JSON when the key paused or resumed.
    pub fn key(&mut self, key: &str, down: bool) -> Option<String> {
        let control = Control::from_key(key)?;
        let command = self.input.key(control, down);
        self.handle(command)
    }

    /// On-screen button: "left", "right" or "up"
    pub fn button(&mut self, name: &str, down: bool) -> Option<String> {
        let control = match name {
            "left" => Control::Left,
            "right" => Control::Right,
            "up" => Control::Reach,
            _ => return None,
        };
        let command = self.input.button(control, down);
        self.handle(command)
    }

    /// Pointer at world x; ignored unless playing
    pub fn pointer_drag(&mut self, world_x: f32) -> bool {
        self.session.state_mut().drag_basket_to(world_x)
    }

    /// Advance one animation frame; returns `{events, cues, music}` as JSON
    pub fn frame(&mut self, dt_seconds: f32) -> String {
        let before = self.mode();
        self.input.apply(self.session.state_mut());
        let events = self.session.frame(dt_seconds);
        let output = FrameOutput {
            cues: audio::cues_for(&events, &self.settings),
            music: MusicCue::for_transition(before, self.mode(), &self.settings),
            events: &events,
        };
        to_json(&output)
    }

    /// Current frame state as JSON, with motion preferences applied
    pub fn snapshot(&self) -> String {
        let mut snapshot = self.session.snapshot();
        snapshot.shake_intensity = self.settings.shake_intensity(snapshot.shake_intensity);
        snapshot.flash_alpha = self.settings.flash_alpha(snapshot.flash_alpha);
        to_json(&snapshot)
    }

    pub fn high_score(&self) -> f64 {
        self.session.state().high_score as f64
    }
}

impl WebGame {
    fn mode(&self) -> Mode {
        self.session.state().mode()
    }

    fn control_output(&self, before: Mode, cues: Vec<SoundEffect>) -> String {
        to_json(&ControlOutput {
            mode: self.mode(),
            cues,
            music: MusicCue::for_transition(before, self.mode(), &self.settings),
        })
    }

    /// Escape pauses the same way the button does
    fn handle(&mut self, command: Option<Command>) -> Option<String> {
        match command {
            Some(Command::TogglePause) => Some(self.toggle_pause()),
            None => None,
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Serialization failed: {}", e);
        String::from("null")
    })
}
