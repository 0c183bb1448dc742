//! Sound cues
//!
//! The simulation never plays audio. Hosts map each `GameEvent` to a
//! `SoundEffect` and either play a sample by name or synthesise the
//! fallback tones listed here.

use serde::Serialize;

use crate::settings::Settings;
use crate::sim::{GameEvent, ItemKind, Mode};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Game started
    Start,
    /// Apple caught
    Catch,
    /// Gold apple caught
    CatchBonus,
    /// Heart caught
    Heal,
    /// Bomb caught
    Hit,
    /// Apple hit the ground
    Miss,
    LevelUp,
    GameOver,
}

/// Background music transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicCue {
    Play,
    Stop,
}

impl MusicCue {
    /// Music runs only while the game is Active
    ///
    /// Entering Active (start, resume) plays unless muted; leaving it (pause,
    /// focus loss, game over) stops.
    pub fn for_transition(before: Mode, after: Mode, settings: &Settings) -> Option<Self> {
        match (before == Mode::Active, after == Mode::Active) {
            (false, true) if !settings.muted => Some(MusicCue::Play),
            (true, false) => Some(MusicCue::Stop),
            _ => None,
        }
    }

    /// After the mute toggle flips; only matters mid-game
    pub fn for_mute(muted: bool, mode: Mode) -> Option<Self> {
        match mode {
            Mode::Active if muted => Some(MusicCue::Stop),
            Mode::Active => Some(MusicCue::Play),
            _ => None,
        }
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// One synthesised note
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    pub frequency: f32,
    /// Offset from the cue start (seconds)
    pub start: f32,
    pub duration: f32,
    pub waveform: Waveform,
    pub gain: f32,
}

const fn tone(frequency: f32, start: f32, duration: f32, waveform: Waveform, gain: f32) -> Tone {
    Tone {
        frequency,
        start,
        duration,
        waveform,
        gain,
    }
}

const BEEP_GAIN: f32 = 0.08;

const START: [Tone; 1] = [tone(520.0, 0.0, 0.12, Waveform::Triangle, BEEP_GAIN)];
const CATCH: [Tone; 1] = [tone(660.0, 0.0, 0.12, Waveform::Triangle, BEEP_GAIN)];
const CATCH_BONUS: [Tone; 2] = [
    tone(660.0, 0.0, 0.12, Waveform::Triangle, BEEP_GAIN),
    tone(880.0, 0.0, 0.18, Waveform::Triangle, BEEP_GAIN),
];
const HEAL: [Tone; 1] = [tone(520.0, 0.0, 0.18, Waveform::Triangle, BEEP_GAIN)];
const HIT: [Tone; 1] = [tone(120.0, 0.0, 0.25, Waveform::Sawtooth, BEEP_GAIN)];
const MISS: [Tone; 1] = [tone(180.0, 0.0, 0.2, Waveform::Sawtooth, BEEP_GAIN)];
const LEVEL_UP: [Tone; 3] = [
    tone(440.0, 0.0, 0.12, Waveform::Triangle, 0.06),
    tone(554.0, 0.08, 0.12, Waveform::Triangle, 0.06),
    tone(659.0, 0.16, 0.12, Waveform::Triangle, 0.06),
];
const GAME_OVER: [Tone; 3] = [
    tone(220.0, 0.0, 0.18, Waveform::Sine, BEEP_GAIN),
    tone(185.0, 0.18, 0.18, Waveform::Sine, BEEP_GAIN),
    tone(155.0, 0.36, 0.18, Waveform::Sine, BEEP_GAIN),
];

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Caught {
                kind: ItemKind::Bonus,
                ..
            } => Some(SoundEffect::CatchBonus),
            GameEvent::Caught { .. } => Some(SoundEffect::Catch),
            GameEvent::Healed { .. } => Some(SoundEffect::Heal),
            GameEvent::Hit { .. } => Some(SoundEffect::Hit),
            GameEvent::Missed { .. } => Some(SoundEffect::Miss),
            GameEvent::LevelUp { .. } => Some(SoundEffect::LevelUp),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::NewHighScore { .. } => None,
        }
    }

    /// Sample name the host should try first
    pub fn sample_name(self) -> &'static str {
        match self {
            SoundEffect::Start | SoundEffect::Catch | SoundEffect::CatchBonus | SoundEffect::Heal => {
                "catch"
            }
            SoundEffect::Hit => "hit",
            SoundEffect::Miss => "miss",
            SoundEffect::LevelUp => "levelup",
            SoundEffect::GameOver => "gameover",
        }
    }

    /// Synthesised fallback when the sample is unavailable
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundEffect::Start => &START,
            SoundEffect::Catch => &CATCH,
            SoundEffect::CatchBonus => &CATCH_BONUS,
            SoundEffect::Heal => &HEAL,
            SoundEffect::Hit => &HIT,
            SoundEffect::Miss => &MISS,
            SoundEffect::LevelUp => &LEVEL_UP,
            SoundEffect::GameOver => &GAME_OVER,
        }
    }
}

/// Cues for one frame's events, empty when muted
pub fn cues_for(events: &[GameEvent], settings: &Settings) -> Vec<SoundEffect> {
    if settings.muted {
        return Vec::new();
    }
    events.iter().filter_map(SoundEffect::for_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_has_richer_cue() {
        let plain = GameEvent::Caught {
            kind: ItemKind::Normal,
            points: 1,
            x: 0.0,
            y: 0.0,
        };
        let gold = GameEvent::Caught {
            kind: ItemKind::Bonus,
            points: 5,
            x: 0.0,
            y: 0.0,
        };
        assert_eq!(SoundEffect::for_event(&plain), Some(SoundEffect::Catch));
        assert_eq!(SoundEffect::for_event(&gold), Some(SoundEffect::CatchBonus));
        assert!(SoundEffect::CatchBonus.tones().len() > SoundEffect::Catch.tones().len());
    }

    #[test]
    fn test_jingles_are_sequenced() {
        let notes = SoundEffect::GameOver.tones();
        assert!(notes.windows(2).all(|w| w[0].start < w[1].start));
        assert!(notes.windows(2).all(|w| w[0].frequency > w[1].frequency));
    }

    #[test]
    fn test_music_follows_active_mode() {
        let settings = Settings::default();
        let play = Some(MusicCue::Play);
        let stop = Some(MusicCue::Stop);
        assert_eq!(MusicCue::for_transition(Mode::Idle, Mode::Active, &settings), play);
        assert_eq!(MusicCue::for_transition(Mode::Suspended, Mode::Active, &settings), play);
        assert_eq!(MusicCue::for_transition(Mode::GameOver, Mode::Active, &settings), play);
        assert_eq!(MusicCue::for_transition(Mode::Active, Mode::Suspended, &settings), stop);
        assert_eq!(MusicCue::for_transition(Mode::Active, Mode::GameOver, &settings), stop);
        assert_eq!(MusicCue::for_transition(Mode::Active, Mode::Active, &settings), None);
        assert_eq!(MusicCue::for_transition(Mode::Idle, Mode::Idle, &settings), None);
    }

    #[test]
    fn test_muted_music_never_starts() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        assert_eq!(MusicCue::for_transition(Mode::Idle, Mode::Active, &settings), None);
        assert_eq!(
            MusicCue::for_transition(Mode::Active, Mode::Suspended, &settings),
            Some(MusicCue::Stop)
        );
        assert_eq!(MusicCue::for_mute(true, Mode::Active), Some(MusicCue::Stop));
        assert_eq!(MusicCue::for_mute(false, Mode::Active), Some(MusicCue::Play));
        assert_eq!(MusicCue::for_mute(false, Mode::Suspended), None);
    }

    #[test]
    fn test_muted_yields_no_cues() {
        let events = [GameEvent::LevelUp { level: 2 }, GameEvent::NewHighScore { value: 10 }];
        let mut settings = Settings::default();
        assert_eq!(cues_for(&events, &settings), [SoundEffect::LevelUp]);
        settings.muted = true;
        assert!(cues_for(&events, &settings).is_empty());
    }
}
