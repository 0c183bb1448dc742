//! Read-only view of the game for renderers and HUDs

use serde::{Deserialize, Serialize};

use super::collision::CatchHitboxes;
use super::effects::{Expression, FloatingText, Particle};
use super::state::{FallingItem, GameState, Mode};

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Mode,
    pub score: u64,
    /// Eased score for the HUD counter
    pub score_display: u64,
    pub high_score: u64,
    pub lives: u8,
    pub max_lives: u8,
    pub level: u32,
    /// Basket left edge including wobble
    pub basket_x: f32,
    pub basket_y: f32,
    pub hitboxes: CatchHitboxes,
    pub items: Vec<FallingItem>,
    pub shake_intensity: f32,
    pub flash_alpha: f32,
    pub level_up_banner: bool,
    pub expression: Expression,
    pub particles: Vec<Particle>,
    pub texts: Vec<FloatingText>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let fx = &state.effects;
        Self {
            mode: state.mode(),
            score: state.score,
            score_display: fx.score_display.floor().max(0.0) as u64,
            high_score: state.high_score,
            lives: state.lives,
            max_lives: state.tuning.max_lives,
            level: state.level,
            basket_x: state.basket.x + fx.basket_offset(),
            basket_y: state.basket.y,
            hitboxes: state.catch_hitboxes(),
            items: state.items.clone(),
            shake_intensity: fx.shake_intensity(),
            flash_alpha: fx.flash_alpha(),
            level_up_banner: fx.level_up_active(),
            expression: fx.expression,
            particles: fx.particles.clone(),
            texts: fx.texts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_idle() {
        let state = GameState::new(Tuning::default(), 3).with_high_score(12);
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.mode, Mode::Idle);
        assert_eq!(snap.high_score, 12);
        assert_eq!(snap.lives, 5);
        assert_eq!(snap.basket_x, 220.0);
        assert!(snap.items.is_empty());
        assert!(!snap.level_up_banner);
    }

    #[test]
    fn test_capture_includes_feedback() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.start();
        state.push_item(crate::sim::ItemKind::Normal, glam::Vec2::new(240.0, 570.0), 0.0);
        crate::sim::advance(&mut state, crate::consts::SIM_DT);
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.texts.len(), 1);
        assert_eq!(snap.texts[0].text, "+1");
        assert!(!snap.particles.is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.start();
        let json = serde_json::to_string(&Snapshot::capture(&state)).expect("serializable");
        assert!(json.contains("\"mode\":\"active\""));
    }
}
