//! Presentation timers driven by the simulation
//!
//! Nothing here affects gameplay. The renderer reads these after each
//! `advance` to shake the camera, flash the screen, show the level-up banner,
//! draw catch sparks and floating score text, and pick the catcher's face.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Screen shake after a miss or a bomb (seconds)
pub const SHAKE_DURATION: f32 = 0.25;
/// Red flash after catching a bomb (seconds)
pub const FLASH_DURATION: f32 = 0.25;
/// "Level Up!" banner (seconds)
pub const LEVEL_UP_DURATION: f32 = 0.8;
/// Basket wobble after a fruit lands in it (seconds)
pub const BASKET_WOBBLE_DURATION: f32 = 0.2;
/// Pixels of shake per remaining second
const SHAKE_SCALE: f32 = 6.0;
/// Flash opacity at full strength
const FLASH_MAX_ALPHA: f32 = 0.35;
/// Score counter catch-up rate (per second)
const SCORE_ANIM_SPEED: f32 = 12.0;

/// Maximum live particles
pub const MAX_PARTICLES: usize = 40;
/// Sparks per catch (fewer when near the cap)
pub const PARTICLES_PER_CATCH: usize = 8;
/// Spark lifetime (seconds)
pub const PARTICLE_LIFE: f32 = 0.6;
/// Spark velocity range (px/s)
const PARTICLE_SPREAD: f32 = 60.0;
/// Floating text lifetime (seconds)
pub const TEXT_LIFE: f32 = 1.0;
/// Floating text rise speed (px/s)
const TEXT_RISE_SPEED: f32 = 18.0;

/// A catch spark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left
    pub life: f32,
}

/// Colour family for floating text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTone {
    /// Points scored
    Score,
    /// Life restored
    Heal,
    /// Bomb caught
    Damage,
    /// Fruit dropped
    Miss,
}

/// "+5", "-1" and friends drifting up from where something happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingText {
    pub text: String,
    pub pos: Vec2,
    pub tone: TextTone,
    /// Seconds since spawn
    pub age: f32,
}

/// Velocities for one burst of sparks, biased upward
pub fn burst_velocities<R: Rng>(rng: &mut R) -> [Vec2; PARTICLES_PER_CATCH] {
    std::array::from_fn(|_| {
        let vx = (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD;
        let vy = (rng.random::<f32>() - 0.8) * PARTICLE_SPREAD;
        Vec2::new(vx, vy)
    })
}

/// Catcher's facial expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    #[default]
    Idle,
    Happy,
    Shock,
    Sad,
}

impl Expression {
    /// How long the face is held before returning to idle
    pub fn duration(self) -> f32 {
        match self {
            Expression::Idle => 0.0,
            Expression::Happy => 0.4,
            Expression::Shock => 0.5,
            Expression::Sad => 0.6,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Effects {
    pub shake: f32,
    pub flash: f32,
    pub level_up: f32,
    pub basket_wobble: f32,
    pub expression: Expression,
    pub expression_timer: f32,
    /// Score as shown on the HUD, eases toward the real score
    pub score_display: f32,
    pub particles: Vec<Particle>,
    pub texts: Vec<FloatingText>,
}

impl Effects {
    /// Count every timer down by `dt`
    pub fn decay(&mut self, dt: f32) {
        self.shake = (self.shake - dt).max(0.0);
        self.flash = (self.flash - dt).max(0.0);
        self.level_up = (self.level_up - dt).max(0.0);
        self.basket_wobble = (self.basket_wobble - dt).max(0.0);

        if self.expression_timer > 0.0 {
            self.expression_timer -= dt;
            if self.expression_timer <= 0.0 {
                self.expression_timer = 0.0;
                self.expression = Expression::Idle;
            }
        }

        self.particles.retain_mut(|p| {
            p.life -= dt;
            p.pos += p.vel * dt;
            p.life > 0.0
        });
        self.texts.retain_mut(|t| {
            t.age += dt;
            t.pos.y -= TEXT_RISE_SPEED * dt;
            t.age < TEXT_LIFE
        });
    }

    /// Floating text plus a burst of sparks, up to the particle cap
    pub fn spawn_catch(&mut self, pos: Vec2, text: String, tone: TextTone, velocities: &[Vec2]) {
        self.texts.push(FloatingText {
            text,
            pos,
            tone,
            age: 0.0,
        });
        let room = MAX_PARTICLES.saturating_sub(self.particles.len());
        self.particles
            .extend(velocities.iter().take(room).map(|&vel| Particle {
                pos,
                vel,
                life: PARTICLE_LIFE,
            }));
    }

    /// "-1" where a fruit hit the ground
    pub fn spawn_miss(&mut self, pos: Vec2) {
        self.texts.push(FloatingText {
            text: String::from("-1"),
            pos,
            tone: TextTone::Miss,
            age: 0.0,
        });
    }

    /// Ease the displayed score toward `score`
    pub fn animate_score(&mut self, score: u64, dt: f32) {
        let diff = score as f32 - self.score_display;
        self.score_display += diff * (dt * SCORE_ANIM_SPEED).min(1.0);
    }

    pub fn trigger_shake(&mut self) {
        self.shake = SHAKE_DURATION;
    }

    pub fn trigger_flash(&mut self) {
        self.flash = FLASH_DURATION;
    }

    pub fn trigger_level_up(&mut self) {
        self.level_up = LEVEL_UP_DURATION;
    }

    pub fn trigger_basket_wobble(&mut self) {
        self.basket_wobble = BASKET_WOBBLE_DURATION;
    }

    pub fn set_expression(&mut self, expression: Expression) {
        self.expression = expression;
        self.expression_timer = expression.duration();
    }

    /// Max camera offset in pixels
    pub fn shake_intensity(&self) -> f32 {
        self.shake * SHAKE_SCALE
    }

    /// Opacity of the red damage overlay
    pub fn flash_alpha(&self) -> f32 {
        FLASH_MAX_ALPHA * (self.flash / FLASH_DURATION)
    }

    pub fn level_up_active(&self) -> bool {
        self.level_up > 0.0
    }

    /// Horizontal basket offset while wobbling
    pub fn basket_offset(&self) -> f32 {
        if self.basket_wobble > 0.0 {
            (self.basket_wobble * 40.0).sin() * 2.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timers_decay_to_zero() {
        let mut fx = Effects::default();
        fx.trigger_shake();
        fx.trigger_flash();
        fx.trigger_level_up();
        assert!((fx.shake_intensity() - 1.5).abs() < 1e-6);
        assert!((fx.flash_alpha() - 0.35).abs() < 1e-6);
        assert!(fx.level_up_active());

        fx.decay(0.3);
        assert_eq!(fx.shake, 0.0);
        assert_eq!(fx.flash_alpha(), 0.0);
        assert!(fx.level_up_active());

        fx.decay(1.0);
        assert!(!fx.level_up_active());
    }

    #[test]
    fn test_expression_returns_to_idle() {
        let mut fx = Effects::default();
        fx.set_expression(Expression::Sad);
        fx.decay(0.5);
        assert_eq!(fx.expression, Expression::Sad);
        fx.decay(0.2);
        assert_eq!(fx.expression, Expression::Idle);
    }

    #[test]
    fn test_score_display_eases() {
        let mut fx = Effects::default();
        fx.animate_score(10, 0.05);
        assert!(fx.score_display > 0.0 && fx.score_display < 10.0);
        // A long frame snaps to the target
        fx.animate_score(10, 1.0);
        assert!((fx.score_display - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_particles_capped() {
        let mut fx = Effects::default();
        let velocities = [Vec2::new(1.0, -1.0); PARTICLES_PER_CATCH];
        for _ in 0..10 {
            fx.spawn_catch(Vec2::ZERO, "+1".into(), TextTone::Score, &velocities);
        }
        assert_eq!(fx.particles.len(), MAX_PARTICLES);
        assert_eq!(fx.texts.len(), 10);
    }

    #[test]
    fn test_particles_move_and_expire() {
        let mut fx = Effects::default();
        fx.spawn_catch(
            Vec2::new(100.0, 100.0),
            "+5".into(),
            TextTone::Score,
            &[Vec2::new(10.0, -20.0)],
        );
        fx.decay(0.5);
        assert_eq!(fx.particles.len(), 1);
        assert!((fx.particles[0].pos - Vec2::new(105.0, 90.0)).length() < 1e-4);
        assert!((fx.texts[0].pos.y - 91.0).abs() < 1e-4);

        fx.decay(0.2);
        assert!(fx.particles.is_empty());
        assert_eq!(fx.texts.len(), 1);

        fx.decay(0.4);
        assert!(fx.texts.is_empty());
    }

    #[test]
    fn test_miss_text() {
        let mut fx = Effects::default();
        fx.spawn_miss(Vec2::new(40.0, 588.0));
        assert_eq!(fx.texts[0].text, "-1");
        assert_eq!(fx.texts[0].tone, TextTone::Miss);
        assert!(fx.particles.is_empty());
    }

    #[test]
    fn test_burst_velocities_in_range() {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(9);
        for vel in burst_velocities(&mut rng) {
            assert!((-30.0..=30.0).contains(&vel.x));
            assert!((-48.0..=12.0).contains(&vel.y));
        }
    }

    #[test]
    fn test_basket_offset_only_while_wobbling() {
        let mut fx = Effects::default();
        assert_eq!(fx.basket_offset(), 0.0);
        fx.trigger_basket_wobble();
        assert!(fx.basket_offset().abs() <= 2.0);
    }
}
