//! Data-driven game balance
//!
//! Every number the simulation reads lives here. Defaults reproduce the
//! classic orchard game; a JSON document may override any subset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a tuning document was rejected
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON, or a field has the wrong type
    Parse(serde_json::Error),
    /// Parsed, but a value would break the simulation
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "tuning parse error: {}", e),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning: {} {}", field, reason)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> TuningError {
    TuningError::Invalid { field, reason }
}

/// Fixed playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Items whose bottom edge reaches this line are missed
    pub ground: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground: GROUND_Y,
        }
    }
}

/// Optional mechanics, so one core covers every variant of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Hearts restore a life
    pub heal_items: bool,
    /// Gold apples worth extra points
    pub bonus_items: bool,
    /// Bombs cost a life when caught
    pub hazard_items: bool,
    /// Holding "up" raises the catching stick
    pub reach: bool,
    /// High score is written to the store
    pub persistence: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            heal_items: true,
            bonus_items: true,
            hazard_items: true,
            reach: true,
            persistence: true,
        }
    }
}

/// Complete balance sheet for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world: World,
    pub capabilities: Capabilities,

    // === Lives & scoring ===
    pub max_lives: u8,
    pub normal_points: u32,
    pub bonus_points: u32,
    /// Points needed per level
    pub level_score_step: u64,

    // === Difficulty ===
    /// Fall speed at level 1 (px/s)
    pub base_speed: f32,
    pub speed_per_level: f32,
    /// Extra random fall speed added per item (px/s)
    pub speed_jitter: f32,
    pub base_spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub spawn_interval_step: f32,

    // === Spawn table ===
    pub heal_chance: f32,
    pub bonus_chance: f32,
    pub hazard_base_chance: f32,
    pub hazard_growth_per_level: f32,
    pub hazard_max_chance: f32,
    pub item_size: f32,
    pub hazard_size: f32,
    /// Horizontal keep-out on both sides of the spawn range
    pub spawn_margin: f32,
    /// Spawn height (just under the tree canopy)
    pub spawn_y: f32,

    // === Basket ===
    pub basket_width: f32,
    pub basket_height: f32,
    pub basket_y: f32,
    pub basket_speed: f32,
    pub basket_margin: f32,
    pub reach_height: f32,
    pub reach_width: f32,

    // === Timing ===
    /// Largest step `advance` will simulate in one call
    pub max_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world: World::default(),
            capabilities: Capabilities::default(),

            max_lives: 5,
            normal_points: 1,
            bonus_points: 5,
            level_score_step: 10,

            base_speed: 90.0,
            speed_per_level: 18.0,
            speed_jitter: 40.0,
            base_spawn_interval: 1.2,
            min_spawn_interval: 0.55,
            spawn_interval_step: 0.07,

            heal_chance: 0.05,
            bonus_chance: 0.10,
            hazard_base_chance: 0.15,
            hazard_growth_per_level: 0.01,
            hazard_max_chance: 0.35,
            item_size: 18.0,
            hazard_size: 20.0,
            spawn_margin: 15.0,
            spawn_y: 120.0,

            basket_width: 60.0,
            basket_height: 44.0,
            basket_y: 560.0,
            basket_speed: 220.0,
            basket_margin: 12.0,
            reach_height: 80.0,
            reach_width: 12.0,

            max_step: MAX_STEP,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would stall, panic or break the difficulty curve
    pub fn validate(&self) -> Result<(), TuningError> {
        let numbers = [
            ("world.width", self.world.width),
            ("world.height", self.world.height),
            ("world.ground", self.world.ground),
            ("base_speed", self.base_speed),
            ("speed_per_level", self.speed_per_level),
            ("speed_jitter", self.speed_jitter),
            ("base_spawn_interval", self.base_spawn_interval),
            ("min_spawn_interval", self.min_spawn_interval),
            ("spawn_interval_step", self.spawn_interval_step),
            ("heal_chance", self.heal_chance),
            ("bonus_chance", self.bonus_chance),
            ("hazard_base_chance", self.hazard_base_chance),
            ("hazard_growth_per_level", self.hazard_growth_per_level),
            ("hazard_max_chance", self.hazard_max_chance),
            ("item_size", self.item_size),
            ("hazard_size", self.hazard_size),
            ("spawn_margin", self.spawn_margin),
            ("spawn_y", self.spawn_y),
            ("basket_width", self.basket_width),
            ("basket_height", self.basket_height),
            ("basket_y", self.basket_y),
            ("basket_speed", self.basket_speed),
            ("basket_margin", self.basket_margin),
            ("reach_height", self.reach_height),
            ("reach_width", self.reach_width),
            ("max_step", self.max_step),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        let non_negative = [
            ("speed_per_level", self.speed_per_level),
            ("speed_jitter", self.speed_jitter),
            ("spawn_interval_step", self.spawn_interval_step),
            ("hazard_growth_per_level", self.hazard_growth_per_level),
            ("basket_speed", self.basket_speed),
            ("basket_margin", self.basket_margin),
            ("spawn_margin", self.spawn_margin),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(invalid(field, "must not be negative"));
            }
        }

        let positive = [
            ("world.width", self.world.width),
            ("world.height", self.world.height),
            ("base_spawn_interval", self.base_spawn_interval),
            ("min_spawn_interval", self.min_spawn_interval),
            ("item_size", self.item_size),
            ("hazard_size", self.hazard_size),
            ("basket_width", self.basket_width),
            ("basket_height", self.basket_height),
            ("max_step", self.max_step),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(invalid(field, "must be positive"));
            }
        }

        let chances = [
            ("heal_chance", self.heal_chance),
            ("bonus_chance", self.bonus_chance),
            ("hazard_base_chance", self.hazard_base_chance),
            ("hazard_max_chance", self.hazard_max_chance),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be within 0..=1"));
            }
        }

        if self.min_spawn_interval > self.base_spawn_interval {
            return Err(invalid(
                "min_spawn_interval",
                "must not exceed base_spawn_interval",
            ));
        }
        if self.max_lives == 0 {
            return Err(invalid("max_lives", "must be at least 1"));
        }
        Ok(())
    }

    /// Probability that the next spawn is a bomb at `level`
    pub fn hazard_chance(&self, level: u32) -> f32 {
        let growth = level.saturating_sub(1) as f32 * self.hazard_growth_per_level;
        (self.hazard_base_chance + growth).min(self.hazard_max_chance)
    }

    /// Lowest x the basket may occupy
    pub fn basket_min_x(&self) -> f32 {
        self.basket_margin
    }

    /// Highest x the basket may occupy
    pub fn basket_max_x(&self) -> f32 {
        (self.world.width - self.basket_width - self.basket_margin).max(self.basket_margin)
    }
}
