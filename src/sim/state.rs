//! Game state and core simulation types
//!
//! All state the simulation reads or writes lives here. The host owns a
//! single `GameState` and drives it through `tick::advance`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{CatchHitboxes, Rect};
use super::effects::Effects;
use crate::tuning::Tuning;

/// Effective mode derived from the `running` / `paused` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Waiting for the first start
    Idle,
    /// Simulation advances every tick
    Active,
    /// Running but paused; nothing advances
    Suspended,
    /// Lives ran out; waiting for a restart
    GameOver,
}

/// What is falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Red apple
    #[default]
    Normal,
    /// Gold apple
    Bonus,
    /// Bomb
    Hazard,
    /// Heart
    Heal,
}

impl ItemKind {
    /// Points awarded on catch
    pub fn points(self, tuning: &Tuning) -> u32 {
        match self {
            ItemKind::Normal => tuning.normal_points,
            ItemKind::Bonus => tuning.bonus_points,
            ItemKind::Hazard | ItemKind::Heal => 0,
        }
    }

    /// Side length of the item's square
    pub fn size(self, tuning: &Tuning) -> f32 {
        match self {
            ItemKind::Hazard => tuning.hazard_size,
            _ => tuning.item_size,
        }
    }

    /// Whether letting it reach the ground costs a life
    pub fn penalised_on_miss(self) -> bool {
        matches!(self, ItemKind::Normal | ItemKind::Bonus)
    }
}

/// A falling item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    pub kind: ItemKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Fall speed (px/s, downward)
    pub vy: f32,
    pub points: u32,
}

impl FallingItem {
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }
}

/// The player's basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal speed (px/s)
    pub speed: f32,
    /// -1 left, 0 still, 1 right
    pub move_dir: i8,
    /// Stick raised above the basket
    pub reach_active: bool,
    pub reach_width: f32,
    pub reach_height: f32,
    min_x: f32,
    max_x: f32,
}

impl Basket {
    /// Basket centred in the world
    pub fn new(tuning: &Tuning) -> Self {
        let mut basket = Self {
            x: 0.0,
            y: tuning.basket_y,
            width: tuning.basket_width,
            height: tuning.basket_height,
            speed: tuning.basket_speed,
            move_dir: 0,
            reach_active: false,
            reach_width: tuning.reach_width,
            reach_height: tuning.reach_height,
            min_x: tuning.basket_min_x(),
            max_x: tuning.basket_max_x(),
        };
        basket.set_x(tuning.world.width / 2.0 - tuning.basket_width / 2.0);
        basket
    }

    /// Move to `x`, clamped to the playable range
    pub fn set_x(&mut self, x: f32) {
        self.x = x.clamp(self.min_x, self.max_x);
    }

    /// Apply the current move direction for `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.move_dir != 0 {
            self.set_x(self.x + self.move_dir as f32 * self.speed * dt);
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Catch zones: the basket, plus the stick while raised
    ///
    /// The stick is centred on the basket and reaches `reach_height` above
    /// its top, down to its bottom edge.
    pub fn catch_hitboxes(&self) -> CatchHitboxes {
        let reach = self.reach_active.then(|| {
            Rect::new(
                self.x + self.width / 2.0 - self.reach_width / 2.0,
                self.y - self.reach_height,
                self.reach_width,
                self.reach_height + self.height,
            )
        });
        CatchHitboxes {
            basket: self.bounds(),
            reach,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    /// Fall speed baseline for new items
    pub speed: f32,
    pub spawn_interval: f32,
    pub spawn_timer: f32,
    pub running: bool,
    pub paused: bool,
    /// Set when lives ran out, cleared on start
    pub ended: bool,
    pub high_score: u64,
    pub basket: Basket,
    /// Falling items in spawn order
    pub items: Vec<FallingItem>,
    pub effects: Effects,
    /// Seconds of active play since start
    pub elapsed: f32,
    next_id: u32,
}

impl GameState {
    /// Create an idle game with the given tuning and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let basket = Basket::new(&tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: tuning.max_lives,
            level: 1,
            speed: tuning.base_speed,
            spawn_interval: tuning.base_spawn_interval,
            spawn_timer: 0.0,
            running: false,
            paused: false,
            ended: false,
            high_score: 0,
            basket,
            items: Vec::new(),
            effects: Effects::default(),
            elapsed: 0.0,
            next_id: 1,
            tuning,
        }
    }

    /// Seed the best score (e.g. from storage)
    pub fn with_high_score(mut self, high_score: u64) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn mode(&self) -> Mode {
        match (self.running, self.paused) {
            (true, false) => Mode::Active,
            (true, true) => Mode::Suspended,
            (false, _) if self.ended => Mode::GameOver,
            (false, _) => Mode::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode() == Mode::Active
    }

    /// Reset everything but the high score and start playing
    pub fn start(&mut self) {
        self.score = 0;
        self.lives = self.tuning.max_lives;
        self.level = 1;
        self.speed = self.tuning.base_speed;
        self.spawn_interval = self.tuning.base_spawn_interval;
        self.spawn_timer = 0.0;
        self.paused = false;
        self.ended = false;
        self.basket = Basket::new(&self.tuning);
        self.items.clear();
        self.effects = Effects::default();
        self.elapsed = 0.0;
        self.running = true;
        log::info!(
            "Game started (seed {}, high score {})",
            self.seed,
            self.high_score
        );
    }

    /// Freeze the simulation. Returns true if the mode changed.
    pub fn pause(&mut self) -> bool {
        if self.mode() != Mode::Active {
            return false;
        }
        self.paused = true;
        true
    }

    /// Unfreeze the simulation. Returns true if the mode changed.
    pub fn resume(&mut self) -> bool {
        if self.mode() != Mode::Suspended {
            return false;
        }
        self.paused = false;
        true
    }

    /// Pause if playing, resume if paused, otherwise nothing
    pub fn toggle_pause(&mut self) -> bool {
        match self.mode() {
            Mode::Active => self.pause(),
            Mode::Suspended => self.resume(),
            _ => false,
        }
    }

    /// Set the basket's horizontal direction; any value is reduced to its sign
    pub fn set_move_dir(&mut self, dir: i8) {
        self.basket.move_dir = dir.signum();
    }

    /// Raise or lower the stick (ignored when reach is disabled)
    pub fn set_reach(&mut self, active: bool) {
        self.basket.reach_active = active && self.tuning.capabilities.reach;
    }

    /// Centre the basket on a pointer position. Only while playing.
    pub fn drag_basket_to(&mut self, pointer_x: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        let half = self.basket.width / 2.0;
        self.basket.set_x(pointer_x - half);
        true
    }

    pub fn catch_hitboxes(&self) -> CatchHitboxes {
        self.basket.catch_hitboxes()
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Add an item directly, bypassing the spawner
    pub fn push_item(&mut self, kind: ItemKind, pos: Vec2, vy: f32) -> u32 {
        let id = self.next_entity_id();
        self.items.push(FallingItem {
            id,
            kind,
            pos,
            size: kind.size(&self.tuning),
            vy,
            points: kind.points(&self.tuning),
        });
        id
    }
}
