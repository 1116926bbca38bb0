//! Game state and core simulation types
//!
//! One owned aggregate holds everything a tick touches: the obstacle field,
//! radars, player, collectibles, projectiles, counters and timers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::{Layout, ObstacleField};
use super::movement::find_spawn_point;
use super::projectile::Projectile;
use super::radar::{Radar, generate_radars};
use super::spawner::try_spawn_shard;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// System health restored to full
    Won,
    /// System health or player health ran out
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// The player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per tick along each axis
    pub speed: f32,
    /// 0..=100
    pub health: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
        }
    }
}

/// An energy shard; processing it at the hub costs `cost` keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shard {
    pub pos: Vec2,
    pub cost: u32,
}

/// A key lying in the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Key {
    pub pos: Vec2,
}

/// Wall-clock interval timer; compares elapsed time instead of counting ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub last_ms: f64,
    pub every_ms: f64,
}

impl Interval {
    pub fn new(every_ms: f64, now_ms: f64) -> Self {
        Self {
            last_ms: now_ms,
            every_ms,
        }
    }

    /// True (and restarts) once `every_ms` has elapsed since the last firing
    pub fn ready(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_ms >= self.every_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Read-only view for the host UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub keys: u32,
    /// Shards carried and waiting to be processed
    pub shards: usize,
    /// Player health, floored and never negative
    pub player_health: u32,
    /// System health percentage (0..=100), for a width-scaled bar
    pub system_health: f32,
    pub phase: GamePhase,
}

/// Host-side mirror of the counters (DOM text, health bar).
///
/// Both hooks default to no-ops; `()` is the headless implementation.
pub trait Hud {
    fn update_counters(&mut self, _hud: &HudSnapshot) {}
    fn update_health_bar(&mut self, _hud: &HudSnapshot) {}
}

impl Hud for () {}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub field: ObstacleField,
    /// One per cell, row-major (same indexing as the field layout)
    pub radars: Vec<Radar>,
    pub player: Player,
    /// Where the player first spawned this run
    pub base_station: Vec2,
    pub projectiles: Vec<Projectile>,
    /// Shards lying in the field
    pub shards: Vec<Shard>,
    /// Shards picked up, in pickup order
    pub carried: Vec<Shard>,
    /// Keys lying in the field
    pub keys: Vec<Key>,
    pub keys_collected: u32,
    /// 0..=100
    pub system_health: f32,
    pub phase: GamePhase,
    pub shard_timer: Interval,
    pub decay_timer: Interval,
    /// Ticks since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game on a canvas of the given size
    pub fn new(seed: u64, width: f32, height: f32, now_ms: f64) -> Self {
        let layout = Layout::for_canvas(width, height);
        Self::fresh(seed, Pcg32::seed_from_u64(seed), layout, 0, now_ms)
    }

    fn fresh(seed: u64, mut rng: Pcg32, layout: Layout, generation: u64, now_ms: f64) -> Self {
        let field = ObstacleField::generate(layout, &mut rng, generation);
        let radars = generate_radars(&layout, &mut rng);
        let spawn = find_spawn_point(&field, layout.center(), PLAYER_RADIUS, SPAWN_SEARCH_RADIUS);

        let mut shards = Vec::with_capacity(MAX_SHARDS);
        for _ in 0..INITIAL_SHARDS {
            try_spawn_shard(&field, &mut shards, &mut rng);
        }

        Self {
            seed,
            rng,
            field,
            radars,
            player: Player::new(spawn),
            base_station: spawn,
            projectiles: Vec::new(),
            shards,
            carried: Vec::new(),
            keys: Vec::with_capacity(MAX_KEYS),
            keys_collected: 0,
            system_health: SYSTEM_HEALTH_START,
            phase: GamePhase::Playing,
            shard_timer: Interval::new(SHARD_SPAWN_INTERVAL_MS, now_ms),
            decay_timer: Interval::new(SYSTEM_DECAY_INTERVAL_MS, now_ms),
            time_ticks: 0,
        }
    }

    /// Start over: new field and radars, empty collections, fresh counters.
    ///
    /// The replacement state is fully built before it is swapped in.
    pub fn reset(&mut self, now_ms: f64) {
        let layout = *self.field.layout();
        let generation = self.field.generation() + 1;
        let fresh = Self::fresh(self.seed, self.rng.clone(), layout, generation, now_ms);
        *self = fresh;
        log::info!("Game reset (field generation {})", generation);
    }

    /// Re-derive the grid for a new canvas size and regenerate obstacles.
    ///
    /// Radars keep their state; entities are not repositioned.
    pub fn resize(&mut self, width: f32, height: f32) {
        let layout = Layout::for_canvas(width, height);
        let generation = self.field.generation() + 1;
        self.field = ObstacleField::generate(layout, &mut self.rng, generation);
        log::info!(
            "Canvas resized to {}x{} (cell {}x{})",
            width,
            height,
            layout.cell_w,
            layout.cell_h
        );
    }

    pub fn layout(&self) -> &Layout {
        self.field.layout()
    }

    /// The hub sits at the canvas center
    pub fn hub_center(&self) -> Vec2 {
        self.layout().center()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Close enough to the hub to process shards
    pub fn near_hub(&self) -> bool {
        self.player.pos.distance(self.hub_center()) <= HUB_RADIUS + self.player.radius + HUB_REACH
    }

    /// Index into `carried` of the first shard the current keys can pay for
    pub fn processable_shard(&self) -> Option<usize> {
        self.carried
            .iter()
            .position(|shard| shard.cost <= self.keys_collected)
    }

    /// Fire a projectile from the player toward `target` (world coordinates).
    ///
    /// Ignored once the game has ended, or when the target is the player's
    /// own position.
    pub fn fire(&mut self, target: Vec2) -> bool {
        if self.is_terminal() {
            return false;
        }
        match Projectile::aimed(self.player.pos, target, &mut self.rng) {
            Some(projectile) => {
                self.projectiles.push(projectile);
                true
            }
            None => false,
        }
    }

    /// Raise system health; reaching full health wins
    pub fn restore_system(&mut self, amount: f32) {
        if self.is_terminal() {
            return;
        }
        self.system_health = (self.system_health + amount).min(SYSTEM_HEALTH_MAX);
        if self.system_health >= SYSTEM_HEALTH_MAX {
            self.phase = GamePhase::Won;
            log::info!("System restored - game won");
        }
    }

    /// Lower system health; reaching zero loses
    pub fn drain_system(&mut self, amount: f32) {
        if self.is_terminal() {
            return;
        }
        self.system_health = (self.system_health - amount).max(0.0);
        if self.system_health <= 0.0 {
            self.phase = GamePhase::Lost;
            log::info!("System health depleted - game lost");
        }
    }

    /// Damage the player; returns true if the hit was lethal
    pub fn damage_player(&mut self, amount: f32) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.player.health = (self.player.health - amount).max(0.0);
        if self.player.health <= 0.0 {
            self.phase = GamePhase::Lost;
            log::info!("Player destroyed - game lost");
            true
        } else {
            false
        }
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            keys: self.keys_collected,
            shards: self.carried.len(),
            player_health: self.player.health.max(0.0).floor() as u32,
            system_health: self.system_health.clamp(0.0, SYSTEM_HEALTH_MAX),
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(12345, 1280.0, 720.0, 0.0)
    }

    #[test]
    fn test_new_game_defaults() {
        let state = new_state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, PLAYER_MAX_HEALTH);
        assert_eq!(state.system_health, SYSTEM_HEALTH_START);
        assert_eq!(state.radars.len(), GRID_ROWS * GRID_COLS);
        assert!(state.radars.iter().all(|r| r.hit_points == RADAR_HIT_POINTS));
        assert!(state.shards.len() <= INITIAL_SHARDS);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.base_station, state.player.pos);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = new_state();
        let b = new_state();
        let rects_a: Vec<_> = a.field.world_obstacles().collect();
        let rects_b: Vec<_> = b.field.world_obstacles().collect();
        assert_eq!(rects_a, rects_b);
        assert_eq!(a.player.pos, b.player.pos);
    }

    #[test]
    fn test_system_health_clamps_and_wins() {
        let mut state = new_state();
        state.restore_system(45.0);
        assert_eq!(state.system_health, 95.0);
        assert_eq!(state.phase, GamePhase::Playing);
        state.restore_system(30.0);
        assert_eq!(state.system_health, 100.0);
        assert_eq!(state.phase, GamePhase::Won);

        // Frozen once terminal
        state.drain_system(100.0);
        assert_eq!(state.system_health, 100.0);
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_system_health_clamps_and_loses() {
        let mut state = new_state();
        state.drain_system(70.0);
        assert_eq!(state.system_health, 0.0);
        assert_eq!(state.phase, GamePhase::Lost);

        state.restore_system(10.0);
        assert_eq!(state.system_health, 0.0);
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn test_player_damage() {
        let mut state = new_state();
        assert!(!state.damage_player(40.0));
        assert_eq!(state.hud().player_health, 60);
        assert!(state.damage_player(75.0));
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.hud().player_health, 0);
        assert_eq!(state.system_health, SYSTEM_HEALTH_START);
    }

    #[test]
    fn test_hud_floors_health() {
        let mut state = new_state();
        state.player.health = 57.9;
        state.keys_collected = 4;
        state.carried.push(Shard {
            pos: Vec2::ZERO,
            cost: 2,
        });
        let hud = state.hud();
        assert_eq!(hud.player_health, 57);
        assert_eq!(hud.keys, 4);
        assert_eq!(hud.shards, 1);
        assert_eq!(hud.phase, GamePhase::Playing);
    }

    #[test]
    fn test_processable_shard_requires_keys() {
        let mut state = new_state();
        state.carried = vec![
            Shard { pos: Vec2::ZERO, cost: 4 },
            Shard { pos: Vec2::ZERO, cost: 2 },
        ];
        state.keys_collected = 1;
        assert_eq!(state.processable_shard(), None);
        state.keys_collected = 2;
        assert_eq!(state.processable_shard(), Some(1));
        state.keys_collected = 5;
        assert_eq!(state.processable_shard(), Some(0));
    }

    #[test]
    fn test_interval_uses_elapsed_time() {
        let mut timer = Interval::new(1000.0, 0.0);
        assert!(!timer.ready(999.0));
        assert!(timer.ready(1500.0));
        // Restarted from the firing time, not from the nominal boundary
        assert!(!timer.ready(2400.0));
        assert!(timer.ready(2500.0));
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = new_state();
        let generation = state.field.generation();
        let old_rects: Vec<_> = state.field.world_obstacles().collect();

        state.player.health = 10.0;
        state.system_health = 3.0;
        state.keys_collected = 7;
        state.phase = GamePhase::Lost;
        state.radars[0].hit_points = 0;
        state.keys.push(Key { pos: Vec2::ONE });
        state.carried.push(Shard { pos: Vec2::ONE, cost: 1 });
        state.projectiles.push(Projectile::new(Vec2::ONE, Vec2::X, 0, 8));
        state.time_ticks = 99;

        state.reset(5000.0);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health, PLAYER_MAX_HEALTH);
        assert_eq!(state.system_health, SYSTEM_HEALTH_START);
        assert_eq!(state.keys_collected, 0);
        assert!(state.keys.is_empty());
        assert!(state.carried.is_empty());
        assert!(state.projectiles.is_empty());
        assert!(state.shards.len() <= INITIAL_SHARDS);
        assert!(state.radars.iter().all(|r| r.hit_points == RADAR_HIT_POINTS));
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.shard_timer.last_ms, 5000.0);
        assert_eq!(state.decay_timer.last_ms, 5000.0);
        assert_ne!(state.field.generation(), generation);
        let new_rects: Vec<_> = state.field.world_obstacles().collect();
        assert_ne!(new_rects, old_rects);
    }

    #[test]
    fn test_resize_regenerates_field_keeps_radars() {
        let mut state = new_state();
        state.radars[3].hit_points = 1;
        let generation = state.field.generation();

        state.resize(800.0, 600.0);
        assert_eq!(state.layout().width, 800.0);
        assert_eq!(state.layout().cell_w, 121.0);
        assert_eq!(state.field.generation(), generation + 1);
        assert_eq!(state.radars[3].hit_points, 1);
        assert_eq!(state.hub_center(), Vec2::new(400.0, 300.0));
    }
}
