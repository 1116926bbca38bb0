//! Cyberscape - a top-down grid arcade game
//!
//! Core modules:
//! - `sim`: Simulation (obstacle field, collisions, projectiles, radars, game state)
//! - `renderer`: Canvas-style 2D drawing surface and scene drawing
//! - `input`: Key state capture and per-tick input snapshots
//! - `platform`: Browser glue (canvas, DOM HUD, event wiring)
//! - `settings`: Key bindings and display preferences

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{KeyBindings, Settings};

use std::f32::consts::TAU;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Grid layout
    pub const GRID_ROWS: usize = 4;
    pub const GRID_COLS: usize = 6;
    /// Gap between cells (and around the outer edge), in pixels
    pub const CELL_MARGIN: f32 = 10.0;

    /// Obstacles per cell (inclusive range)
    pub const MIN_OBSTACLES_PER_CELL: usize = 2;
    pub const MAX_OBSTACLES_PER_CELL: usize = 5;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Pixels per tick
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Maximum Chebyshev ring radius for spawn-point search
    pub const SPAWN_SEARCH_RADIUS: i32 = 100;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 6.0;
    /// Pixels per tick at launch
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Velocity kept after each reflection
    pub const PROJECTILE_SPEED_LOSS: f32 = 0.98;
    /// Per-axis velocity floor after a bounce
    pub const PROJECTILE_MIN_AXIS_SPEED: f32 = 0.5;
    /// Bounce budget (inclusive range, rolled per projectile)
    pub const PROJECTILE_MIN_BOUNCES: u32 = 8;
    pub const PROJECTILE_MAX_BOUNCES: u32 = 10;
    /// Number of entries in the projectile palette
    pub const PROJECTILE_COLORS: u8 = 7;

    /// Radar defaults
    pub const RADAR_HIT_POINTS: u8 = 3;
    /// Sweep advance per tick (radians)
    pub const RADAR_SWEEP_STEP: f32 = 0.02;
    /// Angular width of the illuminated sector, shared by detection and drawing
    pub const RADAR_SECTOR_WIDTH: f32 = PI / 3.0;
    /// Sweep reach as a fraction of the smaller cell dimension
    pub const RADAR_REACH_FRACTION: f32 = 0.5;
    /// Radius of the radar emitter that projectiles must strike
    pub const RADAR_CORE_RADIUS: f32 = 8.0;
    /// Player health lost per detection
    pub const RADAR_DAMAGE: f32 = 25.0;

    /// System health
    pub const SYSTEM_HEALTH_START: f32 = 50.0;
    pub const SYSTEM_HEALTH_MAX: f32 = 100.0;
    pub const SYSTEM_DECAY_AMOUNT: f32 = 2.0;
    pub const SYSTEM_DECAY_INTERVAL_MS: f64 = 3000.0;
    /// Restored per processed shard
    pub const SHARD_RESTORE_AMOUNT: f32 = 10.0;

    /// Hub (shard processing station) at canvas center
    pub const HUB_RADIUS: f32 = 24.0;
    /// Extra distance beyond touching at which the player counts as adjacent
    pub const HUB_REACH: f32 = 20.0;

    /// Collectibles
    pub const COLLECTIBLE_RADIUS: f32 = 6.0;
    pub const MAX_SHARDS: usize = 5;
    pub const INITIAL_SHARDS: usize = 3;
    pub const SHARD_SPAWN_INTERVAL_MS: f64 = 5000.0;
    pub const SHARD_CELL_CHANCE: f64 = 0.5;
    pub const SHARD_MIN_COST: u32 = 1;
    pub const SHARD_MAX_COST: u32 = 5;
    pub const MAX_KEYS: usize = 3;
    pub const KEY_CELL_CHANCE: f64 = 0.01;
    /// Random samples tried inside a cell that rolled eligible
    pub const PLACEMENT_ATTEMPTS: usize = 5;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
