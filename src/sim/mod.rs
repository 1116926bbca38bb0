//! Simulation module
//!
//! All gameplay logic lives here:
//! - Obstacle field generation and grid layout
//! - Circle-vs-box collision and axis-separated movement
//! - Bouncing projectiles and radar sweeps
//! - Collectible spawning, game state and the per-frame scheduler
//!
//! Randomness comes only from the seeded generator held in `GameState`.

pub mod field;
pub mod geometry;
pub mod movement;
pub mod projectile;
pub mod radar;
pub mod spawner;
pub mod state;
pub mod tick;

pub use field::{Layout, ObstacleField};
pub use geometry::Rect;
pub use movement::{can_occupy, find_spawn_point, move_axis_separated};
pub use projectile::{PhysicsReport, Projectile, StepOutcome, update_projectiles};
pub use radar::{Radar, Sector};
pub use state::{GamePhase, GameState, Hud, HudSnapshot, Key, Player, Shard};
pub use tick::{TickInput, detect_player, tick, update_player};
