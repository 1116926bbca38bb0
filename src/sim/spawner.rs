//! Collectible placement
//!
//! Keys and shards share one placement strategy: every cell rolls for
//! eligibility, eligible cells try a few random points, and exactly one of
//! the surviving candidates is spawned. Many cells may qualify in a call but
//! at most one collectible appears, which keeps the spawn rate in check.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::field::ObstacleField;
use super::movement::can_occupy;
use super::state::{Key, Shard};
use crate::consts::*;

/// Collect one free point from each cell that wins its `cell_chance` roll
pub fn placement_candidates(
    field: &ObstacleField,
    rng: &mut impl Rng,
    cell_chance: f64,
    radius: f32,
) -> Vec<Vec2> {
    let layout = field.layout();
    if layout.cell_w <= 0.0 || layout.cell_h <= 0.0 {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for (row, col) in layout.cells() {
        if !rng.random_bool(cell_chance) {
            continue;
        }
        let origin = layout.cell_origin(row, col);
        for _ in 0..PLACEMENT_ATTEMPTS {
            let point = origin
                + Vec2::new(
                    rng.random_range(0.0..layout.cell_w),
                    rng.random_range(0.0..layout.cell_h),
                );
            if can_occupy(field, point, radius) {
                candidates.push(point);
                break;
            }
        }
    }
    candidates
}

/// Pick one placement uniformly among this call's candidates
pub fn pick_placement(field: &ObstacleField, rng: &mut impl Rng, cell_chance: f64) -> Option<Vec2> {
    let candidates = placement_candidates(field, rng, cell_chance, COLLECTIBLE_RADIUS);
    candidates.choose(rng).copied()
}

/// Spawn one shard if below the cap and a placement was found
pub fn try_spawn_shard(field: &ObstacleField, shards: &mut Vec<Shard>, rng: &mut impl Rng) -> bool {
    if shards.len() >= MAX_SHARDS {
        return false;
    }
    let Some(pos) = pick_placement(field, rng, SHARD_CELL_CHANCE) else {
        return false;
    };
    let cost = rng.random_range(SHARD_MIN_COST..=SHARD_MAX_COST);
    log::debug!("Shard spawned at ({:.0}, {:.0}) costing {} keys", pos.x, pos.y, cost);
    shards.push(Shard { pos, cost });
    true
}

/// Spawn one key if below the cap and a placement was found
pub fn try_spawn_key(field: &ObstacleField, keys: &mut Vec<Key>, rng: &mut impl Rng) -> bool {
    if keys.len() >= MAX_KEYS {
        return false;
    }
    let Some(pos) = pick_placement(field, rng, KEY_CELL_CHANCE) else {
        return false;
    };
    log::debug!("Key spawned at ({:.0}, {:.0})", pos.x, pos.y);
    keys.push(Key { pos });
    true
}
