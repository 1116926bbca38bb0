//! Frame scheduler
//!
//! One call per host animation frame. Updates and draws are interleaved in a
//! fixed order, so later steps see (and draw over) the results of earlier ones.

use glam::Vec2;

use super::movement::{find_spawn_point, move_axis_separated};
use super::projectile::update_projectiles;
use super::radar::first_detection;
use super::spawner::{try_spawn_key, try_spawn_shard};
use super::state::{GameState, Hud};
use crate::consts::*;
use crate::renderer::Surface;
use crate::renderer::scene::{
    draw_banner, draw_base_station, draw_collectibles, draw_field, draw_hub, draw_player,
    draw_projectiles, draw_radars,
};
use crate::settings::DisplayOptions;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Per-axis movement direction, each component in {-1, 0, 1}
    pub movement: Vec2,
    /// Process a carried shard at the hub
    pub process: bool,
}

/// Movement, pickups and shard processing. Does nothing once the game is over.
pub fn update_player(state: &mut GameState, input: &TickInput) {
    if state.is_terminal() {
        return;
    }
    let player = &mut state.player;
    let delta = input.movement * player.speed;
    if delta != Vec2::ZERO {
        player.pos = move_axis_separated(&state.field, player.pos, delta, player.radius);
    }

    let pos = player.pos;
    let reach = player.radius + COLLECTIBLE_RADIUS;

    let before = state.keys.len();
    state.keys.retain(|key| key.pos.distance(pos) >= reach);
    let picked = (before - state.keys.len()) as u32;
    if picked > 0 {
        state.keys_collected += picked;
        log::debug!("Picked up {} key(s), holding {}", picked, state.keys_collected);
    }

    let mut i = 0;
    while i < state.shards.len() {
        if state.shards[i].pos.distance(pos) < reach {
            let shard = state.shards.remove(i);
            log::debug!("Picked up shard (cost {})", shard.cost);
            state.carried.push(shard);
        } else {
            i += 1;
        }
    }

    if input.process && state.near_hub() {
        process_shard(state);
    }
}

/// Feed the first affordable carried shard into the hub
fn process_shard(state: &mut GameState) -> bool {
    let Some(index) = state.processable_shard() else {
        return false;
    };
    let shard = state.carried.remove(index);
    state.keys_collected -= shard.cost;
    state.restore_system(SHARD_RESTORE_AMOUNT);
    log::info!(
        "Processed shard (cost {}), system health {}",
        shard.cost,
        state.system_health
    );
    true
}

/// Radar detection: damage the player and move them clear of the sweep.
///
/// Returns true if a radar caught the player this tick. Always false once the
/// game is over.
pub fn detect_player(state: &mut GameState) -> bool {
    if state.is_terminal() {
        return false;
    }
    let layout = *state.layout();
    let Some(radar) = first_detection(&state.radars, &layout, state.player.pos, state.player.radius)
    else {
        return false;
    };

    log::debug!("Detected by radar {}", radar);
    state.damage_player(RADAR_DAMAGE);
    if state.player.health > 0.0 {
        state.player.pos = find_spawn_point(
            &state.field,
            layout.center(),
            state.player.radius,
            SPAWN_SEARCH_RADIUS,
        );
    }
    true
}

/// Advance the game by one frame and draw it
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    now_ms: f64,
    surface: &mut impl Surface,
    hud: &mut impl Hud,
    display: &DisplayOptions,
) {
    let layout = *state.layout();

    surface.clear();
    draw_field(surface, &state.field);

    for radar in &mut state.radars {
        radar.advance();
    }
    draw_radars(surface, &state.radars, &layout, display);

    update_player(state, input);
    draw_player(surface, &state.player);
    draw_collectibles(surface, &state.shards, &state.keys, display);

    if !state.is_terminal() && state.shard_timer.ready(now_ms) {
        try_spawn_shard(&state.field, &mut state.shards, &mut state.rng);
    }
    if !state.is_terminal() && state.decay_timer.ready(now_ms) {
        state.drain_system(SYSTEM_DECAY_AMOUNT);
    }

    hud.update_counters(&state.hud());

    detect_player(state);

    draw_projectiles(surface, &state.projectiles);

    let prompt = match state.processable_shard() {
        Some(index) if display.hub_prompt && !state.is_terminal() => Some(format!(
            "PROCESS SHARD ({} KEYS)",
            state.carried[index].cost
        )),
        _ => None,
    };
    draw_hub(surface, state.hub_center(), prompt.as_deref());

    let report = update_projectiles(&mut state.projectiles, &state.field, &mut state.radars);
    for index in &report.radar_hits {
        log::debug!("Radar {} hit", index);
    }
    for index in &report.radars_disabled {
        log::info!("Radar {} disabled", index);
    }
    draw_projectiles(surface, &state.projectiles);

    hud.update_health_bar(&state.hud());

    if !state.is_terminal() {
        try_spawn_key(&state.field, &mut state.keys, &mut state.rng);
    }

    draw_base_station(surface, state.base_station);
    draw_banner(surface, state.phase);

    state.time_ticks += 1;
}
