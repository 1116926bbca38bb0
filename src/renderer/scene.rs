//! Scene drawing
//!
//! One function per visual layer; the frame scheduler decides the order.

use glam::Vec2;

use super::shapes::{diamond, hexagon, triangle};
use super::{Surface, palette};
use crate::consts::*;
use crate::settings::DisplayOptions;
use crate::sim::field::{Layout, ObstacleField};
use crate::sim::geometry::Rect;
use crate::sim::projectile::Projectile;
use crate::sim::radar::{Radar, sweep_reach};
use crate::sim::state::{GamePhase, Key, Player, Shard};

/// Cell borders, floors and obstacles
pub fn draw_field(surface: &mut impl Surface, field: &ObstacleField) {
    let layout = field.layout();
    for (row, col) in layout.cells() {
        let cell = layout.cell_rect(row, col);
        let border = Rect::new(cell.x - 1.0, cell.y - 1.0, cell.w + 2.0, cell.h + 2.0);
        surface.fill_rect(border, palette::CELL_BORDER);
        surface.fill_rect(cell, palette::CELL_FLOOR);
    }
    for obstacle in field.world_obstacles() {
        surface.fill_rect(obstacle, palette::OBSTACLE);
    }
}

/// Sweep wedges and emitters of every active radar
pub fn draw_radars(
    surface: &mut impl Surface,
    radars: &[Radar],
    layout: &Layout,
    display: &DisplayOptions,
) {
    let reach = sweep_reach(layout);
    for ((row, col), radar) in layout.cells().zip(radars) {
        if !radar.is_active() {
            continue;
        }
        let center = layout.cell_center(row, col);
        let sector = radar.sector();
        surface.fill_wedge(
            center,
            reach,
            sector.start,
            sector.start + sector.width,
            palette::RADAR_SWEEP,
        );
        if display.sweep_outlines {
            surface.stroke_circle(center, reach, palette::RADAR_OUTLINE, 1.0);
        }
        let core = if radar.hit_points == RADAR_HIT_POINTS {
            palette::RADAR_CORE
        } else {
            palette::RADAR_CORE_DAMAGED
        };
        surface.fill_circle(center, RADAR_CORE_RADIUS, core);
    }
}

pub fn draw_player(surface: &mut impl Surface, player: &Player) {
    surface.fill_circle(player.pos, player.radius, palette::PLAYER);
}

/// Shards (diamonds, optionally labelled with their key cost) and keys
pub fn draw_collectibles(
    surface: &mut impl Surface,
    shards: &[Shard],
    keys: &[Key],
    display: &DisplayOptions,
) {
    for shard in shards {
        surface.fill_polygon(&diamond(shard.pos, COLLECTIBLE_RADIUS * 1.5), palette::SHARD);
        if display.shard_costs {
            surface.fill_text(
                &shard.cost.to_string(),
                shard.pos,
                COLLECTIBLE_RADIUS * 1.5,
                palette::SHARD_TEXT,
            );
        }
    }
    for key in keys {
        surface.fill_circle(key.pos, COLLECTIBLE_RADIUS, palette::KEY);
    }
}

pub fn draw_projectiles(surface: &mut impl Surface, projectiles: &[Projectile]) {
    for p in projectiles {
        surface.fill_circle(p.pos, p.radius, palette::projectile(p.color));
    }
}

/// The hub, with an optional prompt underneath
pub fn draw_hub(surface: &mut impl Surface, center: Vec2, prompt: Option<&str>) {
    surface.fill_polygon(&hexagon(center, HUB_RADIUS), palette::HUB);
    surface.stroke_circle(center, HUB_RADIUS + HUB_REACH, palette::HUB_RING, 1.0);
    if let Some(text) = prompt {
        surface.fill_text(
            text,
            center + Vec2::new(0.0, HUB_RADIUS + HUB_REACH + 14.0),
            14.0,
            palette::PROMPT,
        );
    }
}

pub fn draw_base_station(surface: &mut impl Surface, pos: Vec2) {
    surface.fill_polygon(&triangle(pos, PLAYER_RADIUS * 1.2), palette::BASE_STATION);
}

/// End-of-game overlay; draws nothing while playing
pub fn draw_banner(surface: &mut impl Surface, phase: GamePhase) {
    let (text, color) = match phase {
        GamePhase::Playing => return,
        GamePhase::Won => ("SYSTEM RESTORED", palette::BANNER_WON),
        GamePhase::Lost => ("SYSTEM FAILURE", palette::BANNER_LOST),
    };
    let (w, h) = surface.size();
    surface.fill_rect(Rect::new(0.0, 0.0, w, h), palette::BANNER_SHADE);
    surface.fill_text(text, Vec2::new(w / 2.0, h / 2.0), 48.0, color);
}
