//! Rotating radar sweeps
//!
//! Every cell carries one radar at its center. The radar illuminates an
//! angular sector that rotates a little each tick; a player caught inside the
//! sector (and within reach) is detected.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::field::Layout;
use crate::consts::*;
use crate::normalize_angle;

/// An angular sector [start, start + width) in [0, 2π) space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    /// Start angle, normalized to [0, 2π)
    pub start: f32,
    /// Angular width (radians, 0..=2π)
    pub width: f32,
}

impl Sector {
    pub fn new(start: f32, width: f32) -> Self {
        Self {
            start: normalize_angle(start),
            width: width.clamp(0.0, TAU),
        }
    }

    /// Check if an angle is within the sector (handles the 0/2π seam)
    pub fn contains_angle(&self, theta: f32) -> bool {
        let theta = normalize_angle(theta);
        let end = self.start + self.width;

        if end <= TAU {
            theta >= self.start && theta < end
        } else {
            // Wraparound case (e.g. start=350°, end=40°)
            theta >= self.start || theta < end - TAU
        }
    }
}

/// Bearing of `to` as seen from `from`, in [0, 2π)
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    normalize_angle(d.y.atan2(d.x))
}

/// A cell's radar
#[derive(Debug, Clone, PartialEq)]
pub struct Radar {
    /// Sweep angle, advanced every tick (radians, [0, 2π))
    pub angle: f32,
    /// Sweep direction multiplier (always +1 today)
    pub direction: f32,
    /// Constant per-radar phase so sweeps don't march in lockstep
    pub phase: f32,
    pub hit_points: u8,
}

impl Radar {
    pub fn new(phase: f32) -> Self {
        Self {
            angle: 0.0,
            direction: 1.0,
            phase: normalize_angle(phase),
            hit_points: RADAR_HIT_POINTS,
        }
    }

    pub fn generate(rng: &mut impl Rng) -> Self {
        Self::new(rng.random_range(0.0..TAU))
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.hit_points > 0
    }

    /// Rotate the sweep by one tick
    pub fn advance(&mut self) {
        if self.is_active() {
            self.angle = normalize_angle(self.angle + self.direction * RADAR_SWEEP_STEP);
        }
    }

    /// The currently illuminated sector
    pub fn sector(&self) -> Sector {
        Sector::new(self.angle + self.phase, RADAR_SECTOR_WIDTH)
    }

    /// Take one projectile hit; returns true if this disabled the radar
    pub fn take_hit(&mut self) -> bool {
        self.hit_points = self.hit_points.saturating_sub(1);
        self.hit_points == 0
    }

    /// Whether a disc at `pos` is caught by this radar's sweep
    pub fn detects(&self, center: Vec2, reach: f32, pos: Vec2, radius: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        // Cheap reject before any trig
        if center.distance(pos) - radius > reach {
            return false;
        }
        self.sector().contains_angle(bearing(center, pos))
    }
}

/// Sweep reach for a layout
pub fn sweep_reach(layout: &Layout) -> f32 {
    layout.cell_w.min(layout.cell_h) * RADAR_REACH_FRACTION
}

/// One radar per cell, row-major
pub fn generate_radars(layout: &Layout, rng: &mut impl Rng) -> Vec<Radar> {
    (0..layout.cell_count()).map(|_| Radar::generate(rng)).collect()
}

/// Index of the first radar (row-major) whose sweep catches the disc
pub fn first_detection(radars: &[Radar], layout: &Layout, pos: Vec2, radius: f32) -> Option<usize> {
    let reach = sweep_reach(layout);
    layout
        .cells()
        .zip(radars.iter())
        .position(|((row, col), radar)| radar.detects(layout.cell_center(row, col), reach, pos, radius))
}
