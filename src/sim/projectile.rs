//! Bouncing projectiles
//!
//! Projectiles travel a fixed distance per tick, reflect off obstacles with a
//! little speed loss, and expire after a per-projectile bounce budget.

use glam::Vec2;
use rand::Rng;

use super::field::ObstacleField;
use super::geometry::Rect;
use super::radar::Radar;
use crate::consts::*;

/// Result of advancing a projectile by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No collision, position committed
    Moved,
    /// Hit an obstacle and reflected; position unchanged this tick
    Bounced,
    /// Hit an obstacle with its bounce budget spent; caller removes it
    Expired,
}

/// A projectile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Palette index for rendering
    pub color: u8,
    pub bounces: u32,
    pub max_bounces: u32,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, color: u8, max_bounces: u32) -> Self {
        Self {
            pos,
            vel,
            radius: PROJECTILE_RADIUS,
            color,
            bounces: 0,
            max_bounces,
        }
    }

    /// Launch from `origin` toward `target` with a random color and bounce budget.
    ///
    /// Returns None when the target coincides with the origin, since there is
    /// no direction to fire in.
    pub fn aimed(origin: Vec2, target: Vec2, rng: &mut impl Rng) -> Option<Self> {
        let offset = target - origin;
        let dist = offset.length();
        if dist == 0.0 {
            return None;
        }
        let vel = offset / dist * PROJECTILE_SPEED;
        let color = rng.random_range(0..PROJECTILE_COLORS);
        let max_bounces = rng.random_range(PROJECTILE_MIN_BOUNCES..=PROJECTILE_MAX_BOUNCES);
        Some(Self::new(origin, vel, color, max_bounces))
    }

    /// Advance one tick against the obstacle field.
    ///
    /// On collision the bounce counter goes up once. Each velocity axis flips
    /// at most once, when the pre-move box is already clear of an overlapped
    /// obstacle along that axis, so a corner hit flips both.
    pub fn step(&mut self, field: &ObstacleField) -> StepOutcome {
        let next = self.pos + self.vel;
        let next_box = Rect::around(next, self.radius);
        let current_box = Rect::around(self.pos, self.radius);

        let mut collided = false;
        let mut flip_x = false;
        let mut flip_y = false;
        for obstacle in field.world_obstacles() {
            if next_box.overlaps(&obstacle) {
                collided = true;
                flip_x |= current_box.horizontally_disjoint(&obstacle);
                flip_y |= current_box.vertically_disjoint(&obstacle);
            }
        }

        if !collided {
            self.pos = next;
            return StepOutcome::Moved;
        }

        self.bounces += 1;
        if self.bounces >= self.max_bounces {
            return StepOutcome::Expired;
        }

        if flip_x {
            self.vel.x = -self.vel.x * PROJECTILE_SPEED_LOSS;
        }
        if flip_y {
            self.vel.y = -self.vel.y * PROJECTILE_SPEED_LOSS;
        }
        // Keep moving so it can't settle inside a pocket
        self.vel.x = floor_speed(self.vel.x);
        self.vel.y = floor_speed(self.vel.y);

        StepOutcome::Bounced
    }

    /// More than one radius past any canvas edge
    pub fn is_out_of_bounds(&self, bounds: &Rect) -> bool {
        self.pos.x < bounds.x - self.radius
            || self.pos.x > bounds.right() + self.radius
            || self.pos.y < bounds.y - self.radius
            || self.pos.y > bounds.bottom() + self.radius
    }

    /// Touching a radar emitter at `center`
    pub fn strikes(&self, center: Vec2) -> bool {
        self.pos.distance(center) <= RADAR_CORE_RADIUS + self.radius
    }
}

/// Sign-preserving minimum magnitude (zero counts as positive)
#[inline]
fn floor_speed(v: f32) -> f32 {
    if v.abs() < PROJECTILE_MIN_AXIS_SPEED {
        if v < 0.0 {
            -PROJECTILE_MIN_AXIS_SPEED
        } else {
            PROJECTILE_MIN_AXIS_SPEED
        }
    } else {
        v
    }
}

/// What happened to the projectile population during one physics pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicsReport {
    pub expired: usize,
    pub out_of_bounds: usize,
    /// Radar indices struck this pass (one entry per hit)
    pub radar_hits: Vec<usize>,
    /// Radar indices disabled this pass
    pub radars_disabled: Vec<usize>,
}

/// Step every projectile, prune the removed ones and apply radar hits.
///
/// A projectile that strikes an active radar costs it one hit point and is
/// removed immediately; it can hit at most one radar.
pub fn update_projectiles(
    projectiles: &mut Vec<Projectile>,
    field: &ObstacleField,
    radars: &mut [Radar],
) -> PhysicsReport {
    let layout = *field.layout();
    let bounds = layout.bounds();
    let mut report = PhysicsReport::default();

    projectiles.retain_mut(|p| {
        if p.step(field) == StepOutcome::Expired {
            report.expired += 1;
            return false;
        }
        if p.is_out_of_bounds(&bounds) {
            report.out_of_bounds += 1;
            return false;
        }

        let struck = layout
            .cells()
            .zip(radars.iter())
            .position(|((row, col), radar)| {
                radar.is_active() && p.strikes(layout.cell_center(row, col))
            });
        if let Some(index) = struck {
            report.radar_hits.push(index);
            if radars[index].take_hit() {
                report.radars_disabled.push(index);
            }
            return false;
        }
        true
    });

    report
}
