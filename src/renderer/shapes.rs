//! Point generation for polygon primitives

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Regular polygon with `sides` vertices, first vertex at angle `rotation`
pub fn regular_polygon(center: Vec2, radius: f32, sides: usize, rotation: f32) -> Vec<Vec2> {
    let sides = sides.max(3);
    (0..sides)
        .map(|i| {
            let theta = rotation + TAU * i as f32 / sides as f32;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// Diamond (square rotated 45°), used for shards
pub fn diamond(center: Vec2, half: f32) -> Vec<Vec2> {
    vec![
        center + Vec2::new(0.0, -half),
        center + Vec2::new(half, 0.0),
        center + Vec2::new(0.0, half),
        center + Vec2::new(-half, 0.0),
    ]
}

/// Upward-pointing triangle, used for the base station marker
pub fn triangle(center: Vec2, radius: f32) -> Vec<Vec2> {
    regular_polygon(center, radius, 3, -PI / 2.0)
}

/// Hexagon, used for the hub
pub fn hexagon(center: Vec2, radius: f32) -> Vec<Vec2> {
    regular_polygon(center, radius, 6, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_polygon_on_circle() {
        let c = Vec2::new(10.0, 20.0);
        let points = regular_polygon(c, 5.0, 6, 0.3);
        assert_eq!(points.len(), 6);
        for p in points {
            assert!((p.distance(c) - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_degenerate_sides_clamped() {
        assert_eq!(regular_polygon(Vec2::ZERO, 1.0, 1, 0.0).len(), 3);
    }

    #[test]
    fn test_triangle_points_up() {
        let points = triangle(Vec2::ZERO, 10.0);
        // Screen y grows downward: the apex has the smallest y
        assert!((points[0] - Vec2::new(0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn test_diamond_extent() {
        let points = diamond(Vec2::new(5.0, 5.0), 2.0);
        assert_eq!(points[0], Vec2::new(5.0, 3.0));
        assert_eq!(points[1], Vec2::new(7.0, 5.0));
    }
}
