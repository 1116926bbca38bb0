//! 2D rendering
//!
//! The simulation draws through the `Surface` trait, a small subset of the
//! canvas 2D API. The browser implements it on top of a canvas context; tests
//! and headless runs use `NullSurface` or a recording surface.

pub mod scene;
pub mod shapes;

use glam::Vec2;

use crate::sim::geometry::Rect;

/// A CSS color string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

/// Game palette
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color("#05060a");
    pub const CELL_BORDER: Color = Color("#ff69b4");
    pub const CELL_FLOOR: Color = Color("black");
    pub const OBSTACLE: Color = Color("lime");
    pub const PLAYER: Color = Color("white");
    pub const RADAR_SWEEP: Color = Color("rgba(255, 40, 40, 0.25)");
    pub const RADAR_OUTLINE: Color = Color("rgba(255, 40, 40, 0.35)");
    pub const RADAR_CORE: Color = Color("#ff2828");
    pub const RADAR_CORE_DAMAGED: Color = Color("#ff9f43");
    pub const KEY: Color = Color("#f1c40f");
    pub const SHARD: Color = Color("#00e5ff");
    pub const SHARD_TEXT: Color = Color("black");
    pub const HUB: Color = Color("#9b59b6");
    pub const HUB_RING: Color = Color("#e0b3ff");
    pub const PROMPT: Color = Color("white");
    pub const BASE_STATION: Color = Color("#3498db");
    pub const BANNER_SHADE: Color = Color("rgba(0, 0, 0, 0.6)");
    pub const BANNER_WON: Color = Color("#2ecc71");
    pub const BANNER_LOST: Color = Color("#e74c3c");

    /// Projectile colors, indexed by `Projectile::color`
    pub const PROJECTILES: [Color; 7] = [
        Color("#e74c3c"),
        Color("#3498db"),
        Color("#f1c40f"),
        Color("#2ecc71"),
        Color("#9b59b6"),
        Color("#e67e22"),
        Color("#1abc9c"),
    ];

    pub fn projectile(index: u8) -> Color {
        PROJECTILES[index as usize % PROJECTILES.len()]
    }
}

/// The drawing operations the game needs from its host
pub trait Surface {
    /// Current drawable size in pixels
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);
    /// Filled pie slice from `start` to `end` (radians, clockwise on screen)
    fn fill_wedge(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    /// Text centered on `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// A surface that draws nothing (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface {
    pub width: f32,
    pub height: f32,
}

impl NullSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Surface for NullSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
    fn clear(&mut self) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _line_width: f32) {}
    fn fill_wedge(&mut self, _center: Vec2, _radius: f32, _start: f32, _end: f32, _color: Color) {}
    fn fill_polygon(&mut self, _points: &[Vec2], _color: Color) {}
    fn fill_text(&mut self, _text: &str, _pos: Vec2, _size: f32, _color: Color) {}
}

/// Surface that records every call, for asserting on draw order
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        FillRect(Rect, Color),
        FillCircle(Vec2, f32, Color),
        StrokeCircle(Vec2, f32, Color),
        FillWedge(Vec2, f32, f32, f32, Color),
        FillPolygon(Vec<Vec2>, Color),
        FillText(String, Vec2, Color),
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub width: f32,
        pub height: f32,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
            }
        }

        /// Index of the first call matching `pred`
        pub fn first(&self, pred: impl Fn(&DrawCall) -> bool) -> Option<usize> {
            self.calls.iter().position(pred)
        }

        pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::FillText(text, _, _) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }
        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(DrawCall::FillRect(rect, color));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.calls.push(DrawCall::FillCircle(center, radius, color));
        }
        fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, _line_width: f32) {
            self.calls.push(DrawCall::StrokeCircle(center, radius, color));
        }
        fn fill_wedge(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color) {
            self.calls
                .push(DrawCall::FillWedge(center, radius, start, end, color));
        }
        fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
            self.calls.push(DrawCall::FillPolygon(points.to_vec(), color));
        }
        fn fill_text(&mut self, text: &str, pos: Vec2, _size: f32, color: Color) {
            self.calls
                .push(DrawCall::FillText(text.to_string(), pos, color));
        }
    }
}
