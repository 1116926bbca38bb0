//! Grid layout and procedural obstacle field
//!
//! The canvas is split into a fixed rows x cols grid of cells separated by a
//! margin. Each cell owns a small cluster of obstacle rectangles stored in
//! cell-local coordinates.

use glam::Vec2;
use rand::Rng;

use super::geometry::Rect;
use crate::consts::*;

/// Grid geometry derived from the canvas size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub margin: f32,
    pub cell_w: f32,
    pub cell_h: f32,
    /// Canvas size
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, margin: f32, width: f32, height: f32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cell_w = ((width - (cols as f32 + 1.0) * margin) / cols as f32).floor().max(0.0);
        let cell_h = ((height - (rows as f32 + 1.0) * margin) / rows as f32).floor().max(0.0);
        Self {
            rows,
            cols,
            margin,
            cell_w,
            cell_h,
            width,
            height,
        }
    }

    /// Default grid for a canvas of the given size
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self::new(GRID_ROWS, GRID_COLS, CELL_MARGIN, width, height)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat index for (row, col), or None when out of range
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// All (row, col) pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
    }

    /// Screen-space top-left corner of a cell
    #[inline]
    pub fn cell_origin(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            col as f32 * (self.cell_w + self.margin) + self.margin,
            row as f32 * (self.cell_h + self.margin) + self.margin,
        )
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let origin = self.cell_origin(row, col);
        Rect::new(origin.x, origin.y, self.cell_w, self.cell_h)
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        self.cell_rect(row, col).center()
    }

    /// Whole canvas
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Uniform sample in [0, max) snapped down to whole pixels; 0 when the range is empty
fn sample_below(rng: &mut impl Rng, max: f32) -> f32 {
    if max <= 0.0 {
        0.0
    } else {
        rng.random_range(0.0..max).floor()
    }
}

/// Generate one cell's obstacle cluster in cell-local coordinates.
///
/// Each obstacle is at most half the cell in either dimension and is placed so
/// it fits entirely inside the cell. Obstacles may overlap each other.
pub fn generate_cell(rng: &mut impl Rng, cell_w: f32, cell_h: f32) -> Vec<Rect> {
    let count = rng.random_range(MIN_OBSTACLES_PER_CELL..=MAX_OBSTACLES_PER_CELL);
    (0..count)
        .map(|_| {
            let w = sample_below(rng, cell_w / 2.0);
            let h = sample_below(rng, cell_h / 2.0);
            let x = sample_below(rng, cell_w - w);
            let y = sample_below(rng, cell_h - h);
            Rect::new(x, y, w, h)
        })
        .collect()
}

/// The full grid of obstacle clusters
#[derive(Debug, Clone)]
pub struct ObstacleField {
    layout: Layout,
    /// Row-major, one cluster per cell, cell-local coordinates
    cells: Vec<Vec<Rect>>,
    /// Identity of this build; every regeneration gets a new number
    generation: u64,
}

impl ObstacleField {
    /// Build a complete field for `layout`
    pub fn generate(layout: Layout, rng: &mut impl Rng, generation: u64) -> Self {
        let cells = layout
            .cells()
            .map(|_| generate_cell(rng, layout.cell_w, layout.cell_h))
            .collect();
        Self {
            layout,
            cells,
            generation,
        }
    }

    /// A field with explicit cell-local obstacles (row-major), mainly for tests
    pub fn from_cells(layout: Layout, mut cells: Vec<Vec<Rect>>, generation: u64) -> Self {
        cells.resize(layout.cell_count(), Vec::new());
        Self {
            layout,
            cells,
            generation,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cell-local obstacles of one cell
    pub fn obstacles(&self, row: usize, col: usize) -> Option<&[Rect]> {
        self.layout
            .index(row, col)
            .and_then(|i| self.cells.get(i))
            .map(Vec::as_slice)
    }

    /// Every obstacle translated into world space
    pub fn world_obstacles(&self) -> impl Iterator<Item = Rect> + '_ {
        self.layout.cells().zip(self.cells.iter()).flat_map(move |((row, col), rects)| {
            let origin = self.layout.cell_origin(row, col);
            rects.iter().map(move |r| r.translated(origin))
        })
    }

    /// True if `rect` overlaps any obstacle
    pub fn blocks(&self, rect: &Rect) -> bool {
        self.world_obstacles().any(|obstacle| obstacle.overlaps(rect))
    }
}
