//! Movement and collision resolution against the obstacle field

use glam::Vec2;

use super::field::ObstacleField;
use super::geometry::Rect;

/// True iff a disc of `radius` at `pos` stays inside the canvas and its
/// bounding square touches no obstacle.
pub fn can_occupy(field: &ObstacleField, pos: Vec2, radius: f32) -> bool {
    let bounds = field.layout().bounds();
    if pos.x - radius < bounds.x
        || pos.y - radius < bounds.y
        || pos.x + radius > bounds.right()
        || pos.y + radius > bounds.bottom()
    {
        return false;
    }
    !field.blocks(&Rect::around(pos, radius))
}

/// Move by `delta`, resolving each axis on its own so a diagonal move into a
/// wall slides along it instead of stopping dead.
///
/// X is tried first with the old Y, then Y with the (possibly updated) X.
pub fn move_axis_separated(field: &ObstacleField, pos: Vec2, delta: Vec2, radius: f32) -> Vec2 {
    let mut resolved = pos;

    if delta.x != 0.0 {
        let candidate = Vec2::new(resolved.x + delta.x, resolved.y);
        if can_occupy(field, candidate, radius) {
            resolved = candidate;
        }
    }

    if delta.y != 0.0 {
        let candidate = Vec2::new(resolved.x, resolved.y + delta.y);
        if can_occupy(field, candidate, radius) {
            resolved = candidate;
        }
    }

    resolved
}

/// Find an occupiable point near `preferred`.
///
/// Scans Chebyshev rings of radius 1..=max_radius over integer offsets,
/// visiting only each ring's perimeter. Falls back to `preferred` (which may
/// be blocked) when nothing in range is free.
pub fn find_spawn_point(
    field: &ObstacleField,
    preferred: Vec2,
    radius: f32,
    max_radius: i32,
) -> Vec2 {
    if can_occupy(field, preferred, radius) {
        return preferred;
    }

    for r in 1..=max_radius {
        for dx in -r..=r {
            for dy in -r..=r {
                if dx.abs() != r && dy.abs() != r {
                    continue;
                }
                let candidate = preferred + Vec2::new(dx as f32, dy as f32);
                if can_occupy(field, candidate, radius) {
                    return candidate;
                }
            }
        }
    }

    log::warn!(
        "spawn search exhausted {} rings around ({:.0}, {:.0}); using preferred point",
        max_radius,
        preferred.x,
        preferred.y
    );
    preferred
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::field::Layout;
    use proptest::prelude::*;

    /// 800x600 canvas with one 40x40 obstacle at world (400, 300)
    fn single_block_field() -> (ObstacleField, Rect) {
        let layout = Layout::for_canvas(800.0, 600.0);
        let (row, col) = (1, 3);
        let origin = layout.cell_origin(row, col);
        let world = Rect::new(400.0, 300.0, 40.0, 40.0);
        let local = world.translated(-origin);
        let mut cells = vec![Vec::new(); layout.cell_count()];
        cells[layout.index(row, col).unwrap()] = vec![local];
        (ObstacleField::from_cells(layout, cells, 0), world)
    }

    fn empty_field() -> ObstacleField {
        let layout = Layout::for_canvas(800.0, 600.0);
        ObstacleField::from_cells(layout, Vec::new(), 0)
    }

    #[test]
    fn test_can_occupy_bounds() {
        let field = empty_field();
        assert!(can_occupy(&field, Vec2::new(10.0, 10.0), 10.0));
        assert!(!can_occupy(&field, Vec2::new(9.0, 100.0), 10.0));
        assert!(!can_occupy(&field, Vec2::new(100.0, 595.0), 10.0));
        assert!(can_occupy(&field, Vec2::new(790.0, 590.0), 10.0));
        assert!(!can_occupy(&field, Vec2::new(790.5, 300.0), 10.0));
    }

    #[test]
    fn test_can_occupy_obstacle() {
        let (field, block) = single_block_field();
        assert!(!can_occupy(&field, block.center(), 10.0));
        // Bounding square touches the left edge exactly
        assert!(!can_occupy(&field, Vec2::new(390.0, 320.0), 10.0));
        assert!(can_occupy(&field, Vec2::new(389.0, 320.0), 10.0));
    }

    #[test]
    fn test_slides_along_wall() {
        let (field, _) = single_block_field();
        // Left of the block, moving diagonally right+down into it
        let start = Vec2::new(386.0, 320.0);
        let end = move_axis_separated(&field, start, Vec2::new(4.0, 4.0), 10.0);
        assert_eq!(end, Vec2::new(386.0, 324.0));
    }

    #[test]
    fn test_blocked_both_axes_stays_put() {
        let field = empty_field();
        let corner = Vec2::new(10.0, 10.0);
        let end = move_axis_separated(&field, corner, Vec2::new(-4.0, -4.0), 10.0);
        assert_eq!(end, corner);
    }

    #[test]
    fn test_spawn_point_passthrough_when_free() {
        let field = empty_field();
        let p = Vec2::new(200.0, 200.0);
        assert_eq!(find_spawn_point(&field, p, 10.0, 100), p);
    }

    #[test]
    fn test_spawn_point_ring_search() {
        let (field, block) = single_block_field();
        let found = find_spawn_point(&field, block.center(), 10.0, 100);
        assert!(can_occupy(&field, found, 10.0));
        // Nearest free ring around a 40px block with a 10px disc is 31 away
        let ring = (found - block.center()).abs().max_element();
        assert_eq!(ring, 31.0);
        // First point in scan order on that ring: dx = -31, dy = -31
        assert_eq!(found, block.center() + Vec2::new(-31.0, -31.0));
    }

    #[test]
    fn test_spawn_point_fallback() {
        let (field, block) = single_block_field();
        let p = block.center();
        assert_eq!(find_spawn_point(&field, p, 10.0, 5), p);
    }

    fn arb_obstacles() -> impl Strategy<Value = Vec<Rect>> {
        prop::collection::vec(
            (0.0f32..780.0, 0.0f32..580.0, 1.0f32..60.0, 1.0f32..60.0)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h)),
            0..12,
        )
    }

    /// Put world-space rects into cell (0, 0) as cell-local rects
    fn field_with(world: &[Rect]) -> ObstacleField {
        let layout = Layout::for_canvas(800.0, 600.0);
        let origin = layout.cell_origin(0, 0);
        let local = world.iter().map(|r| r.translated(-origin)).collect();
        ObstacleField::from_cells(layout, vec![local], 0)
    }

    proptest! {
        #[test]
        fn can_occupy_matches_brute_force(
            obstacles in arb_obstacles(),
            x in -20.0f32..820.0,
            y in -20.0f32..620.0,
            radius in 1.0f32..20.0,
        ) {
            let field = field_with(&obstacles);
            let p = Vec2::new(x, y);
            let disc = Rect::around(p, radius);
            let in_bounds = x - radius >= 0.0 && y - radius >= 0.0
                && x + radius <= 800.0 && y + radius <= 600.0;
            // Translation round-trip is exact for these magnitudes only up to
            // float error, so compare against the field's own world rects.
            let hits = field.world_obstacles().any(|o| o.overlaps(&disc));
            prop_assert_eq!(can_occupy(&field, p, radius), in_bounds && !hits);
        }

        #[test]
        fn movement_never_enters_blocked_space(
            obstacles in arb_obstacles(),
            steps in prop::collection::vec((-4i32..=4, -4i32..=4), 1..40),
        ) {
            let field = field_with(&obstacles);
            let start = find_spawn_point(&field, Vec2::new(400.0, 300.0), 10.0, 100);
            prop_assume!(can_occupy(&field, start, 10.0));

            let mut pos = start;
            for (dx, dy) in steps {
                pos = move_axis_separated(&field, pos, Vec2::new(dx as f32, dy as f32), 10.0);
                prop_assert!(can_occupy(&field, pos, 10.0));
            }
        }
    }
}
