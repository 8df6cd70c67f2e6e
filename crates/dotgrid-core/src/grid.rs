//! Lattice geometry: pixel/grid conversion and grid point enumeration.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Default grid spacing in pixels (5 mm at 96 dpi, the classic dot journal pitch).
pub const DEFAULT_SPACING: f64 = 19.0;

/// Tiling geometry of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    /// Dots at every lattice intersection.
    #[default]
    Dots,
    /// Horizontal ruled lines.
    Lines,
    /// Full square grid lines.
    Squares,
    /// Offset rows at a sqrt(3)/2 pitch (30/60 drafting paper).
    Isometric,
    /// Offset rows at a hex vertical pitch (pointy-top hexagons).
    Hexagonal,
}

impl GridKind {
    /// Cycle to the next grid kind.
    pub fn next(self) -> Self {
        match self {
            GridKind::Dots => GridKind::Lines,
            GridKind::Lines => GridKind::Squares,
            GridKind::Squares => GridKind::Isometric,
            GridKind::Isometric => GridKind::Hexagonal,
            GridKind::Hexagonal => GridKind::Dots,
        }
    }

    /// Get display name for this grid kind.
    pub fn name(self) -> &'static str {
        match self {
            GridKind::Dots => "Dots",
            GridKind::Lines => "Lines",
            GridKind::Squares => "Grid",
            GridKind::Isometric => "Isometric",
            GridKind::Hexagonal => "Hexagonal",
        }
    }
}

/// A point lying exactly on a lattice intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Pixel X coordinate.
    pub x: f64,
    /// Pixel Y coordinate.
    pub y: f64,
    /// Lattice column index.
    pub grid_x: i64,
    /// Lattice row index.
    pub grid_y: i64,
}

impl GridPoint {
    /// The pixel-space location as a kurbo point.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Quantize a pixel coordinate to the nearest lattice intersection.
///
/// Rounds half away from zero on each axis, so a point midway between two
/// lattice lines moves away from the origin. Precondition: `spacing > 0`.
pub fn pixel_to_grid(x: f64, y: f64, spacing: f64) -> GridPoint {
    debug_assert!(spacing > 0.0, "grid spacing must be positive");
    let grid_x = (x / spacing).round() as i64;
    let grid_y = (y / spacing).round() as i64;
    GridPoint {
        x: grid_x as f64 * spacing,
        y: grid_y as f64 * spacing,
        grid_x,
        grid_y,
    }
}

/// Enumerate the lattice points covering `bounds` for the given tiling.
///
/// Rectangular kinds (`Dots`, `Lines`, `Squares`) generate from the floored
/// lower multiple of `spacing` to the ceiled upper multiple on each axis, so
/// the outermost rows/columns can sit just outside `bounds` (the renderer
/// clips them). The offset tilings (`Isometric`, `Hexagonal`) are instead
/// post-filtered to the closed bounds.
///
/// For the offset tilings `grid_x`/`grid_y` are column/row indices within the
/// tiling; the `x = grid_x * spacing` relation holds only for the rectangular
/// kinds, where odd rows carry no horizontal shift.
pub fn grid_points_in_bounds(bounds: Rect, spacing: f64, kind: GridKind) -> Vec<GridPoint> {
    debug_assert!(spacing > 0.0, "grid spacing must be positive");
    match kind {
        GridKind::Dots | GridKind::Lines | GridKind::Squares => rect_lattice(bounds, spacing),
        GridKind::Isometric => {
            let row_pitch = spacing * 3.0_f64.sqrt() / 2.0;
            offset_lattice(bounds, spacing, row_pitch)
        }
        GridKind::Hexagonal => {
            // Pointy-top hexagons of circumradius spacing/2: height spacing*sqrt(3),
            // rows overlap at 3/4 of that height.
            let row_pitch = spacing * 3.0_f64.sqrt() * 0.75;
            offset_lattice(bounds, spacing, row_pitch)
        }
    }
}

fn rect_lattice(bounds: Rect, spacing: f64) -> Vec<GridPoint> {
    let start_x = (bounds.x0 / spacing).floor() as i64;
    let end_x = (bounds.x1 / spacing).ceil() as i64;
    let start_y = (bounds.y0 / spacing).floor() as i64;
    let end_y = (bounds.y1 / spacing).ceil() as i64;

    let mut points = Vec::new();
    for grid_y in start_y..=end_y {
        for grid_x in start_x..=end_x {
            points.push(GridPoint {
                x: grid_x as f64 * spacing,
                y: grid_y as f64 * spacing,
                grid_x,
                grid_y,
            });
        }
    }
    points
}

/// Brick-offset lattice: rows at `row_pitch`, odd rows shifted by half a column.
fn offset_lattice(bounds: Rect, spacing: f64, row_pitch: f64) -> Vec<GridPoint> {
    let start_row = (bounds.y0 / row_pitch).floor() as i64;
    let end_row = (bounds.y1 / row_pitch).ceil() as i64;

    let mut points = Vec::new();
    for grid_y in start_row..=end_row {
        let y = grid_y as f64 * row_pitch;
        let shift = if grid_y.rem_euclid(2) == 1 {
            spacing / 2.0
        } else {
            0.0
        };
        let start_col = ((bounds.x0 - shift) / spacing).floor() as i64;
        let end_col = ((bounds.x1 - shift) / spacing).ceil() as i64;
        for grid_x in start_col..=end_col {
            let x = grid_x as f64 * spacing + shift;
            if x >= bounds.x0 && x <= bounds.x1 && y >= bounds.y0 && y <= bounds.y1 {
                points.push(GridPoint { x, y, grid_x, grid_y });
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_grid_rounds_to_nearest() {
        let p = pixel_to_grid(23.0, 47.0, 20.0);
        assert_eq!(p.grid_x, 1);
        assert_eq!(p.grid_y, 2);
        assert_eq!(p.point(), Point::new(20.0, 40.0));
    }

    #[test]
    fn test_pixel_to_grid_idempotent() {
        let p = pixel_to_grid(31.0, 51.0, 20.0);
        let again = pixel_to_grid(p.x, p.y, 20.0);
        assert_eq!(p, again);
    }

    #[test]
    fn test_pixel_to_grid_quantization_bound() {
        let spacing = 19.0;
        for &(x, y) in &[(0.3, 0.7), (9.4, 9.6), (123.45, -67.89), (-3.2, 818.0)] {
            let p = pixel_to_grid(x, y, spacing);
            assert!((p.x - x).abs() <= spacing / 2.0 + 1e-9);
            assert!((p.y - y).abs() <= spacing / 2.0 + 1e-9);
        }
    }

    #[test]
    fn test_pixel_to_grid_half_away_from_zero() {
        // Midway points move away from the origin on both sides.
        let p = pixel_to_grid(10.0, -10.0, 20.0);
        assert_eq!(p.point(), Point::new(20.0, -20.0));
        assert_eq!(p.grid_x, 1);
        assert_eq!(p.grid_y, -1);
    }

    #[test]
    fn test_rect_lattice_covers_bounds_inclusive() {
        let points = grid_points_in_bounds(Rect::new(0.0, 0.0, 40.0, 40.0), 20.0, GridKind::Dots);
        // Columns and rows 0..=2 on both axes.
        assert_eq!(points.len(), 9);
        assert_eq!(points[0].point(), Point::new(0.0, 0.0));
        assert_eq!(points[8].point(), Point::new(40.0, 40.0));
    }

    #[test]
    fn test_rect_lattice_extends_past_unaligned_bounds() {
        let points = grid_points_in_bounds(Rect::new(5.0, 5.0, 35.0, 35.0), 20.0, GridKind::Squares);
        // Floor/ceil extension keeps the outer ring: x,y in {0, 20, 40}.
        assert_eq!(points.len(), 9);
        assert!(points.iter().any(|p| p.point() == Point::new(0.0, 0.0)));
        assert!(points.iter().any(|p| p.point() == Point::new(40.0, 40.0)));
    }

    #[test]
    fn test_isometric_rows_and_offset() {
        let spacing = 20.0;
        let pitch = spacing * 3.0_f64.sqrt() / 2.0;
        let points =
            grid_points_in_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), spacing, GridKind::Isometric);
        assert!(!points.is_empty());
        for p in &points {
            // Every point sits on a row at a pitch multiple, inside the bounds.
            assert!((p.y - p.grid_y as f64 * pitch).abs() < 1e-9);
            assert!(p.x >= 0.0 && p.x <= 100.0 && p.y >= 0.0 && p.y <= 100.0);
            let expected_shift = if p.grid_y % 2 == 1 { spacing / 2.0 } else { 0.0 };
            assert!((p.x - (p.grid_x as f64 * spacing + expected_shift)).abs() < 1e-9);
        }
        // Row 1 is shifted by half a column.
        let row1 = points.iter().find(|p| p.grid_y == 1).unwrap();
        assert!((row1.x.rem_euclid(spacing) - spacing / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_hexagonal_row_pitch() {
        let spacing = 20.0;
        let pitch = spacing * 3.0_f64.sqrt() * 0.75;
        let points =
            grid_points_in_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), spacing, GridKind::Hexagonal);
        assert!(points.iter().any(|p| p.grid_y == 1));
        for p in &points {
            assert!((p.y - p.grid_y as f64 * pitch).abs() < 1e-9);
            assert!(p.x >= 0.0 && p.x <= 100.0 && p.y >= 0.0 && p.y <= 100.0);
        }
    }

    #[test]
    fn test_offset_lattice_filters_to_bounds() {
        // Narrow band: only row 0 fits vertically.
        let points =
            grid_points_in_bounds(Rect::new(0.0, 0.0, 100.0, 5.0), 20.0, GridKind::Isometric);
        assert!(points.iter().all(|p| p.grid_y == 0));
        assert_eq!(points.len(), 6); // x = 0, 20, .., 100
    }

    #[test]
    fn test_grid_kind_cycle() {
        assert_eq!(GridKind::Dots.next(), GridKind::Lines);
        assert_eq!(GridKind::Lines.next(), GridKind::Squares);
        assert_eq!(GridKind::Squares.next(), GridKind::Isometric);
        assert_eq!(GridKind::Isometric.next(), GridKind::Hexagonal);
        assert_eq!(GridKind::Hexagonal.next(), GridKind::Dots);
    }
}
