//! Snapping points, lines, and boxes to the lattice.

use kurbo::{Point, Rect};

use crate::grid::{GridPoint, pixel_to_grid};

/// Default snap radius in pixels.
pub const DEFAULT_SNAP_SENSITIVITY: f64 = 5.0;

/// Snap a point to the nearest lattice intersection.
///
/// Returns the intersection only when the Euclidean distance from the input
/// is at most `sensitivity`; otherwise `None` and the caller keeps the free
/// position.
pub fn snap_to_grid(x: f64, y: f64, spacing: f64, sensitivity: f64) -> Option<GridPoint> {
    let nearest = pixel_to_grid(x, y, spacing);
    let dx = x - nearest.x;
    let dy = y - nearest.y;
    if (dx * dx + dy * dy).sqrt() <= sensitivity {
        Some(nearest)
    } else {
        None
    }
}

/// Snap result for the two endpoints of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSnap {
    /// Snapped start point, if within range.
    pub start: Option<GridPoint>,
    /// Snapped end point, if within range.
    pub end: Option<GridPoint>,
}

impl LineSnap {
    /// Check if either endpoint snapped.
    pub fn is_snapped(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

/// Snap each endpoint of a line to the lattice independently.
///
/// One end can snap while the other stays free; no joint constraint (such as
/// axis alignment between the endpoints) is applied.
pub fn snap_line_to_grid(start: Point, end: Point, spacing: f64, sensitivity: f64) -> LineSnap {
    LineSnap {
        start: snap_to_grid(start.x, start.y, spacing, sensitivity),
        end: snap_to_grid(end.x, end.y, spacing, sensitivity),
    }
}

/// Snap a rectangle's corners to the lattice unconditionally.
///
/// The top-left and bottom-right corners quantize independently, so the
/// result can shrink or grow relative to the input. Corners that cross are
/// reordered: the returned rect never has negative width or height, though
/// both can collapse to zero when the corners land on the same lattice line.
pub fn align_box_to_grid(rect: Rect, spacing: f64) -> Rect {
    let top_left = pixel_to_grid(rect.x0, rect.y0, spacing);
    let bottom_right = pixel_to_grid(rect.x1, rect.y1, spacing);
    Rect::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y).abs()
}
