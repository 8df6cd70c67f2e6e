//! Page-level grid fitting and grid/page coordinate mapping.

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// US Letter page size at 96 dpi.
pub const LETTER: Size = Size::new(816.0, 1056.0);

/// Default page margin in pixels (two grid cells).
pub const DEFAULT_MARGIN: f64 = 38.0;

/// How a uniform grid fits inside a page, centered within the margin box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGrid {
    /// Width covered by the grid, an exact multiple of the spacing.
    pub grid_width: f64,
    /// Height covered by the grid, an exact multiple of the spacing.
    pub grid_height: f64,
    /// Left edge of the grid: margin plus half the leftover width.
    pub offset_x: f64,
    /// Top edge of the grid: margin plus half the leftover height.
    pub offset_y: f64,
    /// Number of whole columns that fit.
    pub columns: usize,
    /// Number of whole rows that fit.
    pub rows: usize,
}

impl PageGrid {
    /// The grid origin as an offset from the page's top-left corner.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Check whether any cells fit on the page.
    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

/// Fit a grid of the given spacing inside a page with uniform margins.
///
/// The grid is never stretched: whole columns and rows are fitted into the
/// usable area (page minus `margin` on every side) and the leftover space is
/// split evenly so the grid sits centered. A spacing wider than the usable
/// area yields a valid zero-column layout rather than an error.
/// Precondition: `spacing > 0`.
pub fn calculate_page_grid(page: Size, spacing: f64, margin: f64) -> PageGrid {
    debug_assert!(spacing > 0.0, "grid spacing must be positive");
    let usable_width = (page.width - 2.0 * margin).max(0.0);
    let usable_height = (page.height - 2.0 * margin).max(0.0);
    let columns = (usable_width / spacing).floor() as usize;
    let rows = (usable_height / spacing).floor() as usize;
    if columns == 0 || rows == 0 {
        log::debug!(
            "empty page grid: page {}x{}, spacing {spacing}, margin {margin}",
            page.width,
            page.height
        );
    }
    let grid_width = columns as f64 * spacing;
    let grid_height = rows as f64 * spacing;
    PageGrid {
        grid_width,
        grid_height,
        offset_x: margin + (usable_width - grid_width) / 2.0,
        offset_y: margin + (usable_height - grid_height) / 2.0,
        columns,
        rows,
    }
}

/// Map a grid index to its pixel position on the page.
///
/// Inverse-consistent with [`calculate_page_grid`]: passing that layout's
/// origin as `offset` places index `(0, 0)` at the grid's top-left corner.
pub fn grid_to_page(grid_x: i64, grid_y: i64, spacing: f64, offset: Vec2) -> Point {
    Point::new(
        offset.x + grid_x as f64 * spacing,
        offset.y + grid_y as f64 * spacing,
    )
}
