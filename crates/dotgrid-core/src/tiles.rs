//! Row-major tile layout for item galleries.
//!
//! Despite the shared vocabulary this is not the lattice grid from the rest
//! of the crate: it positions equal-sized preview tiles (template galleries,
//! sticker sheets) in rows and columns with a fixed gutter.

use kurbo::{Point, Rect, Size};

/// Lay out `item_count` tiles of `tile` size in `columns` columns.
///
/// Tiles are placed row-major starting at `origin`, with `spacing` pixels of
/// gutter between adjacent tiles on both axes. Precondition: `columns >= 1`.
pub fn tile_layout(
    item_count: usize,
    columns: usize,
    spacing: f64,
    tile: Size,
    origin: Point,
) -> Vec<Rect> {
    debug_assert!(columns >= 1, "tile layout needs at least one column");
    (0..item_count)
        .map(|index| {
            let col = index % columns;
            let row = index / columns;
            let x = origin.x + col as f64 * (tile.width + spacing);
            let y = origin.y + row as f64 * (tile.height + spacing);
            Rect::new(x, y, x + tile.width, y + tile.height)
        })
        .collect()
}
