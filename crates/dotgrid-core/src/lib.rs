//! Dotgrid Core Library
//!
//! Grid coordinate engine for a dot-grid journaling surface: pixel/grid
//! conversion, snapping, lattice enumeration for several tilings, alignment
//! guides between boxes, and page-level grid fitting.
//!
//! Everything here is pure geometry with no internal state; rendering and
//! input handling live in the consuming layers.

pub mod grid;
pub mod guides;
pub mod page;
pub mod settings;
pub mod snap;
pub mod tiles;

pub use grid::{GridKind, GridPoint, DEFAULT_SPACING, grid_points_in_bounds, pixel_to_grid};
pub use guides::{ALIGNMENT_THRESHOLD, AlignmentGuides, box_alignment_guides};
pub use page::{DEFAULT_MARGIN, LETTER, PageGrid, calculate_page_grid, grid_to_page};
pub use settings::{GridError, GridSettings};
pub use snap::{
    DEFAULT_SNAP_SENSITIVITY, LineSnap, align_box_to_grid, snap_line_to_grid, snap_to_grid,
};
pub use tiles::tile_layout;
