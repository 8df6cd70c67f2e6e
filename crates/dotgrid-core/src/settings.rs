//! Grid configuration carried by the journaling surface.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{self, DEFAULT_SPACING, GridKind, GridPoint};
use crate::page::{self, PageGrid};
use crate::snap::{self, DEFAULT_SNAP_SENSITIVITY};

/// Errors from validating grid configuration.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid spacing must be positive, got {0}")]
    NonPositiveSpacing(f64),
    #[error("snap sensitivity must be non-negative, got {0}")]
    NegativeSensitivity(f64),
}

/// Validated grid configuration.
///
/// An explicit handle that UI layers thread through calls instead of a
/// module-level singleton. Construction rejects unusable values, so the
/// geometry functions below never see a zero or negative spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Pixels between adjacent lattice lines or dots.
    pub spacing: f64,
    /// Snap radius in pixels.
    pub snap_sensitivity: f64,
    /// Tiling geometry.
    pub kind: GridKind,
    /// Whether pointer snapping is active.
    pub snap_enabled: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            snap_sensitivity: DEFAULT_SNAP_SENSITIVITY,
            kind: GridKind::Dots,
            snap_enabled: true,
        }
    }
}

impl GridSettings {
    /// Create settings, rejecting non-positive spacing and negative sensitivity.
    pub fn new(spacing: f64, snap_sensitivity: f64, kind: GridKind) -> Result<Self, GridError> {
        if !(spacing > 0.0) {
            return Err(GridError::NonPositiveSpacing(spacing));
        }
        if !(snap_sensitivity >= 0.0) {
            return Err(GridError::NegativeSensitivity(snap_sensitivity));
        }
        Ok(Self {
            spacing,
            snap_sensitivity,
            kind,
            snap_enabled: true,
        })
    }

    /// Snap a pointer position, honoring the snap toggle and sensitivity.
    pub fn snap_point(&self, point: Point) -> Option<GridPoint> {
        if !self.snap_enabled {
            return None;
        }
        snap::snap_to_grid(point.x, point.y, self.spacing, self.snap_sensitivity)
    }

    /// Quantize a position to the lattice regardless of the snap toggle.
    pub fn quantize(&self, point: Point) -> GridPoint {
        grid::pixel_to_grid(point.x, point.y, self.spacing)
    }

    /// Enumerate the lattice points visible in `bounds` for this configuration.
    pub fn points_in(&self, bounds: Rect) -> Vec<GridPoint> {
        grid::grid_points_in_bounds(bounds, self.spacing, self.kind)
    }

    /// Align a rectangle's corners to the lattice.
    pub fn align_rect(&self, rect: Rect) -> Rect {
        snap::align_box_to_grid(rect, self.spacing)
    }

    /// Fit this grid onto a page with uniform margins.
    pub fn page_grid(&self, page: Size, margin: f64) -> PageGrid {
        page::calculate_page_grid(page, self.spacing, margin)
    }
}
