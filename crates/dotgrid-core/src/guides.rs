//! Alignment guides between boxes for drag interactions.

use kurbo::Rect;

/// Default alignment threshold in pixels.
pub const ALIGNMENT_THRESHOLD: f64 = 5.0;

/// Guide coordinates where a dragged box aligns with its neighbors.
///
/// `vertical` holds x coordinates (drawn as vertical lines), `horizontal`
/// holds y coordinates. Both are sorted and deduplicated, so several boxes
/// aligning at the same coordinate produce a single guide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentGuides {
    /// Y coordinates of horizontal guide lines.
    pub horizontal: Vec<f64>,
    /// X coordinates of vertical guide lines.
    pub vertical: Vec<f64>,
}

impl AlignmentGuides {
    /// Check whether any guide was found.
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

/// Edge and center coordinates of a rect: (left, center, right), (top, center, bottom).
fn edge_coords(rect: Rect) -> ([f64; 3], [f64; 3]) {
    (
        [rect.x0, (rect.x0 + rect.x1) / 2.0, rect.x1],
        [rect.y0, (rect.y0 + rect.y1) / 2.0, rect.y1],
    )
}

/// Find edge/center alignments between `subject` and `others`.
///
/// The subject's left, center, and right x coordinates are compared against
/// the same three of every other box (likewise top/center/bottom on y). A
/// pair within `threshold` contributes the *other* box's coordinate, so the
/// guide lands on the stationary geometry rather than the dragged box.
/// Precondition: `threshold >= 0`.
pub fn box_alignment_guides(subject: Rect, others: &[Rect], threshold: f64) -> AlignmentGuides {
    debug_assert!(threshold >= 0.0, "alignment threshold must be non-negative");
    let (subject_xs, subject_ys) = edge_coords(subject);

    let mut guides = AlignmentGuides::default();
    for other in others {
        let (other_xs, other_ys) = edge_coords(*other);
        for &sx in &subject_xs {
            for &ox in &other_xs {
                if (sx - ox).abs() <= threshold {
                    guides.vertical.push(ox);
                }
            }
        }
        for &sy in &subject_ys {
            for &oy in &other_ys {
                if (sy - oy).abs() <= threshold {
                    guides.horizontal.push(oy);
                }
            }
        }
    }

    guides.vertical.sort_by(f64::total_cmp);
    guides.vertical.dedup();
    guides.horizontal.sort_by(f64::total_cmp);
    guides.horizontal.dedup();
    guides
}
