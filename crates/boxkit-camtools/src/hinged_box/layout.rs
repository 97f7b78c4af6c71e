//! Sheet layout for the six panels.
//!
//! Positions are footprint corners. A male edge on the left or bottom side
//! pushes the bare rectangle one thickness inside its footprint.

use super::types::{EdgeRoles, EdgeSide, PanelKind, LAYOUT_GAP_PADDING};
use boxkit_core::{Point, Size};
use tracing::debug;

/// Bounding size of a panel including its protruding male tabs.
pub fn compute_footprint(size: Size, edges: &EdgeRoles, thickness: f64) -> Size {
    let grow = |side: EdgeSide| {
        if edges.is_male(side) {
            thickness
        } else {
            0.0
        }
    };
    Size::new(
        size.width + grow(EdgeSide::Left) + grow(EdgeSide::Right),
        size.height + grow(EdgeSide::Bottom) + grow(EdgeSide::Top),
    )
}

/// Offset from a footprint corner to the corner of the bare rectangle.
pub fn bare_offset(edges: &EdgeRoles, thickness: f64) -> (f64, f64) {
    let dx = if edges.is_male(EdgeSide::Left) {
        thickness
    } else {
        0.0
    };
    let dy = if edges.is_male(EdgeSide::Bottom) {
        thickness
    } else {
        0.0
    };
    (dx, dy)
}

/// Gap actually left between panels: never less than a thickness plus padding.
pub fn effective_gap(margin: f64, thickness: f64) -> f64 {
    margin.max(thickness + LAYOUT_GAP_PADDING)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: PanelKind,
    /// Lower-left corner of the footprint on the sheet.
    pub origin: Point,
    pub footprint: Size,
}

/// Place panels in two rows: Bottom and Lid first, the walls above them.
///
/// The Lid sits one extra thickness further right so its hinge knuckles
/// clear the Bottom's tabs. Panels keep the order they were given in.
pub fn pack_panels(panels: &[(PanelKind, Size)], thickness: f64, margin: f64) -> Vec<Placement> {
    let gap = effective_gap(margin, thickness);

    let first_row_height = panels
        .iter()
        .filter(|(kind, _)| kind.row() == 0)
        .map(|(_, fp)| fp.height)
        .fold(0.0, f64::max);
    let second_row_y = first_row_height + gap;

    let mut cursor = [0.0_f64; 2];
    let mut placements = Vec::with_capacity(panels.len());
    for &(kind, footprint) in panels {
        let row = kind.row();
        let mut x = cursor[row];
        if kind == PanelKind::Lid {
            x += thickness;
        }
        let y = if row == 0 { 0.0 } else { second_row_y };
        cursor[row] = x + footprint.width + gap;

        debug!(panel = %kind, x, y, "placed panel");
        placements.push(Placement {
            kind,
            origin: Point::new(x, y),
            footprint,
        });
    }
    placements
}
