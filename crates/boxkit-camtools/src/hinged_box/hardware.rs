//! Hinge and latch features.
//!
//! These do not depend on the edge planner: they sit at fixed positions
//! derived from the box dimensions. Builders return features in the order
//! they must be applied.

use super::types::{
    BoxParameters, PanelKind, ACCESS_HOLE_INSET, ACCESS_HOLE_RADIUS, HINGE_CLEARANCE,
};
use boxkit_core::Point;
use boxkit_designer::Primitive;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareKind {
    /// Square lug on the lid's hinge edge
    HingeKnuckle,
    /// Rounded tab on the lid's front edge
    LatchTab,
    /// Round lug on a side panel
    HingeEar,
    /// Pin hole through a hinge ear
    HingePinHole,
    /// Notch in the front panel receiving the latch tab
    LatchSlot,
    AccessHole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Union,
    Subtract,
}

/// A hardware primitive together with how it combines with the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareFeature {
    pub kind: HardwareKind,
    pub operation: Operation,
    pub primitive: Primitive,
}

impl HardwareFeature {
    fn union(kind: HardwareKind, primitive: Primitive) -> Self {
        Self {
            kind,
            operation: Operation::Union,
            primitive,
        }
    }

    fn subtract(kind: HardwareKind, primitive: Primitive) -> Self {
        Self {
            kind,
            operation: Operation::Subtract,
            primitive,
        }
    }
}

/// Two hinge knuckles followed by the latch tab.
///
/// The lid is `W×D` with `y = D` on the hinge side; knuckles hang off both
/// side edges one thickness in from the hinge edge, the latch tab hangs
/// below the front edge.
pub fn lid_hardware(params: &BoxParameters) -> Vec<HardwareFeature> {
    let t = params.thickness;
    let w = params.width;
    let knuckle_y = params.depth - 2.0 * t;

    let tab_w = 2.0 * params.tab_width;
    let tab_h = 1.5 * t;
    let radius = (0.35 * tab_h).min(0.4 * tab_w);

    vec![
        HardwareFeature::union(
            HardwareKind::HingeKnuckle,
            Primitive::rectangle(-t, knuckle_y, t, t),
        ),
        HardwareFeature::union(
            HardwareKind::HingeKnuckle,
            Primitive::rectangle(w, knuckle_y, t, t),
        ),
        HardwareFeature::union(
            HardwareKind::LatchTab,
            Primitive::rounded_rectangle((w - tab_w) / 2.0, -tab_h, tab_w, tab_h, radius),
        ),
    ]
}

/// Hinge ear and its pin hole for the Left or Right panel.
///
/// Returns nothing for other panels. The hole is listed after the ear so it
/// cuts through the lug.
pub fn side_hinge(kind: PanelKind, params: &BoxParameters) -> Vec<HardwareFeature> {
    let t = params.thickness;
    let cx = match kind {
        PanelKind::Left => 2.5 * t,
        PanelKind::Right => params.depth - 2.5 * t,
        _ => return Vec::new(),
    };
    let center = Point::new(cx, params.height - 0.5 * t);
    let outer = (t + HINGE_CLEARANCE + 2.0 * t) / 2.0;
    let pin = (t + HINGE_CLEARANCE) / 2.0;

    vec![
        HardwareFeature::union(HardwareKind::HingeEar, Primitive::circle(center, outer)),
        HardwareFeature::subtract(HardwareKind::HingePinHole, Primitive::circle(center, pin)),
    ]
}

/// Slot in the front panel's top edge that the lid's latch tab drops into.
pub fn front_latch_slot(params: &BoxParameters) -> HardwareFeature {
    let slot_w = 2.0 * params.tab_width;
    let slot_h = params.thickness + 2.0 * params.kerf;
    HardwareFeature::subtract(
        HardwareKind::LatchSlot,
        Primitive::rectangle(
            (params.width - slot_w) / 2.0,
            params.height - slot_h + params.kerf,
            slot_w,
            slot_h,
        ),
    )
}

/// Round access hole near the Right panel's lower right corner.
pub fn access_hole(params: &BoxParameters) -> HardwareFeature {
    HardwareFeature::subtract(
        HardwareKind::AccessHole,
        Primitive::circle(
            Point::new(params.depth - ACCESS_HOLE_INSET, ACCESS_HOLE_INSET),
            ACCESS_HOLE_RADIUS,
        ),
    )
}

/// Every hardware feature a panel receives, in application order:
/// hinge features, then latch features, then the optional access hole.
pub fn hardware_for(kind: PanelKind, params: &BoxParameters) -> Vec<HardwareFeature> {
    match kind {
        PanelKind::Lid => lid_hardware(params),
        PanelKind::Front => vec![front_latch_slot(params)],
        PanelKind::Left => side_hinge(kind, params),
        PanelKind::Right => {
            let mut features = side_hinge(kind, params);
            if params.add_right_hole {
                features.push(access_hole(params));
            }
            features
        }
        PanelKind::Bottom | PanelKind::Back => Vec::new(),
    }
}
