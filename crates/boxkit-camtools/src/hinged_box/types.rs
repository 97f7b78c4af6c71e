//! Type definitions for the Hinged Box Maker

use crate::error::{ParameterError, ParameterResult};
use boxkit_core::Size;
use boxkit_designer::Primitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrowest tab or slot worth cutting (mm). Anything thinner burns away.
pub const MIN_FEATURE_WIDTH: f64 = 0.2;

/// Smallest gap left between neighbouring tab positions (mm).
pub const MIN_GAP_FLOOR: f64 = 0.4;

/// Tolerance for index rounding and clearance tie-breaks (mm).
pub const GEOMETRIC_EPSILON: f64 = 1e-6;

/// Minimum extra depth cut past a female slot (mm).
pub const MIN_OVERCUT: f64 = 0.05;

/// Share of the kerf added as slot over-cut.
pub const OVERCUT_KERF_FACTOR: f64 = 0.5;

/// Radial play between a hinge knuckle and its ear hole (mm).
pub const HINGE_CLEARANCE: f64 = 1.0;

/// Radius of the optional access hole in the right panel (mm).
pub const ACCESS_HOLE_RADIUS: f64 = 4.0;

/// Distance of the access hole centre from the right panel's right and bottom sides (mm).
pub const ACCESS_HOLE_INSET: f64 = 12.0;

/// Padding added to the thickness to get the smallest allowed layout gap (mm).
pub const LAYOUT_GAP_PADDING: f64 = 2.0;

/// Most candidate tab positions planned on one edge. Longer plans are cut straight.
pub const MAX_TABS_PER_EDGE: usize = 10_000;

/// Role of one panel side in a finger joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRole {
    /// Straight cut, no joinery.
    Plain,
    /// Tabs protrude outward.
    Male,
    /// Slots are cut inward.
    Female,
}

impl fmt::Display for EdgeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// The four sides of a rectangular panel in its local frame (y up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    /// `y = height`
    Top,
    /// `x = width`
    Right,
    /// `y = 0`
    Bottom,
    /// `x = 0`
    Left,
}

impl EdgeSide {
    pub const ALL: [EdgeSide; 4] = [
        EdgeSide::Top,
        EdgeSide::Right,
        EdgeSide::Bottom,
        EdgeSide::Left,
    ];

    /// Length of this side on a panel of the given size.
    pub fn length(&self, panel: Size) -> f64 {
        match self {
            EdgeSide::Top | EdgeSide::Bottom => panel.width,
            EdgeSide::Left | EdgeSide::Right => panel.height,
        }
    }
}

/// Joint role for each side of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRoles {
    pub top: EdgeRole,
    pub right: EdgeRole,
    pub bottom: EdgeRole,
    pub left: EdgeRole,
}

impl EdgeRoles {
    pub fn new(top: EdgeRole, right: EdgeRole, bottom: EdgeRole, left: EdgeRole) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(role: EdgeRole) -> Self {
        Self::new(role, role, role, role)
    }

    pub fn get(&self, side: EdgeSide) -> EdgeRole {
        match side {
            EdgeSide::Top => self.top,
            EdgeSide::Right => self.right,
            EdgeSide::Bottom => self.bottom,
            EdgeSide::Left => self.left,
        }
    }

    pub fn is_male(&self, side: EdgeSide) -> bool {
        self.get(side) == EdgeRole::Male
    }
}

/// The six panels of a hinged box, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelKind {
    Bottom,
    Lid,
    Front,
    Back,
    Left,
    Right,
}

impl PanelKind {
    pub const ALL: [PanelKind; 6] = [
        PanelKind::Bottom,
        PanelKind::Lid,
        PanelKind::Front,
        PanelKind::Back,
        PanelKind::Left,
        PanelKind::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::Bottom => "Bottom",
            PanelKind::Lid => "Lid",
            PanelKind::Front => "Front",
            PanelKind::Back => "Back",
            PanelKind::Left => "Left",
            PanelKind::Right => "Right",
        }
    }

    /// Fixed joint topology of the box.
    pub fn edge_roles(&self) -> EdgeRoles {
        use EdgeRole::*;
        match self {
            PanelKind::Bottom => EdgeRoles::uniform(Male),
            PanelKind::Lid => EdgeRoles::uniform(Plain),
            PanelKind::Front | PanelKind::Back => EdgeRoles::new(Plain, Male, Female, Male),
            PanelKind::Left | PanelKind::Right => EdgeRoles::new(Plain, Female, Female, Female),
        }
    }

    /// Bare rectangle size of this panel.
    pub fn size(&self, params: &BoxParameters) -> Size {
        match self {
            PanelKind::Bottom | PanelKind::Lid => Size::new(params.width, params.depth),
            PanelKind::Front | PanelKind::Back => Size::new(params.width, params.height),
            PanelKind::Left | PanelKind::Right => Size::new(params.depth, params.height),
        }
    }

    /// Sheet row: Bottom and Lid first, the four walls second.
    pub fn row(&self) -> usize {
        match self {
            PanelKind::Bottom | PanelKind::Lid => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Male stub or female slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    Male,
    Female,
}

/// One tab or slot along an edge, measured in edge coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabFeature {
    pub kind: TabKind,
    /// Distance of the tab centre from the start of the edge.
    pub center: f64,
    /// Extent along the edge, kerf already applied.
    pub width: f64,
    /// Extent across the edge: outward for males, inward for females.
    pub depth: f64,
    /// Extra cut past the edge line on the far side (females only).
    pub overcut: f64,
}

impl TabFeature {
    /// Rectangle for this feature on `side` of a panel of size `panel`.
    ///
    /// Female slots are clamped so they never run past the panel's ends.
    pub fn primitive(&self, side: EdgeSide, panel: Size) -> Primitive {
        let along_limit = side.length(panel);
        let mut start = self.center - self.width / 2.0;
        if self.kind == TabKind::Female {
            start = start.clamp(0.0, (along_limit - self.width).max(0.0));
        }
        let w = self.width;
        let d = self.depth;
        let o = self.overcut;
        let (pw, ph) = (panel.width, panel.height);

        match (self.kind, side) {
            (TabKind::Male, EdgeSide::Top) => Primitive::rectangle(start, ph, w, d),
            (TabKind::Male, EdgeSide::Bottom) => Primitive::rectangle(start, -d, w, d),
            (TabKind::Male, EdgeSide::Left) => Primitive::rectangle(-d, start, d, w),
            (TabKind::Male, EdgeSide::Right) => Primitive::rectangle(pw, start, d, w),
            (TabKind::Female, EdgeSide::Top) => Primitive::rectangle(start, ph - d, w, d + o),
            (TabKind::Female, EdgeSide::Bottom) => Primitive::rectangle(start, -o, w, d + o),
            (TabKind::Female, EdgeSide::Left) => Primitive::rectangle(-o, start, d + o, w),
            (TabKind::Female, EdgeSide::Right) => Primitive::rectangle(pw - d, start, d + o, w),
        }
    }
}

/// Box generation input. All lengths in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParameters {
    /// Interior width (W)
    pub width: f64,
    /// Interior depth (D)
    pub depth: f64,
    /// Wall height (H)
    pub height: f64,
    /// Material thickness (T)
    pub thickness: f64,
    /// Width of material burned away by the cutter (K)
    pub kerf: f64,
    /// Nominal finger width
    #[serde(alias = "tabWidth")]
    pub tab_width: f64,
    /// Gap between panels on the sheet
    pub margin: f64,
    /// Cut an access hole into the right panel
    #[serde(alias = "addRightHole")]
    pub add_right_hole: bool,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            width: 80.0,
            depth: 50.0,
            height: 40.0,
            thickness: 3.0,
            kerf: 0.12,
            tab_width: 10.0,
            margin: 12.0,
            add_right_hole: true,
        }
    }
}

impl BoxParameters {
    /// Reject non-finite or out-of-range values, naming the first offending field.
    pub fn validate(&self) -> ParameterResult<()> {
        let positive = [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
            ("thickness", self.thickness),
            ("tab_width", self.tab_width),
            ("margin", self.margin),
        ];
        for (name, value) in positive {
            require_positive(name, value)?;
        }

        if !self.kerf.is_finite() {
            return Err(ParameterError::NotFinite {
                name: "kerf".to_string(),
            });
        }
        if self.kerf < 0.0 {
            return Err(ParameterError::Negative {
                name: "kerf".to_string(),
                value: self.kerf,
            });
        }
        Ok(())
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite {
            name: name.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ParameterError::NotPositive {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}
