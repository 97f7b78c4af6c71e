//! Panel assembly: base rectangle plus the joinery of its four edges.

use super::edge_planner::{plan_edge, EdgePlan};
use super::hardware::{HardwareFeature, Operation};
use super::types::{EdgeRoles, EdgeSide, TabFeature};
use boxkit_core::Size;
use boxkit_designer::{subtract_all, union_all, GeometryKernel, Primitive};
use tracing::{debug, warn};

/// A tab or slot placed on a specific side of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTab {
    pub side: EdgeSide,
    pub feature: TabFeature,
    /// Rectangle in panel-local coordinates.
    pub primitive: Primitive,
}

/// One panel outline in its local frame: bare rectangle at `[0,w]×[0,h]`.
///
/// `males` and `females` record the joinery before the booleans were run.
/// They only serve to tag or colour features downstream; `region` is the
/// cut geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOutline<R> {
    pub size: Size,
    pub edges: EdgeRoles,
    pub males: Vec<PlacedTab>,
    pub females: Vec<PlacedTab>,
    pub hardware: Vec<HardwareFeature>,
    pub region: R,
}

impl<R: Clone> PanelOutline<R> {
    /// Apply hinge, latch, or hole features in order, returning the new outline.
    ///
    /// Each feature sees the result of the ones before it, so a hole listed
    /// after its lug cuts through the lug.
    pub fn with_hardware<K>(&self, kernel: &K, features: &[HardwareFeature]) -> Self
    where
        K: GeometryKernel<Region = R>,
    {
        let region = features.iter().fold(self.region.clone(), |acc, feature| {
            let primitive = [feature.primitive];
            match feature.operation {
                Operation::Union => union_all(kernel, &acc, &primitive),
                Operation::Subtract => subtract_all(kernel, &acc, &primitive),
            }
        });

        let mut hardware = self.hardware.clone();
        hardware.extend_from_slice(features);

        Self {
            size: self.size,
            edges: self.edges,
            males: self.males.clone(),
            females: self.females.clone(),
            hardware,
            region,
        }
    }
}

impl<R> PanelOutline<R> {
    pub fn tabs_on(&self, side: EdgeSide) -> impl Iterator<Item = &PlacedTab> {
        self.males
            .iter()
            .chain(self.females.iter())
            .filter(move |t| t.side == side)
    }
}

/// Build a panel from its size and the role of each side.
///
/// Male tabs are unioned onto the base rectangle, then the union of all
/// female slots is subtracted from the result.
pub fn assemble_panel<K: GeometryKernel>(
    kernel: &K,
    width: f64,
    height: f64,
    edges: EdgeRoles,
    tab_width: f64,
    thickness: f64,
    kerf: f64,
) -> PanelOutline<K::Region> {
    let size = Size::new(width, height);
    let mut males = Vec::new();
    let mut females = Vec::new();

    for side in EdgeSide::ALL {
        let role = edges.get(side);
        let plan: EdgePlan = plan_edge(side.length(size), role, tab_width, thickness, kerf);
        debug!(
            ?side,
            %role,
            length = plan.edge_length,
            candidates = plan.tab_count,
            emitted = plan.males.len() + plan.females.len(),
            "planned edge"
        );
        if plan.degraded() {
            warn!(
                ?side,
                length = plan.edge_length,
                tab_width,
                "edge too short for finger joints, cutting it straight"
            );
        }

        let place = |feature: &TabFeature| PlacedTab {
            side,
            feature: *feature,
            primitive: feature.primitive(side, size),
        };
        males.extend(plan.males.iter().map(place));
        females.extend(plan.females.iter().map(place));
    }

    let base = kernel.build(&Primitive::rectangle(0.0, 0.0, width, height));
    let male_prims: Vec<Primitive> = males.iter().map(|t| t.primitive).collect();
    let female_prims: Vec<Primitive> = females.iter().map(|t| t.primitive).collect();
    let with_males = union_all(kernel, &base, &male_prims);
    let region = subtract_all(kernel, &with_males, &female_prims);

    debug!(
        width,
        height,
        males = males.len(),
        females = females.len(),
        "assembled panel"
    );

    PanelOutline {
        size,
        edges,
        males,
        females,
        hardware: Vec::new(),
        region,
    }
}
