//! # Hinged Box Maker
//!
//! Generates the six panels of a finger-jointed box with a hinged lid:
//! Bottom, Lid, Front, Back, Left, Right. Each panel is a bare rectangle
//! with male tabs unioned on and female slots cut out along its edges,
//! plus hinge and latch hardware, laid out on one sheet.
//!
//! The geometry kernel is handed to [`HingedBoxMaker::new`]; generation is a
//! pure function of [`BoxParameters`] and always returns a fresh model.

pub mod edge_planner;
pub mod gcode;
pub mod hardware;
pub mod layout;
pub mod panel;
pub mod types;

pub use edge_planner::{plan_edge, EdgePlan};
pub use gcode::{GcodeEmitter, LaserSettings};
pub use hardware::{HardwareFeature, HardwareKind, Operation};
pub use layout::{compute_footprint, pack_panels, Placement};
pub use panel::{assemble_panel, PanelOutline, PlacedTab};
pub use types::*;

use crate::error::CamToolResult;
use boxkit_core::{Bounds, Point, Size, Units};
use boxkit_designer::GeometryKernel;
use tracing::info;

/// One panel at its position on the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPanel<R> {
    pub kind: PanelKind,
    /// Bare rectangle size, without tabs.
    pub size: Size,
    pub edges: EdgeRoles,
    /// Joinery overlay in panel-local coordinates.
    pub males: Vec<PlacedTab>,
    pub females: Vec<PlacedTab>,
    pub hardware: Vec<HardwareFeature>,
    pub footprint: Size,
    /// Footprint corner on the sheet.
    pub origin: Point,
    /// Offset from `origin` to the bare rectangle, one thickness per male left or bottom edge.
    pub rect_offset: (f64, f64),
    /// Outline translated to its sheet position.
    pub region: R,
}

impl<R> PlacedPanel<R> {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Sheet position of the bare rectangle's lower-left corner.
    pub fn rect_origin(&self) -> Point {
        let (dx, dy) = self.rect_offset;
        self.origin.offset(dx, dy)
    }

    pub fn footprint_bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.origin, self.footprint)
    }

    pub fn hardware_of(&self, kind: HardwareKind) -> impl Iterator<Item = &HardwareFeature> {
        self.hardware.iter().filter(move |f| f.kind == kind)
    }
}

/// The complete drawing: six named panels in a fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxModel<R> {
    pub units: Units,
    pub panels: Vec<PlacedPanel<R>>,
}

impl<R> BoxModel<R> {
    pub fn panel(&self, kind: PanelKind) -> Option<&PlacedPanel<R>> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Union of all panel footprints.
    pub fn footprint_bounds(&self) -> Option<Bounds> {
        self.panels
            .iter()
            .map(PlacedPanel::footprint_bounds)
            .reduce(|a, b| a.union(&b))
    }

    /// Extent of the cut geometry, hardware included.
    pub fn sheet_bounds<K>(&self, kernel: &K) -> Option<Bounds>
    where
        K: GeometryKernel<Region = R>,
    {
        self.panels
            .iter()
            .filter_map(|p| kernel.bounds(&p.region))
            .reduce(|a, b| a.union(&b))
    }
}

/// Builds hinged box models with an injected geometry kernel.
#[derive(Debug, Clone, Default)]
pub struct HingedBoxMaker<K> {
    kernel: K,
}

impl<K: GeometryKernel> HingedBoxMaker<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Validate `params` and build all six panels.
    pub fn generate(&self, params: &BoxParameters) -> CamToolResult<BoxModel<K::Region>> {
        params.validate()?;

        let outlines: Vec<(PanelKind, PanelOutline<K::Region>)> = PanelKind::ALL
            .iter()
            .map(|&kind| (kind, self.build_panel(kind, params)))
            .collect();

        let footprints: Vec<(PanelKind, Size)> = outlines
            .iter()
            .map(|(kind, outline)| {
                (
                    *kind,
                    compute_footprint(outline.size, &outline.edges, params.thickness),
                )
            })
            .collect();
        let placements = pack_panels(&footprints, params.thickness, params.margin);

        let panels: Vec<PlacedPanel<K::Region>> = outlines
            .into_iter()
            .zip(placements)
            .map(|((kind, outline), placement)| {
                let rect_offset = layout::bare_offset(&outline.edges, params.thickness);
                let region = self.kernel.translate(
                    &outline.region,
                    placement.origin.x + rect_offset.0,
                    placement.origin.y + rect_offset.1,
                );
                PlacedPanel {
                    kind,
                    size: outline.size,
                    edges: outline.edges,
                    males: outline.males,
                    females: outline.females,
                    hardware: outline.hardware,
                    footprint: placement.footprint,
                    origin: placement.origin,
                    rect_offset,
                    region,
                }
            })
            .collect();

        let tabs: usize = panels.iter().map(|p| p.males.len()).sum();
        let slots: usize = panels.iter().map(|p| p.females.len()).sum();
        info!(
            width = params.width,
            depth = params.depth,
            height = params.height,
            tabs,
            slots,
            "generated hinged box"
        );

        Ok(BoxModel {
            units: Units::Millimeters,
            panels,
        })
    }

    fn build_panel(&self, kind: PanelKind, params: &BoxParameters) -> PanelOutline<K::Region> {
        let size = kind.size(params);
        let outline = assemble_panel(
            &self.kernel,
            size.width,
            size.height,
            kind.edge_roles(),
            params.tab_width,
            params.thickness,
            params.kerf,
        );
        let hardware = hardware::hardware_for(kind, params);
        if hardware.is_empty() {
            outline
        } else {
            outline.with_hardware(&self.kernel, &hardware)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxkit_designer::{Primitive, TreeKernel};

    #[test]
    fn test_generate_returns_six_panels_in_order() {
        let maker = HingedBoxMaker::new(TreeKernel::new());
        let model = maker.generate(&BoxParameters::default()).unwrap();
        let kinds: Vec<PanelKind> = model.panels.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, PanelKind::ALL.to_vec());
        assert_eq!(model.units, Units::Millimeters);
    }

    #[test]
    fn test_rect_origin_follows_male_edges() {
        let maker = HingedBoxMaker::new(TreeKernel::new());
        let model = maker.generate(&BoxParameters::default()).unwrap();
        let bottom = model.panel(PanelKind::Bottom).unwrap();
        assert_eq!(bottom.rect_origin(), Point::new(3.0, 3.0));
        let left = model.panel(PanelKind::Left).unwrap();
        assert_eq!(left.rect_origin(), left.origin);
    }

    #[test]
    fn test_rect_origin_uses_thickness_of_the_build() {
        let maker = HingedBoxMaker::new(TreeKernel::new());
        let params = BoxParameters {
            thickness: 4.0,
            ..BoxParameters::default()
        };
        let model = maker.generate(&params).unwrap();

        let bottom = model.panel(PanelKind::Bottom).unwrap();
        assert_eq!(bottom.rect_offset, (4.0, 4.0));
        assert_eq!(bottom.rect_origin(), bottom.origin.offset(4.0, 4.0));

        // the translated base rectangle starts at the stored corner
        let corner = bottom.rect_origin();
        let base = Primitive::rectangle(corner.x, corner.y, params.width, params.depth);
        assert_eq!(bottom.region.leaves().first(), Some(&base));

        let front = model.panel(PanelKind::Front).unwrap();
        let (dx, dy) = layout::bare_offset(&front.edges, 4.0);
        assert_eq!(front.rect_origin(), front.origin.offset(dx, dy));
    }

    #[test]
    fn test_invalid_parameters_rejected_before_generation() {
        let maker = HingedBoxMaker::new(TreeKernel::new());
        let params = BoxParameters {
            height: -1.0,
            ..BoxParameters::default()
        };
        let err = maker.generate(&params).unwrap_err();
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_sheet_bounds_include_hardware() {
        let maker = HingedBoxMaker::new(TreeKernel::new());
        let model = maker.generate(&BoxParameters::default()).unwrap();
        let sheet = model.sheet_bounds(maker.kernel()).unwrap();
        let footprints = model.footprint_bounds().unwrap();
        // the latch tab hangs below the first row
        assert!(sheet.min_y < footprints.min_y);
        assert!(sheet.contains(&footprints, 1e-9));
    }
}
