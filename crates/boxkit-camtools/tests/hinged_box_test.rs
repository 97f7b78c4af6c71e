//! End-to-end checks of the hinged box generator.

use boxkit_camtools::{
    BoxParameters, CamToolError, EdgeSide, HardwareKind, HingedBoxMaker, PanelKind,
    ParameterError, PlacedPanel,
};
use boxkit_core::{Bounds, Point};
use boxkit_designer::{CsgKernel, CsgTree, GeometryKernel, Primitive, TreeKernel};

fn scenario() -> BoxParameters {
    BoxParameters {
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

fn centers<R>(panel: &PlacedPanel<R>, side: EdgeSide) -> Vec<f64> {
    let mut out: Vec<f64> = panel
        .males
        .iter()
        .chain(panel.females.iter())
        .filter(|t| t.side == side)
        .map(|t| t.feature.center)
        .collect();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

#[test]
fn test_scenario_produces_six_named_panels() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let model = maker.generate(&scenario()).unwrap();

    let names: Vec<&str> = model.panels.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Bottom", "Lid", "Front", "Back", "Left", "Right"]);
}

#[test]
fn test_scenario_right_panel_has_one_access_hole() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let model = maker.generate(&scenario()).unwrap();
    let right = model.panel(PanelKind::Right).unwrap();

    let holes: Vec<Primitive> = right
        .region
        .subtracted()
        .into_iter()
        .filter(|p| p.circle_radius() == Some(4.0))
        .collect();
    assert_eq!(holes.len(), 1);

    let corner = right.rect_origin();
    let expected = Primitive::circle(Point::new(corner.x + 38.0, corner.y + 12.0), 4.0);
    assert_eq!(holes[0], expected);
    assert_eq!(right.hardware_of(HardwareKind::AccessHole).count(), 1);
}

#[test]
fn test_scenario_front_panel_has_latch_slot() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let model = maker.generate(&scenario()).unwrap();
    let front = model.panel(PanelKind::Front).unwrap();

    let slot = front.hardware_of(HardwareKind::LatchSlot).next().unwrap();
    let corner = front.rect_origin();
    let placed = slot.primitive.translated(corner.x, corner.y);
    assert!(front.region.subtracted().contains(&placed));
}

#[test]
fn test_scenario_lid_has_knuckles_and_rounded_latch() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let model = maker.generate(&scenario()).unwrap();
    let lid = model.panel(PanelKind::Lid).unwrap();

    let added = lid.region.added();
    let squares = added
        .iter()
        .filter(|p| {
            matches!(
                p,
                Primitive::Rectangle { width, height, .. } if *width == 3.0 && *height == 3.0
            )
        })
        .count();
    let rounded = added
        .iter()
        .filter(|p| matches!(p, Primitive::RoundedRectangle { .. }))
        .count();
    assert_eq!(squares, 2);
    assert_eq!(rounded, 1);
    assert!(lid.region.subtracted().is_empty());
    assert!(lid.males.is_empty() && lid.females.is_empty());
}

#[test]
fn test_right_hole_is_optional() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let params = BoxParameters {
        add_right_hole: false,
        ..scenario()
    };
    let model = maker.generate(&params).unwrap();
    let right = model.panel(PanelKind::Right).unwrap();
    assert_eq!(right.hardware_of(HardwareKind::AccessHole).count(), 0);
    assert!(right
        .region
        .subtracted()
        .iter()
        .all(|p| p.circle_radius() != Some(4.0)));
}

#[test]
fn test_generation_is_deterministic() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let a = maker.generate(&scenario()).unwrap();
    let b = maker.generate(&scenario()).unwrap();
    assert_eq!(a, b);

    let csg = HingedBoxMaker::new(CsgKernel::new());
    let first = csg.generate(&scenario()).unwrap();
    let second = csg.generate(&scenario()).unwrap();
    for (p, q) in first.panels.iter().zip(second.panels.iter()) {
        assert_eq!(
            csg.kernel().contours(&p.region),
            csg.kernel().contours(&q.region)
        );
        assert_eq!(p.origin, q.origin);
    }
}

#[test]
fn test_male_edges_meet_matching_female_edges() {
    let params = BoxParameters {
        height: 60.0,
        ..scenario()
    };
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let model = maker.generate(&params).unwrap();
    let get = |k| model.panel(k).unwrap();

    let pairs = [
        (PanelKind::Bottom, EdgeSide::Bottom, PanelKind::Front, EdgeSide::Bottom),
        (PanelKind::Bottom, EdgeSide::Top, PanelKind::Back, EdgeSide::Bottom),
        (PanelKind::Bottom, EdgeSide::Left, PanelKind::Left, EdgeSide::Bottom),
        (PanelKind::Bottom, EdgeSide::Right, PanelKind::Right, EdgeSide::Bottom),
        (PanelKind::Front, EdgeSide::Left, PanelKind::Left, EdgeSide::Right),
        (PanelKind::Front, EdgeSide::Right, PanelKind::Right, EdgeSide::Left),
        (PanelKind::Back, EdgeSide::Left, PanelKind::Right, EdgeSide::Right),
        (PanelKind::Back, EdgeSide::Right, PanelKind::Left, EdgeSide::Left),
    ];

    for (male_panel, male_side, female_panel, female_side) in pairs {
        let m = centers(get(male_panel), male_side);
        let f = centers(get(female_panel), female_side);
        assert!(!m.is_empty(), "{} {:?} has no tabs", male_panel, male_side);
        assert_eq!(m.len(), f.len(), "{} {:?}", male_panel, male_side);
        for (a, b) in m.iter().zip(f.iter()) {
            assert!((a - b).abs() <= params.kerf, "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_footprint_covers_panel() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let model = maker.generate(&scenario()).unwrap();
    for panel in &model.panels {
        assert!(panel.footprint.width >= panel.size.width);
        assert!(panel.footprint.height >= panel.size.height);
        let horizontal_male =
            panel.edges.is_male(EdgeSide::Left) || panel.edges.is_male(EdgeSide::Right);
        assert_eq!(panel.footprint.width > panel.size.width, horizontal_male);
    }
}

#[test]
fn test_panels_do_not_overlap_on_sheet() {
    let maker = HingedBoxMaker::new(CsgKernel::new());
    let model = maker.generate(&scenario()).unwrap();
    let bounds: Vec<Bounds> = model
        .panels
        .iter()
        .map(|p| maker.kernel().bounds(&p.region).unwrap())
        .collect();
    for (i, a) in bounds.iter().enumerate() {
        for b in &bounds[i + 1..] {
            assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn test_csg_right_panel_contains_access_hole_contour() {
    let maker = HingedBoxMaker::new(CsgKernel::new());
    let model = maker.generate(&scenario()).unwrap();
    let right = model.panel(PanelKind::Right).unwrap();
    let corner = right.rect_origin();

    let found = maker
        .kernel()
        .contours(&right.region)
        .iter()
        .filter(|c| c.is_hole)
        .filter_map(|c| c.bounds())
        .any(|b| {
            (b.width() - 8.0).abs() < 1e-3
                && (b.height() - 8.0).abs() < 1e-3
                && (b.min_x - (corner.x + 34.0)).abs() < 1e-3
                && (b.min_y - (corner.y + 8.0)).abs() < 1e-3
        });
    assert!(found);
}

#[test]
fn test_zero_kerf_widths_equal_nominal() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let params = BoxParameters {
        kerf: 0.0,
        ..scenario()
    };
    let model = maker.generate(&params).unwrap();
    let bottom = model.panel(PanelKind::Bottom).unwrap();
    let back = model.panel(PanelKind::Back).unwrap();
    assert!(!bottom.males.is_empty());
    for tab in bottom.males.iter().chain(back.females.iter()) {
        assert_eq!(tab.feature.width, 10.0);
    }
}

#[test]
fn test_oversized_tab_width_gives_plain_edges() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let params = BoxParameters {
        tab_width: 1000.0,
        ..scenario()
    };
    let model = maker.generate(&params).unwrap();
    for panel in &model.panels {
        assert!(panel.males.is_empty(), "{} has tabs", panel.name());
        assert!(panel.females.is_empty(), "{} has slots", panel.name());
    }
    let bottom = model.panel(PanelKind::Bottom).unwrap();
    assert!(matches!(bottom.region, CsgTree::Leaf(Primitive::Rectangle { .. })));
}

#[test]
fn test_invalid_parameters_name_the_field() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let cases = [
        (
            BoxParameters {
                width: 0.0,
                ..scenario()
            },
            "width",
        ),
        (
            BoxParameters {
                thickness: f64::NAN,
                ..scenario()
            },
            "thickness",
        ),
        (
            BoxParameters {
                tab_width: -2.0,
                ..scenario()
            },
            "tab_width",
        ),
        (
            BoxParameters {
                kerf: -0.01,
                ..scenario()
            },
            "kerf",
        ),
    ];
    for (params, field) in cases {
        match maker.generate(&params) {
            Err(CamToolError::Parameter(err)) => assert_eq!(err.name(), field),
            other => panic!("expected parameter error for {}, got {:?}", field, other),
        }
    }

    let err = maker
        .generate(&BoxParameters {
            depth: f64::INFINITY,
            ..scenario()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        CamToolError::Parameter(ParameterError::NotFinite { .. })
    ));
}

#[test]
fn test_huge_width_finishes_with_plain_long_edges() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let params = BoxParameters {
        width: 1e300,
        ..scenario()
    };
    let model = maker.generate(&params).unwrap();
    assert_eq!(model.panels.len(), 6);

    let bottom = model.panel(PanelKind::Bottom).unwrap();
    assert!(centers(bottom, EdgeSide::Bottom).is_empty());
    assert!(centers(bottom, EdgeSide::Top).is_empty());
    // the short edges still get joinery
    assert!(!centers(bottom, EdgeSide::Left).is_empty());
}

#[test]
fn test_rect_origin_tracks_thickness_without_arguments() {
    let maker = HingedBoxMaker::new(TreeKernel::new());
    let params = BoxParameters {
        thickness: 4.0,
        ..scenario()
    };
    let model = maker.generate(&params).unwrap();

    let bottom = model.panel(PanelKind::Bottom).unwrap();
    assert_eq!(bottom.rect_origin(), bottom.origin.offset(4.0, 4.0));

    // all-female walls sit at their footprint corner
    let right = model.panel(PanelKind::Right).unwrap();
    let corner = right.rect_origin();
    assert_eq!(corner, right.origin);
    let expected = Primitive::circle(Point::new(corner.x + 38.0, corner.y + 12.0), 4.0);
    assert!(right.region.subtracted().contains(&expected));
}
