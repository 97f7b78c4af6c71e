//! Geometry kernel backed by csgrs sketches.

use crate::kernel::{Contour, GeometryKernel};
use crate::shapes::Primitive;
use boxkit_core::{Bounds, Point};
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use nalgebra::{Matrix4, Vector3};
use tracing::trace;

/// Polygon boolean kernel using [`csgrs::sketch::Sketch`].
///
/// Curved primitives are polygonised by [`Primitive::outline`] before they
/// reach csgrs, so vertex positions never depend on csgrs' own tessellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsgKernel;

impl CsgKernel {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryKernel for CsgKernel {
    type Region = Sketch<()>;

    fn build(&self, primitive: &Primitive) -> Sketch<()> {
        let points: Vec<[f64; 2]> = primitive.outline().iter().map(|p| [p.x, p.y]).collect();
        Sketch::polygon(&points, None)
    }

    fn union(&self, a: &Sketch<()>, b: &Sketch<()>) -> Sketch<()> {
        a.union(b)
    }

    fn difference(&self, a: &Sketch<()>, b: &Sketch<()>) -> Sketch<()> {
        a.difference(b)
    }

    fn translate(&self, region: &Sketch<()>, dx: f64, dy: f64) -> Sketch<()> {
        region.transform(&Matrix4::new_translation(&Vector3::new(dx, dy, 0.0)))
    }

    fn bounds(&self, region: &Sketch<()>) -> Option<Bounds> {
        let contours = self.contours(region);
        Bounds::from_points(contours.iter().flat_map(|c| c.points.iter()))
    }

    fn contours(&self, region: &Sketch<()>) -> Vec<Contour> {
        let mut contours = Vec::new();
        let mp = region.to_multipolygon();
        for poly in mp.0 {
            let exterior = ring_points(poly.exterior().0.iter().map(|c| (c.x, c.y)));
            if exterior.len() < 3 {
                continue;
            }
            contours.push(Contour::new(exterior, false));

            for interior in poly.interiors() {
                let hole = ring_points(interior.0.iter().map(|c| (c.x, c.y)));
                if hole.len() >= 3 {
                    contours.push(Contour::new(hole, true));
                }
            }
        }
        trace!(rings = contours.len(), "extracted contours");
        contours
    }
}

/// Collect ring coordinates, dropping the closing vertex geo repeats.
fn ring_points(coords: impl Iterator<Item = (f64, f64)>) -> Vec<Point> {
    let mut points: Vec<Point> = coords.map(|(x, y)| Point::new(x, y)).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}
