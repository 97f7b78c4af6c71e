//! The geometry kernel seam.
//!
//! Generators receive a kernel at construction time and only talk to it
//! through this trait, so the boolean engine can be replaced (or mocked)
//! without touching generation code.

use crate::shapes::Primitive;
use boxkit_core::{Bounds, Point};
use std::fmt::Debug;

/// A 2D boolean geometry engine.
///
/// Implementations must be deterministic: the same calls in the same order
/// produce structurally equal regions.
pub trait GeometryKernel {
    /// A possibly disjoint planar region with holes.
    type Region: Clone + Debug;

    /// Region covered by a single primitive.
    fn build(&self, primitive: &Primitive) -> Self::Region;

    fn union(&self, a: &Self::Region, b: &Self::Region) -> Self::Region;

    /// `a` minus `b`.
    fn difference(&self, a: &Self::Region, b: &Self::Region) -> Self::Region;

    fn translate(&self, region: &Self::Region, dx: f64, dy: f64) -> Self::Region;

    /// Bounding box, or `None` for an empty region.
    fn bounds(&self, region: &Self::Region) -> Option<Bounds>;

    /// Closed rings describing the region: each outer boundary followed by
    /// its holes.
    fn contours(&self, region: &Self::Region) -> Vec<Contour>;
}

/// One closed ring of a region boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Vertices in order, without repeating the first one at the end.
    pub points: Vec<Point>,
    /// True for the inner boundary of a hole.
    pub is_hole: bool,
}

impl Contour {
    pub fn new(points: Vec<Point>, is_hole: bool) -> Self {
        Self { points, is_hole }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter())
    }
}
