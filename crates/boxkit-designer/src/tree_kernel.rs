//! TreeKernel: deterministic test double for [`GeometryKernel`].
//!
//! Regions are kept as unevaluated CSG expressions. Nothing is clipped, so
//! tests can ask exactly which primitives were added or cut away, and two
//! builds compare equal only if they issued the same operations.

use crate::kernel::{Contour, GeometryKernel};
use crate::shapes::Primitive;
use boxkit_core::Bounds;

/// Unevaluated boolean expression over primitives.
///
/// Translations are pushed down to the leaves, so a tree only ever holds
/// primitives, unions, and differences.
#[derive(Debug, Clone, PartialEq)]
pub enum CsgTree {
    Leaf(Primitive),
    Union(Box<CsgTree>, Box<CsgTree>),
    Difference(Box<CsgTree>, Box<CsgTree>),
}

impl CsgTree {
    fn translated(&self, dx: f64, dy: f64) -> CsgTree {
        match self {
            CsgTree::Leaf(p) => CsgTree::Leaf(p.translated(dx, dy)),
            CsgTree::Union(a, b) => CsgTree::Union(
                Box::new(a.translated(dx, dy)),
                Box::new(b.translated(dx, dy)),
            ),
            CsgTree::Difference(a, b) => CsgTree::Difference(
                Box::new(a.translated(dx, dy)),
                Box::new(b.translated(dx, dy)),
            ),
        }
    }

    /// Every primitive in the tree, left to right.
    pub fn leaves(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        self.collect(true, &mut |p, _| out.push(*p));
        out
    }

    /// Primitives contributing material.
    pub fn added(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        self.collect(true, &mut |p, positive| {
            if positive {
                out.push(*p)
            }
        });
        out
    }

    /// Primitives cut away by a difference.
    pub fn subtracted(&self) -> Vec<Primitive> {
        let mut out = Vec::new();
        self.collect(true, &mut |p, positive| {
            if !positive {
                out.push(*p)
            }
        });
        out
    }

    /// Number of boolean nodes.
    pub fn operation_count(&self) -> usize {
        match self {
            CsgTree::Leaf(_) => 0,
            CsgTree::Union(a, b) | CsgTree::Difference(a, b) => {
                1 + a.operation_count() + b.operation_count()
            }
        }
    }

    fn collect(&self, positive: bool, f: &mut impl FnMut(&Primitive, bool)) {
        match self {
            CsgTree::Leaf(p) => f(p, positive),
            CsgTree::Union(a, b) => {
                a.collect(positive, f);
                b.collect(positive, f);
            }
            CsgTree::Difference(a, b) => {
                a.collect(positive, f);
                b.collect(!positive, f);
            }
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            CsgTree::Leaf(p) => p.bounds(),
            CsgTree::Union(a, b) => a.bounds().union(&b.bounds()),
            // Conservative: cutting never grows a region.
            CsgTree::Difference(a, _) => a.bounds(),
        }
    }
}

/// Kernel whose regions are [`CsgTree`] expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeKernel;

impl TreeKernel {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryKernel for TreeKernel {
    type Region = CsgTree;

    fn build(&self, primitive: &Primitive) -> CsgTree {
        CsgTree::Leaf(*primitive)
    }

    fn union(&self, a: &CsgTree, b: &CsgTree) -> CsgTree {
        CsgTree::Union(Box::new(a.clone()), Box::new(b.clone()))
    }

    fn difference(&self, a: &CsgTree, b: &CsgTree) -> CsgTree {
        CsgTree::Difference(Box::new(a.clone()), Box::new(b.clone()))
    }

    fn translate(&self, region: &CsgTree, dx: f64, dy: f64) -> CsgTree {
        region.translated(dx, dy)
    }

    fn bounds(&self, region: &CsgTree) -> Option<Bounds> {
        Some(region.bounds())
    }

    /// Outlines of the leaves, unclipped. Cut primitives are reported as holes.
    fn contours(&self, region: &CsgTree) -> Vec<Contour> {
        let mut out = Vec::new();
        region.collect(true, &mut |p, positive| {
            out.push(Contour::new(p.outline(), !positive))
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxkit_core::Point;

    #[test]
    fn test_difference_tracks_subtracted_leaves() {
        let k = TreeKernel::new();
        let base = k.build(&Primitive::rectangle(0.0, 0.0, 10.0, 10.0));
        let lug = k.build(&Primitive::circle(Point::new(5.0, 10.0), 3.0));
        let hole = k.build(&Primitive::circle(Point::new(5.0, 10.0), 1.0));
        let region = k.difference(&k.union(&base, &lug), &hole);

        assert_eq!(region.added().len(), 2);
        assert_eq!(region.subtracted(), vec![Primitive::circle(Point::new(5.0, 10.0), 1.0)]);
        assert_eq!(region.operation_count(), 2);
        assert_eq!(region.leaves().len(), 3);
    }

    #[test]
    fn test_nested_difference_flips_sign() {
        let k = TreeKernel::new();
        let a = k.build(&Primitive::rectangle(0.0, 0.0, 10.0, 10.0));
        let b = k.build(&Primitive::rectangle(2.0, 2.0, 6.0, 6.0));
        let c = k.build(&Primitive::rectangle(4.0, 4.0, 2.0, 2.0));
        // a - (b - c): c is material again.
        let region = k.difference(&a, &k.difference(&b, &c));
        assert_eq!(region.added().len(), 2);
        assert_eq!(region.subtracted().len(), 1);
    }

    #[test]
    fn test_translate_pushes_into_leaves() {
        let k = TreeKernel::new();
        let r = k.union(
            &k.build(&Primitive::rectangle(0.0, 0.0, 1.0, 1.0)),
            &k.build(&Primitive::rectangle(1.0, 0.0, 1.0, 1.0)),
        );
        let moved = k.translate(&r, 10.0, 20.0);
        assert_eq!(
            moved.leaves()[1],
            Primitive::rectangle(11.0, 20.0, 1.0, 1.0)
        );
        assert_eq!(k.bounds(&moved), Some(Bounds::new(10.0, 20.0, 12.0, 21.0)));
    }
}
