//! Boolean composition helpers.
//!
//! Combining a base region with an empty feature list returns the base
//! unchanged instead of handing the kernel an empty operand.

use crate::kernel::GeometryKernel;
use crate::shapes::Primitive;

/// Union every feature into `base`, in order.
pub fn union_all<K: GeometryKernel>(
    kernel: &K,
    base: &K::Region,
    features: &[Primitive],
) -> K::Region {
    features.iter().fold(base.clone(), |acc, feature| {
        kernel.union(&acc, &kernel.build(feature))
    })
}

/// Subtract the union of `cutters` from `base` with a single difference.
pub fn subtract_all<K: GeometryKernel>(
    kernel: &K,
    base: &K::Region,
    cutters: &[Primitive],
) -> K::Region {
    let Some((first, rest)) = cutters.split_first() else {
        return base.clone();
    };
    let tool = union_all(kernel, &kernel.build(first), rest);
    kernel.difference(base, &tool)
}
