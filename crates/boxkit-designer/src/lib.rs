//! # BoxKit Designer
//!
//! Planar geometry for laser and CNC cut parts.
//!
//! ## Components
//!
//! - **Shapes**: [`Primitive`] rectangles, rounded rectangles, and circles
//! - **Kernel**: the [`GeometryKernel`] trait that every boolean engine implements
//! - **Kernels**: [`CsgKernel`] (csgrs polygon booleans) and [`TreeKernel`]
//!   (an unevaluated expression tree used as a deterministic test double)
//! - **Ops**: [`union_all`] and [`subtract_all`], which leave the base region
//!   untouched when there is nothing to combine
//!
//! ## Architecture
//!
//! ```text
//! Primitive ──build──▶ Region ──union/difference──▶ Region
//!                         │
//!                         └──contours──▶ closed rings for export
//! ```
//!
//! Kernels are plain values handed to whoever needs them. Nothing here keeps
//! global state, so a kernel can be shared across threads or swapped out in
//! tests.

pub mod csg_kernel;
pub mod kernel;
pub mod ops;
pub mod shapes;
pub mod tree_kernel;

pub use boxkit_core::{Bounds, Point, Size};
pub use csg_kernel::CsgKernel;
pub use kernel::{Contour, GeometryKernel};
pub use ops::{subtract_all, union_all};
pub use shapes::{Primitive, CIRCLE_SEGMENTS, CORNER_SEGMENTS};
pub use tree_kernel::{CsgTree, TreeKernel};
