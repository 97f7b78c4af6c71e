//! # BoxKit CAM Tools
//!
//! Generators that turn a handful of dimensions into cut-ready geometry.
//!
//! ## Tools Included
//!
//! - **Hinged Box Maker**: six finger-jointed panels with a hinged lid,
//!   latch, and optional access hole, packed onto one sheet
//! - **Laser G-code**: cutting program for a generated box, holes before
//!   outlines, with multiple passes
//!
//! ## Example
//!
//! ```no_run
//! use boxkit_camtools::{BoxParameters, HingedBoxMaker};
//! use boxkit_designer::CsgKernel;
//!
//! let maker = HingedBoxMaker::new(CsgKernel::new());
//! let model = maker.generate(&BoxParameters::default())?;
//! assert_eq!(model.panels.len(), 6);
//! # Ok::<(), boxkit_camtools::CamToolError>(())
//! ```

pub mod error;
pub mod hinged_box;

pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use hinged_box::{
    BoxModel, BoxParameters, EdgePlan, EdgeRole, EdgeRoles, EdgeSide, GcodeEmitter,
    HardwareFeature, HardwareKind, HingedBoxMaker, LaserSettings, Operation, PanelKind,
    PanelOutline, PlacedPanel, PlacedTab, TabFeature, TabKind,
};
