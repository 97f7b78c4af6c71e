//! # BoxKit Core
//!
//! Core types and utilities shared by the BoxKit crates.
//! Provides planar value types, measurement units, and the common
//! error type used by configuration and I/O layers.

pub mod error;
pub mod types;
pub mod units;

pub use error::{Error, Result};
pub use types::{Bounds, Point, Size};
pub use units::{MeasurementSystem, Units};
