//! # BoxKit
//!
//! Parametric hinged box generator for laser cutters.
//!
//! ## Architecture
//!
//! BoxKit is organized as a workspace with multiple crates:
//!
//! 1. **boxkit-core** - Shared value types, units, errors
//! 2. **boxkit-designer** - Primitives and pluggable boolean geometry kernels
//! 3. **boxkit-camtools** - Hinged box generator and laser G-code output
//! 4. **boxkit-settings** - Job configuration files
//! 5. **boxkit** - Command line front end that integrates all crates

use anyhow::Context;
use boxkit_core::units::{format_length, parse_length};
use std::fmt::Write;

pub use boxkit_camtools::{
    BoxModel, BoxParameters, CamToolError, GcodeEmitter, HingedBoxMaker, LaserSettings,
    PanelKind, PlacedPanel,
};
pub use boxkit_core::{Error, Result, Units};
pub use boxkit_designer::{CsgKernel, GeometryKernel, TreeKernel};
pub use boxkit_settings::{default_config_path, JobConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so G-code on stdout stays clean
/// - RUST_LOG environment variable support (default `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Dimension overrides given on the command line, in the job's units.
#[derive(Debug, Clone, Default)]
pub struct DimensionOverrides {
    pub width: Option<String>,
    pub depth: Option<String>,
    pub height: Option<String>,
    pub thickness: Option<String>,
}

impl DimensionOverrides {
    /// Parse each override in `job.units` and write it into the job.
    pub fn apply(&self, job: &mut JobConfig) -> anyhow::Result<()> {
        let system = job.units.measurement_system();
        let fields = [
            ("width", &self.width, &mut job.box_params.width),
            ("depth", &self.depth, &mut job.box_params.depth),
            ("height", &self.height, &mut job.box_params.height),
            ("thickness", &self.thickness, &mut job.box_params.thickness),
        ];
        for (name, input, target) in fields {
            if let Some(input) = input {
                *target = parse_length(input, system)
                    .map_err(|e| anyhow::anyhow!("Invalid {} '{}': {}", name, input, e))?;
            }
        }
        job.validate().context("Job is invalid after applying overrides")?;
        Ok(())
    }
}

/// Generate the box and render its laser program.
pub fn generate_gcode(job: &JobConfig) -> anyhow::Result<String> {
    let maker = HingedBoxMaker::new(CsgKernel::new());
    let model = maker
        .generate(&job.box_params)
        .context("Failed to generate box")?;
    let gcode = GcodeEmitter::new(job.laser.clone())
        .emit(maker.kernel(), &model, &job.box_params)
        .context("Failed to emit G-code")?;
    Ok(gcode)
}

/// Human readable listing of every panel, lengths in the job's units.
pub fn render_summary(job: &JobConfig) -> anyhow::Result<String> {
    let maker = HingedBoxMaker::new(CsgKernel::new());
    let model = maker
        .generate(&job.box_params)
        .context("Failed to generate box")?;
    let units = job.units;
    let len = |v: f64| format_length(v, units);

    let mut out = String::new();
    writeln!(
        out,
        "Hinged box {} x {} x {} {} (thickness {}, kerf {})",
        len(job.box_params.width),
        len(job.box_params.depth),
        len(job.box_params.height),
        units,
        len(job.box_params.thickness),
        len(job.box_params.kerf),
    )?;
    for panel in &model.panels {
        writeln!(
            out,
            "{:<7} size {} x {}  origin ({}, {})  footprint {} x {}  tabs {}  slots {}  hardware {}",
            panel.name(),
            len(panel.size.width),
            len(panel.size.height),
            len(panel.origin.x),
            len(panel.origin.y),
            len(panel.footprint.width),
            len(panel.footprint.height),
            panel.males.len(),
            panel.females.len(),
            panel.hardware.len(),
        )?;
    }
    if let Some(sheet) = model.sheet_bounds(maker.kernel()) {
        writeln!(
            out,
            "Sheet   {} x {} {}",
            len(sheet.width()),
            len(sheet.height()),
            units
        )?;
    }
    Ok(out)
}
