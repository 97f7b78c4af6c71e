//! Laser G-code for a generated box.

use super::types::{require_positive, BoxParameters};
use super::BoxModel;
use crate::error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
use boxkit_core::Point;
use boxkit_designer::{Contour, GeometryKernel};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::debug;

/// Points closer than this are merged when emitting moves (mm).
const DUPLICATE_POINT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserSettings {
    /// Times each contour is traced
    pub passes: u32,
    /// Spindle value sent with M3
    pub power: u32,
    /// Cutting feed rate (mm/min)
    pub feed_rate: f64,
    /// Where the lowest X of the sheet lands on the machine
    pub offset_x: f64,
    /// Where the lowest Y of the sheet lands on the machine
    pub offset_y: f64,
    /// Emit `$H` before cutting
    pub home_before_start: bool,
}

impl Default for LaserSettings {
    fn default() -> Self {
        Self {
            passes: 3,
            power: 1000,
            feed_rate: 500.0,
            offset_x: 10.0,
            offset_y: 10.0,
            home_before_start: false,
        }
    }
}

impl LaserSettings {
    pub fn validate(&self) -> ParameterResult<()> {
        if self.passes == 0 {
            return Err(ParameterError::InvalidValue {
                name: "passes".to_string(),
                reason: "at least one pass is required".to_string(),
            });
        }
        if self.power == 0 {
            return Err(ParameterError::InvalidValue {
                name: "power".to_string(),
                reason: "laser power must be greater than zero".to_string(),
            });
        }
        require_positive("feed_rate", self.feed_rate)?;
        for (name, value) in [("offset_x", self.offset_x), ("offset_y", self.offset_y)] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Turns a [`BoxModel`] into a laser cutting program.
#[derive(Debug, Clone, Default)]
pub struct GcodeEmitter {
    settings: LaserSettings,
}

impl GcodeEmitter {
    pub fn new(settings: LaserSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LaserSettings {
        &self.settings
    }

    /// Emit G-code for every panel of `model`.
    ///
    /// Holes are cut before the outline that contains them so a panel never
    /// drops out of the sheet while it still has interior cuts pending.
    pub fn emit<K: GeometryKernel>(
        &self,
        kernel: &K,
        model: &BoxModel<K::Region>,
        params: &BoxParameters,
    ) -> CamToolResult<String> {
        self.settings.validate()?;

        let panels: Vec<(&'static str, Vec<Contour>)> = model
            .panels
            .iter()
            .map(|p| (p.name(), cut_order(kernel.contours(&p.region))))
            .collect();

        let all_points = panels
            .iter()
            .flat_map(|(_, contours)| contours.iter())
            .flat_map(|c| c.points.iter());
        let (min_x, min_y) = all_points.fold((f64::INFINITY, f64::INFINITY), |(x, y), p| {
            (x.min(p.x), y.min(p.y))
        });
        if !(min_x.is_finite() && min_y.is_finite()) {
            return Err(CamToolError::GenerationFailed(
                "model has no contours to cut".to_string(),
            ));
        }
        let shift_x = self.settings.offset_x - min_x;
        let shift_y = self.settings.offset_y - min_y;

        let mut gcode = String::new();
        self.write_header(&mut gcode, params)?;

        for (i, (name, contours)) in panels.iter().enumerate() {
            writeln!(gcode, "; Panel {}: {}", i + 1, name)?;
            for contour in contours {
                let points = dedup_points(&contour.points, shift_x, shift_y);
                self.write_contour(&mut gcode, &points, contour.is_hole)?;
            }
            gcode.push('\n');
            debug!(panel = %name, contours = contours.len(), "emitted panel");
        }

        gcode.push_str("M5 ; Ensure laser off\n");
        gcode.push_str("G0 X0 Y0 ; Return to origin\n");
        gcode.push_str("M2 ; Program end\n");
        Ok(gcode)
    }

    fn write_header(&self, gcode: &mut String, params: &BoxParameters) -> std::fmt::Result {
        let s = &self.settings;
        gcode.push_str("; Hinged Box Maker G-code\n");
        gcode.push_str(";\n");
        gcode.push_str("; --- Box Dimensions ---\n");
        writeln!(
            gcode,
            "; Width x Depth x Height: {:.2} x {:.2} x {:.2} mm",
            params.width, params.depth, params.height
        )?;
        writeln!(gcode, "; Tab width: {:.2} mm", params.tab_width)?;
        writeln!(gcode, "; Access hole: {}", params.add_right_hole)?;
        gcode.push_str(";\n");
        gcode.push_str("; --- Material Settings ---\n");
        writeln!(gcode, "; Thickness: {:.2} mm", params.thickness)?;
        writeln!(gcode, "; Kerf: {:.3} mm", params.kerf)?;
        gcode.push_str(";\n");
        gcode.push_str("; --- Laser Settings ---\n");
        writeln!(gcode, "; Laser passes: {}", s.passes)?;
        writeln!(gcode, "; Laser power: S{}", s.power)?;
        writeln!(gcode, "; Feed rate: {:.0} mm/min", s.feed_rate)?;
        writeln!(gcode, "; Offset X: {:.2} mm", s.offset_x)?;
        writeln!(gcode, "; Offset Y: {:.2} mm", s.offset_y)?;
        gcode.push_str(";\n");
        gcode.push_str("; Initialization\n");
        gcode.push_str("G21 ; Set units to millimeters\n");
        gcode.push_str("G90 ; Absolute positioning\n");
        gcode.push_str("G17 ; XY plane selection\n");
        if s.home_before_start {
            gcode.push_str("$H ; Home all axes\n");
        }
        gcode.push_str("G54 ; Select work coordinate system 1\n");
        gcode.push_str("M5 ; Laser off\n\n");
        Ok(())
    }

    fn write_contour(
        &self,
        gcode: &mut String,
        points: &[Point],
        is_hole: bool,
    ) -> std::fmt::Result {
        let s = &self.settings;
        let Some(first) = points.first() else {
            return Ok(());
        };
        let label = if is_hole { "hole" } else { "outline" };
        writeln!(
            gcode,
            "G0 X{:.3} Y{:.3} ; Rapid to {} start",
            first.x, first.y, label
        )?;

        for pass in 1..=s.passes {
            writeln!(gcode, "; Pass {}/{}", pass, s.passes)?;
            writeln!(gcode, "M3 S{} ; Laser on", s.power)?;
            for (idx, p) in points.iter().skip(1).chain(std::iter::once(first)).enumerate() {
                if idx == 0 {
                    writeln!(gcode, "G1 X{:.3} Y{:.3} F{:.0}", p.x, p.y, s.feed_rate)?;
                } else {
                    writeln!(gcode, "G1 X{:.3} Y{:.3}", p.x, p.y)?;
                }
            }
            gcode.push_str("M5 ; Laser off\n");
        }
        Ok(())
    }
}

/// Holes first, then outlines, each group keeping kernel order.
fn cut_order(contours: Vec<Contour>) -> Vec<Contour> {
    let (mut holes, outlines): (Vec<_>, Vec<_>) = contours.into_iter().partition(|c| c.is_hole);
    holes.extend(outlines);
    holes
}

fn dedup_points(points: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        let p = p.offset(dx, dy);
        if let Some(last) = out.last() {
            if (p.x - last.x).abs() < DUPLICATE_POINT_TOLERANCE
                && (p.y - last.y).abs() < DUPLICATE_POINT_TOLERANCE
            {
                continue;
            }
        }
        out.push(p);
    }
    out
}
