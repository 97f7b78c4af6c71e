//! Planar primitives.
//!
//! Primitives are plain data. A kernel turns them into regions; the
//! [`Primitive::outline`] polygonisation is shared by every kernel so the
//! same primitive always yields the same vertices.

use boxkit_core::{Bounds, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Segments used to approximate a full circle.
pub const CIRCLE_SEGMENTS: usize = 64;

/// Segments used to approximate each quarter-circle corner of a rounded rectangle.
pub const CORNER_SEGMENTS: usize = 8;

/// A closed planar shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Axis-aligned rectangle with its lower-left corner at `(x, y)`.
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Rectangle with four equal rounded corners.
    RoundedRectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    },
    Circle { center: Point, radius: f64 },
}

impl Primitive {
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Primitive::Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rounded_rectangle(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Self {
        Primitive::RoundedRectangle {
            x,
            y,
            width,
            height,
            radius,
        }
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Primitive::Circle { center, radius }
    }

    pub fn bounds(&self) -> Bounds {
        match *self {
            Primitive::Rectangle {
                x,
                y,
                width,
                height,
            }
            | Primitive::RoundedRectangle {
                x,
                y,
                width,
                height,
                ..
            } => Bounds::new(x, y, x + width, y + height),
            Primitive::Circle { center, radius } => Bounds::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
        }
    }

    /// Return this primitive moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        match *self {
            Primitive::Rectangle {
                x,
                y,
                width,
                height,
            } => Primitive::rectangle(x + dx, y + dy, width, height),
            Primitive::RoundedRectangle {
                x,
                y,
                width,
                height,
                radius,
            } => Primitive::rounded_rectangle(x + dx, y + dy, width, height, radius),
            Primitive::Circle { center, radius } => {
                Primitive::circle(center.offset(dx, dy), radius)
            }
        }
    }

    /// Counter-clockwise outline without a repeated closing vertex.
    pub fn outline(&self) -> Vec<Point> {
        match *self {
            Primitive::Rectangle {
                x,
                y,
                width,
                height,
            } => rectangle_outline(x, y, width, height),
            Primitive::RoundedRectangle {
                x,
                y,
                width,
                height,
                radius,
            } => {
                let r = radius.min(width / 2.0).min(height / 2.0);
                if r <= 1e-9 {
                    return rectangle_outline(x, y, width, height);
                }
                let corners = [
                    (x + r, y + r, PI),
                    (x + width - r, y + r, 1.5 * PI),
                    (x + width - r, y + height - r, 0.0),
                    (x + r, y + height - r, FRAC_PI_2),
                ];
                let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
                for (cx, cy, start) in corners {
                    for i in 0..=CORNER_SEGMENTS {
                        let theta = start + FRAC_PI_2 * (i as f64) / (CORNER_SEGMENTS as f64);
                        points.push(Point::new(cx + r * theta.cos(), cy + r * theta.sin()));
                    }
                }
                points
            }
            Primitive::Circle { center, radius } => (0..CIRCLE_SEGMENTS)
                .map(|i| {
                    let theta = 2.0 * PI * (i as f64) / (CIRCLE_SEGMENTS as f64);
                    Point::new(
                        center.x + radius * theta.cos(),
                        center.y + radius * theta.sin(),
                    )
                })
                .collect(),
        }
    }

    /// Radius of a circle primitive.
    pub fn circle_radius(&self) -> Option<f64> {
        match self {
            Primitive::Circle { radius, .. } => Some(*radius),
            _ => None,
        }
    }
}

fn rectangle_outline(x: f64, y: f64, width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}
