use std::fmt;

use super::quadric::{QuadricFrame, QuadricSurface};
use crate::math::{point::Point, tuple::Tuple, vector::Vector};

/// Single-nappe cone `x² + z² = s·y²` with `s = r² / height`,
/// apex at the centre, `0 ≤ y ≤ height`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cone {
    frame: QuadricFrame,
    radius: f64,
    height: f64,
    scale: f64,
}

impl Cone {
    pub fn new(center: Point, centerline: Vector, radius: f64, height: f64) -> Self {
        Self {
            frame: QuadricFrame::new(center, centerline),
            radius,
            height,
            scale: radius.powi(2) / height,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl QuadricSurface for Cone {
    fn frame(&self) -> &QuadricFrame {
        &self.frame
    }

    fn coefficients(&self, origin: Point, direction: Vector) -> (f64, f64, f64) {
        let s = self.scale;
        let a = direction.x().powi(2) + direction.z().powi(2) - s * direction.y().powi(2);
        let b = 2.
            * (origin.x() * direction.x() + origin.z() * direction.z()
                - s * direction.y() * origin.y());
        let c = origin.x().powi(2) + origin.z().powi(2) - s * origin.y().powi(2);
        (a, b, c)
    }

    fn contains_height(&self, y: f64) -> bool {
        (0. ..=self.height).contains(&y)
    }

    fn local_normal_at(&self, point: Point) -> Vector {
        Vector::new(2. * point.x(), -2. * self.scale * point.y(), 2. * point.z())
    }
}

impl fmt::Display for Cone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cone Data")?;
        writeln!(f, "{}", self.frame)?;
        writeln!(f, "Radius     - {:.6}", self.radius)?;
        writeln!(f, "Height     - {:.6}", self.height)?;
        write!(f, "Scale      - {:.6}", self.scale)
    }
}
