use std::fmt;

use super::quadric::{QuadricFrame, QuadricSurface};
use crate::math::{point::Point, tuple::Tuple, vector::Vector};

/// Open cylinder `x² + z² = r²`, `0 ≤ y ≤ height` in its local frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Cylinder {
    frame: QuadricFrame,
    radius: f64,
    height: f64,
}

impl Cylinder {
    pub fn new(center: Point, centerline: Vector, radius: f64, height: f64) -> Self {
        Self {
            frame: QuadricFrame::new(center, centerline),
            radius,
            height,
        }
    }
}

impl QuadricSurface for Cylinder {
    fn frame(&self) -> &QuadricFrame {
        &self.frame
    }

    fn coefficients(&self, origin: Point, direction: Vector) -> (f64, f64, f64) {
        let a = direction.x().powi(2) + direction.z().powi(2);
        let b = 2. * (origin.x() * direction.x() + origin.z() * direction.z());
        let c = origin.x().powi(2) + origin.z().powi(2) - self.radius.powi(2);
        (a, b, c)
    }

    fn contains_height(&self, y: f64) -> bool {
        (0. ..=self.height).contains(&y)
    }

    fn local_normal_at(&self, point: Point) -> Vector {
        Vector::new(point.x(), 0., point.z())
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cylinder Data")?;
        writeln!(f, "{}", self.frame)?;
        writeln!(f, "Radius     - {:.6}", self.radius)?;
        write!(f, "Height     - {:.6}", self.height)
    }
}
