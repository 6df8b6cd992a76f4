use std::fmt;

use super::quadric::{QuadricFrame, QuadricSurface};
use crate::math::{point::Point, tuple::Tuple, vector::Vector};

/// Hyperboloid of one sheet `x² + z² − s·y² = rc²` with
/// `s = (r² − rc²) / height²`, waist at the centre, `−height ≤ y ≤ height`.
///
/// `radius` is the radius at both rims, `waist_radius` the radius at the centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Hyperboloid {
    frame: QuadricFrame,
    radius: f64,
    height: f64,
    waist_radius: f64,
    scale: f64,
}

impl Hyperboloid {
    pub fn new(
        center: Point,
        centerline: Vector,
        radius: f64,
        height: f64,
        waist_radius: f64,
    ) -> Self {
        Self {
            frame: QuadricFrame::new(center, centerline),
            radius,
            height,
            waist_radius,
            scale: (radius.powi(2) - waist_radius.powi(2)) / height.powi(2),
        }
    }
}

impl QuadricSurface for Hyperboloid {
    fn frame(&self) -> &QuadricFrame {
        &self.frame
    }

    fn coefficients(&self, origin: Point, direction: Vector) -> (f64, f64, f64) {
        let s = self.scale;
        let a = direction.x().powi(2) + direction.z().powi(2) - s * direction.y().powi(2);
        let b = 2.
            * (origin.x() * direction.x() + origin.z() * direction.z()
                - s * direction.y() * origin.y());
        let c = origin.x().powi(2) + origin.z().powi(2)
            - s * origin.y().powi(2)
            - self.waist_radius.powi(2);
        (a, b, c)
    }

    fn contains_height(&self, y: f64) -> bool {
        (-self.height..=self.height).contains(&y)
    }

    fn local_normal_at(&self, point: Point) -> Vector {
        Vector::new(2. * point.x(), -2. * self.scale * point.y(), 2. * point.z())
    }
}

impl fmt::Display for Hyperboloid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hyperboloid Data")?;
        writeln!(f, "{}", self.frame)?;
        writeln!(f, "Radius     - {:.6}", self.radius)?;
        writeln!(f, "Height     - {:.6}", self.height)?;
        writeln!(f, "Radius C   - {:.6}", self.waist_radius)?;
        write!(f, "Scale      - {:.6}", self.scale)
    }
}
