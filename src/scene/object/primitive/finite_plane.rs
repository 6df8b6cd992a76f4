use std::fmt;

use super::plane::Plane;
use crate::{
    math::{matrix::Matrix, point::Point, tuple::Tuple, vector::Vector},
    render::{hit::Hit, ray::Ray},
};

/// 2-D coordinate system lying in a plane.
///
/// Rows: x̂ (the declared x direction with its normal component removed),
/// ŷ = n̂ × x̂, and n̂.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneFrame {
    x_direction: Vector,
    rotation: Matrix,
}

impl PlaneFrame {
    pub fn new(normal: Vector, x_direction: Vector) -> Self {
        let z = normal.normalize();
        let x = x_direction.normalize().project_onto_plane(z).normalize();
        let y = z.cross(x).normalize();

        Self {
            x_direction,
            rotation: Matrix::from_rows(x, y, z),
        }
    }

    pub fn x_direction(&self) -> Vector {
        self.x_direction
    }

    /// Coordinates of `point` along x̂ and ŷ measured from `origin`.
    pub fn local_coordinates(&self, origin: Point, point: Point) -> (f64, f64) {
        let local = self.rotation * (point - origin);
        (local.x(), local.y())
    }
}

/// Rectangle `[0, width] × [0, height]` in the plane's local frame,
/// anchored at the plane's point.
#[derive(Clone, Debug, PartialEq)]
pub struct FinitePlane {
    plane: Plane,
    frame: PlaneFrame,
    size: (f64, f64),
}

impl FinitePlane {
    pub fn new(plane: Plane, x_direction: Vector, size: (f64, f64)) -> Self {
        let frame = PlaneFrame::new(plane.normal(), x_direction);
        Self { plane, frame, size }
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let hit = self.plane.intersect(ray)?;

        let (x, y) = self
            .frame
            .local_coordinates(self.plane.point(), hit.point());
        let (width, height) = self.size;
        if !(0. ..=width).contains(&x) || !(0. ..=height).contains(&y) {
            return None;
        }
        Some(hit)
    }
}

impl fmt::Display for FinitePlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.plane)?;
        writeln!(f, "X dir   - {}", self.frame.x_direction())?;
        write!(f, "Size    - {:.6} {:.6}", self.size.0, self.size.1)
    }
}
