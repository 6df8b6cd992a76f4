use std::fmt;

use crate::{
    math::{matrix::Matrix, point::Point, tuple::Tuple, vector::Vector},
    render::{hit::Hit, ray::Ray},
};

/// Local coordinate system of a quadric of revolution: origin at the
/// centre, local +Y along the centreline.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadricFrame {
    center: Point,
    centerline: Vector,
    rotation: Matrix,
    inverse_rotation: Matrix,
}

impl QuadricFrame {
    pub fn new(center: Point, centerline: Vector) -> Self {
        let rotation = Matrix::aligned_to_y(centerline);
        Self {
            center,
            centerline: centerline.normalize(),
            rotation,
            inverse_rotation: rotation.transpose(),
        }
    }

    /// Ray origin and direction expressed in the local frame.
    pub fn to_local(&self, ray: &Ray) -> (Point, Vector) {
        let origin = self.rotation * (*ray.origin() - self.center);
        (
            Point::zero() + origin,
            self.rotation * *ray.direction(),
        )
    }

    pub fn to_world_hit(&self, distance: f64, local_point: Point, local_normal: Vector) -> Hit {
        let point = self.center + self.inverse_rotation * local_point.as_vector();
        let normal = (self.inverse_rotation * local_normal).normalize();
        Hit::new(distance, point, normal)
    }
}

impl fmt::Display for QuadricFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Center     - {}", self.center)?;
        write!(f, "Centerline - {}", self.centerline)
    }
}

/// Both roots of `a·t² + b·t + c = 0`, smaller first.
///
/// A vanishing `a` falls back to the single linear root.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0. {
        if b == 0. {
            return None;
        }
        let t = -c / b;
        return Some((t, t));
    }

    let discriminant = b * b - 4. * a * c;
    if discriminant < 0. {
        return None;
    }

    let delta_sqrt = discriminant.sqrt();
    let t0 = (-b - delta_sqrt) / (2. * a);
    let t1 = (-b + delta_sqrt) / (2. * a);
    Some((t0.min(t1), t0.max(t1)))
}

/// Surface of revolution `f(x, y, z) = 0` around the local Y axis,
/// bounded along that axis.
pub trait QuadricSurface {
    fn frame(&self) -> &QuadricFrame;

    /// Coefficients of the quadratic in the ray parameter for a local ray.
    fn coefficients(&self, origin: Point, direction: Vector) -> (f64, f64, f64);

    /// Whether a local height lies inside the axial window.
    fn contains_height(&self, y: f64) -> bool;

    /// Unnormalised gradient of the surface at a local point.
    fn local_normal_at(&self, point: Point) -> Vector;

    /// Smaller of the roots inside the axial window. That root may lie behind
    /// the origin, so a ray starting inside an open quadric yields a negative
    /// distance which the nearest-hit search discards.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let (origin, direction) = self.frame().to_local(ray);
        let (a, b, c) = self.coefficients(origin, direction);
        let (t0, t1) = solve_quadratic(a, b, c)?;

        Hit::nearest(
            self.validate_root(origin, direction, t0),
            self.validate_root(origin, direction, t1),
        )
    }

    fn validate_root(&self, origin: Point, direction: Vector, t: f64) -> Option<Hit> {
        if !t.is_finite() {
            return None;
        }

        let local_point = origin + direction * t;
        if !self.contains_height(local_point.y()) {
            return None;
        }

        let local_normal = self.local_normal_at(local_point);
        if local_normal.is_zero() || !local_normal.magnitude().is_finite() {
            return None;
        }

        Some(self.frame().to_world_hit(t, local_point, local_normal))
    }
}
