use std::fmt;

use crate::{
    math::point::Point,
    render::{hit::Hit, ray::Ray},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point {
        self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Nearer root of the sphere equation along the ray.
    ///
    /// The root is returned even when it lies behind the ray origin;
    /// the nearest-hit search discards it.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let sphere_to_ray = *ray.origin() - self.center;

        let a = ray.direction().dot(*ray.direction());
        let b = 2. * ray.direction().dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - self.radius.powi(2);

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return None;
        }

        let distance = (-b - discriminant.sqrt()) / (2. * a);
        let point = ray.position(distance);
        Some(Hit::new(distance, point, (point - self.center).normalize()))
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sphere Data")?;
        writeln!(f, "Center  - {}", self.center)?;
        write!(f, "Radius  - {:.6}", self.radius)
    }
}
