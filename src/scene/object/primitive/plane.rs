use std::fmt;

use crate::{
    math::{point::Point, tuple::Tuple, vector::Vector},
    render::{hit::Hit, ray::Ray},
};

/// Default clip applied to plane hits: anything in front of the z = 0 window
/// (towards a viewer on +z) is discarded.
pub const DEFAULT_PLANE_CLIP_Z: f64 = 1.0e-14;

/// Infinite plane through `point` with normal `normal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    normal: Vector,
    point: Point,
    /// Hits with a world z above this value are rejected.
    clip_z: Option<f64>,
}

impl Plane {
    pub fn new(normal: Vector, point: Point) -> Self {
        Self {
            normal,
            point,
            clip_z: None,
        }
    }

    pub fn with_clip_z(mut self, clip_z: Option<f64>) -> Self {
        self.clip_z = clip_z;
        self
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn clip_z(&self) -> Option<f64> {
        self.clip_z
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let normal_dot_dir = self.normal.dot(*ray.direction());
        if normal_dot_dir == 0. {
            return None;
        }

        let distance = (self.normal.dot(self.point.as_vector())
            - self.normal.dot(ray.origin().as_vector()))
            / normal_dot_dir;
        if distance < 0. {
            return None;
        }

        let point = ray.position(distance);
        if self.clip_z.is_some_and(|max_z| point.z() > max_z) {
            return None;
        }

        Some(Hit::new(distance, point, self.normal.normalize()))
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plane Data")?;
        writeln!(f, "Normal  - {}", self.normal)?;
        write!(f, "Point   - {}", self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    fn ground() -> Plane {
        Plane::new(Vector::new(0., 1., 0.), Point::zero())
    }

    #[test]
    fn ray_from_above_hits_ground() {
        let ray = Ray::new(Point::new(0., 5., 0.), Vector::new(0., -1., 0.));
        let hit = ground().intersect(&ray).unwrap();

        assert_approx_eq_low_prec!(hit.distance(), 5.);
        assert_approx_eq_low_prec!(hit.point(), Point::zero());
        assert_approx_eq_low_prec!(hit.normal(), Vector::new(0., 1., 0.));
    }

    #[test]
    fn parallel_ray_misses() {
        let examples = vec![
            Ray::new(Point::new(0., 5., 0.), Vector::new(1., 0., 0.)),
            Ray::new(Point::new(0., 0., 0.), Vector::new(0., 0., -1.)),
            Ray::new(Point::new(3., -2., 1.), Vector::new(1., 0., 1.)),
        ];
        for ray in examples {
            assert!(ground().intersect(&ray).is_none());
        }
    }

    #[test]
    fn plane_behind_ray_misses() {
        let ray = Ray::new(Point::new(0., 5., 0.), Vector::new(0., 1., 0.));
        assert!(ground().intersect(&ray).is_none());
    }

    #[test]
    fn normal_is_unit_length() {
        let plane = Plane::new(Vector::new(0., 0., 4.), Point::new(0., 0., -10.));
        let ray = Ray::new(Point::new(1., 1., 0.), Vector::new(0., 0., -1.));
        let hit = plane.intersect(&ray).unwrap();

        assert_approx_eq_low_prec!(hit.distance(), 10.);
        assert_approx_eq_low_prec!(hit.normal(), Vector::new(0., 0., 1.));
    }

    #[test]
    fn clip_rejects_hits_in_front_of_window() {
        let ray = Ray::new(Point::new(0., 5., 3.), Vector::new(0., -1., 0.));
        assert!(ground().intersect(&ray).is_some());
        assert!(
            ground()
                .with_clip_z(Some(DEFAULT_PLANE_CLIP_Z))
                .intersect(&ray)
                .is_none()
        );

        let behind_window = Ray::new(Point::new(0., 5., -3.), Vector::new(0., -1., 0.));
        assert!(
            ground()
                .with_clip_z(Some(DEFAULT_PLANE_CLIP_Z))
                .intersect(&behind_window)
                .is_some()
        );
    }
}
