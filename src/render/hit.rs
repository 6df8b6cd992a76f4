use crate::math::{point::Point, vector::Vector};

/// Where a ray meets a surface. Returned by value from every intersection test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    distance: f64,
    point: Point,
    normal: Vector,
}

impl Hit {
    pub fn new(distance: f64, point: Point, normal: Vector) -> Self {
        Self {
            distance,
            point,
            normal,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// The closer of two optional hits.
    pub fn nearest(first: Option<Hit>, second: Option<Hit>) -> Option<Hit> {
        match (first, second) {
            (Some(a), Some(b)) => Some(if b.distance < a.distance { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}
