use crate::math::{point::Point, vector::Vector};

#[derive(Clone, Copy, Debug, Default)]
pub struct Ray {
    origin: Point,
    /// Always unit length, so intersection parameters are Euclidean distances
    direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray starting at `origin` and passing through `target`.
    pub fn towards(origin: Point, target: Point) -> Self {
        Self::new(origin, target - origin)
    }

    pub fn position(&self, distance: f64) -> Point {
        self.origin + self.direction * distance
    }
    pub fn origin(&self) -> &Point {
        &self.origin
    }
    pub fn direction(&self) -> &Vector {
        &self.direction
    }
}
