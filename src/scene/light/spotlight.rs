use std::fmt;

use crate::math::{point::Point, vector::Vector};

/// Cone of illumination around a direction from the light.
#[derive(Clone, Debug, PartialEq)]
pub struct Spotlight {
    direction: Vector,
    half_angle: f64,
    cos_half_angle: f64,
}

impl Spotlight {
    /// `half_angle` is in degrees.
    pub fn new(direction: Vector, half_angle: f64) -> Self {
        Self {
            direction,
            half_angle,
            cos_half_angle: half_angle.to_radians().cos(),
        }
    }

    /// Spotlight at `location` aimed at `target`.
    pub fn aimed_at(location: Point, target: Point, half_angle: f64) -> Self {
        Self::new(target - location, half_angle)
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }
    pub fn half_angle(&self) -> f64 {
        self.half_angle
    }

    /// Whether `point` lies strictly inside the cone of a light at `location`.
    pub fn illuminates(&self, location: Point, point: Point) -> bool {
        let to_point = (point - location).normalize();
        to_point.dot(self.direction.normalize()) > self.cos_half_angle
    }
}

impl fmt::Display for Spotlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Direction  - {}", self.direction)?;
        write!(f, "Half angle - {:.6}", self.half_angle)
    }
}
