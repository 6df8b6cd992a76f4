use std::fmt;

use crate::{
    math::{point::Point, tuple::Tuple},
    render::{canvas::Canvas, ray::Ray},
};

/// Maps output pixels onto a window in the z = 0 plane seen from a viewpoint.
///
/// The window is centred on the world origin. Pixel (0, 0) sits at the
/// window's bottom-left corner and pixel (W - 1, H - 1) at its top-right one.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pixel_width: usize,
    pixel_height: usize,
    world_width: f64,
    world_height: f64,
    viewpoint: Point,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(1, 1, 1., 1., Point::new(0., 0., 1.))
    }
}

impl Projection {
    pub fn new(
        pixel_width: usize,
        pixel_height: usize,
        world_width: f64,
        world_height: f64,
        viewpoint: Point,
    ) -> Self {
        Self {
            pixel_width,
            pixel_height,
            world_width,
            world_height,
            viewpoint,
        }
    }

    fn axis_to_world(pixel: f64, pixels: usize, world_size: f64) -> f64 {
        if pixels <= 1 {
            return 0.;
        }
        pixel / (pixels - 1) as f64 * world_size - world_size / 2.
    }

    /// World position of a (possibly fractional) pixel coordinate.
    pub fn world_point(&self, x: f64, y: f64) -> Point {
        Point::new(
            Self::axis_to_world(x, self.pixel_width, self.world_width),
            Self::axis_to_world(y, self.pixel_height, self.world_height),
            0.,
        )
    }

    pub fn ray_for_pixel(&self, x: f64, y: f64) -> Ray {
        Ray::towards(self.viewpoint, self.world_point(x, y))
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.pixel_width, self.pixel_height)
    }

    pub fn pixel_width(&self) -> usize {
        self.pixel_width
    }
    pub fn pixel_height(&self) -> usize {
        self.pixel_height
    }
    pub fn world_width(&self) -> f64 {
        self.world_width
    }
    pub fn world_height(&self) -> f64 {
        self.world_height
    }
    pub fn viewpoint(&self) -> Point {
        self.viewpoint
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Projection Data")?;
        writeln!(
            f,
            "Window size  - {:.6} {:.6}",
            self.world_width, self.world_height
        )?;
        writeln!(f, "Pixel size   - {} {}", self.pixel_width, self.pixel_height)?;
        write!(f, "Viewpoint    - {}", self.viewpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::vector::Vector};

    #[test]
    fn corners_map_to_window_edges() {
        let projection = Projection::new(3, 5, 2., 4., Point::new(0., 0., 5.));
        let examples = vec![
            ((0., 0.), Point::new(-1., -2., 0.)),
            ((2., 4.), Point::new(1., 2., 0.)),
            ((1., 2.), Point::new(0., 0., 0.)),
            ((0.5, 1.), Point::new(-0.5, -1., 0.)),
        ];
        for ((x, y), expected) in examples {
            assert_approx_eq_low_prec!(projection.world_point(x, y), expected);
        }
    }

    #[test]
    fn ray_points_from_viewpoint_through_window() {
        let projection = Projection::new(3, 3, 2., 2., Point::new(0., 0., 5.));
        let ray = projection.ray_for_pixel(1., 1.);
        assert_approx_eq_low_prec!(ray.origin(), &Point::new(0., 0., 5.));
        assert_approx_eq_low_prec!(ray.direction(), &Vector::new(0., 0., -1.));

        let corner = projection.ray_for_pixel(2., 2.);
        assert_approx_eq_low_prec!(corner.direction(), &Vector::new(1., 1., -5.).normalize());
    }

    #[test]
    fn single_pixel_axis_maps_to_center() {
        let projection = Projection::new(1, 1, 8., 6., Point::new(0., 0., 5.));
        assert_approx_eq_low_prec!(projection.world_point(0., 0.), Point::zero());
    }

    #[test]
    fn canvas_matches_pixel_size() {
        let canvas = Projection::new(7, 4, 8., 6., Point::new(0., 0., 5.)).canvas();
        assert_eq!((canvas.width(), canvas.height()), (7, 4));
    }
}
