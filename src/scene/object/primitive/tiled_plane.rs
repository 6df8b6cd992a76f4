use std::fmt;

use super::{finite_plane::PlaneFrame, plane::Plane};
use crate::{
    math::vector::Vector,
    render::{hit::Hit, ray::Ray},
    scene::object::material::Material,
};

/// Unbounded checkerboard plane alternating between the object's own
/// material and a background material.
#[derive(Clone, Debug, PartialEq)]
pub struct TiledPlane {
    plane: Plane,
    frame: PlaneFrame,
    tile_size: (f64, f64),
    background: Material,
}

impl TiledPlane {
    /// Keeps tile indices positive for any reasonable local coordinate,
    /// so truncation behaves like flooring.
    const TILE_INDEX_OFFSET: f64 = 10000.;

    pub fn new(
        plane: Plane,
        x_direction: Vector,
        tile_size: (f64, f64),
        background: Material,
    ) -> Self {
        let frame = PlaneFrame::new(plane.normal(), x_direction);
        Self {
            plane,
            frame,
            tile_size,
            background,
        }
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }
    pub fn background(&self) -> &Material {
        &self.background
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.plane.intersect(ray)
    }

    /// Whether the tile under `hit` uses the object's own material.
    pub fn is_foreground_tile(&self, hit: &Hit) -> bool {
        let (x, y) = self
            .frame
            .local_coordinates(self.plane.point(), hit.point());
        let column = ((Self::TILE_INDEX_OFFSET + x) / self.tile_size.0) as i64;
        let row = ((Self::TILE_INDEX_OFFSET + y) / self.tile_size.1) as i64;

        (column + row) & 1 == 1
    }

    /// Material of the tile under `hit`.
    pub fn select<'a>(&'a self, own: &'a Material, hit: &Hit) -> &'a Material {
        if self.is_foreground_tile(hit) {
            own
        } else {
            &self.background
        }
    }
}

impl fmt::Display for TiledPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.plane)?;
        writeln!(f, "X dir   - {}", self.frame.x_direction())?;
        writeln!(
            f,
            "Tiles   - {:.6} {:.6}",
            self.tile_size.0, self.tile_size.1
        )?;
        writeln!(f, "Background")?;
        write!(f, "{}", self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{color::Color, point::Point, tuple::Tuple};

    fn checkerboard() -> TiledPlane {
        let plane = Plane::new(Vector::new(0., 0., 1.), Point::new(0., 0., -5.));
        let background = Material::matte(Color::black(), Color::white());
        TiledPlane::new(plane, Vector::new(1., 0., 0.), (1., 1.), background)
    }

    fn hit_through(x: f64, y: f64) -> Hit {
        let ray = Ray::new(Point::new(x, y, 0.), Vector::new(0., 0., -1.));
        checkerboard().intersect(&ray).unwrap()
    }

    #[test]
    fn plane_is_not_clipped_to_one_tile() {
        let hit = hit_through(250.5, -130.5);
        assert_eq!(hit.point(), Point::new(250.5, -130.5, -5.));
    }

    #[test]
    fn tiles_alternate_across_edges() {
        let tiled = checkerboard();
        let examples = vec![
            ((0.5, 0.5), false),
            ((1.5, 0.5), true),
            ((0.5, 1.5), true),
            ((1.5, 1.5), false),
            ((-0.5, 0.5), true),
            ((-0.5, -0.5), false),
        ];
        for ((x, y), foreground) in examples {
            assert_eq!(
                tiled.is_foreground_tile(&hit_through(x, y)),
                foreground,
                "tile at ({x}, {y})"
            );
        }
    }

    #[test]
    fn select_picks_material_for_tile() {
        let tiled = checkerboard();
        let own = Material::matte(Color::red(), Color::red());

        assert_eq!(tiled.select(&own, &hit_through(1.5, 0.5)), &own);
        assert_eq!(
            tiled.select(&own, &hit_through(0.5, 0.5)),
            tiled.background()
        );
    }
}
