pub mod io;
pub mod light;
pub mod object;

use std::fmt;

use light::Light;
use object::{Object, ObjectId};

use crate::render::{hit::Hit, projection::Projection, ray::Ray};

/// Everything needed to render: the projection, the objects and the lights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    projection: Projection,
    objects: Vec<Object>,
    lights: Vec<Light>,
}

impl Model {
    /// Hits closer than this are treated as the ray grazing its own origin.
    pub const MIN_HIT_DISTANCE: f64 = 1.0e-14;

    pub fn new(projection: Projection) -> Self {
        Self {
            projection,
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Nearest object struck by `ray`, skipping `exclude`.
    ///
    /// Only hits at least `MIN_HIT_DISTANCE` away count. On equal distances
    /// the object added first wins.
    pub fn find_closest(&self, ray: &Ray, exclude: Option<ObjectId>) -> Option<(&Object, Hit)> {
        let mut closest: Option<(&Object, Hit)> = None;

        for object in &self.objects {
            if Some(object.id()) == exclude {
                continue;
            }
            let Some(hit) = object.intersect(ray) else {
                continue;
            };
            if hit.distance() < Self::MIN_HIT_DISTANCE {
                continue;
            }
            if closest.is_none_or(|(_, best)| hit.distance() < best.distance()) {
                closest = Some((object, hit));
            }
        }
        closest
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.projection)?;
        writeln!(f)?;
        writeln!(f, "Lights")?;
        for light in &self.lights {
            writeln!(f, "{light}")?;
            writeln!(f)?;
        }
        writeln!(f, "Objects")?;
        for object in &self.objects {
            writeln!(f, "{object}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
