pub mod material;
pub mod primitive;
pub mod procedural;
pub mod shape;

use std::fmt;

use material::Material;
use shape::Shape;

use crate::{
    math::color::Color,
    render::{hit::Hit, ray::Ray},
};

/// Identity of a scene entity, unique within one model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out increasing ids to lights and objects while a model is built.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub const FIRST_ID: u32 = 100;

    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            next: Self::FIRST_ID,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    id: ObjectId,
    material: Material,
    shape: Shape,
}

impl Object {
    pub fn new(id: ObjectId, material: Material, shape: Shape) -> Self {
        Self {
            id,
            material,
            shape,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }
    pub fn material(&self) -> &Material {
        &self.material
    }
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.shape.intersect(ray)
    }

    pub fn ambient_at(&self, hit: &Hit) -> Color {
        self.shape.ambient_at(&self.material, hit)
    }
    pub fn diffuse_at(&self, hit: &Hit) -> Color {
        self.shape.diffuse_at(&self.material, hit)
    }
    pub fn specular_at(&self, hit: &Hit) -> Color {
        self.shape.specular_at(&self.material, hit)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Object {} - {}", self.id, self.shape.type_name())?;
        writeln!(f, "{}", self.material)?;
        write!(f, "{}", self.shape)
    }
}
