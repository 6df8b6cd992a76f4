use std::fmt;

use super::{
    material::Material,
    primitive::{
        cone::Cone, cylinder::Cylinder, finite_plane::FinitePlane, hyperboloid::Hyperboloid,
        paraboloid::Paraboloid, plane::Plane, quadric::QuadricSurface, sphere::Sphere,
        tiled_plane::TiledPlane,
    },
    procedural::{PlaneShader, SphereShader},
};
use crate::{
    math::color::Color,
    render::{hit::Hit, ray::Ray},
};

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    /// Infinite plane
    Plane(Plane),
    /// Rectangle in a plane, anchored at the plane's point
    FinitePlane(FinitePlane),
    /// Unbounded checkerboard plane with a background material
    TiledPlane(TiledPlane),
    /// Plane whose ambient colour comes from a shader
    ProceduralPlane(Plane, PlaneShader),
    /// Sphere whose ambient colour comes from a shader
    ProceduralSphere(Sphere, SphereShader),
    Cylinder(Cylinder),
    Cone(Cone),
    Paraboloid(Paraboloid),
    Hyperboloid(Hyperboloid),
}

impl Shape {
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Shape::Sphere(sphere) | Shape::ProceduralSphere(sphere, _) => sphere.intersect(ray),
            Shape::Plane(plane) | Shape::ProceduralPlane(plane, _) => plane.intersect(ray),
            Shape::FinitePlane(plane) => plane.intersect(ray),
            Shape::TiledPlane(plane) => plane.intersect(ray),
            Shape::Cylinder(cylinder) => cylinder.intersect(ray),
            Shape::Cone(cone) => cone.intersect(ray),
            Shape::Paraboloid(paraboloid) => paraboloid.intersect(ray),
            Shape::Hyperboloid(hyperboloid) => hyperboloid.intersect(ray),
        }
    }

    /// Material in effect at `hit`, given the object's own material.
    pub fn material_at<'a>(&'a self, material: &'a Material, hit: &Hit) -> &'a Material {
        match self {
            Shape::TiledPlane(plane) => plane.select(material, hit),
            _ => material,
        }
    }

    pub fn ambient_at(&self, material: &Material, hit: &Hit) -> Color {
        match self {
            Shape::ProceduralPlane(plane, shader) => {
                shader.ambient(material.ambient, plane.point(), hit)
            }
            Shape::ProceduralSphere(sphere, shader) => {
                shader.ambient(material.ambient, sphere.center(), hit)
            }
            _ => self.material_at(material, hit).ambient,
        }
    }

    pub fn diffuse_at(&self, material: &Material, hit: &Hit) -> Color {
        self.material_at(material, hit).diffuse
    }

    pub fn specular_at(&self, material: &Material, hit: &Hit) -> Color {
        self.material_at(material, hit).specular
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::FinitePlane(_) => "fplane",
            Shape::TiledPlane(_) => "tplane",
            Shape::ProceduralPlane(..) => "pplane",
            Shape::ProceduralSphere(..) => "psphere",
            Shape::Cylinder(_) => "cylinder",
            Shape::Cone(_) => "cone",
            Shape::Paraboloid(_) => "paraboloid",
            Shape::Hyperboloid(_) => "hyperboloid",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Sphere(sphere) => write!(f, "{sphere}"),
            Shape::Plane(plane) => write!(f, "{plane}"),
            Shape::FinitePlane(plane) => write!(f, "{plane}"),
            Shape::TiledPlane(plane) => write!(f, "{plane}"),
            Shape::ProceduralPlane(plane, shader) => {
                write!(f, "{plane}\nShader  - {}", shader.selector())
            }
            Shape::ProceduralSphere(sphere, shader) => {
                write!(f, "{sphere}\nShader  - {}", shader.selector())
            }
            Shape::Cylinder(cylinder) => write!(f, "{cylinder}"),
            Shape::Cone(cone) => write!(f, "{cone}"),
            Shape::Paraboloid(paraboloid) => write!(f, "{paraboloid}"),
            Shape::Hyperboloid(hyperboloid) => write!(f, "{hyperboloid}"),
        }
    }
}
