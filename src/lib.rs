pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod matrix;
    pub mod point;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod canvas;
    pub mod hit;
    pub mod projection;
    pub mod ray;
}

pub mod scene;

pub mod shading {
    pub mod integrator;
}

pub use math::{color::Color, point::Point, tuple::Tuple, vector::Vector};
pub use scene::{Model, io::records};
pub use shading::integrator::{Integrator, IntegratorBuilder};
