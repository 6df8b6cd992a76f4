use std::fmt;

use crate::math::color::Color;

/// Reflectance of a surface under ambient light, diffuse light and mirror reflection.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl Material {
    pub fn new(ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    pub fn matte(ambient: Color, diffuse: Color) -> Self {
        Self::new(ambient, diffuse, Color::black())
    }

    pub fn is_reflective(&self) -> bool {
        !self.specular.is_black()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ambient  - {}", self.ambient)?;
        writeln!(f, "Diffuse  - {}", self.diffuse)?;
        write!(f, "Specular - {}", self.specular)
    }
}
