pub mod spotlight;

use std::fmt;

use spotlight::Spotlight;

use crate::{
    math::{color::Color, point::Point},
    scene::object::ObjectId,
};

/// Point light, optionally restricted to a spotlight cone.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    id: ObjectId,
    emissivity: Color,
    location: Point,
    spotlight: Option<Spotlight>,
}

impl Light {
    pub fn point(id: ObjectId, emissivity: Color, location: Point) -> Self {
        Self {
            id,
            emissivity,
            location,
            spotlight: None,
        }
    }

    pub fn spot(id: ObjectId, emissivity: Color, location: Point, spotlight: Spotlight) -> Self {
        Self {
            spotlight: Some(spotlight),
            ..Self::point(id, emissivity, location)
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }
    pub fn emissivity(&self) -> Color {
        self.emissivity
    }
    pub fn location(&self) -> Point {
        self.location
    }
    pub fn spotlight(&self) -> Option<&Spotlight> {
        self.spotlight.as_ref()
    }

    /// Visibility predicate independent of occlusion. Point lights see everything.
    pub fn illuminates(&self, point: Point) -> bool {
        self.spotlight
            .as_ref()
            .is_none_or(|spot| spot.illuminates(self.location, point))
    }

    pub fn type_name(&self) -> &'static str {
        match self.spotlight {
            Some(_) => "spotlight",
            None => "light",
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Object {} - {}", self.id, self.type_name())?;
        writeln!(f, "Emissivity - {}", self.emissivity)?;
        write!(f, "Location   - {}", self.location)?;
        if let Some(spot) = &self.spotlight {
            write!(f, "\n{spot}")?;
        }
        Ok(())
    }
}
