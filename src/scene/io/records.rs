//! Line-oriented scene description.
//!
//! The stream opens with the projection (window size, then viewpoint) and
//! continues with records until end of input. A record is an integer type tag
//! on its own line followed by a fixed sequence of field groups (a point, a
//! color, a radius...). A group usually sits on one line but may continue on
//! the following lines. Anything after the last number of a group is a
//! comment. Blank lines are ignored.

use std::{io::Read, iter::Enumerate, str::Lines};

use derive_builder::Builder;
use thiserror::Error;

use crate::{
    math::{color::Color, point::Point, tuple::Tuple, vector::Vector},
    render::projection::Projection,
    scene::{
        Model,
        light::{Light, spotlight::Spotlight},
        object::{
            IdGenerator, Object,
            material::Material,
            primitive::{
                cone::Cone, cylinder::Cylinder, finite_plane::FinitePlane,
                hyperboloid::Hyperboloid, paraboloid::Paraboloid,
                plane::{DEFAULT_PLANE_CLIP_Z, Plane},
                sphere::Sphere,
                tiled_plane::TiledPlane,
            },
            procedural::{PlaneShader, SphereShader},
            shape::Shape,
        },
    },
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: unexpected end of input while reading {what}")]
    UnexpectedEof { line: usize, what: &'static str },
    #[error("line {line}: `{token}` is not a valid object type tag")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: expected {expected} numbers for {what}, found {found}")]
    FieldCount {
        line: usize,
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: unknown object type {tag}")]
    UnknownObjectType { line: usize, tag: i64 },
    #[error("line {line}: shader selector {selector} is out of range 0-3")]
    InvalidShader { line: usize, selector: f64 },
    #[error("line {line}: radius must not be negative, got {radius}")]
    NegativeRadius { line: usize, radius: f64 },
    #[error("line {line}: centerline must not be the zero vector")]
    DegenerateAxis { line: usize },
    #[error("failed to read scene description: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(default)]
pub struct ParseOptions {
    pixel_width: usize,
    pixel_height: usize,
    /// Plane hits with a world z above this are discarded; `None` disables the clip
    plane_clip_z: Option<f64>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            pixel_width: Self::DEFAULT_PIXEL_WIDTH,
            pixel_height: Self::DEFAULT_PIXEL_HEIGHT,
            plane_clip_z: Some(DEFAULT_PLANE_CLIP_Z),
        }
    }
}

impl ParseOptions {
    pub const DEFAULT_PIXEL_WIDTH: usize = 640;
    pub const DEFAULT_PIXEL_HEIGHT: usize = 480;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Light,
    Spotlight,
    Shape(ShapeType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Sphere,
    Plane,
    FinitePlane,
    TiledPlane,
    ProceduralSphere,
    ProceduralPlane,
    Paraboloid,
    Cylinder,
    Cone,
    Hyperboloid,
}

impl ObjectType {
    /// Tags 12, 17 and 18 (projector, textured plane, reflective sphere) are reserved.
    pub fn from_tag(tag: i64) -> Option<Self> {
        let shape = match tag {
            10 => return Some(Self::Light),
            11 => return Some(Self::Spotlight),
            13 => ShapeType::Sphere,
            14 => ShapeType::Plane,
            15 => ShapeType::FinitePlane,
            16 => ShapeType::TiledPlane,
            19 => ShapeType::ProceduralSphere,
            20 => ShapeType::ProceduralPlane,
            21 => ShapeType::Paraboloid,
            22 => ShapeType::Cylinder,
            23 => ShapeType::Cone,
            24 => ShapeType::Hyperboloid,
            _ => return None,
        };
        Some(Self::Shape(shape))
    }
}

struct LineReader<'a> {
    lines: Enumerate<Lines<'a>>,
    /// 1-based number of the last line handed out
    line: usize,
}

impl<'a> LineReader<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().enumerate(),
            line: 0,
        }
    }

    fn next_content_line(&mut self) -> Option<&'a str> {
        for (id, text) in self.lines.by_ref() {
            self.line = id + 1;
            if !text.trim().is_empty() {
                return Some(text);
            }
        }
        None
    }

    /// Type tag of the next record, or `None` at end of input.
    fn next_tag(&mut self) -> ParseResult<Option<i64>> {
        let Some(text) = self.next_content_line() else {
            return Ok(None);
        };
        let token = text.split_whitespace().next().unwrap_or_default();
        token
            .parse()
            .map(Some)
            .map_err(|_| ParseError::InvalidNumber {
                line: self.line,
                token: token.to_string(),
            })
    }

    /// Next `N` numbers, taken from as many content lines as needed.
    /// The rest of the line holding the last number is skipped.
    fn fields<const N: usize>(&mut self, what: &'static str) -> ParseResult<[f64; N]> {
        let mut values = [0.; N];
        let mut found = 0;

        while found < N {
            let text = self
                .next_content_line()
                .ok_or(ParseError::UnexpectedEof {
                    line: self.line,
                    what,
                })?;

            for token in text.split_whitespace().take(N - found) {
                values[found] = token.parse().map_err(|_| ParseError::FieldCount {
                    line: self.line,
                    what,
                    expected: N,
                    found,
                })?;
                found += 1;
            }
        }
        Ok(values)
    }

    fn scalar(&mut self, what: &'static str) -> ParseResult<f64> {
        let [value] = self.fields(what)?;
        Ok(value)
    }

    fn pair(&mut self, what: &'static str) -> ParseResult<(f64, f64)> {
        let [a, b] = self.fields(what)?;
        Ok((a, b))
    }

    fn point(&mut self, what: &'static str) -> ParseResult<Point> {
        let [x, y, z] = self.fields(what)?;
        Ok(Point::new(x, y, z))
    }

    fn vector(&mut self, what: &'static str) -> ParseResult<Vector> {
        let [x, y, z] = self.fields(what)?;
        Ok(Vector::new(x, y, z))
    }

    fn color(&mut self, what: &'static str) -> ParseResult<Color> {
        let [r, g, b] = self.fields(what)?;
        Ok(Color::new(r, g, b))
    }
}

/// Geometry shared by the quadrics of revolution.
struct QuadricFields {
    center: Point,
    centerline: Vector,
    radius: f64,
    height: f64,
}

pub struct RecordParser<'a> {
    reader: LineReader<'a>,
    options: &'a ParseOptions,
    ids: IdGenerator,
}

impl<'a> RecordParser<'a> {
    pub fn new(source: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            reader: LineReader::new(source),
            options,
            ids: IdGenerator::default(),
        }
    }

    pub fn parse(mut self) -> ParseResult<Model> {
        let projection = self.parse_projection()?;
        let mut model = Model::new(projection);

        while let Some(tag) = self.reader.next_tag()? {
            let object_type = ObjectType::from_tag(tag).ok_or(ParseError::UnknownObjectType {
                line: self.reader.line,
                tag,
            })?;

            match object_type {
                ObjectType::Light => model.add_light(self.parse_light(false)?),
                ObjectType::Spotlight => model.add_light(self.parse_light(true)?),
                ObjectType::Shape(shape_type) => {
                    model.add_object(self.parse_object(shape_type)?)
                }
            }
        }

        log::debug!(
            "parsed {} objects and {} lights",
            model.objects().len(),
            model.lights().len()
        );
        Ok(model)
    }

    fn parse_projection(&mut self) -> ParseResult<Projection> {
        let (world_width, world_height) = self.reader.pair("projection window size")?;
        let viewpoint = self.reader.point("projection viewpoint")?;

        Ok(Projection::new(
            self.options.pixel_width,
            self.options.pixel_height,
            world_width,
            world_height,
            viewpoint,
        ))
    }

    fn parse_light(&mut self, is_spotlight: bool) -> ParseResult<Light> {
        let id = self.ids.next_id();
        let emissivity = self.reader.color("light emissivity")?;
        let location = self.reader.point("light location")?;

        if !is_spotlight {
            return Ok(Light::point(id, emissivity, location));
        }

        let target = self.reader.point("spotlight aim point")?;
        let half_angle = self.reader.scalar("spotlight half angle")?;
        if !(0. ..90.).contains(&half_angle) {
            log::warn!(
                "line {}: spotlight half angle {half_angle} is outside [0, 90) degrees",
                self.reader.line
            );
        }

        let spotlight = Spotlight::aimed_at(location, target, half_angle);
        Ok(Light::spot(id, emissivity, location, spotlight))
    }

    fn parse_material(&mut self, what: &'static str) -> ParseResult<Material> {
        Ok(Material::new(
            self.reader.color(what)?,
            self.reader.color(what)?,
            self.reader.color(what)?,
        ))
    }

    fn parse_object(&mut self, shape_type: ShapeType) -> ParseResult<Object> {
        let id = self.ids.next_id();
        let material = self.parse_material("material")?;

        let shape = match shape_type {
            ShapeType::Sphere => Shape::Sphere(self.parse_sphere()?),
            ShapeType::ProceduralSphere => {
                let sphere = self.parse_sphere()?;
                let selector = self.reader.scalar("shader selector")?;
                let shader = SphereShader::from_selector(selector as i64)
                    .ok_or_else(|| self.invalid_shader(selector))?;
                Shape::ProceduralSphere(sphere, shader)
            }
            ShapeType::Plane => Shape::Plane(self.parse_plane()?),
            ShapeType::ProceduralPlane => {
                let plane = self.parse_plane()?;
                let selector = self.reader.scalar("shader selector")?;
                let shader = PlaneShader::from_selector(selector as i64)
                    .ok_or_else(|| self.invalid_shader(selector))?;
                Shape::ProceduralPlane(plane, shader)
            }
            ShapeType::FinitePlane => {
                let plane = self.parse_plane()?;
                let x_direction = self.reader.vector("plane x direction")?;
                let size = self.reader.pair("plane size")?;
                Shape::FinitePlane(FinitePlane::new(plane, x_direction, size))
            }
            ShapeType::TiledPlane => {
                let plane = self.parse_plane()?;
                let x_direction = self.reader.vector("plane x direction")?;
                let tile_size = self.reader.pair("tile size")?;
                let background = self.parse_material("background material")?;
                Shape::TiledPlane(TiledPlane::new(plane, x_direction, tile_size, background))
            }
            ShapeType::Cylinder => {
                let q = self.parse_quadric()?;
                Shape::Cylinder(Cylinder::new(q.center, q.centerline, q.radius, q.height))
            }
            ShapeType::Cone => {
                let q = self.parse_quadric()?;
                Shape::Cone(Cone::new(q.center, q.centerline, q.radius, q.height))
            }
            ShapeType::Paraboloid => {
                let q = self.parse_quadric()?;
                Shape::Paraboloid(Paraboloid::new(q.center, q.centerline, q.radius, q.height))
            }
            ShapeType::Hyperboloid => {
                let q = self.parse_quadric()?;
                let waist_radius = self.reader.scalar("hyperboloid waist radius")?;
                Shape::Hyperboloid(Hyperboloid::new(
                    q.center,
                    q.centerline,
                    q.radius,
                    q.height,
                    waist_radius,
                ))
            }
        };

        Ok(Object::new(id, material, shape))
    }

    fn invalid_shader(&self, selector: f64) -> ParseError {
        ParseError::InvalidShader {
            line: self.reader.line,
            selector,
        }
    }

    fn parse_sphere(&mut self) -> ParseResult<Sphere> {
        let center = self.reader.point("sphere center")?;
        let radius = self.reader.scalar("sphere radius")?;
        if radius < 0. {
            return Err(ParseError::NegativeRadius {
                line: self.reader.line,
                radius,
            });
        }
        Ok(Sphere::new(center, radius))
    }

    fn parse_plane(&mut self) -> ParseResult<Plane> {
        let normal = self.reader.vector("plane normal")?;
        let point = self.reader.point("plane point")?;
        if normal.is_zero() {
            log::warn!(
                "line {}: plane normal is the zero vector, the plane is never hit",
                self.reader.line
            );
        }
        Ok(Plane::new(normal, point).with_clip_z(self.options.plane_clip_z))
    }

    fn parse_quadric(&mut self) -> ParseResult<QuadricFields> {
        let center = self.reader.point("center")?;
        let centerline = self.reader.vector("centerline")?;
        if centerline.is_zero() {
            return Err(ParseError::DegenerateAxis {
                line: self.reader.line,
            });
        }
        let (radius, height) = self.reader.pair("radius and height")?;

        Ok(QuadricFields {
            center,
            centerline,
            radius,
            height,
        })
    }
}

pub fn parse_str(source: &str, options: &ParseOptions) -> ParseResult<Model> {
    RecordParser::new(source, options).parse()
}

pub fn parse_reader<R: Read>(mut reader: R, options: &ParseOptions) -> ParseResult<Model> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_str(&source, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_approx_eq_low_prec,
        render::{hit::Hit, ray::Ray},
    };

    const PROJECTION: &str = "8 6      world x and y\n0 0 5    viewpoint\n";

    fn parse(records: &str) -> ParseResult<Model> {
        parse_str(&format!("{PROJECTION}{records}"), &ParseOptions::default())
    }

    fn only_object(model: &Model) -> &Object {
        assert_eq!(model.objects().len(), 1);
        &model.objects()[0]
    }

    fn hit_straight_down_z(model: &Model, x: f64, y: f64) -> Option<Hit> {
        let ray = Ray::new(Point::new(x, y, 5.), Vector::new(0., 0., -1.));
        model.find_closest(&ray, None).map(|(_, hit)| hit)
    }

    const SPHERE: &str = "
13          sphere
1 0 0       ambient
0.5 0.5 0.5 diffuse
0 0 0       specular
0 0 -3      center
2           radius
";

    #[test]
    fn parse_projection() {
        let options = ParseOptionsBuilder::default()
            .pixel_width(80)
            .pixel_height(60)
            .build()
            .unwrap();
        let model = parse_str(PROJECTION, &options).unwrap();

        assert_eq!(
            model.projection(),
            &Projection::new(80, 60, 8., 6., Point::new(0., 0., 5.))
        );
        assert!(model.objects().is_empty());
        assert!(model.lights().is_empty());
    }

    #[test]
    fn parse_sphere_with_comments() {
        let model = parse(SPHERE).unwrap();
        let object = only_object(&model);

        assert_eq!(object.id().value(), IdGenerator::FIRST_ID);
        assert_eq!(
            object.shape(),
            &Shape::Sphere(Sphere::new(Point::new(0., 0., -3.), 2.))
        );
        assert_approx_eq_low_prec!(object.material().ambient, Color::red());
        assert_approx_eq_low_prec!(object.material().diffuse, Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn parse_lights() {
        let model = parse(
            "
10
1 1 1
2 3 4

11        spotlight
0.5 0.5 0.5
0 5 0
0 0 0     aim point
30        half angle
",
        )
        .unwrap();

        assert_eq!(model.lights().len(), 2);
        let light = &model.lights()[0];
        assert_eq!(light.location(), Point::new(2., 3., 4.));
        assert!(light.spotlight().is_none());

        let spot = &model.lights()[1];
        assert_eq!(spot.id().value(), IdGenerator::FIRST_ID + 1);
        let cone = spot.spotlight().unwrap();
        assert_approx_eq_low_prec!(cone.direction(), Vector::new(0., -5., 0.));
        assert_approx_eq_low_prec!(cone.half_angle(), 30.);
    }

    #[test]
    fn ids_are_shared_by_lights_and_objects() {
        let model = parse(&format!("10\n1 1 1\n0 0 0\n{SPHERE}")).unwrap();
        assert_eq!(model.lights()[0].id().value(), 100);
        assert_eq!(model.objects()[0].id().value(), 101);
    }

    #[test]
    fn parse_every_object_type() {
        let material = "0 0 0\n1 1 1\n0 0 0\n";
        let records = [
            format!("13\n{material}0 0 -3\n1\n"),
            format!("14\n{material}0 1 0\n0 -1 0\n"),
            format!("15\n{material}0 0 1\n0 0 -5\n1 0 0\n2 2\n"),
            format!("16\n{material}0 0 1\n0 0 -5\n1 0 0\n1 1\n{material}"),
            format!("19\n{material}0 0 -3\n1\n2\n"),
            format!("20\n{material}0 1 0\n0 -1 0\n3\n"),
            format!("21\n{material}0 0 -3\n0 1 0\n1 2\n"),
            format!("22\n{material}0 0 -3\n0 1 0\n1 2\n"),
            format!("23\n{material}0 0 -3\n0 1 0\n1 2\n"),
            format!("24\n{material}0 0 -3\n0 1 0\n2 1\n1\n"),
        ];
        let model = parse(&records.concat()).unwrap();

        let names: Vec<_> = model
            .objects()
            .iter()
            .map(|object| object.shape().type_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "sphere",
                "plane",
                "fplane",
                "tplane",
                "psphere",
                "pplane",
                "paraboloid",
                "cylinder",
                "cone",
                "hyperboloid"
            ]
        );
    }

    #[test]
    fn plane_clip_is_configurable() {
        let plane = "14\n0 0 0\n1 1 1\n0 0 0\n0 1 0\n0 0 0\n";
        let source = format!("{PROJECTION}{plane}");
        let ray = Ray::new(Point::new(0., 5., 2.), Vector::new(0., -1., 0.));

        let clipped = parse_str(&source, &ParseOptions::default()).unwrap();
        assert!(clipped.find_closest(&ray, None).is_none());

        let options = ParseOptionsBuilder::default()
            .plane_clip_z(None)
            .build()
            .unwrap();
        let unclipped = parse_str(&source, &options).unwrap();
        assert!(unclipped.find_closest(&ray, None).is_some());
    }

    #[test]
    fn finite_plane_extent_is_parsed() {
        let model = parse("15\n0 0 0\n1 1 1\n0 0 0\n0 0 1\n0 0 -5\n1 0 0\n2 1\n").unwrap();

        assert!(hit_straight_down_z(&model, 1.5, 0.5).is_some());
        assert!(hit_straight_down_z(&model, 2.5, 0.5).is_none());
        assert!(hit_straight_down_z(&model, 1.5, 1.5).is_none());
    }

    #[test]
    fn tiled_plane_uses_background_material() {
        let model = parse(
            "16\n1 0 0\n1 1 1\n0 0 0\n0 0 1\n0 0 -5\n1 0 0\n1 1\n0 0 1\n0 0 0\n0 0 0\n",
        )
        .unwrap();
        let object = only_object(&model);

        let own = hit_straight_down_z(&model, 1.5, 0.5).unwrap();
        let background = hit_straight_down_z(&model, 0.5, 0.5).unwrap();
        assert_approx_eq_low_prec!(object.ambient_at(&own), Color::red());
        assert_approx_eq_low_prec!(object.ambient_at(&background), Color::new(0., 0., 1.));
    }

    #[test]
    fn end_of_input_inside_record() {
        let error = parse("13\n1 0 0\n0 0 0\n0 0 0\n0 0 -3\n").unwrap_err();
        assert!(
            matches!(
                error,
                ParseError::UnexpectedEof {
                    what: "sphere radius",
                    ..
                }
            ),
            "{error}"
        );
    }

    #[test]
    fn short_line_reports_field_count() {
        let error = parse("13\n1 0 0\n0 0 0\n0 0 0\n0 0 oops\n1\n").unwrap_err();
        assert!(
            matches!(
                error,
                ParseError::FieldCount {
                    line: 7,
                    expected: 3,
                    found: 2,
                    ..
                }
            ),
            "{error}"
        );
    }

    #[test]
    fn field_group_may_continue_on_next_lines() {
        let model = parse(
            "
13
1 0 0
0.5 0.5
0.5       diffuse blue
0 0 0
0 0
-3        center z
2
",
        )
        .unwrap();

        assert_eq!(
            only_object(&model).shape(),
            &Shape::Sphere(Sphere::new(Point::new(0., 0., -3.), 2.))
        );
        assert_approx_eq_low_prec!(
            only_object(&model).material().diffuse,
            Color::new(0.5, 0.5, 0.5)
        );
    }

    #[test]
    fn end_of_input_inside_split_group() {
        let error = parse("13\n1 0 0\n0 0 0\n0 0 0\n0 0\n").unwrap_err();
        assert!(
            matches!(
                error,
                ParseError::UnexpectedEof {
                    what: "sphere center",
                    ..
                }
            ),
            "{error}"
        );
    }

    #[test]
    fn missing_projection_is_an_error() {
        let error = parse_str("", &ParseOptions::default()).unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEof { .. }), "{error}");
    }

    #[test]
    fn rejected_tags() {
        for tag in [12, 17, 18, 9, 25, -1] {
            let error = parse(&format!("{tag}\n")).unwrap_err();
            assert!(
                matches!(error, ParseError::UnknownObjectType { tag: t, line: 3 } if t == tag),
                "{error}"
            );
        }

        let error = parse("sphere\n").unwrap_err();
        assert!(matches!(error, ParseError::InvalidNumber { .. }), "{error}");
    }

    #[test]
    fn invalid_shader_selector() {
        let error = parse("19\n0 0 0\n0 0 0\n0 0 0\n0 0 -3\n1\n4\n").unwrap_err();
        assert!(matches!(error, ParseError::InvalidShader { .. }), "{error}");

        let error = parse("20\n0 0 0\n0 0 0\n0 0 0\n0 1 0\n0 0 0\n-1\n").unwrap_err();
        assert!(matches!(error, ParseError::InvalidShader { .. }), "{error}");
    }

    #[test]
    fn negative_radius_is_rejected() {
        let error = parse("13\n0 0 0\n0 0 0\n0 0 0\n0 0 -3\n-1\n").unwrap_err();
        assert!(
            matches!(error, ParseError::NegativeRadius { line: 8, .. }),
            "{error}"
        );
    }

    #[test]
    fn zero_centerline_is_rejected() {
        let error = parse("22\n0 0 0\n0 0 0\n0 0 0\n0 0 -3\n0 0 0\n1 2\n").unwrap_err();
        assert!(matches!(error, ParseError::DegenerateAxis { .. }), "{error}");
    }

    #[test]
    fn parse_from_reader() {
        let source = format!("{PROJECTION}{SPHERE}");
        let model = parse_reader(source.as_bytes(), &ParseOptions::default()).unwrap();
        assert_eq!(model.objects().len(), 1);
    }
}
