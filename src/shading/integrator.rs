use derive_builder::Builder;

use crate::{
    math::color::Color,
    render::{canvas::Canvas, hit::Hit, ray::Ray},
    scene::{
        Model,
        light::Light,
        object::{Object, ObjectId},
    },
};

#[derive(PartialEq, Debug, Clone, Builder)]
#[builder(default)]
/// The integrator calculates the color for each given ray
pub struct Integrator {
    /// The model to be rendered
    model: Model,
    /// Rays that have already travelled further than this see black.
    /// This is what ends chains of reflections
    #[builder(default = "Integrator::DEFAULT_MAX_DISTANCE")]
    max_distance: f64,
    /// offset from the center of the pixel
    /// so it should be in range [-0.5, 0.5]
    #[builder(setter(custom))]
    #[builder(field(
        ty = "Option<usize>",
        build = "Integrator::gen_supersampling_offsets(self.supersampling_offsets.unwrap_or(Integrator::DEFAULT_SUPERSAMPLING_LEVEL))"
    ))]
    supersampling_offsets: Vec<f64>,
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(Model::default())
    }
}

impl IntegratorBuilder {
    pub fn supersampling_level(&mut self, level: usize) -> &mut Self {
        self.supersampling_offsets = Some(level);
        self
    }
}

impl Integrator {
    pub const DEFAULT_MAX_DISTANCE: f64 = 70.;
    pub const DEFAULT_SUPERSAMPLING_LEVEL: usize = 1;

    pub fn new(model: Model) -> Self {
        Self {
            model,
            max_distance: Self::DEFAULT_MAX_DISTANCE,
            supersampling_offsets: Self::gen_supersampling_offsets(
                Self::DEFAULT_SUPERSAMPLING_LEVEL,
            ),
        }
    }

    fn gen_supersampling_offsets(level: usize) -> Vec<f64> {
        match level {
            0 | 1 => vec![0.],
            2 => vec![-0.25, 0.25],
            3 => vec![-0.25, 0., 0.25],
            4 => vec![-0.5, -0.25, 0.25, 0.5],
            _ => vec![-0.5, -0.25, 0., 0.25, 0.5],
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn supersampling_level(&self) -> usize {
        self.supersampling_offsets.len()
    }

    /// Color seen along a ray leaving the eye
    pub fn color_at(&self, ray: &Ray) -> Color {
        self.trace(ray, 0., None)
    }

    /// Color seen along `ray` that has already travelled `traveled`.
    ///
    /// The local color is divided by the total path length so far, and the
    /// reflected color (already divided by its own, longer path) is added on
    /// top, weighted by the specular reflectance.
    pub fn trace(&self, ray: &Ray, traveled: f64, exclude: Option<ObjectId>) -> Color {
        if traveled > self.max_distance {
            return Color::black();
        }
        let Some((object, hit)) = self.model.find_closest(ray, exclude) else {
            return Color::black();
        };

        let traveled = traveled + hit.distance();
        let color = (object.ambient_at(&hit) + self.diffuse_illumination(object, &hit)) / traveled;

        let specular = object.specular_at(&hit);
        if specular.is_black() {
            return color;
        }

        let reflected_ray = Ray::new(hit.point(), ray.direction().reflect(hit.normal()));
        color + specular * self.trace(&reflected_ray, traveled, Some(object.id()))
    }

    /// Sum of the contributions of every light at `hit`
    pub fn diffuse_illumination(&self, object: &Object, hit: &Hit) -> Color {
        self.model
            .lights()
            .iter()
            .map(|light| self.light_contribution(object, hit, light))
            .sum()
    }

    pub fn light_contribution(&self, object: &Object, hit: &Hit, light: &Light) -> Color {
        let to_light = light.location() - hit.point();
        let distance = to_light.magnitude();
        let cos_theta = hit.normal().normalize().dot(to_light.normalize());

        if cos_theta <= 0.
            || self.is_shadowed(object, hit, light, distance)
            || !light.illuminates(hit.point())
        {
            return Color::black();
        }

        object.diffuse_at(hit) * light.emissivity() * (cos_theta / distance)
    }

    fn is_shadowed(&self, object: &Object, hit: &Hit, light: &Light, distance: f64) -> bool {
        let shadow_ray = Ray::towards(hit.point(), light.location());
        self.model
            .find_closest(&shadow_ray, Some(object.id()))
            .is_some_and(|(_, occluder)| occluder.distance() < distance)
    }

    /// Average color of the supersamples around pixel `(x, y)`,
    /// where y grows upwards in the world.
    pub fn color_at_pixel(&self, x: usize, y: usize) -> Color {
        let projection = self.model.projection();
        let x = x as f64;
        let y = y as f64;

        let offsets = &self.supersampling_offsets;
        let mut color = Color::black();

        for dx in offsets {
            for dy in offsets {
                color += self.color_at(&projection.ray_for_pixel(x + dx, y + dy));
            }
        }
        color / offsets.len().pow(2) as f64
    }

    /// Renders into a canvas whose first row is the top of the world window.
    pub fn render_with_progressbar(&self, progressbar: indicatif::ProgressBar) -> Canvas {
        let mut image = self.model.projection().canvas();
        let last_row = image.height().saturating_sub(1);

        image.set_each_pixel(
            |x: usize, row: usize| self.color_at_pixel(x, last_row - row),
            progressbar,
        );
        image
    }

    pub fn render(&self) -> Canvas {
        let projection = self.model.projection();
        let width = projection.pixel_width();
        let height = projection.pixel_height();
        let ray_count = width * height * self.supersampling_offsets.len().pow(2);

        log::info!("rendering image with {width}x{height} resolution");
        log::info!(
            "rendering {} objects lit by {} lights",
            self.model.objects().len(),
            self.model.lights().len()
        );
        log::info!("with {ray_count} primary rays");
        log::info!("with supersampling level {}", self.supersampling_level());

        let now = std::time::Instant::now();

        let pb = indicatif::ProgressBar::new(width as u64 * height as u64);
        let pb = match indicatif::ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} pixels shaded: {human_pos}/{human_len} {percent}% ({eta})",
        ) {
            Ok(style) => pb.with_style(style),
            Err(_) => pb,
        };
        let image = self.render_with_progressbar(pb);

        log::info!("render time: {:?}", now.elapsed());
        let rays_per_sec = ray_count as f64 / now.elapsed().as_secs_f64();
        log::info!("rays per second: {}", rays_per_sec.round());
        image
    }
}
