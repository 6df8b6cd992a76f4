use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::Parser;
use log::LevelFilter;
use quadric_raytracer::{
    IntegratorBuilder,
    records::{self, ParseOptionsBuilder},
    render::canvas::ImageFormat,
    scene::object::primitive::plane::DEFAULT_PLANE_CLIP_Z,
};

/// Ray tracer for spheres, planes and quadrics of revolution.
/// Reads a line-based model description and writes an image
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Width (in pixels) of the output image
    width: usize,

    /// Height (in pixels) of the output image
    height: usize,

    /// The model file to render. Read from stdin if omitted
    model_file: Option<PathBuf>,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./<model_filename>.<image_format>`, or `./image.<image_format>` for stdin
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    /// Controls how many rays are shot per pixel.
    /// In other words, the quality of the anti-aliasing (supersampling)
    #[clap(short, long)]
    supersampling_level: Option<usize>,

    /// Rays that travelled further than this contribute nothing
    #[clap(short, long)]
    max_distance: Option<f64>,

    /// Plane hits with a z coordinate above this are discarded
    #[clap(long, default_value_t = DEFAULT_PLANE_CLIP_Z, conflicts_with = "no_plane_clip")]
    plane_clip_z: f64,

    /// Keep plane hits at any z
    #[clap(long)]
    no_plane_clip: bool,

    /// Print the parsed model to stdout before rendering
    #[clap(long)]
    dump: bool,
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let parse_options = ParseOptionsBuilder::default()
        .pixel_width(args.width)
        .pixel_height(args.height)
        .plane_clip_z((!args.no_plane_clip).then_some(args.plane_clip_z))
        .build()
        .map_err(|e| format!("Failed to configure parser: {e}"))?;

    let model = match &args.model_file {
        Some(path) => {
            let file =
                File::open(path).map_err(|e| format!("Failed to open model file: {e}"))?;
            records::parse_reader(file, &parse_options)
        }
        None => records::parse_reader(std::io::stdin().lock(), &parse_options),
    }
    .map_err(|e| format!("Failed to parse model: {e}"))?;

    if args.dump {
        println!("{model}");
    } else {
        log::debug!("parsed model:\n{model}");
    }

    let mut builder = IntegratorBuilder::default();
    builder.model(model);
    if let Some(level) = args.supersampling_level {
        builder.supersampling_level(level);
    }
    if let Some(max_distance) = args.max_distance {
        builder.max_distance(max_distance);
    }
    let integrator = builder
        .build()
        .map_err(|e| format!("Failed to configure renderer: {e}"))?;

    let canvas = integrator.render();

    let output_path = args.output_path.unwrap_or_else(|| {
        let stem = args
            .model_file
            .as_deref()
            .and_then(|path| path.file_stem())
            .map_or_else(|| PathBuf::from("image"), PathBuf::from);
        stem.with_extension(args.image_format.to_string())
    });
    let file = File::create(&output_path).map_err(|e| format!("Failed to create image: {e}"))?;
    canvas
        .save(BufWriter::new(file), args.image_format)
        .map_err(|e| format!("Failed to save image: {e}"))?;

    log::info!("Image saved to {output_path:?}");
    Ok(())
}
