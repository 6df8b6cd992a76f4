use std::{fmt::Display, io::Write};

use clap::ValueEnum;
use indicatif::ProgressIterator;

use crate::math::color::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Row-major pixel grid. Row 0 is the top of the image.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }
    pub fn write_pixel(&mut self, x: usize, y: usize, new_color: Color) {
        let id = self.index(x, y);
        self.pixels[id] = new_color;
    }

    /// Evaluates `fun(column, row)` for every pixel, in row-major order.
    pub fn set_each_pixel<F>(&mut self, fun: F, progressbar: indicatif::ProgressBar)
    where
        F: Fn(usize, usize) -> Color,
    {
        let width = self.width;

        self.pixels
            .iter_mut()
            .enumerate()
            .progress_with(progressbar)
            .for_each(|(id, pixel_color)| {
                let x = id % width;
                let y = id / width;
                *pixel_color = fun(x, y);
            })
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_scaled_values())
            .collect()
    }

    pub fn save<W: Write>(&self, writer: W, format: ImageFormat) -> std::io::Result<()> {
        match format {
            ImageFormat::Ppm => self.save_to_ppm(writer),
            ImageFormat::Png => self.save_to_png(writer),
        }
    }
}

/// saving image in ppm format
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    /// One text line per image row, wrapped so no line exceeds `MAX_LINE_LEN`.
    fn ppm_data(&self) -> String {
        let mut data = String::new();

        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line_len = 0;
            for val in row.iter().flat_map(|color| color.as_scaled_values()) {
                let val_str = val.to_string();
                if line_len > 0 {
                    if line_len + val_str.len() + 1 > Self::MAX_LINE_LEN {
                        data.push('\n');
                        line_len = 0;
                    } else {
                        data.push(' ');
                        line_len += 1;
                    }
                }
                data.push_str(&val_str);
                line_len += val_str.len();
            }
            data.push('\n');
        }
        data
    }

    pub fn save_to_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.ppm_data().as_bytes())?;
        writer.flush()
    }
}

/// saving image in png format
impl Canvas {
    pub fn save_to_png<W: Write>(&self, writer: W) -> std::io::Result<()> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;

        writer
            .write_image_data(&self.as_u8_rgb())
            .map_err(|e| e.into())
    }
}
