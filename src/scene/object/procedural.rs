//! Closed-form ambient colour functions for procedural planes and spheres.
//!
//! Each shader is selected by a small integer in the scene description.
//! Several of them divide by hit coordinates or take truncated remainders, so
//! they can produce values far outside [0, 1]; the image writer clamps.

use std::f64::consts::PI;

use crate::{
    math::{color::Color, point::Point, tuple::Tuple},
    render::hit::Hit,
};

/// Angle of `(x, y)` around the anchor, extended from acos's [0, π] to [0, 2π).
fn polar_angle(cosine: f64, y: f64) -> f64 {
    let angle = cosine.acos();
    if y < 0. { 2. * PI - angle } else { angle }
}

/// Scales each channel by `1 + cos(2θ + k·2π/3)`, k = 0, 1, 2.
fn rainbow(base: Color, angle: f64) -> Color {
    Color::new(
        base.r() * (1. + (2. * angle).cos()),
        base.g() * (1. + (2. * angle + 2. * PI / 3.).cos()),
        base.b() * (1. + (2. * angle + 4. * PI / 3.).cos()),
    )
}

/// Γ(n) for an integer argument: a pole (+∞) at zero, NaN for negative
/// integers, `(n - 1)!` otherwise (overflowing to +∞ past 171).
fn integer_gamma(n: i64) -> f64 {
    match n {
        n if n < 0 => f64::NAN,
        0 => f64::INFINITY,
        n => (1..n).fold(1., |acc, k| acc * k as f64),
    }
}

/// `trunc(value) mod 255` with the sign of the dividend.
fn wrapped(value: f64) -> f64 {
    ((value as i64) % 255) as f64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneShader {
    /// Zaps red or blue by the parity of a cubic in the local coordinates
    Parity,
    Rainbow,
    Hyperbolic,
    HyperbolicFolded,
}

impl PlaneShader {
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            0 => Some(Self::Parity),
            1 => Some(Self::Rainbow),
            2 => Some(Self::Hyperbolic),
            3 => Some(Self::HyperbolicFolded),
            _ => None,
        }
    }

    pub fn selector(&self) -> i64 {
        match self {
            Self::Parity => 0,
            Self::Rainbow => 1,
            Self::Hyperbolic => 2,
            Self::HyperbolicFolded => 3,
        }
    }

    /// Ambient colour at `hit` on a plane anchored at `anchor`.
    pub fn ambient(&self, base: Color, anchor: Point, hit: &Hit) -> Color {
        let local = hit.point() - anchor;
        let (vx, vy) = (local.x(), local.y());
        let (hx, hy, hz) = (hit.point().x(), hit.point().y(), hit.point().z());

        match self {
            Self::Parity => {
                let sum = 1000. + vx * vy * vy / 100. + vx * vy / 100.;
                if (sum as i64) & 1 == 1 {
                    base.with_r(0.)
                } else {
                    base.with_b(0.)
                }
            }
            Self::Rainbow => {
                let angle = polar_angle(vx / (vx * vx + vy * vy).sqrt(), vy);
                rainbow(base, angle)
            }
            Self::Hyperbolic => {
                let angle = polar_angle(vx / (vx * vx + vy * vy).sqrt(), vy);
                let spread = 255. * (hy.powi(2) - hx.powi(2));
                Color::new(
                    255. - angle * spread / (hy * hx),
                    255. - angle * spread / (hy * hx.powi(2)),
                    255. - angle * spread / (hy.powi(2) * hx),
                )
            }
            Self::HyperbolicFolded => {
                let angle = polar_angle(vx / (vx * vy + vy * vx).sqrt(), vy);
                let spread = hy.powi(2) - hx.powi(2);
                let fold = |value: f64, fallback: f64| {
                    if value > 255. || value <= 0. {
                        fallback.abs()
                    } else {
                        value
                    }
                };
                Color::new(
                    fold(
                        (255. - angle * (255. * spread.sqrt()) / (hy * hx)).abs(),
                        hx,
                    ),
                    fold(
                        (255. - angle * (255. * spread) / (hy * hx.powi(2))).abs(),
                        hy,
                    ),
                    fold((255. - angle * (255. * spread).sqrt()).abs(), hz),
                )
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SphereShader {
    /// Adds one to the red channel
    RedShift,
    Rainbow,
    GammaWaves,
    CosineWaves,
}

impl SphereShader {
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            0 => Some(Self::RedShift),
            1 => Some(Self::Rainbow),
            2 => Some(Self::GammaWaves),
            3 => Some(Self::CosineWaves),
            _ => None,
        }
    }

    pub fn selector(&self) -> i64 {
        match self {
            Self::RedShift => 0,
            Self::Rainbow => 1,
            Self::GammaWaves => 2,
            Self::CosineWaves => 3,
        }
    }

    /// Ambient colour at `hit` on a sphere centred at `center`.
    pub fn ambient(&self, base: Color, center: Point, hit: &Hit) -> Color {
        let (hx, hy, hz) = (hit.point().x(), hit.point().y(), hit.point().z());
        let normal = hit.normal();
        let (nx, ny, nz) = (normal.x(), normal.y(), normal.z());

        let red_arg = wrapped(255. - hx + ny * nx);
        let green_arg = wrapped(255. - ny + nz * hy);
        let blue_arg = wrapped(255. - nz + nx * hz);

        match self {
            Self::RedShift => base.with_r(base.r() + 1.),
            Self::Rainbow => {
                let local = hit.point() - center;
                let (vx, vy) = (local.x(), local.y());
                rainbow(base, polar_angle(vx / (vx * vx + vy * vy).sqrt(), vy))
            }
            Self::GammaWaves => Color::new(
                integer_gamma(red_arg as i64).tan() + 16.,
                integer_gamma(green_arg as i64).cos() + 32.,
                integer_gamma(blue_arg as i64).sin() + 8.,
            ),
            Self::CosineWaves => Color::new(
                255. / PI * red_arg.cos(),
                255. / PI * green_arg.cos(),
                255. / PI * blue_arg.cos(),
            ),
        }
    }
}
