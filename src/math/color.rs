use std::{fmt, ops};

use super::approx_eq::ApproxEq;

#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }
    pub fn red() -> Self {
        Self::new(1., 0., 0.)
    }
    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }
    pub fn r(&self) -> f64 {
        self.r
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn with_r(self, r: f64) -> Self {
        Self { r, ..self }
    }
    pub fn with_b(self, b: f64) -> Self {
        Self { b, ..self }
    }

    /// True when every channel is exactly zero.
    pub fn is_black(&self) -> bool {
        self.r == 0. && self.g == 0. && self.b == 0.
    }

    /// Clamps to [0, 1] and truncates towards zero.
    fn scale_val_to_u8(v: f64) -> u8 {
        let v = v.clamp(0., 1.);
        (v * 255.) as u8
    }

    pub fn as_scaled_values(&self) -> [u8; 3] {
        [
            Self::scale_val_to_u8(self.r),
            Self::scale_val_to_u8(self.g),
            Self::scale_val_to_u8(self.b),
        ]
    }
}

impl ApproxEq for Color {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.r.approx_eq_epsilon(&other.r, epsilon)
            && self.g.approx_eq_epsilon(&other.g, epsilon)
            && self.b.approx_eq_epsilon(&other.b, epsilon)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.6}", self.r, self.g, self.b)
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl ops::Div<f64> for Color {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}

impl std::iter::Sum for Color {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Color::black(), |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    #[test]
    fn add_and_mul() {
        let c1 = Color::new(0.9, 0.6, 0.75);
        let c2 = Color::new(0.7, 0.1, 0.25);
        assert_approx_eq_low_prec!(c1 + c2, Color::new(1.6, 0.7, 1.0));
        assert_approx_eq_low_prec!(
            Color::new(1., 0.2, 0.4) * Color::new(0.9, 1., 0.1),
            Color::new(0.9, 0.2, 0.04)
        );
        assert_approx_eq_low_prec!(Color::new(0.2, 0.3, 0.4) * 2., Color::new(0.4, 0.6, 0.8));
        assert_approx_eq_low_prec!(Color::new(0.2, 0.3, 0.4) / 2., Color::new(0.1, 0.15, 0.2));
    }

    #[test]
    fn scaled_values_clamp_and_truncate() {
        let examples = vec![
            (Color::new(1.5, 0., -0.5), [255, 0, 0]),
            (Color::new(0.5, 0.999, 1.0), [127, 254, 255]),
            (Color::new(0.1, 0.2, 0.3), [25, 51, 76]),
        ];
        for (color, expected) in examples {
            assert_eq!(color.as_scaled_values(), expected);
        }
    }

    #[test]
    fn nan_scales_to_zero() {
        assert_eq!(Color::new(f64::NAN, 0., 0.).as_scaled_values(), [0, 0, 0]);
    }

    #[test]
    fn is_black() {
        assert!(Color::black().is_black());
        assert!(!Color::new(0., 0., 1.0e-20).is_black());
    }

    #[test]
    fn sum_of_colors() {
        let total: Color = vec![Color::red(), Color::white()].into_iter().sum();
        assert_approx_eq_low_prec!(total, Color::new(2., 1., 1.));
    }
}
