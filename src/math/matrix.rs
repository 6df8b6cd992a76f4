use std::ops;

use super::{approx_eq::ApproxEq, tuple::Tuple, vector::Vector};

/// Offset applied to the x component of a centreline pointing straight down -Y,
/// which would otherwise have a vanishing cross product with +Y.
pub const AXIS_PERTURBATION: f64 = 1.0e-14;

#[derive(Debug, Clone, Copy)]
/// Simple 3x3 matrix, used for rotations between world and local frames
pub struct Matrix {
    data: [f64; 9],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub fn new(data: [f64; 9]) -> Self {
        Self { data }
    }

    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self::new([
            1., 0., 0.,
            0., 1., 0.,
            0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn from_rows(x: Vector, y: Vector, z: Vector) -> Self {
        Self::new([
            x.x(), x.y(), x.z(),
            y.x(), y.y(), y.z(),
            z.x(), z.y(), z.z(),
        ])
    }

    pub fn row(&self, row: usize) -> Vector {
        Vector::new(self[(row, 0)], self[(row, 1)], self[(row, 2)])
    }

    pub fn transpose(&self) -> Self {
        let mut res = *self;

        res.data.swap(1, 3);
        res.data.swap(2, 6);
        res.data.swap(5, 7);

        res
    }

    /// Rotation taking `centerline` onto the local +Y axis.
    ///
    /// The rows form an orthonormal frame: Y is the unit centreline,
    /// X = unit(Y × ŷ) and Z = unit(X × Y). A centreline along +Y keeps the
    /// identity frame. The inverse rotation is the transpose.
    pub fn aligned_to_y(centerline: Vector) -> Self {
        let mut centerline = centerline;
        if centerline.x() == 0. && centerline.z() == 0. {
            if centerline.y() > 0. {
                return Self::identity();
            }
            centerline = Vector::new(AXIS_PERTURBATION, centerline.y(), centerline.z());
        }

        let y = centerline.normalize();
        let x = y.cross(Vector::new(0., 1., 0.)).normalize();
        let z = x.cross(y).normalize();

        Self::from_rows(x, y, z)
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq_epsilon(b, epsilon))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < 3);
        debug_assert!(col < 3);
        &self.data[row * 3 + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < 3);
        debug_assert!(col < 3);
        &mut self.data[row * 3 + col]
    }
}

impl ops::Mul<Matrix> for Matrix {
    type Output = Self;

    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        let mut res = Matrix::new([0.; 9]);
        for row in 0..3 {
            for col in 0..3 {
                res[(row, col)] = (0..3).map(|k| self[(row, k)] * rhs[(k, col)]).sum();
            }
        }
        res
    }
}

/// Rotates a point or vector. Points are treated as position vectors.
impl<T: Tuple> ops::Mul<T> for &Matrix {
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        T::new(
            self[(0, 0)] * rhs.x() + self[(0, 1)] * rhs.y() + self[(0, 2)] * rhs.z(),
            self[(1, 0)] * rhs.x() + self[(1, 1)] * rhs.y() + self[(1, 2)] * rhs.z(),
            self[(2, 0)] * rhs.x() + self[(2, 1)] * rhs.y() + self[(2, 2)] * rhs.z(),
        )
    }
}

impl<T: Tuple> ops::Mul<T> for Matrix {
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_approx_eq_low_prec, math::point::Point};

    #[test]
    fn create_and_index() {
        let m = Matrix::new([1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        assert_eq!(m[(0, 0)], 1.);
        assert_eq!(m[(1, 2)], 6.);
        assert_eq!(m[(2, 1)], 8.);
        assert_approx_eq_low_prec!(m.row(1), Vector::new(4., 5., 6.));
    }

    #[test]
    fn transpose() {
        let m = Matrix::new([1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        assert_approx_eq_low_prec!(
            m.transpose(),
            Matrix::new([1., 4., 7., 2., 5., 8., 3., 6., 9.])
        );
    }

    #[test]
    fn mul() {
        let a = Matrix::new([1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        assert_approx_eq_low_prec!(a * Matrix::identity(), a);
        assert_approx_eq_low_prec!(
            a * a,
            Matrix::new([30., 36., 42., 66., 81., 96., 102., 126., 150.])
        );
    }

    #[test]
    fn mul_with_tuple() {
        let m = Matrix::new([0., -1., 0., 1., 0., 0., 0., 0., 1.]);
        assert_approx_eq_low_prec!(m * Vector::new(1., 0., 0.), Vector::new(0., 1., 0.));
        assert_approx_eq_low_prec!(m * Point::new(1., 2., 3.), Point::new(-2., 1., 3.));
    }

    #[test]
    fn aligned_to_positive_y_is_identity() {
        assert_approx_eq_low_prec!(
            Matrix::aligned_to_y(Vector::new(0., 3., 0.)),
            Matrix::identity()
        );
    }

    #[test]
    fn aligned_frame_maps_centerline_onto_y() {
        let examples = vec![
            Vector::new(1., 0., 0.),
            Vector::new(0., 0., -2.),
            Vector::new(1., 1., 1.),
            Vector::new(-3., 0.5, 2.),
            Vector::new(0., -1., 0.),
            Vector::new(0., -4., 0.),
        ];
        for centerline in examples {
            let rotation = Matrix::aligned_to_y(centerline);
            assert_approx_eq_low_prec!(
                rotation * centerline.normalize(),
                Vector::new(0., 1., 0.)
            );
        }
    }

    #[test]
    fn aligned_frame_is_orthonormal() {
        let rotation = Matrix::aligned_to_y(Vector::new(2., -1., 0.5));
        assert_approx_eq_low_prec!(rotation * rotation.transpose(), Matrix::identity());
        for row in 0..3 {
            assert_approx_eq_low_prec!(rotation.row(row).magnitude(), 1.);
        }
    }

    #[test]
    fn transpose_undoes_rotation() {
        let rotation = Matrix::aligned_to_y(Vector::new(0., -1., 0.));
        let v = Vector::new(0.3, -2., 5.);
        assert_approx_eq_low_prec!(rotation.transpose() * (rotation * v), v);
    }
}
