//! Row-major 4x4 matrices with factory constructors for the standard
//! transforms.
//!
//! The row-vector convention is used throughout: a point is transformed as
//! `v * M`, and composed transforms read left to right
//! (`world * view * projection`).

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::GeometryError;
use crate::vector::Vector3;

/// A 4x4 matrix of `f32`, stored row-major (`m[row][col]`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4x4 {
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    #[inline]
    pub const fn new(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn scale(scale: Vector3) -> Self {
        let mut result = Self::ZERO;
        result.m[0][0] = scale.x;
        result.m[1][1] = scale.y;
        result.m[2][2] = scale.z;
        result.m[3][3] = 1.0;
        result
    }

    pub fn rotate_x(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::ZERO;
        result.m[0][0] = 1.0;
        result.m[1][1] = cos;
        result.m[1][2] = sin;
        result.m[2][1] = -sin;
        result.m[2][2] = cos;
        result.m[3][3] = 1.0;
        result
    }

    pub fn rotate_y(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::ZERO;
        result.m[0][0] = cos;
        result.m[0][2] = -sin;
        result.m[1][1] = 1.0;
        result.m[2][0] = sin;
        result.m[2][2] = cos;
        result.m[3][3] = 1.0;
        result
    }

    pub fn rotate_z(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut result = Self::ZERO;
        result.m[0][0] = cos;
        result.m[0][1] = sin;
        result.m[1][0] = -sin;
        result.m[1][1] = cos;
        result.m[2][2] = 1.0;
        result.m[3][3] = 1.0;
        result
    }

    pub fn translate(translate: Vector3) -> Self {
        let mut result = Self::identity();
        result.m[3][0] = translate.x;
        result.m[3][1] = translate.y;
        result.m[3][2] = translate.z;
        result
    }

    /// Composes `scale * rotate_x * rotate_y * rotate_z * translate`, in
    /// that fixed order.
    pub fn affine(scale: Vector3, euler_radians: Vector3, translate: Vector3) -> Self {
        Self::scale(scale)
            * Self::rotate_x(euler_radians.x)
            * Self::rotate_y(euler_radians.y)
            * Self::rotate_z(euler_radians.z)
            * Self::translate(translate)
    }

    /// Perspective projection. The last column carries the homogeneous-divide
    /// coefficients (`m[2][3] = 1`): after `v * M`, `w` holds view-space depth.
    pub fn perspective_fov(fov_y: f32, aspect: f32, near_clip: f32, far_clip: f32) -> Self {
        let cot = 1.0 / (fov_y / 2.0).tan();
        let mut result = Self::ZERO;
        result.m[0][0] = cot / aspect;
        result.m[1][1] = cot;
        result.m[2][2] = far_clip / (far_clip - near_clip);
        result.m[2][3] = 1.0;
        result.m[3][2] = -far_clip * near_clip / (far_clip - near_clip);
        result
    }

    pub fn orthographic(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        let mut result = Self::ZERO;
        result.m[0][0] = 2.0 / (right - left);
        result.m[1][1] = 2.0 / (top - bottom);
        result.m[2][2] = 1.0 / (far_clip - near_clip);
        result.m[3][0] = (left + right) / (left - right);
        result.m[3][1] = (top + bottom) / (bottom - top);
        result.m[3][2] = near_clip / (near_clip - far_clip);
        result.m[3][3] = 1.0;
        result
    }

    /// NDC-to-screen mapping. Row 1 is scaled by `-height / 2` so that +Y in
    /// NDC maps upward on a top-left-origin screen.
    pub fn viewport(
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        min_depth: f32,
        max_depth: f32,
    ) -> Self {
        let mut result = Self::ZERO;
        result.m[0][0] = width / 2.0;
        result.m[1][1] = -height / 2.0;
        result.m[2][2] = max_depth - min_depth;
        result.m[3][0] = left + width / 2.0;
        result.m[3][1] = top + height / 2.0;
        result.m[3][2] = min_depth;
        result.m[3][3] = 1.0;
        result
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[j][i];
            }
        }
        result
    }

    // 3x3 determinant of the submatrix with `row` and `col` removed.
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut s = [[0.0f32; 3]; 3];
        let mut si = 0;
        for i in 0..4 {
            if i == row {
                continue;
            }
            let mut sj = 0;
            for j in 0..4 {
                if j == col {
                    continue;
                }
                s[si][sj] = self.m[i][j];
                sj += 1;
            }
            si += 1;
        }
        s[0][0] * (s[1][1] * s[2][2] - s[1][2] * s[2][1])
            - s[0][1] * (s[1][0] * s[2][2] - s[1][2] * s[2][0])
            + s[0][2] * (s[1][0] * s[2][1] - s[1][1] * s[2][0])
    }

    /// Determinant via cofactor expansion along the top row.
    pub fn determinant(&self) -> f32 {
        self.m[0][0] * self.minor(0, 0) - self.m[0][1] * self.minor(0, 1)
            + self.m[0][2] * self.minor(0, 2)
            - self.m[0][3] * self.minor(0, 3)
    }

    /// Closed-form inverse via the adjugate. Fails only on an exactly zero
    /// determinant; near-singular matrices still invert with `f32` precision.
    pub fn inverse(&self) -> Result<Self, GeometryError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(GeometryError::SingularMatrix);
        }
        let mut result = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
                // Adjugate transposes the cofactor matrix.
                result.m[col][row] = sign * self.minor(row, col) / det;
            }
        }
        Ok(result)
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Add for Matrix4x4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] + rhs.m[i][j];
            }
        }
        result
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][j] - rhs.m[i][j];
            }
        }
        result
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        result
    }
}

impl AddAssign for Matrix4x4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Matrix4x4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
