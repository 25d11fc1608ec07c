//! 3-component vectors and their homogeneous 4-component extension.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::GeometryError;

/// A 3D vector of `f32` components with value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Returns the unit vector in the same direction, or the zero vector when
    /// the length is exactly zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length != 0.0 {
            self / length
        } else {
            Self::ZERO
        }
    }

    /// Like [`normalize`](Self::normalize), but the zero-length case is
    /// `None` instead of the zero vector.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let length = self.length();
        if length != 0.0 {
            Some(self / length)
        } else {
            None
        }
    }

    /// Linear interpolation with a reversed parameter: `t = 1` yields `self`,
    /// `t = 0` yields `other`. The convention is fixed for compatibility with
    /// existing call sites; pass `1 - t` for the conventional direction.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * t + other * (1.0 - t)
    }

    /// Projects `self` onto `onto`.
    pub fn project(self, onto: Self) -> Result<Self, GeometryError> {
        let length_sq = onto.length_squared();
        if length_sq == 0.0 {
            return Err(GeometryError::ZeroLengthProjection);
        }
        Ok(onto * (self.dot(onto) / length_sq))
    }

    /// Returns a vector perpendicular to `self`, not necessarily normalized
    /// and with no canonical choice guaranteed.
    #[inline]
    pub fn perpendicular(self) -> Self {
        if self.x != 0.0 || self.z != 0.0 {
            Self::new(-self.y, self.x, 0.0)
        } else {
            // Pure Y-axis input.
            Self::new(0.0, -self.z, self.y)
        }
    }

    /// Reflects `self` across a plane with unit normal `normal`.
    /// The normal is not normalized internally.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Extends to a homogeneous coordinate with the given `w`.
    #[inline]
    pub const fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise product.
impl Mul for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// A homogeneous 4-component coordinate used in the transform pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Drops `w` without dividing.
    #[inline]
    pub const fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_and_cross() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);

        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 2.0;
        assert_eq!(c, b * 2.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vector3::new(3.0, -4.0, 12.0);
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_idempotent() {
        let v = Vector3::new(0.3, 0.7, -2.5);
        let n = v.normalize();
        assert_relative_eq!(n.normalize().x, n.x, epsilon = 1e-6);
        assert_relative_eq!(n.normalize().y, n.y, epsilon = 1e-6);
        assert_relative_eq!(n.normalize().z, n.z, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_guarded() {
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    }

    #[test]
    fn test_try_normalize() {
        let v = Vector3::new(0.0, 3.0, 4.0);
        assert_eq!(v.try_normalize(), Some(Vector3::new(0.0, 0.6, 0.8)));
        assert_eq!(Vector3::ZERO.try_normalize(), None);
    }

    #[test]
    fn test_length_squared() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.length_squared(), 14.0);
        assert_eq!(v.length(), 14.0f32.sqrt());
    }

    #[test]
    fn test_axis_constants() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::X.dot(Vector3::Y), 0.0);
        assert_eq!(Vector3::X.length(), 1.0);
    }

    #[test]
    fn test_lerp_reversed_convention() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(5.0, 6.0, 7.0);
        // t selects the *first* endpoint at 1.0.
        assert_eq!(a.lerp(b, 1.0), a);
        assert_eq!(a.lerp(b, 0.0), b);
        assert_eq!(a.lerp(b, 0.25), Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_project() {
        let v = Vector3::new(2.0, 3.0, 0.0);
        let onto = Vector3::new(4.0, 0.0, 0.0);
        assert_eq!(v.project(onto).unwrap(), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(
            v.project(Vector3::ZERO),
            Err(GeometryError::ZeroLengthProjection)
        );
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.perpendicular(), Vector3::new(-2.0, 1.0, 0.0));
        assert_relative_eq!(v.dot(v.perpendicular()), 0.0);

        // Pure Y-axis branch.
        let y = Vector3::new(0.0, 5.0, 0.0);
        assert_eq!(y.perpendicular(), Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(y.dot(y.perpendicular()), 0.0);
    }

    #[test]
    fn test_reflect_involution() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        let n = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(n), Vector3::new(1.0, 2.0, 0.5));
        let twice = v.reflect(n).reflect(n);
        assert_relative_eq!(twice.x, v.x, epsilon = 1e-6);
        assert_relative_eq!(twice.y, v.y, epsilon = 1e-6);
        assert_relative_eq!(twice.z, v.z, epsilon = 1e-6);
    }
}
