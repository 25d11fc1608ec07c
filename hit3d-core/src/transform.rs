//! Homogeneous-coordinate transforms and the world-to-screen pipeline.

use std::ops::Mul;

use crate::error::GeometryError;
use crate::matrix::Matrix4x4;
use crate::vector::{Vector3, Vector4};

/// Full 4-component row-vector product, no divide. Used to build clip-space
/// coordinates before dividing by `w`.
impl Mul<&Matrix4x4> for Vector4 {
    type Output = Vector4;

    fn mul(self, m: &Matrix4x4) -> Vector4 {
        Vector4::new(
            self.x * m.m[0][0] + self.y * m.m[1][0] + self.z * m.m[2][0] + self.w * m.m[3][0],
            self.x * m.m[0][1] + self.y * m.m[1][1] + self.z * m.m[2][1] + self.w * m.m[3][1],
            self.x * m.m[0][2] + self.y * m.m[1][2] + self.z * m.m[2][2] + self.w * m.m[3][2],
            self.x * m.m[0][3] + self.y * m.m[1][3] + self.z * m.m[2][3] + self.w * m.m[3][3],
        )
    }
}

/// Transforms a point through `matrix` with an implicit `w = 1`, then divides
/// by the resulting `w`.
pub fn transform_point(point: Vector3, matrix: &Matrix4x4) -> Result<Vector3, GeometryError> {
    let h = point.extend(1.0) * matrix;
    if h.w == 0.0 {
        return Err(GeometryError::DegenerateW);
    }
    Ok(Vector3::new(h.x / h.w, h.y / h.w, h.z / h.w))
}

/// Transforms a direction through the upper-left 3x3 of `matrix`, ignoring
/// translation. No divide; the result is not renormalized.
pub fn transform_normal(v: Vector3, matrix: &Matrix4x4) -> Vector3 {
    Vector3::new(
        v.x * matrix.m[0][0] + v.y * matrix.m[1][0] + v.z * matrix.m[2][0],
        v.x * matrix.m[0][1] + v.y * matrix.m[1][1] + v.z * matrix.m[2][1],
        v.x * matrix.m[0][2] + v.y * matrix.m[1][2] + v.z * matrix.m[2][2],
    )
}

/// The canonical world-to-pixel path: clip-space transform, NDC divide by
/// `w`, then the viewport transform. Stage order is fixed; skipping the NDC
/// divide produces incorrect perspective.
pub fn project_to_screen(
    point: Vector3,
    view_projection: &Matrix4x4,
    viewport: &Matrix4x4,
) -> Result<Vector3, GeometryError> {
    let clip = point.extend(1.0) * view_projection;
    if clip.w == 0.0 {
        return Err(GeometryError::DegenerateW);
    }
    let ndc = Vector4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, 1.0);
    let screen = ndc * viewport;
    Ok(screen.truncate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_point_translation() {
        let m = Matrix4x4::translate(Vector3::new(1.0, 2.0, 3.0));
        let p = transform_point(Vector3::new(1.0, 1.0, 1.0), &m).unwrap();
        assert_eq!(p, Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_transform_point_degenerate_w() {
        // A perspective matrix sends w = z; a point at z = 0 has no image.
        let p = Matrix4x4::perspective_fov(0.9, 1.0, 0.1, 100.0);
        assert_eq!(
            transform_point(Vector3::new(0.0, 0.0, 0.0), &p),
            Err(GeometryError::DegenerateW)
        );
    }

    #[test]
    fn test_transform_normal_ignores_translation() {
        let m = Matrix4x4::translate(Vector3::new(10.0, 10.0, 10.0));
        let n = transform_normal(Vector3::new(0.0, 1.0, 0.0), &m);
        assert_eq!(n, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_transform_normal_rotates() {
        let m = Matrix4x4::rotate_z(std::f32::consts::FRAC_PI_2);
        let n = transform_normal(Vector3::new(1.0, 0.0, 0.0), &m);
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(n.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_homogeneous_multiply_keeps_w() {
        let p = Matrix4x4::perspective_fov(0.9, 1.0, 0.1, 100.0);
        let clip = Vector4::new(0.0, 0.0, 5.0, 1.0) * &p;
        // Row-vector convention: w picks up view-space depth.
        assert_relative_eq!(clip.w, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_project_to_screen_centered_point() {
        let projection = Matrix4x4::perspective_fov(0.9, 1.0, 0.1, 100.0);
        let viewport = Matrix4x4::viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
        let screen =
            project_to_screen(Vector3::new(0.0, 0.0, 5.0), &projection, &viewport).unwrap();
        assert_relative_eq!(screen.x, 640.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 360.0, epsilon = 1e-3);
        assert!(screen.z > 0.0 && screen.z < 1.0);
    }
}
