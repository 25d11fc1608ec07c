//! Plain-data shape types consumed by the collision tests and the host's
//! draw routines. All are `Copy` values built at call sites; the kernel never
//! owns or mutates them.

use crate::vector::Vector3;

/// An infinite plane: unit normal plus signed distance from the origin along
/// that normal.
///
/// Every consumer assumes `normal` has unit length; the kernel does not
/// enforce it. Normalize before constructing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub distance: f32,
}

impl Plane {
    pub const fn new(normal: Vector3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Signed distance from `point` to the plane, positive on the normal
    /// side.
    #[inline]
    pub fn signed_distance(&self, point: Vector3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// A line segment stored as an origin plus a difference vector
/// (`end - origin`). Points on the segment are `origin + t * diff` for
/// `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub origin: Vector3,
    pub diff: Vector3,
}

impl Segment {
    pub const fn new(origin: Vector3, diff: Vector3) -> Self {
        Self { origin, diff }
    }

    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Self::new(start, end - start)
    }

    #[inline]
    pub fn end(&self) -> Vector3 {
        self.origin + self.diff
    }

    /// The foot of the perpendicular from `point` onto the carrying line.
    /// The parameter is not clamped to the segment's extent.
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        let t = (point - self.origin).dot(self.diff) / self.diff.dot(self.diff);
        self.origin + self.diff * t
    }
}

/// A triangle; winding order determines the outward normal used by the
/// containment test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vector3; 3],
}

impl Triangle {
    pub const fn new(v0: Vector3, v1: Vector3, v2: Vector3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Unnormalized face normal, `(v1 - v0) x (v2 - v0)`.
    pub fn normal(&self) -> Vector3 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(edge2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Vector3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Axis-aligned bounding box. Callers keep `min <= max` component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3,
    pub max: Vector3,
}

impl Aabb {
    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Clamps `point` into the box, yielding the closest contained point.
    pub fn closest_point(&self, point: Vector3) -> Vector3 {
        Vector3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }
}

/// A kinematic sphere for the demo application: the host integrates it, the
/// kernel never steps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vector3,
    pub velocity: Vector3,
    pub acceleration: Vector3,
    pub mass: f32,
    pub radius: f32,
    /// Display color, 0xRRGGBBAA.
    pub color: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_end() {
        let s = Segment::from_points(Vector3::new(1.0, 1.0, 1.0), Vector3::new(4.0, 1.0, 1.0));
        assert_eq!(s.diff, Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(s.end(), Vector3::new(4.0, 1.0, 1.0));
    }

    #[test]
    fn test_segment_closest_point_unclamped() {
        let s = Segment::new(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0));
        let on = s.closest_point(Vector3::new(0.5, 2.0, 0.0));
        assert_eq!(on, Vector3::new(0.5, 0.0, 0.0));
        // Beyond the endpoint the parameter is not clamped.
        let past = s.closest_point(Vector3::new(3.0, 1.0, 0.0));
        assert_eq!(past, Vector3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_triangle_normal_winding() {
        let t = Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(t.normal(), Vector3::new(0.0, 0.0, 1.0));
        let reversed = Triangle::new(t.vertices[0], t.vertices[2], t.vertices[1]);
        assert_eq!(reversed.normal(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_plane_signed_distance() {
        let p = Plane::new(Vector3::new(0.0, 1.0, 0.0), 2.0);
        assert_eq!(p.signed_distance(Vector3::new(5.0, 3.0, -1.0)), 1.0);
        assert_eq!(p.signed_distance(Vector3::new(0.0, 0.0, 0.0)), -2.0);
    }

    #[test]
    fn test_aabb_closest_point() {
        let b = Aabb::new(Vector3::ZERO, Vector3::new(1.0, 1.0, 1.0));
        assert!(b.is_valid());
        assert_eq!(
            b.closest_point(Vector3::new(2.0, 0.5, -1.0)),
            Vector3::new(1.0, 0.5, 0.0)
        );
        let inside = Vector3::new(0.3, 0.4, 0.5);
        assert_eq!(b.closest_point(inside), inside);
    }
}
