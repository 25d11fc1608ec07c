//! Pairwise intersection tests. Each test is a pure function of two shapes
//! returning a boolean verdict; none mutate their inputs. Boundary contact
//! counts as collision throughout.

use crate::geometry::{Aabb, Plane, Segment, Sphere, Triangle};

const PARALLEL_EPSILON: f32 = 1e-6;

/// Centers within the sum of radii; exact touching collides.
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    let distance = (b.center - a.center).length();
    distance <= a.radius + b.radius
}

/// Center within `radius` of the plane. Assumes a unit plane normal.
pub fn sphere_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(sphere.center).abs() <= sphere.radius
}

/// Solves the plane equation along the segment direction; collision iff the
/// parameter lands in `[0, 1]`.
///
/// A segment with |normal . diff| below 1e-6 is treated as parallel and
/// reports no collision, even when it lies in the plane.
pub fn segment_plane(segment: &Segment, plane: &Plane) -> bool {
    let dot = plane.normal.dot(segment.diff);
    if dot.abs() < PARALLEL_EPSILON {
        return false;
    }
    let t = (plane.distance - segment.origin.dot(plane.normal)) / dot;
    (0.0..=1.0).contains(&t)
}

/// Moller-style triangle/segment test: intersect the segment with the
/// triangle's plane, then check containment by the sign of three
/// edge-cross-product dots against the normal (edges count as inside).
///
/// The plane parameter runs along the *normalized* direction and is bounded
/// by the segment's unnormalized length, so `t` is in distance units; the
/// two stay consistent with each other.
pub fn triangle_segment(triangle: &Triangle, segment: &Segment) -> bool {
    let normal = triangle.normal().normalize();
    let dir = segment.diff.normalize();

    let dot_nd = normal.dot(dir);
    if dot_nd.abs() < PARALLEL_EPSILON {
        return false;
    }

    let to_plane = triangle.vertices[0] - segment.origin;
    let t = normal.dot(to_plane) / dot_nd;
    if t < 0.0 || t > segment.diff.length() {
        return false;
    }

    let point = segment.origin + dir * t;

    let c0 = (triangle.vertices[1] - triangle.vertices[0]).cross(point - triangle.vertices[0]);
    let c1 = (triangle.vertices[2] - triangle.vertices[1]).cross(point - triangle.vertices[1]);
    let c2 = (triangle.vertices[0] - triangle.vertices[2]).cross(point - triangle.vertices[2]);

    c0.dot(normal) >= 0.0 && c1.dot(normal) >= 0.0 && c2.dot(normal) >= 0.0
}

/// Per-axis interval overlap; touching faces collide.
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.min.x <= b.max.x
        && a.max.x >= b.min.x
        && a.min.y <= b.max.y
        && a.max.y >= b.min.y
        && a.min.z <= b.max.z
        && a.max.z >= b.min.z
}

/// Clamp the center into the box; collision iff the closest point is within
/// the radius.
pub fn aabb_sphere(aabb: &Aabb, sphere: &Sphere) -> bool {
    let closest = aabb.closest_point(sphere.center);
    (closest - sphere.center).length() <= sphere.radius
}

/// Slab method: per-axis entry/exit parameters reduced via max-of-near,
/// min-of-far.
///
/// A zero direction component divides to +/-inf (or NaN when the origin sits
/// exactly on the slab boundary); `f32::max`/`f32::min` ignore NaN operands,
/// so such an axis contributes no constraint and face grazing still resolves
/// to the inclusive verdict.
pub fn aabb_segment(aabb: &Aabb, segment: &Segment) -> bool {
    let mut t_near_x = (aabb.min.x - segment.origin.x) / segment.diff.x;
    let mut t_far_x = (aabb.max.x - segment.origin.x) / segment.diff.x;
    if t_near_x > t_far_x {
        std::mem::swap(&mut t_near_x, &mut t_far_x);
    }

    let mut t_near_y = (aabb.min.y - segment.origin.y) / segment.diff.y;
    let mut t_far_y = (aabb.max.y - segment.origin.y) / segment.diff.y;
    if t_near_y > t_far_y {
        std::mem::swap(&mut t_near_y, &mut t_far_y);
    }

    let mut t_near_z = (aabb.min.z - segment.origin.z) / segment.diff.z;
    let mut t_far_z = (aabb.max.z - segment.origin.z) / segment.diff.z;
    if t_near_z > t_far_z {
        std::mem::swap(&mut t_near_z, &mut t_far_z);
    }

    let t_min = t_near_x.max(t_near_y).max(t_near_z);
    let t_max = t_far_x.min(t_far_y).min(t_far_z);

    t_min <= t_max && t_max >= 0.0 && t_min <= 1.0
}
