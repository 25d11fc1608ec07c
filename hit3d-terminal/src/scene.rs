//! Demo scene state: camera pose, tilting plane, bouncing ball, and the
//! reflect-and-displace response.

use hit3d_core::{
    collision, transform_normal, Aabb, Ball, GeometryError, Matrix4x4, Plane, Sphere, Triangle,
    Vector3,
};
use tracing::debug;

pub const WHITE: u32 = 0xFFFF_FFFF;
pub const GREY: u32 = 0x6F6F_6FFF;
pub const RED: u32 = 0xFF40_40FF;
pub const CYAN: u32 = 0x40FF_FFFF;
pub const YELLOW: u32 = 0xFFFF_40FF;

const BALL_START: Vector3 = Vector3::new(0.8, 1.2, 0.3);
const PLANE_BASE_NORMAL: Vector3 = Vector3::new(-0.2, 0.9, -0.3);

/// Demo parameters with sensible defaults; adjusted per run by the host.
#[derive(Debug, Clone, Copy)]
pub struct DemoConfig {
    pub fov_y: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    pub gravity: Vector3,
    pub restitution: f32,
    pub frame_rate: u32,
    pub ball_color: u32,
    pub plane_color: u32,
    pub grid_color: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fov_y: 0.45,
            near_clip: 0.1,
            far_clip: 100.0,
            gravity: Vector3::new(0.0, -9.8, 0.0),
            restitution: 0.8,
            frame_rate: 30,
            ball_color: WHITE,
            plane_color: WHITE,
            grid_color: GREY,
        }
    }
}

/// The bouncing-ball scene. The kernel supplies the math; this struct owns
/// the state and the single reflect-and-displace response.
pub struct Scene {
    pub config: DemoConfig,
    pub camera_translate: Vector3,
    pub camera_rotate: Vector3,
    pub world_rotate: Vector3,
    pub plane: Plane,
    pub plane_rotate: Vector3,
    pub plane_distance: f32,
    pub ball: Ball,
    pub sphere: Sphere,
    pub active: bool,
    pub show_bezier: bool,
    pub show_shapes: bool,
    pub bezier_points: [Vector3; 3],
    pub showcase_triangle: Triangle,
    pub showcase_aabb: Aabb,
}

impl Scene {
    pub fn new(config: DemoConfig) -> Self {
        let ball = Ball {
            position: BALL_START,
            velocity: Vector3::ZERO,
            acceleration: config.gravity,
            mass: 2.0,
            radius: 0.05,
            color: config.ball_color,
        };
        Self {
            config,
            camera_translate: Vector3::new(0.0, 1.9, -6.49),
            camera_rotate: Vector3::new(0.26, 0.0, 0.0),
            world_rotate: Vector3::ZERO,
            plane: Plane::new(PLANE_BASE_NORMAL.try_normalize().unwrap_or(Vector3::Y), 0.0),
            plane_rotate: Vector3::ZERO,
            plane_distance: 0.0,
            ball,
            sphere: Sphere::new(BALL_START, ball.radius),
            active: false,
            show_bezier: false,
            show_shapes: false,
            bezier_points: [
                Vector3::new(-0.8, 0.58, 1.0),
                Vector3::new(1.76, 1.0, -0.3),
                Vector3::new(0.94, 0.7, 2.3),
            ],
            showcase_triangle: Triangle::new(
                Vector3::new(-1.5, 0.0, 0.5),
                Vector3::new(-0.5, 0.0, 0.5),
                Vector3::new(-1.0, 1.0, 0.5),
            ),
            showcase_aabb: Aabb::new(
                Vector3::new(1.0, 0.0, -1.0),
                Vector3::new(1.6, 0.6, -0.4),
            ),
        }
    }

    /// Stops the motion and puts the ball back at its drop point.
    pub fn reset(&mut self) {
        self.active = false;
        self.sphere.center = BALL_START;
        self.ball.velocity = Vector3::ZERO;
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Re-derives the plane normal from the tilt angles, integrates the ball,
    /// and applies the bounce response against the plane.
    pub fn update(&mut self, delta_time: f32) {
        let rotation = Matrix4x4::rotate_x(self.plane_rotate.x)
            * Matrix4x4::rotate_y(self.plane_rotate.y)
            * Matrix4x4::rotate_z(self.plane_rotate.z);
        // Rotation preserves length, so the rotated base normal is nonzero;
        // the previous normal stands if that ever stops holding.
        if let Some(normal) = transform_normal(PLANE_BASE_NORMAL, &rotation).try_normalize() {
            self.plane.normal = normal;
        }
        self.plane.distance = self.plane_distance;

        if !self.active {
            return;
        }

        self.ball.velocity += self.ball.acceleration * delta_time;
        self.sphere.center += self.ball.velocity * delta_time;

        let distance = self.plane.signed_distance(self.sphere.center);
        if distance < self.sphere.radius {
            self.ball.velocity =
                self.ball.velocity.reflect(self.plane.normal) * self.config.restitution;
            debug!(
                speed = self.ball.velocity.length(),
                penetration = self.sphere.radius - distance,
                "ball bounced"
            );
            // Push the sphere out of the plane; repeated because a single
            // correction along a tilted normal can leave residual overlap.
            for _ in 0..3 {
                let distance = self.plane.signed_distance(self.sphere.center);
                self.sphere.center += self.plane.normal * (self.sphere.radius - distance);
            }
        }
    }

    /// World, camera, and projection composed into one clip-space matrix.
    pub fn view_projection(&self, aspect: f32) -> Result<Matrix4x4, GeometryError> {
        let unit = Vector3::new(1.0, 1.0, 1.0);
        let world = Matrix4x4::affine(unit, self.world_rotate, Vector3::ZERO);
        let camera = Matrix4x4::affine(unit, self.camera_rotate, self.camera_translate);
        let projection = Matrix4x4::perspective_fov(
            self.config.fov_y,
            aspect,
            self.config.near_clip,
            self.config.far_clip,
        );
        Ok(world.inverse()? * camera.inverse()? * projection)
    }

    /// Color for the showcase box: highlighted while the ball is inside it.
    pub fn showcase_aabb_color(&self) -> u32 {
        if collision::aabb_sphere(&self.showcase_aabb, &self.sphere) {
            RED
        } else {
            CYAN
        }
    }

    /// Color for the showcase triangle: highlighted while the ball's probe
    /// segment (one radius of travel along the velocity) crosses it.
    pub fn showcase_triangle_color(&self) -> u32 {
        let speed = self.ball.velocity.length();
        if speed > 0.0 {
            let probe = hit3d_core::Segment::new(
                self.sphere.center,
                self.ball.velocity * (self.sphere.radius * 4.0 / speed),
            );
            if collision::triangle_segment(&self.showcase_triangle, &probe) {
                return RED;
            }
        }
        CYAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ball_falls_under_gravity() {
        let mut scene = Scene::new(DemoConfig::default());
        scene.start();
        let y0 = scene.sphere.center.y;
        scene.update(1.0 / 60.0);
        assert!(scene.sphere.center.y < y0);
        assert!(scene.ball.velocity.y < 0.0);
    }

    #[test]
    fn test_inactive_scene_stays_put() {
        let mut scene = Scene::new(DemoConfig::default());
        let start = scene.sphere.center;
        scene.update(1.0 / 60.0);
        assert_eq!(scene.sphere.center, start);
    }

    #[test]
    fn test_bounce_reverses_and_damps() {
        let mut scene = Scene::new(DemoConfig::default());
        scene.start();
        // Step until the ball has met the plane at least once.
        let mut bounced = false;
        for _ in 0..600 {
            let before = scene.ball.velocity;
            scene.update(1.0 / 60.0);
            let along_normal = scene.plane.normal.dot(scene.ball.velocity);
            if scene.plane.normal.dot(before) < 0.0 && along_normal > 0.0 {
                bounced = true;
                break;
            }
        }
        assert!(bounced);
        // After the displacement the sphere rests outside the plane.
        assert!(
            scene.plane.signed_distance(scene.sphere.center) >= scene.sphere.radius - 1e-4
        );
    }

    #[test]
    fn test_reset_restores_drop_point() {
        let mut scene = Scene::new(DemoConfig::default());
        scene.start();
        for _ in 0..30 {
            scene.update(1.0 / 60.0);
        }
        scene.reset();
        assert!(!scene.active);
        assert_eq!(scene.sphere.center, BALL_START);
        assert_eq!(scene.ball.velocity, Vector3::ZERO);
    }

    #[test]
    fn test_plane_normal_unit_at_construction() {
        let scene = Scene::new(DemoConfig::default());
        assert_relative_eq!(scene.plane.normal.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_plane_normal_tracks_tilt() {
        let mut scene = Scene::new(DemoConfig::default());
        scene.update(1.0 / 60.0);
        let untilted = scene.plane.normal;
        assert_relative_eq!(untilted.length(), 1.0, epsilon = 1e-5);

        scene.plane_rotate.x = 0.5;
        scene.update(1.0 / 60.0);
        assert!((scene.plane.normal - untilted).length() > 1e-3);
        assert_relative_eq!(scene.plane.normal.length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_view_projection_composes() {
        let scene = Scene::new(DemoConfig::default());
        let vp = scene.view_projection(16.0 / 9.0).unwrap();
        // The homogeneous-divide coupling survives the composition.
        assert!(vp.m[2][3].abs() > 1e-3);
    }
}
