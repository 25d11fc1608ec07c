//! Character-buffer wireframe rasterizer for the terminal.

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

use hit3d_core::{project_to_screen, Aabb, Matrix4x4, Plane, Sphere, Triangle, Vector3};

const GRID_HALF_WIDTH: f32 = 2.0;
const GRID_SUBDIVISION: u32 = 10;
const SPHERE_SUBDIVISION: u32 = 20;
const PLANE_EXTENT: f32 = 2.0;
const BEZIER_SEGMENTS: u32 = 32;
const CONTROL_POINT_RADIUS: f32 = 0.05;

/// Wireframe renderer drawing Bresenham lines into a character buffer, one
/// cell per screen pixel.
pub struct WireframeRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

/// Splits a 0xRRGGBBAA color into a terminal RGB color, dropping alpha.
fn terminal_color(color: u32) -> Color {
    Color::Rgb {
        r: (color >> 24) as u8,
        g: (color >> 16) as u8,
        b: (color >> 8) as u8,
    }
}

impl WireframeRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.char_buffer.len() {
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Reset;
        }
    }

    fn plot(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = glyph;
        self.color_buffer[idx] = color;
    }

    /// Bresenham line between two screen-space points.
    ///
    /// Endpoints far outside the buffer are rejected wholesale: projection
    /// through a tiny clip `w` can land coordinates in the billions, and
    /// walking those cells would stall the frame loop (the casts alone
    /// overflow `i32` arithmetic).
    pub fn draw_line(&mut self, from: Vector3, to: Vector3, glyph: char, color: u32) {
        if !from.x.is_finite() || !from.y.is_finite() || !to.x.is_finite() || !to.y.is_finite() {
            return;
        }
        let limit = (self.width.max(self.height) * 4) as f32;
        if from.x.abs() > limit
            || from.y.abs() > limit
            || to.x.abs() > limit
            || to.y.abs() > limit
        {
            return;
        }
        let color = terminal_color(color);
        let (mut x0, mut y0) = (from.x as i32, from.y as i32);
        let (x1, y1) = (to.x as i32, to.y as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x0, y0, glyph, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Projects a world-space edge and draws it; edges with a degenerate `w`
    /// are skipped.
    fn draw_edge(
        &mut self,
        start: Vector3,
        end: Vector3,
        view_projection: &Matrix4x4,
        viewport: &Matrix4x4,
        glyph: char,
        color: u32,
    ) {
        let (Ok(a), Ok(b)) = (
            project_to_screen(start, view_projection, viewport),
            project_to_screen(end, view_projection, viewport),
        ) else {
            return;
        };
        self.draw_line(a, b, glyph, color);
    }

    /// Ground-plane reference grid on y = 0.
    pub fn draw_grid(&mut self, view_projection: &Matrix4x4, viewport: &Matrix4x4, color: u32) {
        let step = (GRID_HALF_WIDTH * 2.0) / GRID_SUBDIVISION as f32;
        for index in 0..=GRID_SUBDIVISION {
            let pos = -GRID_HALF_WIDTH + step * index as f32;
            self.draw_edge(
                Vector3::new(pos, 0.0, -GRID_HALF_WIDTH),
                Vector3::new(pos, 0.0, GRID_HALF_WIDTH),
                view_projection,
                viewport,
                '.',
                color,
            );
            self.draw_edge(
                Vector3::new(-GRID_HALF_WIDTH, 0.0, pos),
                Vector3::new(GRID_HALF_WIDTH, 0.0, pos),
                view_projection,
                viewport,
                '.',
                color,
            );
        }
    }

    /// Draws the plane as a quad spanned by two in-plane perpendiculars
    /// around the point closest to the origin.
    pub fn draw_plane(
        &mut self,
        plane: &Plane,
        view_projection: &Matrix4x4,
        viewport: &Matrix4x4,
        color: u32,
    ) {
        let center = plane.normal * plane.distance;
        let u = plane.normal.perpendicular().normalize();
        let v = plane.normal.cross(u);
        let spokes = [u, -u, v, -v];

        let mut corners = [Vector3::ZERO; 4];
        for (corner, spoke) in corners.iter_mut().zip(spokes) {
            *corner = center + spoke * PLANE_EXTENT;
        }

        // Spoke order is +u, -u, +v, -v; chain them into the quad outline.
        for (a, b) in [(0, 2), (2, 1), (1, 3), (3, 0)] {
            self.draw_edge(corners[a], corners[b], view_projection, viewport, '#', color);
        }
    }

    /// Latitude/longitude wireframe sphere.
    pub fn draw_sphere(
        &mut self,
        sphere: &Sphere,
        view_projection: &Matrix4x4,
        viewport: &Matrix4x4,
        color: u32,
    ) {
        let lat_step = std::f32::consts::PI / SPHERE_SUBDIVISION as f32;
        let lon_step = 2.0 * std::f32::consts::PI / SPHERE_SUBDIVISION as f32;

        let surface_point = |lat: f32, lon: f32| {
            sphere.center
                + Vector3::new(
                    sphere.radius * lat.cos() * lon.cos(),
                    sphere.radius * lat.sin(),
                    sphere.radius * lat.cos() * lon.sin(),
                )
        };

        for lat_index in 0..SPHERE_SUBDIVISION {
            let lat = -0.5 * std::f32::consts::PI + lat_index as f32 * lat_step;
            for lon_index in 0..SPHERE_SUBDIVISION {
                let lon = lon_index as f32 * lon_step;
                let a = surface_point(lat, lon);
                let b = surface_point(lat + lat_step, lon);
                let c = surface_point(lat, lon + lon_step);
                self.draw_edge(a, b, view_projection, viewport, 'o', color);
                self.draw_edge(a, c, view_projection, viewport, 'o', color);
            }
        }
    }

    pub fn draw_triangle(
        &mut self,
        triangle: &Triangle,
        view_projection: &Matrix4x4,
        viewport: &Matrix4x4,
        color: u32,
    ) {
        for i in 0..3 {
            self.draw_edge(
                triangle.vertices[i],
                triangle.vertices[(i + 1) % 3],
                view_projection,
                viewport,
                '#',
                color,
            );
        }
    }

    /// All 12 box edges.
    pub fn draw_aabb(
        &mut self,
        aabb: &Aabb,
        view_projection: &Matrix4x4,
        viewport: &Matrix4x4,
        color: u32,
    ) {
        let corner = |i: usize| {
            Vector3::new(
                if i & 1 == 0 { aabb.min.x } else { aabb.max.x },
                if i & 2 == 0 { aabb.min.y } else { aabb.max.y },
                if i & 4 == 0 { aabb.min.z } else { aabb.max.z },
            )
        };
        const EDGES: [(usize, usize); 12] = [
            (0, 1), (0, 2), (0, 4),
            (1, 3), (1, 5),
            (2, 3), (2, 6),
            (3, 7),
            (4, 5), (4, 6),
            (5, 7), (6, 7),
        ];
        for (a, b) in EDGES {
            self.draw_edge(corner(a), corner(b), view_projection, viewport, '#', color);
        }
    }

    /// Quadratic Bezier curve via repeated lerp of the three control points.
    pub fn draw_bezier(
        &mut self,
        p0: Vector3,
        p1: Vector3,
        p2: Vector3,
        view_projection: &Matrix4x4,
        viewport: &Matrix4x4,
        color: u32,
    ) {
        for i in 0..BEZIER_SEGMENTS {
            let t1 = i as f32 / BEZIER_SEGMENTS as f32;
            let t2 = (i + 1) as f32 / BEZIER_SEGMENTS as f32;
            // lerp weights its first argument by t.
            let a = p0.lerp(p1, t1).lerp(p1.lerp(p2, t1), t1);
            let b = p0.lerp(p1, t2).lerp(p1.lerp(p2, t2), t2);
            self.draw_edge(a, b, view_projection, viewport, '*', color);
        }
    }

    /// Marks a Bezier control point with a small sphere.
    pub fn draw_control_point(
        &mut self,
        point: Vector3,
        view_projection: &Matrix4x4,
        viewport: &Matrix4x4,
        color: u32,
    ) {
        let marker = Sphere::new(point, CONTROL_POINT_RADIUS);
        self.draw_sphere(&marker, view_projection, viewport, color);
    }

    /// Writes the buffer to the terminal.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
