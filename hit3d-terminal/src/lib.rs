//! Terminal host for the hit3d kernel: raw-mode event loop, keyboard
//! controls, and the bouncing-ball demo scene rendered as wireframes.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use hit3d_core::Matrix4x4;

pub mod renderer;
pub mod scene;

pub use renderer::WireframeRenderer;
pub use scene::{DemoConfig, Scene};

const ORBIT_STEP: f32 = 0.05;
const ZOOM_STEP: f32 = 0.25;
const TILT_STEP: f32 = 0.05;
const DISTANCE_STEP: f32 = 0.05;

/// Main application: owns the scene, the renderer, and the terminal
/// lifecycle.
pub struct DemoApp {
    scene: Scene,
    renderer: WireframeRenderer,
    viewport: Matrix4x4,
    aspect: f32,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;
        // Terminal cells are roughly twice as tall as wide.
        let aspect = width as f32 / (height as f32 * 2.0);
        Ok(Self {
            scene: Scene::new(config),
            renderer: WireframeRenderer::new(width as usize, height as usize),
            viewport: Matrix4x4::viewport(0.0, 0.0, width as f32, height as f32, 0.0, 1.0),
            aspect,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let frame_rate = self.scene.config.frame_rate.max(1);
        let target_frame_time = Duration::from_millis(1000 / frame_rate as u64);
        let delta_time = 1.0 / frame_rate as f32;

        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            self.scene.update(delta_time);
            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char(' ') => self.scene.start(),
                KeyCode::Char('r') => self.scene.reset(),
                // Camera orbit
                KeyCode::Char('w') | KeyCode::Up => self.scene.world_rotate.x += ORBIT_STEP,
                KeyCode::Char('s') | KeyCode::Down => self.scene.world_rotate.x -= ORBIT_STEP,
                KeyCode::Char('a') | KeyCode::Left => self.scene.world_rotate.y -= ORBIT_STEP,
                KeyCode::Char('d') | KeyCode::Right => self.scene.world_rotate.y += ORBIT_STEP,
                // Zoom
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.scene.camera_translate.z += ZOOM_STEP
                }
                KeyCode::Char('-') => self.scene.camera_translate.z -= ZOOM_STEP,
                // Plane tilt and distance
                KeyCode::Char('i') => self.scene.plane_rotate.x += TILT_STEP,
                KeyCode::Char('k') => self.scene.plane_rotate.x -= TILT_STEP,
                KeyCode::Char('j') => self.scene.plane_rotate.z += TILT_STEP,
                KeyCode::Char('l') => self.scene.plane_rotate.z -= TILT_STEP,
                KeyCode::Char('u') => self.scene.plane_distance += DISTANCE_STEP,
                KeyCode::Char('o') => self.scene.plane_distance -= DISTANCE_STEP,
                // Overlays
                KeyCode::Char('b') => self.scene.show_bezier = !self.scene.show_bezier,
                KeyCode::Char('t') => self.scene.show_shapes = !self.scene.show_shapes,
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let view_projection = self.scene.view_projection(self.aspect)?;

        self.renderer.clear();
        self.renderer
            .draw_grid(&view_projection, &self.viewport, self.scene.config.grid_color);
        self.renderer.draw_plane(
            &self.scene.plane,
            &view_projection,
            &self.viewport,
            self.scene.config.plane_color,
        );
        self.renderer.draw_sphere(
            &self.scene.sphere,
            &view_projection,
            &self.viewport,
            self.scene.ball.color,
        );

        if self.scene.show_bezier {
            let [p0, p1, p2] = self.scene.bezier_points;
            self.renderer
                .draw_bezier(p0, p1, p2, &view_projection, &self.viewport, scene::YELLOW);
            for point in self.scene.bezier_points {
                self.renderer
                    .draw_control_point(point, &view_projection, &self.viewport, scene::GREY);
            }
        }

        if self.scene.show_shapes {
            self.renderer.draw_triangle(
                &self.scene.showcase_triangle,
                &view_projection,
                &self.viewport,
                self.scene.showcase_triangle_color(),
            );
            self.renderer.draw_aabb(
                &self.scene.showcase_aabb,
                &view_projection,
                &self.viewport,
                self.scene.showcase_aabb_color(),
            );
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "hit3d | FPS: {:.1} | Space=Drop R=Reset WASD=Orbit +/-=Zoom IKJL=Tilt UO=Dist B/T=Overlays Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
