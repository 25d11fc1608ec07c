//! hit3d terminal demo - bouncing ball on a tilting plane.
//!
//! Controls:
//!   - Space: drop the ball, R: reset
//!   - WASD / Arrow Keys: orbit the view, +/-: zoom
//!   - I/K and J/L: tilt the plane, U/O: plane distance
//!   - B: Bezier overlay, T: shape showcase
//!   - Q/ESC: quit

use anyhow::Result;
use tracing::info;

use hit3d_terminal::{DemoApp, DemoConfig};

fn main() -> Result<()> {
    // Stdout is the canvas; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = DemoConfig::default();
    info!(frame_rate = config.frame_rate, "starting terminal demo");

    let mut app = DemoApp::new(config)?;
    app.run()?;

    info!("terminal demo finished");
    Ok(())
}
