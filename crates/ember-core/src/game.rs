//! The host-facing game hook an external driver loop ticks

use crate::render::Renderer;
use crate::Result;

/// Top-level game driven by an external loop.
///
/// The host wires its input source into `key`/`mouse` and calls `draw` once
/// per frame with the elapsed seconds. The loop itself belongs to the host;
/// the core never schedules its own ticks.
pub trait Game {
    /// A key was pressed, identified by its layout-independent code
    /// (e.g. "KeyW", "Space").
    fn key(&mut self, code: &str);

    /// A pointer press at the given cell coordinates.
    fn mouse(&mut self, x: i32, y: i32);

    /// Render one frame.
    fn draw(&mut self, renderer: &mut dyn Renderer, delta: f64) -> Result<()>;
}
