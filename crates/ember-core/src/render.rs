//! The drawing-surface capability consumed by entities
//!
//! The loop never implements a surface itself; it only forwards an opaque
//! `&mut dyn Renderer` into each entity's draw call. Implementations live in
//! the host layer (a terminal grid, a test recorder).

use crate::types::Color;

/// A tile-grid drawing surface.
///
/// Coordinates are tile cells, not pixels. `color` sets the fill used by
/// subsequent `char` and `rect` calls. The compound operations take their
/// colors explicitly so the seam never needs to read state back from the
/// surface.
pub trait Renderer {
    /// Set the current draw color.
    fn color(&mut self, color: Color);

    /// Draw a single character at a cell.
    fn char(&mut self, c: char, x: i32, y: i32);

    /// Fill one cell with the current color.
    fn rect(&mut self, x: i32, y: i32);

    /// Print text one cell per character, advancing to the right.
    fn print(&mut self, text: &str, x: i32, y: i32) {
        for (i, c) in text.chars().enumerate() {
            self.char(c, x + i as i32, y);
        }
    }

    /// Draw a character over a filled cell.
    fn char_rect(&mut self, c: char, x: i32, y: i32, fg: Color, fill: Color) {
        self.color(fill);
        self.rect(x, y);
        self.color(fg);
        self.char(c, x, y);
    }

    /// Print text over filled cells.
    fn print_rect(&mut self, text: &str, x: i32, y: i32, fg: Color, fill: Color) {
        for (i, c) in text.chars().enumerate() {
            self.char_rect(c, x + i as i32, y, fg, fill);
        }
    }
}
