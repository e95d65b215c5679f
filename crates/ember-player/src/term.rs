//! Terminal-grid renderer backed by ANSI truecolor output

use ember_core::{Color, EmberError, Renderer, Result};
use std::io::{self, IsTerminal, Write};

/// A double-buffered character grid flushed to the terminal once per frame.
///
/// Cells outside the grid are silently dropped, so entities can wander off
/// screen without bounds checks of their own.
pub struct TermRenderer {
    width: i32,
    height: i32,
    current: Color,
    cells: Vec<(char, Color)>,
}

impl TermRenderer {
    /// Create a renderer backed by stdout. Fails when stdout is not a
    /// terminal.
    pub fn create(width: i32, height: i32) -> Result<Self> {
        if !io::stdout().is_terminal() {
            return Err(EmberError::RendererUnavailable(
                "stdout is not a terminal".into(),
            ));
        }
        Ok(Self::headless(width, height))
    }

    /// Create a renderer without probing the terminal. Used by tests.
    pub fn headless(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            current: Color::WHITE,
            cells: vec![(' ', Color::BLACK); (width * height).max(0) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reset the back buffer for a new frame.
    pub fn begin_frame(&mut self) {
        self.cells.fill((' ', Color::BLACK));
    }

    /// Flush the back buffer to the terminal.
    pub fn present(&self) -> Result<()> {
        let mut out = String::with_capacity(self.cells.len() * 20);
        out.push_str("\x1b[H");
        for y in 0..self.height {
            for x in 0..self.width {
                let (c, color) = self.cells[(y * self.width + x) as usize];
                let (r, g, b) = color.to_rgb8();
                out.push_str(&format!("\x1b[38;2;{r};{g};{b}m"));
                out.push(c);
            }
            out.push_str("\x1b[0m\r\n");
        }

        let mut stdout = io::stdout().lock();
        stdout.write_all(out.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }
}

impl Renderer for TermRenderer {
    fn color(&mut self, color: Color) {
        self.current = color;
    }

    fn char(&mut self, c: char, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = (c, self.current);
        }
    }

    fn rect(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = ('█', self.current);
        }
    }
}
