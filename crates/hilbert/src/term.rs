//! Terminal front end: a character-grid canvas and a stdin key source.
//!
//! Segments are rasterised into a square grid of cells and each presented
//! frame is written out as text, one row per line.

use std::io::{self, Bytes, Read, Write};

use hilbertcurve::{Canvas, PixelPoint};
use tracing::warn;

/// Glyph for a cell the curve passes through.
const INK: char = '#';
/// Glyph for an empty cell.
const BLANK: char = '.';

/// A square character grid that prints itself on every present.
pub struct TextCanvas<W: Write> {
    /// Cells per side.
    side: u32,
    /// Row-major cell occupancy.
    cells: Vec<bool>,
    /// Destination for presented frames.
    out: W,
    /// First write error, reported by [`TextCanvas::finish`].
    error: Option<io::Error>,
}

impl<W: Write> TextCanvas<W> {
    /// Create an empty canvas that writes frames to `out`.
    pub fn new(out: W) -> Self {
        Self {
            side: 0,
            cells: Vec::new(),
            out,
            error: None,
        }
    }

    /// Mark a cell if the coordinates are inside the grid.
    fn put_cell_safe(&mut self, x: i64, y: i64) {
        let side = i64::from(self.side);
        if x >= 0 && y >= 0 && x < side && y < side {
            self.cells[(y * side + x) as usize] = true;
        }
    }

    /// Draw a 4-connected Bresenham line.
    fn draw_line(&mut self, mut x0: i64, mut y0: i64, x1: i64, y1: i64) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put_cell_safe(x0, y0);
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

    /// Current grid as text, one row per line.
    pub fn render(&self) -> String {
        let side = self.side as usize;
        let mut text = String::with_capacity(side * (side + 1));
        for row in self.cells.chunks(side.max(1)) {
            text.extend(row.iter().map(|&on| if on { INK } else { BLANK }));
            text.push('\n');
        }
        text
    }

    /// Flush output and report the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Canvas for TextCanvas<W> {
    fn clear_canvas(&mut self, width: u32, height: u32) {
        self.side = width.min(height);
        self.cells.clear();
        self.cells.resize((self.side as usize).pow(2), false);
    }

    fn draw_segment(&mut self, p1: PixelPoint, p2: PixelPoint) {
        self.draw_line(
            i64::from(p1.x),
            i64::from(p1.y),
            i64::from(p2.x),
            i64::from(p2.y),
        );
    }

    fn present(&mut self) {
        if self.error.is_some() {
            return;
        }
        let frame = self.render();
        let written = writeln!(self.out, "{frame}").and_then(|()| self.out.flush());
        if let Err(e) = written {
            warn!("failed to write frame: {e}");
            self.error = Some(e);
        }
    }
}

/// Keys read one byte at a time from a reader, skipping whitespace so that
/// line-buffered terminal input works.
pub struct ReaderKeys<R: Read> {
    /// Remaining input.
    bytes: Bytes<R>,
}

impl<R: Read> ReaderKeys<R> {
    /// Read keys from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
        }
    }
}

impl<R: Read> Iterator for ReaderKeys<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            match self.bytes.next()? {
                Ok(b) if b.is_ascii_whitespace() => {}
                Ok(b) => return Some(char::from(b)),
                Err(e) => {
                    warn!("input closed: {e}");
                    return None;
                }
            }
        }
    }
}
