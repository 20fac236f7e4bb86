//! Interfaces to the rendering and input collaborators.
//!
//! The controller never touches a window or a terminal directly. It draws
//! through a [`Canvas`] and reads keys from a [`KeySource`]; front ends
//! provide both.

use std::mem;

use crate::point::PixelPoint;

/// A drawing surface the controller renders curves onto.
pub trait Canvas {
    /// Erase the surface, sizing it to `width`×`height` pixels.
    fn clear_canvas(&mut self, width: u32, height: u32);

    /// Draw one straight segment between two pixel positions. Points may lie
    /// outside the surface; implementations clip.
    fn draw_segment(&mut self, p1: PixelPoint, p2: PixelPoint);

    /// Make everything drawn since the last clear visible.
    fn present(&mut self);
}

/// A blocking source of typed keys.
pub trait KeySource {
    /// Wait for the next key. `None` means input has closed for good.
    fn wait_for_key(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> KeySource for I {
    fn wait_for_key(&mut self) -> Option<char> {
        self.next()
    }
}

/// A segment in pixel space.
pub type Segment = (PixelPoint, PixelPoint);

/// In-memory canvas that keeps the segments of the last presented frame.
///
/// Segments drawn after a clear are staged and only replace the visible
/// frame on [`Canvas::present`], so a reader never observes a half-drawn
/// curve.
#[derive(Debug, Default, Clone)]
pub struct FrameBuffer {
    /// Width set by the last clear.
    width: u32,
    /// Height set by the last clear.
    height: u32,
    /// Segments drawn since the last clear.
    staged: Vec<Segment>,
    /// Segments of the last presented frame.
    visible: Vec<Segment>,
    /// Number of frames presented so far.
    presented: u64,
}

impl FrameBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments of the last presented frame.
    pub fn segments(&self) -> &[Segment] {
        &self.visible
    }

    /// Canvas size as `(width, height)` from the last clear.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.presented
    }
}

impl Canvas for FrameBuffer {
    fn clear_canvas(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.staged.clear();
    }

    fn draw_segment(&mut self, p1: PixelPoint, p2: PixelPoint) {
        self.staged.push((p1, p2));
    }

    fn present(&mut self) {
        mem::swap(&mut self.staged, &mut self.visible);
        self.staged.clear();
        self.presented += 1;
    }
}
