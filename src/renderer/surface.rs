//! CPU-side draw surface producing GPU-ready triangles

use glam::Vec2;

use super::DrawSurface;
use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::{Vertex, colors};

/// Tessellates draw calls into a triangle list
///
/// Calls between `clear` and `present` accumulate in a pending buffer;
/// `present` swaps it into `frame`, ready to be uploaded as a vertex buffer.
#[derive(Debug, Clone)]
pub struct VertexSurface {
    clear_color: [f32; 4],
    pending: Vec<Vertex>,
    frame: Vec<Vertex>,
    frames_presented: u64,
}

impl Default for VertexSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSurface {
    pub fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            pending: Vec::new(),
            frame: Vec::new(),
            frames_presented: 0,
        }
    }

    /// Vertices drawn since the last `clear`
    pub fn pending(&self) -> &[Vertex] {
        &self.pending
    }

    /// The last presented frame
    pub fn frame(&self) -> &[Vertex] {
        &self.frame
    }

    /// Raw bytes of the last presented frame
    pub fn frame_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame)
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl DrawSurface for VertexSurface {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.pending.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.pending
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, scale: f32, rotation: f32, color: [f32; 4]) {
        self.pending
            .extend(shapes::rect(origin, size, scale, rotation, color));
    }

    fn outline_rect(&mut self, origin: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) {
        self.pending
            .extend(shapes::rect_outline(origin, size, thickness, color));
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.frame, &mut self.pending);
        self.pending.clear();
        self.frames_presented += 1;
        log::trace!("Presented frame with {} vertices", self.frame.len());
    }
}
