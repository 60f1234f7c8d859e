//! Drawing surface abstraction
//!
//! Scenes draw through `Canvas` in logical canvas units (800x600, y down).
//! `VertexCanvas` turns the calls into a triangle list for the GPU pipeline.

use glam::Vec2;

use super::font::{self, GLYPH_ADVANCE};
use super::shapes;
use super::vertex::{Color, Vertex, colors};

/// Segments used for filled circles
const CIRCLE_SEGMENTS: u32 = 48;

/// Text size, in canvas units per font pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Normal,
    Large,
}

impl TextSize {
    pub fn pixel(&self) -> f32 {
        match self {
            TextSize::Normal => 3.0,
            TextSize::Large => 5.0,
        }
    }
}

pub trait Canvas {
    /// Fill the whole canvas
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: TextSize, color: Color);

    /// Width and height `text` would occupy
    fn measure_text(&self, text: &str, size: TextSize) -> Vec2 {
        let (w, h) = font::text_extent(text);
        Vec2::new(w as f32, h as f32) * size.pixel()
    }

    /// Draw text centered on `center`
    fn draw_text_centered(&mut self, text: &str, center: Vec2, size: TextSize, color: Color) {
        let extent = self.measure_text(text, size);
        self.draw_text(text, center - extent / 2.0, size, color);
    }
}

/// Canvas that collects triangles for one frame
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    vertices: Vec<Vertex>,
    clear_color: Color,
}

impl Default for VertexCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: colors::BACKGROUND,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }
}

impl Canvas for VertexCanvas {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.vertices
            .extend_from_slice(&shapes::rect(x, y, width, height, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: TextSize, color: Color) {
        let px = size.pixel();
        let mut x = pos.x;
        for c in text.chars() {
            for (row, bits) in font::glyph(c).iter().enumerate() {
                let y = pos.y + row as f32 * px;
                for (start, len) in font::row_runs(*bits) {
                    self.fill_rect(x + start as f32 * px, y, len as f32 * px, px, color);
                }
            }
            x += GLYPH_ADVANCE as f32 * px;
        }
    }
}
