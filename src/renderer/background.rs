//! Menu background image
//!
//! The image is scaled to the canvas and reduced to a mosaic of flat tiles,
//! which the vertex pipeline draws as quads.

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;

use super::canvas::Canvas;
use super::vertex::Color;
use crate::consts::{HEIGHT, WIDTH};

/// Mosaic resolution
pub const TILES_X: u32 = 80;
pub const TILES_Y: u32 = 60;

#[derive(Debug, Clone)]
pub struct Background {
    /// Row-major tile colors
    tiles: Vec<Color>,
}

impl Background {
    /// Load the background, or `None` (with a warning) if it can't be used
    pub fn load(path: &Path) -> Option<Self> {
        match image::open(path) {
            Ok(img) => {
                log::info!("Loaded menu background {}", path.display());
                Some(Self::from_image(&img))
            }
            Err(e) => {
                log::warn!(
                    "Background '{}' unavailable ({}); menu will have a solid background",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    pub fn from_image(img: &DynamicImage) -> Self {
        let scaled = img
            .resize_exact(TILES_X, TILES_Y, FilterType::Triangle)
            .to_rgba8();
        let tiles = scaled
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                [
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0,
                ]
            })
            .collect();
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Color] {
        &self.tiles
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let tile_w = WIDTH / TILES_X as f32;
        let tile_h = HEIGHT / TILES_Y as f32;
        for (i, color) in self.tiles.iter().enumerate() {
            let col = (i as u32 % TILES_X) as f32;
            let row = (i as u32 / TILES_X) as f32;
            canvas.fill_rect(col * tile_w, row * tile_h, tile_w, tile_h, *color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::VertexCanvas;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(Background::load(&dir.path().join("3d_sphere.png")).is_none());
    }

    #[test]
    fn test_undecodable_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(Background::load(&path).is_none());
    }

    #[test]
    fn test_loads_png_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bg.png");
        solid(16, 12, [0, 255, 0, 255]).save(&path).unwrap();

        let background = Background::load(&path).unwrap();
        assert_eq!(background.tiles().len(), (TILES_X * TILES_Y) as usize);
    }

    #[test]
    fn test_image_is_scaled_to_mosaic() {
        let background = Background::from_image(&solid(4, 4, [255, 0, 0, 255]));
        assert_eq!(background.tiles().len(), (TILES_X * TILES_Y) as usize);
        for c in background.tiles() {
            assert!((c[0] - 1.0).abs() < 0.01 && c[1] < 0.01 && c[2] < 0.01, "{c:?}");
        }
    }

    #[test]
    fn test_draw_covers_canvas() {
        let background = Background::from_image(&solid(8, 6, [10, 20, 30, 255]));
        let mut canvas = VertexCanvas::new();
        background.draw(&mut canvas);

        let vertices = canvas.vertices();
        assert_eq!(vertices.len(), (TILES_X * TILES_Y * 6) as usize);
        let max_x = vertices.iter().map(|v| v.position[0]).fold(0.0, f32::max);
        let max_y = vertices.iter().map(|v| v.position[1]).fold(0.0, f32::max);
        assert_eq!((max_x, max_y), (WIDTH, HEIGHT));
    }
}
