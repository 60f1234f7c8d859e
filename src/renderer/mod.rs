//! Rendering module
//!
//! Scenes draw through the `Canvas` trait; `VertexCanvas` collects the
//! triangles and `RenderState` draws them with WebGPU.

pub mod background;
pub mod canvas;
pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use background::Background;
pub use canvas::{Canvas, TextSize, VertexCanvas};
pub use pipeline::{RenderError, RenderState};
pub use vertex::{Color, Vertex};
