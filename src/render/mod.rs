pub mod renderer;

pub use renderer::{Renderer, tile_glyph};
