//! Renders a line of text as the first generation of Conway's Game of Life
//! and advances it one generation per `tick`.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod automata;
pub mod auxiliary;
pub mod traits_and_structs;

pub use automata::banner::{Banner, SeedMode};
pub use automata::glyphs::{BitmapFont, GlyphSampler};
pub use automata::grid::{AutomatonGrid, EdgePolicy};
pub use automata::optimizer::OptimizerConfig;
pub use automata::palette::PaletteConfig;
pub use automata::pattern::Pattern;
pub use automata::rasterizer::{TextAlign, TextRasterizer};
pub use automata::renderer::Renderer;
pub use traits_and_structs::cell::Cell;
pub use traits_and_structs::color::Color;
pub use traits_and_structs::error::{BannerError, Result};
pub use traits_and_structs::surface::{Canvas, Surface};
