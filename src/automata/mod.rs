pub mod banner;
pub mod glyphs;
pub mod grid;
pub mod optimizer;
pub mod palette;
pub mod pattern;
pub mod primes;
pub mod rasterizer;
pub mod renderer;
