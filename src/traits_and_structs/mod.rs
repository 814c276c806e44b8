pub mod cell;
pub mod color;
pub mod error;
pub mod surface;
