//! TGA writing module
//!
//! This module writes debayered images as uncompressed 24-bit TGA files.

mod tga_writer;
pub mod types;
mod writer;

pub use tga_writer::TgaWriter;
pub use types::TgaHeader;
pub use writer::ImageWriter;
