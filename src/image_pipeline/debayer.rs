//! Debayering module for converting Bayer mosaic frames to RGB

mod block_debayer;
pub mod pattern;
pub mod types;

pub use block_debayer::BlockDebayer;
pub use pattern::{BayerPattern, BlockLayout};
pub use types::RgbImage;
