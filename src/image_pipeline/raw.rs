//! RAW frame reading module
//!
//! This module turns a raw sensor dump into an in-memory mosaic frame.

mod reader;
mod rg10_reader;
pub mod types;

pub use reader::RawFrameReader;
pub use rg10_reader::Rg10Reader;
pub use types::SensorFrame;
