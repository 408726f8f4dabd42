//! Image processing pipeline module
//!
//! This module turns a raw Bayer sensor frame into a viewable RGB image, with
//! separate modules for raw reading, normalization, debayering, TGA writing,
//! and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod debayer;
pub mod normalize;
pub mod raw;
pub mod tga;

pub use common::{
    DegeneratePolicy,
    FrameConfig,
    FrameConfigBuilder,
    PipelineError,
    PipelineTimings,
    Result,
};

pub use raw::{
    RawFrameReader,
    Rg10Reader,
    SensorFrame,
};

pub use normalize::{
    FrameStatistics,
    IntensityNormalizer,
};

pub use debayer::{
    BayerPattern,
    BlockDebayer,
    RgbImage,
};

pub use tga::{
    ImageWriter,
    TgaHeader,
    TgaWriter,
};

pub use conversions::Rg10ToTgaPipeline;
