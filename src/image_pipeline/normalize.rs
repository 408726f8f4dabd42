//! Intensity normalization module

mod intensity_normalizer;
pub mod stats;

pub use intensity_normalizer::IntensityNormalizer;
pub use stats::FrameStatistics;
