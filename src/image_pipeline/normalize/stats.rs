#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::image_pipeline::raw::types::SensorFrame;

/// Global sample range of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStatistics {
    pub min: u16,
    pub max: u16,
}

impl FrameStatistics {
    /// Scans every sample of `frame` once.
    pub fn compute(frame: &SensorFrame) -> Self {
        let samples = frame.samples();
        let identity = (u16::MAX, u16::MIN);
        let widen = |(lo, hi): (u16, u16), v: u16| (lo.min(v), hi.max(v));

        #[cfg(feature = "rayon")]
        let (min, max) = samples
            .par_iter()
            .fold(|| identity, |acc, &v| widen(acc, v))
            .reduce(|| identity, |a, b| (a.0.min(b.0), a.1.max(b.1)));

        #[cfg(not(feature = "rayon"))]
        let (min, max) = samples.iter().fold(identity, |acc, &v| widen(acc, v));

        Self { min, max }
    }

    pub fn range(&self) -> u16 {
        self.max - self.min
    }

    pub fn is_uniform(&self) -> bool {
        self.min == self.max
    }
}
