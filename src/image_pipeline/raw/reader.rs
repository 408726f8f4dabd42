use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::image_pipeline::common::config::FrameConfig;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::raw::types::SensorFrame;

pub trait RawFrameReader {
    fn read_frame(&self, input: &mut dyn Read, config: &FrameConfig) -> Result<SensorFrame>;

    /// Opens `path` and reads one frame from it.
    ///
    /// The file is closed before this returns, whether or not the read
    /// succeeded.
    fn read_file(&self, path: &Path, config: &FrameConfig) -> Result<SensorFrame> {
        let mut file = open_input(path)?;
        self.read_frame(&mut file, config)
    }
}

pub(crate) fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        PipelineError::ResourceUnavailable(format!(
            "Unable to open file {} for reading: {}",
            path.display(),
            e
        ))
    })
}
