//! Sensor frame types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// A single mosaiced sensor frame, one `u16` per photosite.
///
/// Samples are stored row-major over the sensor grid, so a frame whose
/// output image is `w x h` pixels holds `2w x 2h` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorFrame {
    /// Photosites per sensor row
    sensor_width: usize,
    /// Sensor rows
    sensor_height: usize,
    /// Raw samples in mosaic order
    data: Vec<u16>,
}

impl SensorFrame {
    /// Wraps `data` as a `sensor_width x sensor_height` mosaic.
    ///
    /// Both dimensions must be even and non-zero and `data` must hold exactly
    /// one sample per photosite.
    pub fn new(sensor_width: usize, sensor_height: usize, data: Vec<u16>) -> Result<Self> {
        if sensor_width == 0 || sensor_height == 0 || sensor_width % 2 != 0 || sensor_height % 2 != 0 {
            return Err(PipelineError::InvalidGeometry(format!(
                "sensor grid {}x{} does not divide into 2x2 blocks",
                sensor_width, sensor_height
            )));
        }

        if data.len() != sensor_width * sensor_height {
            return Err(PipelineError::InvalidGeometry(format!(
                "{} samples do not fill a {}x{} sensor grid",
                data.len(),
                sensor_width,
                sensor_height
            )));
        }

        Ok(Self {
            sensor_width,
            sensor_height,
            data,
        })
    }

    pub fn sensor_width(&self) -> usize {
        self.sensor_width
    }

    pub fn sensor_height(&self) -> usize {
        self.sensor_height
    }

    /// Mosaic blocks per row.
    pub fn blocks_wide(&self) -> usize {
        self.sensor_width / 2
    }

    /// Mosaic blocks per column.
    pub fn blocks_high(&self) -> usize {
        self.sensor_height / 2
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.sensor_width && row < self.sensor_height).then(|| row * self.sensor_width + col)
    }

    pub fn get(&self, col: usize, row: usize) -> Option<u16> {
        self.index(col, row).map(|i| self.data[i])
    }

    /// Overwrites one sample, returning false when `(col, row)` is off the grid.
    pub fn set(&mut self, col: usize, row: usize, value: u16) -> bool {
        match self.index(col, row) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// One sensor row. Panics if `row` is off the grid.
    pub fn row(&self, row: usize) -> &[u16] {
        let start = row * self.sensor_width;
        &self.data[start..start + self.sensor_width]
    }

    pub fn samples(&self) -> &[u16] {
        &self.data
    }

    pub fn samples_mut(&mut self) -> &mut [u16] {
        &mut self.data
    }

    pub fn into_samples(self) -> Vec<u16> {
        self.data
    }
}
