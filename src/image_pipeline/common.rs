//! Common utilities module
//!
//! This module contains the error type and the frame configuration shared
//! by every stage of the pipeline.

pub mod config;
pub mod error;
pub mod timing;

pub use config::{DegeneratePolicy, FrameConfig, FrameConfigBuilder};
pub use error::{PipelineError, Result};
pub use timing::{PipelineTimings, StepTiming, Timer};
