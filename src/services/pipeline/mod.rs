//! Message processing pipeline.

mod service;

pub use service::{FilterEngines, PipelineOutcome, PipelineService};
