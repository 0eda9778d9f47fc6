//! Sequential run pipeline: load → extract → build → lint → publish → self-test.

pub mod pipeline;

pub use pipeline::{ProgressReporter, RunConfig, SilentProgress, run};
