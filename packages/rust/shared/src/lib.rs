//! Shared types, error model, and configuration for the take-home builder.
//!
//! This crate is the foundation depended on by all other takehome crates.
//! It provides:
//! - [`TakehomeError`] — the unified error type
//! - Domain types ([`Checklist`], [`Document`], [`Sourced`], [`PublishResult`], [`RunRecord`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DatasetsConfig, RequirementsConfig, SelfTestConfig, WorkspaceConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from, resolve_credentials,
};
pub use error::{Result, TakehomeError};
pub use types::{
    Checklist, Document, PublishResult, RunId, RunRecord, SelfTestOutcome, SelfTestStatus,
    Sourced, slugify,
};
