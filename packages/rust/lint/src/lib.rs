//! Structural linting and refinement of generated documents.
//!
//! The lint pass is advisory: every finding is reported as a diagnostic
//! trace and never blocks the run. The one mutation it performs is the
//! conclusion remediation — when the success-story marker is absent, a fixed
//! block of preparation resources and conclusion links is appended exactly
//! once.

mod checks;
mod refine;

pub use checks::{LintReport, RegexLinter, StructuralLinter, lint};
pub use refine::{REMEDIATION_BLOCK, needs_remediation, validate_and_refine};
