//! Document builders for the two take-home assignments.
//!
//! Both builders are pure template interpolation over the loaded datasets:
//! no I/O, no failure path. Output is markdown with headings starting at
//! depth 1, handed to the linter and then the publisher.

mod challenge;
mod funnel;
mod guide;

pub use challenge::{CHALLENGE_TITLE, build_challenge};
pub use funnel::{FunnelStage, default_stages, render_funnel};
pub use guide::{GUIDE_TITLE, build_guide};
