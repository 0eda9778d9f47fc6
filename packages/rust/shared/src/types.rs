//! Core domain types for the take-home builder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// RunId
// ---------------------------------------------------------------------------

/// A UUID v7 wrapper for run identifiers (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Generate a new time-sortable run identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RunId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

/// Structural requirements a generated document is checked against.
///
/// Produced once per run by the requirements extractor, or substituted with
/// [`Checklist::default`] when the remote requirements document is
/// unreachable. Immutable once obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Section titles that must appear in the guide document.
    pub sections: Vec<String>,
    /// Elements each challenge section is expected to cover.
    pub section_elements: Vec<String>,
    /// Structural quality-gate identifiers (heading depth, bullet length, links).
    pub quality_gates: Vec<String>,
    /// Link categories the conclusion must carry.
    pub conclusion_links: Vec<String>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self {
            sections: vec![
                "Role Overview & Culture".into(),
                "Interview Process".into(),
                "SQL Challenges".into(),
                "Python for Data Science".into(),
                "Machine Learning".into(),
                "Experiment Design".into(),
                "Metric Definition".into(),
            ],
            section_elements: vec!["context".into(), "visualization".into(), "solution".into()],
            quality_gates: vec![
                "no_h4_headers".into(),
                "max_5_bullets".into(),
                "anchor_links".into(),
            ],
            conclusion_links: vec![
                "success_story".into(),
                "question_list".into(),
                "learning_path".into(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Sourced
// ---------------------------------------------------------------------------

/// A value obtained from its primary source, or a fallback substituted after
/// a recoverable failure.
///
/// Collaborators that recover locally (requirements extraction, dataset
/// loading) return this instead of hiding the fallback branch in error
/// handling, so the branching is visible in the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    /// Obtained from the real source.
    Fetched(T),
    /// Substituted constant data after the source was unavailable.
    Fallback(T),
}

impl<T> Sourced<T> {
    /// Borrow the inner value regardless of origin.
    pub fn value(&self) -> &T {
        match self {
            Self::Fetched(v) | Self::Fallback(v) => v,
        }
    }

    /// Consume and return the inner value regardless of origin.
    pub fn into_inner(self) -> T {
        match self {
            Self::Fetched(v) | Self::Fallback(v) => v,
        }
    }

    /// Whether the value is substituted fallback data.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A generated markdown document with its title.
///
/// Created by a builder, passed by value through the linter, then handed to
/// the publisher. Has no identity beyond its title and is not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Title used as the page title when publishing.
    pub title: String,
    /// Full markdown body.
    pub markdown: String,
}

impl Document {
    pub fn new(title: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            markdown: markdown.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// PublishResult
// ---------------------------------------------------------------------------

/// Outcome of publishing one document: the page title and its reference URL.
///
/// `placeholder` marks a deterministically synthesized URL substituted after
/// a publish failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    pub title: String,
    pub url: String,
    pub placeholder: bool,
}

// ---------------------------------------------------------------------------
// Self-test
// ---------------------------------------------------------------------------

/// Per-URL self-test verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum SelfTestStatus {
    /// Reachable and carrying the expected content marker.
    Pass,
    /// Placeholder URL, counted as passed without a live check.
    PassMock,
    /// Reachable but the expected content marker is absent.
    MissingContent,
    /// Non-success HTTP status.
    HttpError(u16),
    /// Request failed outright (connect error, timeout).
    Unreachable(String),
}

/// Self-test result for one named URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfTestOutcome {
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub status: SelfTestStatus,
}

impl SelfTestOutcome {
    /// Whether this outcome counts as a pass.
    pub fn passed(&self) -> bool {
        matches!(self.status, SelfTestStatus::Pass | SelfTestStatus::PassMock)
    }
}

// ---------------------------------------------------------------------------
// RunRecord
// ---------------------------------------------------------------------------

/// Final output record of one complete pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Unique identifier for this run.
    pub run_id: RunId,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
    /// Publish result for the interview guide.
    pub guide: PublishResult,
    /// Publish result for the visualization challenge.
    pub challenge: PublishResult,
    /// Two-line blurb for pasting into the submission form.
    pub form_blurb: String,
    /// Per-URL self-test outcomes (empty when the self-test stage is skipped).
    pub self_tests: Vec<SelfTestOutcome>,
}

impl RunRecord {
    /// Build the submission form blurb from the two publish results.
    pub fn form_blurb(guide: &PublishResult, challenge: &PublishResult) -> String {
        format!("Take-home 1: {}\nTake-home 2: {}", guide.url, challenge.url)
    }
}

// ---------------------------------------------------------------------------
// Slug helper
// ---------------------------------------------------------------------------

/// Generate a URL-safe slug from a document title.
///
/// Lowercase, spaces and underscores become dashes, everything else
/// non-alphanumeric is dropped.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .replace('_', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_roundtrip() {
        let id = RunId::new();
        let s = id.to_string();
        let parsed: RunId = s.parse().expect("parse RunId");
        assert_eq!(id, parsed);
    }

    #[test]
    fn default_checklist_shape() {
        let checklist = Checklist::default();
        assert_eq!(checklist.sections.len(), 7);
        assert_eq!(checklist.section_elements.len(), 3);
        assert_eq!(checklist.quality_gates.len(), 3);
        assert_eq!(checklist.conclusion_links.len(), 3);
        assert!(checklist.sections.contains(&"Interview Process".to_string()));
        assert!(checklist.conclusion_links.contains(&"success_story".to_string()));
    }

    #[test]
    fn checklist_serialization_roundtrip() {
        let checklist = Checklist::default();
        let json = serde_json::to_string(&checklist).expect("serialize");
        let parsed: Checklist = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, checklist);
    }

    #[test]
    fn sourced_accessors() {
        let fetched = Sourced::Fetched(1);
        let fallback = Sourced::Fallback(2);
        assert!(!fetched.is_fallback());
        assert!(fallback.is_fallback());
        assert_eq!(*fetched.value(), 1);
        assert_eq!(fallback.into_inner(), 2);
    }

    #[test]
    fn form_blurb_two_lines() {
        let guide = PublishResult {
            title: "Guide".into(),
            url: "https://example.com/a".into(),
            placeholder: false,
        };
        let challenge = PublishResult {
            title: "Challenge".into(),
            url: "https://example.com/b".into(),
            placeholder: true,
        };
        let blurb = RunRecord::form_blurb(&guide, &challenge);
        assert_eq!(
            blurb,
            "Take-home 1: https://example.com/a\nTake-home 2: https://example.com/b"
        );
    }

    #[test]
    fn slugify_titles() {
        assert_eq!(
            slugify("Meesho Data Scientist Guide"),
            "meesho-data-scientist-guide"
        );
        assert_eq!(slugify("A_B c!"), "a-b-c");
    }

    #[test]
    fn self_test_outcome_pass_predicate() {
        let pass = SelfTestOutcome {
            name: "Guide".into(),
            url: "https://example.com".into(),
            status: SelfTestStatus::Pass,
        };
        let fail = SelfTestOutcome {
            name: "Guide".into(),
            url: "https://example.com".into(),
            status: SelfTestStatus::HttpError(500),
        };
        assert!(pass.passed());
        assert!(!fail.passed());
    }
}
