//! Structural checks over generated markdown.
//!
//! Each check is a simple pattern scan behind the [`StructuralLinter`]
//! trait, so individual checks can be tested and replaced independently
//! (e.g., swapped for a real markdown parser) without touching the
//! remediation logic.

use std::sync::LazyLock;

use regex::Regex;

use takehome_shared::Checklist;

/// Longest bullet run that passes the quality gate.
const MAX_BULLET_RUN: usize = 5;

// ---------------------------------------------------------------------------
// Linter interface
// ---------------------------------------------------------------------------

/// One method per structural check.
pub trait StructuralLinter {
    /// Required section titles that occur nowhere in the document.
    ///
    /// Pure case-sensitive substring containment: a title matched inside
    /// unrelated prose or a code block counts as present.
    fn missing_sections(&self, markdown: &str, checklist: &Checklist) -> Vec<String>;

    /// Number of lines opening a heading at depth 4 or deeper.
    fn heading_depth_violations(&self, markdown: &str) -> usize;

    /// Lengths of maximal single-level bullet runs longer than the gate.
    ///
    /// A run is a maximal contiguous sequence of lines starting with `- `;
    /// any interleaved non-bullet line terminates it. Runs are independent.
    fn oversized_bullet_runs(&self, markdown: &str) -> Vec<usize>;
}

/// Findings for one document. Transient: computed, reported, dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub missing_sections: Vec<String>,
    pub heading_violations: usize,
    pub bullet_violations: Vec<usize>,
}

impl LintReport {
    /// Whether the document passed every structural check.
    pub fn is_clean(&self) -> bool {
        self.missing_sections.is_empty()
            && self.heading_violations == 0
            && self.bullet_violations.is_empty()
    }
}

/// Run all checks with the default linter.
pub fn lint(markdown: &str, checklist: &Checklist) -> LintReport {
    let linter = RegexLinter;
    LintReport {
        missing_sections: linter.missing_sections(markdown, checklist),
        heading_violations: linter.heading_depth_violations(markdown),
        bullet_violations: linter.oversized_bullet_runs(markdown),
    }
}

// ---------------------------------------------------------------------------
// Default implementation
// ---------------------------------------------------------------------------

/// Pattern-scan implementation of the structural checks.
pub struct RegexLinter;

static H4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^####").expect("valid regex"));

impl StructuralLinter for RegexLinter {
    fn missing_sections(&self, markdown: &str, checklist: &Checklist) -> Vec<String> {
        checklist
            .sections
            .iter()
            .filter(|section| !markdown.contains(section.as_str()))
            .cloned()
            .collect()
    }

    fn heading_depth_violations(&self, markdown: &str) -> usize {
        H4_RE.find_iter(markdown).count()
    }

    fn oversized_bullet_runs(&self, markdown: &str) -> Vec<usize> {
        let mut violations = Vec::new();
        let mut run = 0usize;

        for line in markdown.lines() {
            if line.starts_with("- ") {
                run += 1;
            } else {
                if run > MAX_BULLET_RUN {
                    violations.push(run);
                }
                run = 0;
            }
        }
        if run > MAX_BULLET_RUN {
            violations.push(run);
        }

        violations
    }
}
