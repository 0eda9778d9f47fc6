//! Advisory validation plus conclusion remediation.

use tracing::{debug, warn};

use takehome_shared::{Checklist, Document};

use crate::checks::{LintReport, lint};

/// Marker phrase whose absence triggers remediation (matched
/// case-insensitively).
const MARKER: &str = "success story";

/// Fixed block appended when the marker is missing: preparation resources, a
/// conclusion, and the three required resource links.
pub const REMEDIATION_BLOCK: &str = r#"

## Preparation Resources

### Study the Business Model
Understand Meesho's user segments, supply chain model, and mobile-first approach. Research past product changes or case studies if available.

### Coding Practice
Focus on SQL and Python exercises. Interview Query, LeetCode, and StrataScratch are useful platforms. Prioritize practical ML scenarios over theoretical derivations.

### Case Study Readiness
Be comfortable with open-ended problem solving and making assumptions with incomplete data. Practice structuring answers and communicating clearly.

### Mock Interviews
Pair up with a peer or use Interview Query's coaching options to simulate real interviews.

## Conclusion

Preparing for the Data Science interview requires a combination of technical skills, business understanding, and clear communication. Focus on practical applications and be ready to discuss how your work can drive business impact.

### Additional Resources

- [Interview Query Success Story](https://www.interviewquery.com/success-stories) - Learn from candidates who successfully landed DS roles
- [Top Python Data Science Questions](https://www.interviewquery.com/questions/python) - Practice essential Python coding challenges
- [Data Science Learning Path](https://www.interviewquery.com/learning-paths/data-science) - Comprehensive preparation roadmap

---
*This guide is part of the Interview Query take-home assignment series.*
"#;

/// Whether the document is missing the marker and needs the remediation
/// block.
pub fn needs_remediation(markdown: &str) -> bool {
    !markdown.to_lowercase().contains(MARKER)
}

/// Check a document against the checklist, report every finding as a
/// diagnostic trace, and append the remediation block when the marker is
/// absent.
///
/// Total: never fails, always returns a document. Findings never block; the
/// only mutation is the at-most-once remediation append.
pub fn validate_and_refine(doc: Document, checklist: &Checklist) -> Document {
    let report = lint(&doc.markdown, checklist);
    report_findings(&doc.title, &report);

    if !needs_remediation(&doc.markdown) {
        debug!(title = %doc.title, "conclusion marker present, no remediation");
        return doc;
    }

    warn!(title = %doc.title, "conclusion links missing, appending remediation block");
    let mut markdown = doc.markdown;
    markdown.push_str(REMEDIATION_BLOCK);

    Document {
        title: doc.title,
        markdown,
    }
}

/// Surface every finding as a trace. Advisory only.
fn report_findings(title: &str, report: &LintReport) {
    for section in &report.missing_sections {
        warn!(title, section, "required section missing");
    }
    if report.heading_violations > 0 {
        warn!(
            title,
            count = report.heading_violations,
            "quality gate violation: H4+ headers found"
        );
    }
    for run in &report.bullet_violations {
        warn!(title, items = run, "quality gate violation: bullet list over 5 items");
    }
    if report.is_clean() {
        debug!(title, "document passed all structural checks");
    }
}
