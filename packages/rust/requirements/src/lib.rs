//! Requirements checklist extraction from the remote requirements document.
//!
//! The official requirements page is fetched once per run and scanned for the
//! section titles and conclusion-link phrases it mentions. Any fetch failure
//! degrades to the fixed default checklist — extraction never fails the run.

use reqwest::Client;
use scraper::Html;
use tracing::{debug, info, instrument, warn};

use takehome_shared::{Checklist, RequirementsConfig, Result, Sourced, TakehomeError};

/// Browser-like User-Agent for fetching the requirements page.
///
/// The hosted document refuses requests from obvious bot agents.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Section titles the guide is expected to carry, scanned for verbatim.
const KNOWN_SECTIONS: &[&str] = &[
    "Role Overview & Culture",
    "Interview Process",
    "SQL Challenges",
    "Python for Data Science",
    "Machine Learning",
    "Experiment Design",
    "Metric Definition",
];

/// Conclusion-link marker phrases (matched case-insensitively) and the
/// category identifier each maps to.
const CONCLUSION_MARKERS: &[(&str, &str)] = &[
    ("success story", "success_story"),
    ("question list", "question_list"),
    ("learning path", "learning_path"),
];

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Fetch the requirements document and derive a [`Checklist`] from it.
///
/// On connect error, timeout, or non-success status the fixed default
/// checklist is substituted and tagged as [`Sourced::Fallback`].
#[instrument(skip_all, fields(url = %config.spec_url))]
pub async fn extract_checklist(config: &RequirementsConfig) -> Sourced<Checklist> {
    match fetch_document(config).await {
        Ok(body) => {
            let checklist = scan_document(&body);
            info!(
                sections = checklist.sections.len(),
                conclusion_links = checklist.conclusion_links.len(),
                "requirements document scanned"
            );
            Sourced::Fetched(checklist)
        }
        Err(e) => {
            warn!(error = %e, "could not fetch requirements document, using default checklist");
            Sourced::Fallback(Checklist::default())
        }
    }
}

/// Fetch the raw requirements page body.
async fn fetch_document(config: &RequirementsConfig) -> Result<String> {
    let client = build_client(config)?;

    let response = client
        .get(&config.spec_url)
        .send()
        .await
        .map_err(|e| TakehomeError::Network(format!("{}: {e}", config.spec_url)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(TakehomeError::Network(format!(
            "{}: HTTP {status}",
            config.spec_url
        )));
    }

    response
        .text()
        .await
        .map_err(|e| TakehomeError::Network(format!("{}: failed to read body: {e}", config.spec_url)))
}

fn build_client(config: &RequirementsConfig) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| TakehomeError::Network(format!("failed to build HTTP client: {e}")))
}

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

/// Derive a checklist from the page HTML.
///
/// Section titles are matched case-sensitively against the flattened page
/// text; conclusion-link phrases case-insensitively. Section elements and
/// quality gates are fixed identifiers, not derived from the page.
fn scan_document(html: &str) -> Checklist {
    let text = flatten_text(html);
    let text_lower = text.to_lowercase();

    let sections: Vec<String> = KNOWN_SECTIONS
        .iter()
        .filter(|title| text.contains(*title))
        .map(|title| title.to_string())
        .collect();

    let conclusion_links: Vec<String> = CONCLUSION_MARKERS
        .iter()
        .filter(|(phrase, _)| text_lower.contains(phrase))
        .map(|(_, category)| category.to_string())
        .collect();

    debug!(
        text_len = text.len(),
        sections = sections.len(),
        "requirements text scanned"
    );

    let defaults = Checklist::default();
    Checklist {
        sections,
        section_elements: defaults.section_elements,
        quality_gates: defaults.quality_gates,
        conclusion_links,
    }
}

/// Flatten an HTML document to its visible text content.
///
/// Text nodes are concatenated without separators so phrases split by inline
/// markup or entities stay contiguous.
fn flatten_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    doc.root_element().text().collect::<String>()
}
