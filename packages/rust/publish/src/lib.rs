//! Workspace publishing client and URL self-test.
//!
//! Publishing embeds each document as a single text block on a new page
//! under the configured parent. A publish failure is recovered with a
//! deterministic placeholder URL derived from the document title — the
//! operation itself never fails the run.

pub mod selftest;

use reqwest::Client;
use tracing::{info, instrument, warn};
use url::Url;

use takehome_shared::{Document, PublishResult, Result, TakehomeError, slugify};

/// User-Agent string for workspace API requests.
const USER_AGENT: &str = concat!("takehome/", env!("CARGO_PKG_VERSION"));

/// The workspace embeds at most this many characters in one text block.
const MAX_EMBED_CHARS: usize = 2000;

// ---------------------------------------------------------------------------
// Publisher
// ---------------------------------------------------------------------------

/// Explicit publisher configuration.
///
/// Credential values are resolved by the caller (the CLI) and passed in;
/// nothing here reads the environment.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Base URL of the workspace pages API.
    pub api_base: String,
    /// Base URL of the public workspace site (for placeholder URLs).
    pub site_base: String,
    /// Integration token sent as a bearer credential.
    pub token: String,
    /// Parent page id new pages are created under.
    pub parent_page: String,
    /// Workspace API version header value.
    pub api_version: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Client for the workspace pages API.
pub struct Publisher {
    config: PublisherConfig,
    client: Client,
}

impl Publisher {
    /// Create a publisher with the given configuration.
    pub fn new(config: PublisherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TakehomeError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Publish a document as a new page and return its reference URL.
    ///
    /// On any failure the placeholder URL is substituted and the result is
    /// marked accordingly; this method never errors.
    #[instrument(skip_all, fields(title = %doc.title))]
    pub async fn publish(&self, doc: &Document) -> PublishResult {
        match self.create_page(doc).await {
            Ok(url) => {
                info!(%url, "page published");
                PublishResult {
                    title: doc.title.clone(),
                    url,
                    placeholder: false,
                }
            }
            Err(e) => {
                warn!(error = %e, "publish failed, substituting placeholder URL");
                PublishResult {
                    title: doc.title.clone(),
                    url: self.placeholder_url(&doc.title),
                    placeholder: true,
                }
            }
        }
    }

    /// POST the page-creation request and extract the page URL.
    async fn create_page(&self, doc: &Document) -> Result<String> {
        let endpoint = format!("{}/v1/pages", self.config.api_base.trim_end_matches('/'));
        let body = page_body(&self.config.parent_page, doc);

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.config.token)
            .header("Notion-Version", &self.config.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| TakehomeError::Publish(format!("{endpoint}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TakehomeError::Publish(format!("{endpoint}: HTTP {status}")));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TakehomeError::Publish(format!("invalid response body: {e}")))?;

        payload
            .get("url")
            .and_then(|u| u.as_str())
            .map(String::from)
            .ok_or_else(|| TakehomeError::Publish("response carries no page url".into()))
    }

    /// Deterministic substitute URL: `<scheme>://<host>/mock-<slug>-page`.
    fn placeholder_url(&self, title: &str) -> String {
        let slug = slugify(title);
        match Url::parse(&self.config.site_base) {
            Ok(site) => {
                let scheme = site.scheme();
                let host = site.host_str().unwrap_or("localhost");
                format!("{scheme}://{host}/mock-{slug}-page")
            }
            Err(_) => format!(
                "{}/mock-{slug}-page",
                self.config.site_base.trim_end_matches('/')
            ),
        }
    }
}

/// Build the page-creation body: title property plus one paragraph block
/// with the truncated markdown.
fn page_body(parent_page: &str, doc: &Document) -> serde_json::Value {
    serde_json::json!({
        "parent": { "page_id": parent_page },
        "properties": {
            "title": {
                "title": [ { "text": { "content": doc.title } } ]
            }
        },
        "children": [
            {
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [
                        {
                            "type": "text",
                            "text": { "content": truncate_chars(&doc.markdown, MAX_EMBED_CHARS) }
                        }
                    ]
                }
            }
        ]
    })
}

/// Take the first `max` characters, respecting char boundaries.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
