//! Application configuration for the take-home builder.
//!
//! User config lives at `~/.takehome/takehome.toml`.
//! CLI flags override config file values, which override defaults.
//! Credential *values* are never stored — config carries the names of the
//! environment variables that hold them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TakehomeError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "takehome.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".takehome";

// ---------------------------------------------------------------------------
// Config structs (matching takehome.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Local dataset locations.
    #[serde(default)]
    pub datasets: DatasetsConfig,

    /// Remote requirements document settings.
    #[serde(default)]
    pub requirements: RequirementsConfig,

    /// Publishing workspace settings.
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// URL self-test settings.
    #[serde(default)]
    pub selftest: SelfTestConfig,
}

/// `[datasets]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetsConfig {
    /// Path to the categorized question bank CSV.
    #[serde(default = "default_questions_path")]
    pub questions_path: String,

    /// Path to the operations benchmark CSV.
    #[serde(default = "default_ops_path")]
    pub ops_path: String,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            ops_path: default_ops_path(),
        }
    }
}

fn default_questions_path() -> String {
    "Question_bank_IQ_categorized/summary (1).csv".into()
}
fn default_ops_path() -> String {
    "ops.csv".into()
}

/// `[requirements]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementsConfig {
    /// URL of the official requirements document to scrape.
    #[serde(default = "default_spec_url")]
    pub spec_url: String,

    /// Fetch timeout in seconds.
    #[serde(default = "default_requirements_timeout")]
    pub timeout_secs: u64,
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        Self {
            spec_url: default_spec_url(),
            timeout_secs: default_requirements_timeout(),
        }
    }
}

fn default_spec_url() -> String {
    "https://www.notion.so/Content-Intern-Takehome-Interview-Query-20344d2a2c28803da9dfeddee9bfb30f"
        .into()
}
fn default_requirements_timeout() -> u64 {
    10
}

/// `[workspace]` section — the publishing target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Base URL of the workspace pages API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Base URL of the public workspace site (used for placeholder URLs).
    #[serde(default = "default_site_base")]
    pub site_base: String,

    /// Name of the env var holding the integration token (never the token itself).
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Name of the env var holding the parent page id.
    #[serde(default = "default_parent_env")]
    pub parent_env: String,

    /// Workspace API version header value.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Publish timeout in seconds.
    #[serde(default = "default_workspace_timeout")]
    pub timeout_secs: u64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            site_base: default_site_base(),
            token_env: default_token_env(),
            parent_env: default_parent_env(),
            api_version: default_api_version(),
            timeout_secs: default_workspace_timeout(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.notion.com".into()
}
fn default_site_base() -> String {
    "https://www.notion.so".into()
}
fn default_token_env() -> String {
    "NOTION_TOKEN".into()
}
fn default_parent_env() -> String {
    "NOTION_PARENT".into()
}
fn default_api_version() -> String {
    "2022-06-28".into()
}
fn default_workspace_timeout() -> u64 {
    10
}

/// `[selftest]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestConfig {
    /// Per-URL request timeout in seconds.
    #[serde(default = "default_selftest_timeout")]
    pub timeout_secs: u64,

    /// Phrase the published page body must contain to pass.
    #[serde(default = "default_content_marker")]
    pub content_marker: String,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_selftest_timeout(),
            content_marker: default_content_marker(),
        }
    }
}

fn default_selftest_timeout() -> u64 {
    10
}
fn default_content_marker() -> String {
    "Interview Query".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.takehome/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| TakehomeError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.takehome/takehome.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| TakehomeError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        TakehomeError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| TakehomeError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| TakehomeError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| TakehomeError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Resolve the workspace credentials from the env vars named in config.
///
/// Returns `(token, parent_page_id)`. Called once at the CLI boundary; core
/// crates receive the resolved values and never read the environment.
pub fn resolve_credentials(config: &AppConfig) -> Result<(String, String)> {
    let token = read_env_value(&config.workspace.token_env)?;
    let parent = read_env_value(&config.workspace.parent_env)?;
    Ok((token, parent))
}

fn read_env_value(var_name: &str) -> Result<String> {
    match std::env::var(var_name) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(TakehomeError::config(format!(
            "workspace credential not found. Set the {var_name} environment variable."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("questions_path"));
        assert!(toml_str.contains("NOTION_TOKEN"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.requirements.timeout_secs, 10);
        assert_eq!(parsed.workspace.token_env, "NOTION_TOKEN");
        assert_eq!(parsed.selftest.content_marker, "Interview Query");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[workspace]
api_base = "http://localhost:8080"

[selftest]
timeout_secs = 3
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.workspace.api_base, "http://localhost:8080");
        assert_eq!(config.workspace.site_base, "https://www.notion.so");
        assert_eq!(config.selftest.timeout_secs, 3);
        assert_eq!(config.datasets.ops_path, "ops.csv");
    }

    #[test]
    fn credential_resolution_fails_on_missing_var() {
        let mut config = AppConfig::default();
        // Use unique env var names to avoid interfering with other tests
        config.workspace.token_env = "TH_TEST_NONEXISTENT_TOKEN_12345".into();
        config.workspace.parent_env = "TH_TEST_NONEXISTENT_PARENT_12345".into();
        let result = resolve_credentials(&config);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("TH_TEST_NONEXISTENT_TOKEN_12345")
        );
    }
}
