//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use takehome_core::pipeline::{ProgressReporter, RunConfig};
use takehome_publish::PublisherConfig;
use takehome_shared::{
    AppConfig, RunRecord, init_config, load_config, resolve_credentials,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Take-home builder — generate and publish the interview assignments.
#[derive(Parser)]
#[command(
    name = "takehome",
    version,
    about = "Generate, validate, and publish the take-home interview assignments.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build, validate, publish, and self-test both assignments.
    Run {
        /// Override the requirements document URL.
        #[arg(long)]
        spec_url: Option<String>,

        /// Write the run record JSON to this file as well.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Skip the URL self-test stage.
        #[arg(long)]
        skip_selftest: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "takehome=info",
        1 => "takehome=debug",
        _ => "takehome=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            spec_url,
            out,
            skip_selftest,
        } => cmd_run(spec_url.as_deref(), out.as_deref(), skip_selftest).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

async fn cmd_run(
    spec_url: Option<&str>,
    out: Option<&std::path::Path>,
    skip_selftest: bool,
) -> Result<()> {
    let config = load_config()?;

    // Resolve credentials up front so a missing token fails before any work
    let (token, parent_page) = resolve_credentials(&config)
        .map_err(|e| eyre!("{e}\nConfigure the env var names with `takehome config show`."))?;

    let mut requirements = config.requirements.clone();
    if let Some(url) = spec_url {
        requirements.spec_url = url.to_string();
    }

    let run_config = RunConfig {
        datasets: config.datasets.clone(),
        requirements,
        publisher: PublisherConfig {
            api_base: config.workspace.api_base.clone(),
            site_base: config.workspace.site_base.clone(),
            token,
            parent_page,
            api_version: config.workspace.api_version.clone(),
            timeout_secs: config.workspace.timeout_secs,
        },
        selftest: config.selftest.clone(),
        skip_selftest,
    };

    info!(
        spec_url = %run_config.requirements.spec_url,
        skip_selftest,
        "starting take-home build"
    );

    let reporter = CliProgress::new();
    let record = takehome_core::pipeline::run(&run_config, &reporter).await?;

    print_summary(&record);

    let json = serde_json::to_string_pretty(&record)?;
    println!("{json}");

    if let Some(path) = out {
        std::fs::write(path, &json)?;
        println!("\nRun record written to {}", path.display());
    }

    Ok(())
}

fn print_summary(record: &RunRecord) {
    println!();
    println!("  Take-home assignments published!");
    println!("  Run:       {}", record.run_id);
    println!(
        "  Guide:     {}{}",
        record.guide.url,
        placeholder_note(record.guide.placeholder)
    );
    println!(
        "  Challenge: {}{}",
        record.challenge.url,
        placeholder_note(record.challenge.placeholder)
    );
    for outcome in &record.self_tests {
        let mark = if outcome.passed() { "✓" } else { "✗" };
        println!("  {mark} {}: {:?}", outcome.name, outcome.status);
    }
    println!();
}

fn placeholder_note(placeholder: bool) -> &'static str {
    if placeholder { " (placeholder)" } else { "" }
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .expect("valid template")
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn document_ready(&self, title: &str) {
        self.spinner.set_message(format!("Refined: {title}"));
    }

    fn published(&self, title: &str, url: &str) {
        self.spinner.set_message(format!("Published {title}: {url}"));
    }

    fn done(&self, _record: &RunRecord) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// Config commands
// ---------------------------------------------------------------------------

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
