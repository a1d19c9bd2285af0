//! Command-line interface module

use clap::{ArgAction, Parser};
use console::style;
use std::path::PathBuf;

use crate::conversion::{BeadsData, ConversionConfig, ConversionEngine};
use crate::error::{ConversionError, ConversionResult};

/// Main CLI arguments
///
/// Every option is optional; with none given the tool reads
/// `tasks/prd.json` and writes `tasks/prd-beads.jsonl`.
#[derive(Parser, Debug, Clone)]
#[command(name = "prd2beads")]
#[command(about = "Convert PRD user stories to beads issues (JSONL)")]
#[command(version)]
pub struct Args {
    /// PRD JSON file (default: tasks/prd.json)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output JSONL file (default: tasks/prd-beads.jsonl)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Label attached to every issue (default: pnpm-migration)
    #[arg(long)]
    pub label: Option<String>,

    /// Author tag recorded as created_by (default: prd-import)
    #[arg(long)]
    pub created_by: Option<String>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let mut config = ConversionConfig::default();

        if let Some(input) = &args.input {
            config = config.with_input_path(input);
        }
        if let Some(output) = &args.output {
            config = config.with_output_path(output);
        }
        if let Some(label) = &args.label {
            config = config.with_label(label);
        }
        if let Some(created_by) = &args.created_by {
            config = config.with_created_by(created_by);
        }

        config.validate().map_err(ConversionError::configuration)?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn verbosity(&self) -> u8 {
        self.args.verbose
    }
}

/// Install the tracing subscriber. Logs go to stderr.
pub fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let rust_log = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(verbosity, rust_log.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    // Ignore a second initialization, e.g. from tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Log filter: a non-empty `RUST_LOG` wins, otherwise the level chosen by `-v`
pub fn log_filter(verbosity: u8, rust_log: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return EnvFilter::builder().parse_lossy(directives);
    }

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    EnvFilter::default().add_directive(level.into())
}

/// Run one conversion with the CLI configuration and report the result
pub fn run(cli: &CliConfig) -> ConversionResult<BeadsData> {
    let engine = ConversionEngine::new(cli.conversion_config.clone());
    let data = engine.run(chrono::Utc::now())?;

    if !cli.is_quiet() {
        print_report(&data, &cli.conversion_config);
    }

    Ok(data)
}

/// Success report printed after the output has been written
pub fn format_report(data: &BeadsData, config: &ConversionConfig) -> Vec<String> {
    vec![
        format!("Converted {} user stories to beads format", data.summary.total),
        format!("Output: {}", config.output_path.display()),
    ]
}

fn print_report(data: &BeadsData, config: &ConversionConfig) {
    for line in format_report(data, config) {
        CliUtils::show_success(&line, false);
    }
    println!("\nTo import into beads, run:");
    println!("  {}", config.import_hint());
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    if let Some(tip) = error_tip(error) {
        eprintln!("\nTip: {}", tip);
    }
}

fn error_tip(error: &ConversionError) -> Option<&'static str> {
    match error {
        ConversionError::InputNotFound { .. } => {
            Some("Run from the project root, or pass --input <path to prd.json>")
        }
        ConversionError::Parse(_) => {
            Some("The PRD must be a JSON object with a \"userStories\" array")
        }
        ConversionError::Configuration { .. } => Some("Try 'prd2beads --help' for usage information"),
        ConversionError::Io { .. } | ConversionError::Serialization { .. } => None,
    }
}
