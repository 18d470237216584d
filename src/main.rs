//! `profile-lens` CLI - reconstruct, segment and classify profile exports

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use profile_lens::classify::BackendKind;
use profile_lens::{AppConfig, LayoutConfig};

#[derive(Parser)]
#[command(name = "profile-lens")]
#[command(about = "Reading order and section detection for multi-column profile PDFs")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/profile-lens/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Layout tuning shared by every subcommand.
#[derive(Args, Debug, Clone, Copy)]
pub struct LayoutArgs {
    /// Height of a line bucket in PDF points
    #[arg(long, value_name = "PT")]
    y_tolerance: Option<f64>,

    /// Horizontal gap in PDF points that starts a new column
    #[arg(long, value_name = "PT")]
    column_gap: Option<f64>,
}

impl LayoutArgs {
    /// Apply flags on top of the configured layout.
    pub fn apply(self, base: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            y_tolerance: self.y_tolerance.unwrap_or(base.y_tolerance),
            column_gap_threshold: self.column_gap.unwrap_or(base.column_gap_threshold),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BackendArg {
    /// Hosted model via OpenRouter (needs OPENROUTER_API_KEY)
    Openrouter,
    /// Local model via Ollama
    Ollama,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Openrouter => BackendKind::OpenRouter,
            BackendArg::Ollama => BackendKind::Ollama,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print reconstructed lines in reading order
    Lines {
        /// Word geometry JSON, PDF, or a .txt file of reconstructed lines
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Detect name, headline, summary and top skills
    Sections {
        /// Word geometry JSON, PDF, or a .txt file of reconstructed lines
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Detect sections and classify their signal strength with a language model
    Analyze {
        /// Word geometry JSON, PDF, or a .txt file of reconstructed lines
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Model backend (overrides config)
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,

        /// Model name (overrides config)
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Lines {
            input,
            layout,
            format,
        } => {
            cmd::lines::cmd_lines(&input, layout.apply(config.layout), format)?;
        }
        Commands::Sections {
            input,
            layout,
            format,
        } => {
            let layout = layout.apply(config.layout);
            cmd::sections::cmd_sections(&input, layout, &config.sections, format)?;
        }
        Commands::Analyze {
            input,
            layout,
            backend,
            model,
        } => {
            let mut model_config = config.model.clone();
            if let Some(backend) = backend {
                model_config.backend = backend.into();
            }
            if let Some(model) = model {
                model_config.model = Some(model);
            }
            let layout = layout.apply(config.layout);
            cmd::analyze::cmd_analyze(&input, layout, &config.sections, &model_config).await?;
        }
    }

    Ok(())
}
