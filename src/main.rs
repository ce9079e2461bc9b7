//! seo-tools: SEO readiness scorer for content records
//!
//! Scores blog posts and pages stored as JSON, YAML, or Markdown front matter.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use seo_tools::{
    AppConfig, CliOverrides, cli,
    config::{ScoreConfig, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  JSON, YAML, Markdown with YAML front matter",
        "\n\nOutput Formats:",
        "\n  summary, table, json, markdown, sarif",
        "\n\nScoring:",
        "\n  Title, meta description, content depth, focus keyword, tag coverage"
    )
}

#[derive(Parser)]
#[command(name = "seo-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "SEO readiness scorer for content records", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All records scored and met the configured thresholds
    1  A record scored below --min-score or in the Needs Work tier
    3  Error occurred

EXAMPLES:
    # Score one post
    seo-tools score content/posts/hello-world.md

    # Gate a CI build on a minimum score
    seo-tools score content/posts/*.md --min-score 60

    # Export SARIF for code scanning
    seo-tools score content/posts/*.md -o sarif -O seo.sarif")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SEO_TOOLS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Record files to score (JSON, YAML, or Markdown)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format [default: auto, summary for one record and table for several]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Fail if any record scores below this threshold (0-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    min_score: Option<u32>,

    /// Fail if any record is in the Needs Work tier
    #[arg(long)]
    fail_on_needs_work: bool,

    /// Status lines shown per record (1-5)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=5))]
    max_checks: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score content records for SEO readiness
    Score(ScoreArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .seo-tools.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(cli) {
        Ok(0) => {}
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the process exit code
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Score(args) => {
            let cli_overrides = CliOverrides {
                format: args.output,
                file: args.output_file,
                no_color: cli.no_color,
                max_checks: args.max_checks.map(|n| n as usize),
                min_score: args.min_score,
                quiet: cli.quiet,
                fail_on_needs_work: args.fail_on_needs_work,
            };

            let (app_config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &cli_overrides)?;
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            let config = ScoreConfig::from_app_config(args.files, app_config);
            cli::run_score(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "seo-tools", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = seo_tools::config::generate_json_schema()
                .context("failed to serialize config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    seo_tools::config::load_or_default(cli.config.as_deref())?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                for error in config.validate() {
                    eprintln!("# warning: {error}");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("seo-tools").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!("  (git repository root, when inside a repository)");
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".seo-tools.yaml",
                    ".seo-tools.yml",
                    "seo-tools.yaml",
                    "seo-tools.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match seo_tools::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".seo-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = seo_tools::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
