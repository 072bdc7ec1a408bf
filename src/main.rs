//! Querygen CLI - writes `<root>/<language>/<category>.scm` query packs

mod commands;

use clap::{Parser, Subcommand};
use querygen::config::{default_config_path, load_config};
use querygen::output::{emit_error, OutputMode};
use querygen::{ui, Project};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "querygen")]
#[command(version)]
#[command(about = "Materialize per-language Tree-sitter query packs")]
#[command(long_about = r#"
Querygen resolves a query for every (language, category) pair of its catalog
and writes it to <root>/<language>/<category>.scm. Pairs without a
language-specific definition get a placeholder comment.

Example usage:
  querygen
  querygen list
  querygen show rust patternMatching
  querygen --out ./queries --format json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress the console summary
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Human)]
    format: OutputMode,

    /// Config file to read (never read unless given)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Root output directory (overrides the config)
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every query artifact (default)
    Generate,

    /// Show where each (language, category) query comes from
    List,

    /// Print the resolved query for one pair
    Show {
        /// Language identifier, e.g. rust
        language: String,

        /// Category identifier, e.g. functions
        category: String,
    },

    /// Write a starter config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Generate => "generate",
            Commands::List => "list",
            Commands::Show { .. } => "show",
            Commands::Init { .. } => "init",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = cli.format;
    let command = cli.command.unwrap_or(Commands::Generate);
    let name = command.name();

    if let Err(e) = run(command, cli.config, cli.out, output_mode, cli.quiet) {
        if output_mode.is_human() {
            ui::error(&format!("{:#}", e));
        } else {
            emit_error(output_mode, name, &format!("{:#}", e));
        }
        std::process::exit(1);
    }
}

fn run(
    command: Commands,
    config_path: Option<PathBuf>,
    out: Option<PathBuf>,
    output_mode: OutputMode,
    quiet: bool,
) -> anyhow::Result<()> {
    match command {
        Commands::Init { force } => {
            let path = config_path.unwrap_or_else(default_config_path);
            commands::run_init(&path, force, output_mode)
        }
        Commands::Generate => {
            let project = load_project(config_path, out)?;
            commands::run_generate(&project, output_mode, quiet)
        }
        Commands::List => {
            let project = load_project(config_path, out)?;
            commands::run_list(&project, output_mode)
        }
        Commands::Show { language, category } => {
            let project = load_project(config_path, out)?;
            commands::run_show(&project, output_mode, &language, &category)
        }
    }
}

/// Config is only read when named with `--config`; a bare run uses the built-ins.
fn load_project(config_path: Option<PathBuf>, out: Option<PathBuf>) -> anyhow::Result<Project> {
    let config = match config_path.as_deref() {
        Some(path) => {
            let config = load_config(path)?;
            if config.is_none() {
                tracing::warn!("Config {} not found, using built-in catalog", path.display());
            }
            config
        }
        None => None,
    };
    Ok(Project::from_config(config.as_ref(), out))
}
