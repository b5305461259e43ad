//! `finject` command line
//!
//! | Command | Description |
//! |---------|-------------|
//! | `finject process <paths>...` | Generate sources under the output directory |
//! | `finject check <paths>...` | Run the same compilation without writing anything |

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use finject_infrastructure::config::{AppConfig, ConfigLoader};
use finject_infrastructure::{
    Compilation, CompilationOutcome, DeclarationGraph, FilesystemFiler, InMemoryEnvironment,
    MemoryFiler,
};
use finject_processor::{ProcessingReport, Reporter};
use std::path::PathBuf;
use tracing::info;

/// Command line interface for finject
#[derive(Parser, Debug)]
#[command(name = "finject")]
#[command(about = "Generate @FragmentInject factories and their Dagger registration module")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the program and write generated sources
    Process {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory, overriding `output.directory`
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Validate the program without writing generated sources
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Commands {
    pub fn input(&self) -> &InputArgs {
        match self {
            Self::Process { input, .. } | Self::Check { input } => input,
        }
    }
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Declaration graph files (.json, .yaml, .yml) or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Do not stamp @Generated on generated types
    #[arg(long)]
    pub no_generated_annotation: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Load configuration and apply command line overrides
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load().context("Failed to load configuration")?;

    if cli.command.input().no_generated_annotation {
        config.processor.generated_annotation = false;
    }
    if let Commands::Process { out: Some(out), .. } = &cli.command {
        config.output.directory = out.clone();
    }
    Ok(config)
}

/// Run the compilation a command asks for
pub fn execute(command: &Commands, config: &AppConfig) -> Result<ProcessingReport> {
    let input = command.input();
    let (graph, files) =
        DeclarationGraph::load_all(&input.paths).context("Failed to load declaration graphs")?;
    info!(files = files.len(), "Loaded declaration graphs");

    let env = InMemoryEnvironment::from_graph(graph)?;
    let compilation = Compilation::from_config(config);
    let outcome: CompilationOutcome = match command {
        Commands::Process { .. } => {
            let mut filer = FilesystemFiler::new(&config.output.directory);
            compilation
                .run(env, &mut filer)
                .with_context(|| format!("Compilation into {} failed", filer.root().display()))?
        }
        Commands::Check { .. } => compilation.run(env, &mut MemoryFiler::new())?,
    };
    Ok(outcome.report(files))
}

pub fn render_report(report: &ProcessingReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => Reporter::to_human_readable(report),
        OutputFormat::Json => Reporter::to_json(report),
    }
}
