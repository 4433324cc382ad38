use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// Top-level CLI argument parser for the `cdoc` command
#[derive(Parser)]
#[command(
    name = "cdoc",
    about = "contract-docs — CNS contract address registry to markdown",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `cdoc` CLI
#[derive(Subcommand)]
enum Commands {
    /// Validate the network registry
    Validate {
        /// Path to the network-config JSON file
        registry: PathBuf,
    },
    /// Show a per-contract summary of the registry
    Status {
        /// Path to the network-config JSON file
        registry: PathBuf,
    },
    /// Render per-contract markdown table fragments
    Render {
        /// Path to the network-config JSON file
        registry: PathBuf,
        /// Output directory for fragments
        #[arg(short, long, default_value = "templates/contracts")]
        output: PathBuf,
        /// Render only this contract
        #[arg(long)]
        contract: Option<String>,
    },
    /// Run the full pipeline: fragments, manifest, assembled document
    Build {
        /// Path to the network-config JSON file
        #[arg(default_value = "config/network-config.json")]
        registry: PathBuf,
        /// Project root against which templates and outputs resolve
        #[arg(long, default_value = ".")]
        base: PathBuf,
        /// Fragment directory, relative to the base
        #[arg(long)]
        fragments: Option<PathBuf>,
        /// Top-level template path, relative to the base
        #[arg(long)]
        template: Option<PathBuf>,
        /// Manifest path, relative to the base
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Final document path, relative to the base
        #[arg(long)]
        doc: Option<PathBuf>,
    },
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Validate { registry } => commands::validate::run(&registry),
        Commands::Status { registry } => commands::status::run(&registry),
        Commands::Render {
            registry,
            output,
            contract,
        } => commands::render::run(&registry, &output, contract.as_deref()),
        Commands::Build {
            registry,
            base,
            fragments,
            template,
            manifest,
            doc,
        } => commands::build::run(
            &registry,
            &base,
            fragments.as_deref(),
            template.as_deref(),
            manifest.as_deref(),
            doc.as_deref(),
        ),
    }
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_command(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
