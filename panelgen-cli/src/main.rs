//! panelgen CLI tool

#![forbid(unsafe_code)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use panelgen_cli_lib::{GenerateCommand, InspectCommand, ServeCommand, TemplatesCommand};

#[derive(Parser)]
#[command(name = "panelgen")]
#[command(version)]
#[command(about = "Generate a React admin panel from a spreadsheet of models", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the front-end from a workbook
    Generate(GenerateCommand),
    /// Print the models parsed from a workbook as JSON
    Inspect(InspectCommand),
    /// Run the upload server
    Serve(ServeCommand),
    /// Inspect, export and diff artifact templates
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    panelgen::observability::init_with_verbosity(cli.verbose)?;

    match cli.command {
        Commands::Generate(cmd) => cmd.execute()?,
        Commands::Inspect(cmd) => cmd.execute()?,
        Commands::Serve(cmd) => cmd.execute()?,
        Commands::Templates { command } => command.execute()?,
    }

    Ok(())
}
