mod orchestrator;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mcpgen", about = "Generate a FastAPI proxy server from an OpenAPI spec", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the proxy server from an OpenAPI spec
    Generate {
        /// Path to the OpenAPI spec file (JSON)
        #[arg(long)]
        input: PathBuf,

        /// Directory to write the generated files into
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => cmd_generate(input, output),
    }
}

fn cmd_generate(input: PathBuf, output: PathBuf) -> Result<()> {
    orchestrator::generate_server(&input, &output)?;
    println!("Server generated in {}", output.display());
    Ok(())
}
