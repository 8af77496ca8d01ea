use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ipmdb_tools::ipmdb::tools::pipeline;
use ipmdb_tools::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build(args) => {
            pipeline::build_database(&args.primary, &args.secondary, &args.output)
        }
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge the curated IPM workbooks and export the flat-file database."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the exported text tables from the two source workbooks.
    Build(BuildArgs),
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Hand-curated primary workbook.
    #[arg(long, default_value = "metadata/ipm_database_main.xlsx")]
    primary: PathBuf,

    /// Supplementary secondary workbook.
    #[arg(long, default_value = "metadata/ipm_database_supplement.xlsx")]
    secondary: PathBuf,

    /// Directory the delimited text tables are written to.
    #[arg(long, default_value = "ipmdb-txt")]
    output: PathBuf,
}
