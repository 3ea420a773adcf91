use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sitecheck",
    about = "Verify a static site build against its expected output",
    version,
)]
pub struct Cli {
    /// Directory holding the expected output
    #[arg(long)]
    pub expected: Option<PathBuf>,

    /// Directory holding the built output
    #[arg(long)]
    pub actual: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
