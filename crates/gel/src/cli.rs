//! CLI argument structure using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gel")]
#[command(version, about = "Compile gel templates into Go rendering functions", long_about = None)]
pub struct Cli {
    /// Template files, compiled in order (one template is read from stdin when omitted)
    pub files: Vec<PathBuf>,

    /// Package clause for the generated file (defaults to the first template's package)
    #[arg(short, long, env = "GEL_PACKAGE")]
    pub package: Option<String>,

    /// Write the generated Go to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}
