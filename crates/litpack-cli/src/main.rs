// crates/litpack-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "litpack-cli")]
#[command(about = "Pack binary files into C string-literal declarations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack input files into one source file of const char arrays
    Pack(cmd::pack::PackArgs),

    /// Report what packing would emit (sizes, escape classes, ambiguity sites)
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Pack(args) => cmd::pack::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
    }
}
