use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "claimgate")]
#[command(about = "Evaluate presented credential claims against admission policies")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (json, terminal)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a claims document against a policy
    Check {
        /// Policy file (YAML, or JSON with a .json extension)
        #[arg(long)]
        policy: String,

        /// Claims JSON file
        claims: String,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output for machine consumption
    Json,
    /// Human-readable terminal output
    Terminal,
}
