use anyhow::{Context, Result};
use clap::Parser;
use claimgate::cli::{Args, Command, OutputFormat};
use claimgate::{MatchOutcome, Policy};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Check { policy, claims } => {
            let policy = Policy::from_file(&policy)
                .with_context(|| format!("Failed to load policy from {}", policy))?;

            let content = fs::read_to_string(&claims)
                .with_context(|| format!("Failed to read claims from {}", claims))?;
            let claims: serde_json::Value =
                serde_json::from_str(&content).context("Failed to parse claims JSON")?;

            let outcome = policy.evaluate(&claims);
            print_outcome(&outcome, &args.format)?;

            // Exit status carries the admission decision for scripting.
            Ok(if outcome.satisfied {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}

fn print_outcome(outcome: &MatchOutcome, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        }
        OutputFormat::Terminal => {
            for evidence in &outcome.evidence {
                let marker = if evidence.satisfied {
                    "ok".green()
                } else {
                    "miss".red()
                };
                let detail = match (&evidence.desc, &evidence.value) {
                    (Some(desc), _) => desc.clone(),
                    (None, Some(value)) => value.to_string(),
                    (None, None) => "field not found".to_string(),
                };
                println!("{:>6}  {}  {}", marker, evidence.path, detail);
            }
            if outcome.satisfied {
                println!("{}", "SATISFIED".green().bold());
            } else {
                println!("{}", "NOT SATISFIED".red().bold());
            }
        }
    }
    Ok(())
}
