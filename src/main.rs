//! VHAL Mock CLI
//!
//! Entry point for the `vhal-mock` command-line tool.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vhal_mock::scenario::{Scenario, Transcript};

#[derive(Parser)]
#[command(name = "vhal-mock")]
#[command(about = "Run scripted scenarios against the mock vehicle hardware", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario's steps and print the transcript
    Run {
        /// Path to the scenario TOML file
        scenario: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Parse and validate a scenario without running it
    Validate {
        /// Path to the scenario TOML file
        scenario: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { scenario, json } => run_scenario(&scenario, json),
        Commands::Validate { scenario } => validate_scenario(&scenario),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vhal_mock={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn load_or_exit(path: &Path) -> Scenario {
    match Scenario::load(path) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Error loading scenario: {}", e);
            process::exit(1);
        }
    }
}

fn run_scenario(path: &Path, json_output: bool) {
    let scenario = load_or_exit(path);

    let transcript = match scenario.run() {
        Ok(transcript) => transcript,
        Err(e) => {
            eprintln!("Error running scenario: {}", e);
            process::exit(1);
        }
    };

    if json_output {
        match serde_json::to_string_pretty(&transcript) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_transcript(&transcript);
    }
}

fn print_transcript(transcript: &Transcript) {
    if transcript.steps.is_empty() {
        println!("Scenario has no steps.");
        return;
    }

    for outcome in &transcript.steps {
        println!("Step {}: {} -> {}", outcome.step, outcome.op, outcome.status);
        if let Some(ref error) = outcome.error {
            println!("    Error: {}", error);
        }
        if let Some(ref results) = outcome.get_results {
            for result in results {
                match result.prop {
                    Some(ref prop) => println!(
                        "    request {}: {} prop={} area={} value={:?}",
                        result.request_id, result.status, prop.prop, prop.area_id, prop.value
                    ),
                    None => println!("    request {}: {}", result.request_id, result.status),
                }
            }
        }
        if let Some(ref results) = outcome.set_results {
            for result in results {
                println!("    request {}: {}", result.request_id, result.status);
            }
        }
    }

    println!();
    println!("Property changes: {}", transcript.property_changes.len());
    if transcript.missed_deliveries > 0 {
        println!("Missed delayed deliveries: {}", transcript.missed_deliveries);
    }
    println!(
        "Unconsumed responses: get={} set={}",
        transcript.unconsumed_get_responses, transcript.unconsumed_set_responses
    );
}

fn validate_scenario(path: &Path) {
    let scenario = load_or_exit(path);

    println!("Scenario OK: {}", path.display());
    println!("  Property configs: {}", scenario.configs.len());
    println!(
        "  Canned responses: get={} set={}",
        scenario.get_responses.len(),
        scenario.set_responses.len()
    );
    if scenario.status.is_empty() {
        println!("  Forced statuses: none");
    } else {
        for (op, status) in &scenario.status {
            println!("  Forced status: {} = {}", op, status);
        }
    }
    println!("  Sleep time: {} ms", scenario.sleep_ms);
    println!("  Steps: {}", scenario.steps.len());
}
