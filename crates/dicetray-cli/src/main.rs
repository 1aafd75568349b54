//! Command-line dice roller for tabletop sessions.

mod commands;
mod render;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dicetray",
    about = "Dicetray — a dice roller for tabletop mechanics",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single roll built from flags
    Roll(commands::roll::RollArgs),

    /// Resolve a raw JSON request object
    Eval {
        /// The request as a JSON object, e.g. '{"die":20,"category":"SAVE","type":"ADV","modifier":"DEX"}'
        request: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print request and outcome as JSON instead of the formatted block
        #[arg(short, long)]
        json: bool,
    },

    /// Generate random requests and resolve the valid ones
    Batch {
        /// Number of candidate requests to generate
        #[arg(short, long, default_value = "1000")]
        count: usize,

        /// RNG seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Render every roll instead of the summary table
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the roll grammar, numeric limits, and known labels
    Rules,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll(args) => commands::roll::run(args),
        Commands::Eval {
            request,
            seed,
            json,
        } => commands::eval::run(&request, seed, json),
        Commands::Batch {
            count,
            seed,
            verbose,
        } => commands::batch::run(count, seed, verbose),
        Commands::Rules => commands::rules::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
