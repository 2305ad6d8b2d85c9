//! `arena` command-line client.
//!
//! Every invocation opens the snapshot directory, resumes the latest
//! committed state, applies one call as `--caller`, and exits. The `demo`
//! command runs the full deploy-and-fight scenario in memory instead.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::ClientConfig;

#[derive(Parser, Debug)]
#[command(name = "arena", version, about = "Boss battle arena client")]
struct Cli {
    /// Identity the call is made as.
    #[arg(long, global = true, env = "ARENA_CALLER", default_value = "deployer")]
    caller: String,

    /// Directory holding snapshots and logs.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Initialize a new game and print its state root
    Deploy {
        /// Stat ceiling (defaults to ARENA_MAX_VALUE or 1000)
        #[arg(long)]
        max_value: Option<u32>,
        /// Seed mixed into character generation
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Register a boss
    CreateBoss {
        name: String,
        health: u32,
        attack: u32,
        defense: u32,
    },
    /// Make a registered boss the ruler
    Appoint { name: String },
    /// Check whether a boss is the ruler
    IsRuler { name: String },
    /// Create the caller's character
    GenerateCharacter,
    /// Attack the ruling boss with the caller's character
    Attack,
    /// Print the ruling boss's health
    BossHp,
    /// Print a character (defaults to the caller's)
    Character { actor: Option<String> },
    /// Dump the committed state as JSON
    Show,
    /// Play a full deploy-and-fight round in memory
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let _guard = logging::setup_logging(&config.data_dir)?;
    tracing::info!(caller = %cli.caller, command = ?cli.command, "Starting arena client");

    commands::run(&config, &cli.caller, cli.command).await
}
