//! Command handlers for the `arena` binary.
use std::sync::Arc;

use anyhow::{Context, Result};

use game_core::{GameConfig, StatRecord, compute_state_root};
use runtime::{FileStateRepository, Runtime, RuntimeConfig};

use crate::Command;
use crate::config::ClientConfig;

const DEMO_ACCOUNTS: [&str; 3] = ["account-1", "account-2", "account-3"];

/// Runs one command. `demo` gets a throwaway in-memory game; everything
/// else resumes from and commits to the snapshot directory.
pub async fn run(config: &ClientConfig, caller: &str, command: Command) -> Result<()> {
    let builder = Runtime::builder().config(RuntimeConfig::from_env());
    let runtime = if command == Command::Demo {
        builder.build().await?
    } else {
        let repository = FileStateRepository::new(config.state_dir())
            .with_context(|| format!("opening {}", config.state_dir().display()))?;
        builder.repository(Arc::new(repository)).build().await?
    };

    let result = dispatch(&runtime, config, caller, command).await;
    runtime.shutdown().await?;
    result
}

async fn dispatch(
    runtime: &Runtime,
    config: &ClientConfig,
    caller: &str,
    command: Command,
) -> Result<()> {
    let handle = runtime.handle();
    let signer = handle.connect(caller);

    match command {
        Command::Deploy { max_value, seed } => {
            let game = GameConfig::with_max_value(max_value.unwrap_or(config.max_value)).seeded(seed);
            signer.initialize_with(game).await?;

            let state = handle.query_state().await?;
            let root = compute_state_root(&state)?;
            println!("deployed: {}", hex::encode(root));
        }
        Command::CreateBoss {
            name,
            health,
            attack,
            defense,
        } => {
            let stats = signer
                .create_boss(name.as_str(), StatRecord::boss(health, attack, defense))
                .await?;
            println!(
                "boss {name}: health={} attack={} defense={}",
                stats.health, stats.attack_power, stats.defense
            );
        }
        Command::Appoint { name } => {
            let previous = signer.appoint_ruling_boss(name.as_str()).await?;
            match previous {
                Some(previous) if previous != name => println!("{name} now rules (was {previous})"),
                _ => println!("{name} now rules"),
            }
        }
        Command::IsRuler { name } => {
            println!("{}", handle.is_ruler(name).await?);
        }
        Command::GenerateCharacter => {
            let stats = signer.generate_character().await?;
            println!(
                "character of {caller}: health={} attack={} defense={}",
                stats.health, stats.attack_power, stats.defense
            );
        }
        Command::Attack => {
            let outcome = signer.attack().await?;
            println!(
                "{} hit {} for {} ({} -> {})",
                outcome.attacker,
                outcome.boss,
                outcome.damage,
                outcome.health_before,
                outcome.health_after
            );
        }
        Command::BossHp => {
            println!("{}", handle.boss_health().await?);
        }
        Command::Character { actor } => {
            let actor = actor.unwrap_or_else(|| caller.to_owned());
            let character = handle.character_of(actor).await?;
            println!("{}", serde_json::to_string_pretty(&character)?);
        }
        Command::Show => {
            let state = handle.query_state().await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Command::Demo => demo(runtime).await?,
    }

    Ok(())
}

/// Deploys a fresh game, lets three accounts attack, and prints the boss's
/// health before and after.
async fn demo(runtime: &Runtime) -> Result<()> {
    let handle = runtime.handle();
    let deployer = handle.connect("deployer");

    deployer.initialize(GameConfig::DEFAULT_MAX_VALUE).await?;
    deployer
        .create_boss("Diablo3", StatRecord::boss(10_000, 200, 10))
        .await?;
    deployer.appoint_ruling_boss("Diablo3").await?;

    let initial = handle.boss_health().await?;
    println!("Diablo3 rules with {initial} health");

    for account in DEMO_ACCOUNTS {
        let signer = handle.connect(account);
        let stats = signer.generate_character().await?;
        let outcome = signer.attack().await?;
        println!(
            "{account} (attack {}) deals {} damage",
            stats.attack_power, outcome.damage
        );
    }

    let wounded = handle.boss_health().await?;
    println!("Diablo3 health: {initial} -> {wounded}");
    Ok(())
}
