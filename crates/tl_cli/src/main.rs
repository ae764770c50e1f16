//! Touchline CLI
//!
//! Headless match runner: a single match with its event feed, or a batch
//! of seeds run in parallel.

mod demo;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tl_core::narrative::TeamTalkResponse;
use tl_core::{
    EngineConfig, HiddenImpact, MatchEvent, MatchResponse, MatchSetup, Side, Simulation, Team,
};

#[derive(Parser)]
#[command(name = "touchline")]
#[command(about = "Run touchline football matches headless", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match and print its events
    Run {
        /// RNG seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Game speed multiplier (overrides the config file)
        #[arg(long)]
        speed: Option<f32>,

        /// Engine config, YAML or JSON
        #[arg(long)]
        config: Option<PathBuf>,

        /// Home team JSON; a demo squad when omitted
        #[arg(long)]
        home: Option<PathBuf>,

        /// Away team JSON; a demo squad when omitted
        #[arg(long)]
        away: Option<PathBuf>,

        /// Hidden impacts: a JSON array, or a team-talk reply object
        #[arg(long)]
        impacts: Option<PathBuf>,

        /// Print the match response as JSON instead of the event feed
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Play many seeds in parallel and summarise the results
    Batch {
        /// Number of matches
        #[arg(long, default_value = "100")]
        matches: u64,

        /// First seed; match i uses first_seed + i
        #[arg(long, default_value = "0")]
        first_seed: u64,

        /// Game speed multiplier (overrides the config file)
        #[arg(long)]
        speed: Option<f32>,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        home: Option<PathBuf>,

        #[arg(long)]
        away: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { seed, speed, config, home, away, impacts, json } => {
            let config = apply_overrides(load_config(config.as_deref())?, seed, speed);

            let home = load_team(home.as_deref(), 0, config.seed)?;
            let away = load_team(away.as_deref(), 1, config.seed)?;
            let impacts = match impacts {
                Some(path) => load_impacts(&path)?,
                None => Vec::new(),
            };

            run_match(MatchSetup::new(home, away).with_hidden_impacts(impacts), config, json)
        }

        Commands::Batch { matches, first_seed, speed, config, home, away } => {
            if matches == 0 {
                bail!("--matches must be at least 1");
            }
            let config = apply_overrides(load_config(config.as_deref())?, None, speed);

            let home = load_team(home.as_deref(), 0, first_seed)?;
            let away = load_team(away.as_deref(), 1, first_seed)?;
            run_batch(&MatchSetup::new(home, away), &config, first_seed, matches)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Command-line flags win over the config file; absent flags leave it alone.
fn apply_overrides(mut config: EngineConfig, seed: Option<u64>, speed: Option<f32>) -> EngineConfig {
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(speed) = speed {
        config.game_speed = speed;
    }
    config
}

/// Seed of batch match `i`, wrapping past `u64::MAX`.
fn batch_seed(first_seed: u64, i: u64) -> u64 {
    first_seed.wrapping_add(i)
}

fn load_team(path: Option<&Path>, demo_index: usize, seed: u64) -> Result<Team> {
    let Some(path) = path else {
        return Ok(demo::demo_team(demo_index % demo::club_count(), seed));
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid team JSON in {}", path.display()))
}

fn load_impacts(path: &Path) -> Result<Vec<HiddenImpact>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read impacts file {}", path.display()))?;

    if let Ok(impacts) = serde_json::from_str::<Vec<HiddenImpact>>(&text) {
        return Ok(impacts);
    }
    let reply = TeamTalkResponse::from_json(&text)
        .with_context(|| format!("{} is neither an impact list nor a team-talk reply", path.display()))?;
    info!(reaction = %reply.general_reaction, impacts = reply.impacts.len(), "team talk loaded");
    Ok(reply.impacts)
}

fn run_match(setup: MatchSetup, config: EngineConfig, json: bool) -> Result<()> {
    let mut sim = Simulation::new(setup, config).context("Failed to set up match")?;
    let home_name = sim.team_name(Side::Home).to_string();
    let away_name = sim.team_name(Side::Away).to_string();

    if !json {
        println!("{} vs {}", home_name, away_name);
    }

    let mut events: Vec<MatchEvent> = Vec::new();
    while !sim.is_finished() {
        for update in sim.tick() {
            if let Some(event) = update.event {
                if !json {
                    println!("{:>3}' [{}] {}", event.minute, event.side, event.description);
                }
                events.push(event);
            }
        }
    }

    let stats = sim.stats();
    if json {
        let response = MatchResponse {
            home_score: stats.home_score,
            away_score: stats.away_score,
            stats,
            events,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!();
    println!("{} {} - {} {}", home_name, stats.home_score, stats.away_score, away_name);
    println!("Possession: {}% - {}%", stats.possession, 100 - stats.possession.min(100));
    println!(
        "Shots (on target): {} ({}) - {} ({})",
        stats.home.shots, stats.home.on_target, stats.away.shots, stats.away.on_target
    );
    println!("Saves: {} - {}", stats.home.saves, stats.away.saves);
    println!("Tackles: {} - {}", stats.home.tackles, stats.away.tackles);
    Ok(())
}

#[derive(Debug, Default)]
struct BatchSummary {
    home_wins: u64,
    draws: u64,
    away_wins: u64,
    home_goals: u64,
    away_goals: u64,
}

fn run_batch(setup: &MatchSetup, config: &EngineConfig, first_seed: u64, matches: u64) -> Result<()> {
    info!(matches, first_seed, game_speed = config.game_speed, "batch started");

    let scores = (0..matches)
        .into_par_iter()
        .map(|i| -> tl_core::Result<(u32, u32)> {
            let seed = batch_seed(first_seed, i);
            let config = EngineConfig { seed, ..config.clone() };
            let mut sim = Simulation::new(setup.clone(), config)?;
            sim.run_to_full_time();
            let state = sim.state();
            debug!(seed, home = state.home_score, away = state.away_score, "batch match done");
            Ok((state.home_score, state.away_score))
        })
        .collect::<tl_core::Result<Vec<_>>>()
        .context("Batch match failed")?;

    let summary = scores.iter().fold(BatchSummary::default(), |mut acc, &(home, away)| {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => acc.home_wins += 1,
            std::cmp::Ordering::Equal => acc.draws += 1,
            std::cmp::Ordering::Less => acc.away_wins += 1,
        }
        acc.home_goals += home as u64;
        acc.away_goals += away as u64;
        acc
    });

    let n = matches as f64;
    println!("{} vs {} over {} matches", setup.home.name, setup.away.name, matches);
    println!(
        "W/D/L (home): {} / {} / {}",
        summary.home_wins, summary.draws, summary.away_wins
    );
    println!(
        "Average goals: {:.2} - {:.2} ({:.2} per match)",
        summary.home_goals as f64 / n,
        summary.away_goals as f64 / n,
        (summary.home_goals + summary.away_goals) as f64 / n
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_speed_defaults_to_config() {
        let cli = Cli::try_parse_from(["touchline", "batch", "--matches", "4"]).unwrap();
        let Commands::Batch { speed, matches, .. } = cli.command else {
            panic!("expected batch command");
        };
        assert_eq!(matches, 4);
        assert_eq!(speed, None);

        let from_file = EngineConfig { game_speed: 3.0, ..EngineConfig::default() };
        assert_eq!(apply_overrides(from_file.clone(), None, speed).game_speed, 3.0);
        assert_eq!(apply_overrides(from_file, Some(7), Some(6.0)).game_speed, 6.0);
    }

    #[test]
    fn test_run_flags_override_config() {
        let cli = Cli::try_parse_from(["touchline", "run", "--seed", "9", "--speed", "2.5"]).unwrap();
        let Commands::Run { seed, speed, .. } = cli.command else {
            panic!("expected run command");
        };
        let config = apply_overrides(EngineConfig::default(), seed, speed);
        assert_eq!(config.seed, 9);
        assert_eq!(config.game_speed, 2.5);
    }

    #[test]
    fn test_batch_seed_wraps() {
        assert_eq!(batch_seed(10, 5), 15);
        assert_eq!(batch_seed(u64::MAX, 0), u64::MAX);
        assert_eq!(batch_seed(u64::MAX, 2), 1);
    }
}
