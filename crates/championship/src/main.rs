//! Championship CLI
//!
//! Play a round robin, print the standings, then answer match queries.

use championship::{
    create_teams, play_round_robin, run_session, standings_table, ChampionshipConfig, CONFIG_FILE,
};
use league_core::RandomScorer;
use std::io;
use tracing_subscriber::EnvFilter;

fn load_config() -> ChampionshipConfig {
    match ChampionshipConfig::load_or_default(CONFIG_FILE) {
        Ok(config) => {
            tracing::info!(teams = config.teams.len(), seed = ?config.seed, "using config");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid config, using built-in teams");
            eprintln!("Warning: {}", e);
            ChampionshipConfig::default()
        }
    }
}

fn main() {
    // Logs go to stderr so stdout only carries the table and prompts
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = load_config();

    let mut scorer = match config.seed {
        Some(seed) => RandomScorer::seeded(seed),
        None => RandomScorer::new(),
    };

    let mut teams = match create_teams(config.teams.as_slice()) {
        Ok(teams) => teams,
        Err(e) => {
            tracing::error!(error = %e, "cannot create teams");
            eprintln!("Error: {}", e);
            return;
        }
    };

    let results = match play_round_robin(&mut teams, config.max_goals, &mut scorer) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!(error = %e, "championship aborted");
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!("{}", standings_table(&mut teams));

    let stdin = io::stdin();
    if let Err(e) = run_session(&results, stdin.lock(), io::stdout()) {
        tracing::error!(error = %e, "console output failed");
    }
}
