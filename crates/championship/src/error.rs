//! Error types for configuration and interactive queries

use thiserror::Error;

/// Problems with the team list or configuration file
#[derive(Error, Debug)]
pub enum ChampionshipError {
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Duplicate team name: {0}")]
    DuplicateTeam(String),

    #[error("A championship needs at least 2 teams, got {0}")]
    TooFewTeams(usize),
}

/// Problems reading a match query in the interactive session
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("expected two team names separated by \", \", got {tokens} part(s)")]
    Malformed { tokens: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the team names were entered")]
    InputEnded,
}
