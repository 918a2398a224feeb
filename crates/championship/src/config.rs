//! Championship configuration

use serde::Deserialize;
use std::collections::HashSet;
use std::io;
use std::path::Path;

use league_core::DEFAULT_MAX_GOALS;

use crate::error::ChampionshipError;

/// Config file looked up in the working directory by the binary
pub const CONFIG_FILE: &str = "championship.toml";

/// Teams playing when no configuration file overrides them
pub const DEFAULT_TEAMS: [&str; 10] = [
    "Spartak",
    "Zenit",
    "Real Madrid",
    "CSKA",
    "Manchester United",
    "Barcelona",
    "Arsenal",
    "Chelsea",
    "Liverpool",
    "Lokomotiv",
];

/// Championship configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChampionshipConfig {
    /// Participating team names, in fixture order
    pub teams: Vec<String>,
    /// Upper bound (inclusive) for goals by one side in a match
    pub max_goals: u32,
    /// Fixed seed for a reproducible championship (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for ChampionshipConfig {
    fn default() -> Self {
        Self {
            teams: DEFAULT_TEAMS.iter().map(|s| s.to_string()).collect(),
            max_goals: DEFAULT_MAX_GOALS,
            seed: None,
        }
    }
}

impl ChampionshipConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ChampionshipError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChampionshipError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| ChampionshipError::ConfigRead {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&contents)
    }

    /// Like [`load`](Self::load), but a missing file gives the built-in defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ChampionshipError> {
        match Self::load(path) {
            Err(ChampionshipError::ConfigRead { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// At least two teams, all names unique
    pub fn validate(&self) -> Result<(), ChampionshipError> {
        validate_team_names(&self.teams)
    }
}

pub(crate) fn validate_team_names<S: AsRef<str>>(names: &[S]) -> Result<(), ChampionshipError> {
    if names.len() < 2 {
        return Err(ChampionshipError::TooFewTeams(names.len()));
    }
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_ref()) {
            return Err(ChampionshipError::DuplicateTeam(name.as_ref().to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
