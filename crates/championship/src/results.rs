//! Championship result storage and match lookup

use std::collections::HashMap;

use league_core::{MatchResult, Scoreline};

/// Shown when a queried pair of teams never played each other
pub const NO_SUCH_MATCH: &str = "No such match";

/// All match results of a championship.
///
/// Each match is stored once, keyed by `(home, away)` in the order the pair
/// was played. Lookups check both orientations.
#[derive(Debug, Clone, Default)]
pub struct ChampionshipResults {
    scores: HashMap<(String, String), Scoreline>,
    /// Keys in play order, for deterministic iteration
    order: Vec<(String, String)>,
}

impl ChampionshipResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a match result. A repeated key replaces the earlier score.
    pub fn add_match(&mut self, result: MatchResult) {
        let key = (result.home, result.away);
        if self.scores.insert(key.clone(), result.score).is_none() {
            self.order.push(key);
        }
    }

    /// Number of stored matches
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Score of the match between `team1` and `team2`, oriented as asked
    pub fn lookup(&self, team1: &str, team2: &str) -> Option<Scoreline> {
        if let Some(&score) = self.scores.get(&(team1.to_string(), team2.to_string())) {
            return Some(score);
        }
        self.scores
            .get(&(team2.to_string(), team1.to_string()))
            .map(|score| score.swapped())
    }

    /// `"X:Y"` for a played match, or [`NO_SUCH_MATCH`]
    pub fn describe(&self, team1: &str, team2: &str) -> String {
        match self.lookup(team1, team2) {
            Some(score) => score.to_string(),
            None => NO_SUCH_MATCH.to_string(),
        }
    }

    /// Iterate matches in play order as stored `(home, away, score)`
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Scoreline)> + '_ {
        self.order.iter().filter_map(move |key| {
            self.scores
                .get(key)
                .map(|&score| (key.0.as_str(), key.1.as_str(), score))
        })
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
