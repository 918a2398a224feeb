//! Match engine: plays one match between two teams

use std::fmt;

use crate::outcome::Outcome;
use crate::team::Team;
use crate::ScoreGenerator;

/// Goals scored by each side, in the order the teams were passed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scoreline {
    pub home: u32,
    pub away: u32,
}

impl Scoreline {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// The same scoreline from the other team's side
    pub fn swapped(self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }

    /// Outcomes for `(home, away)`
    pub fn outcomes(self) -> (Outcome, Outcome) {
        Outcome::classify(self.home, self.away)
    }
}

impl fmt::Display for Scoreline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.home, self.away)
    }
}

/// One played match, keyed by the ordered pair of team names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub home: String,
    pub away: String,
    pub score: Scoreline,
}

/// Play a match between `home` and `away`.
///
/// Draws both goal counts from `scorer` in `0..=max_goals`, then updates
/// outcome counters, points and goal tallies on both teams.
pub fn play_match(
    home: &mut Team,
    away: &mut Team,
    max_goals: u32,
    scorer: &mut dyn ScoreGenerator,
) -> MatchResult {
    let score = Scoreline::new(scorer.goals(max_goals), scorer.goals(max_goals));
    let (home_outcome, away_outcome) = score.outcomes();

    home.record(score.home, score.away, home_outcome);
    away.record(score.away, score.home, away_outcome);

    tracing::debug!(
        home = %home.name,
        away = %away.name,
        score = %score,
        scorer = scorer.name(),
        "match played"
    );

    MatchResult {
        home: home.name.clone(),
        away: away.name.clone(),
        score,
    }
}

#[cfg(test)]
#[path = "match_engine_tests.rs"]
mod match_engine_tests;
