//! Team record and accumulated championship statistics

use std::fmt;

use crate::outcome::Outcome;

/// A championship participant and everything it has accumulated so far.
///
/// Statistics are only changed through [`Team::record`], which the match
/// engine calls once per match. `place` stays 0 until the standings are
/// ranked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Unique team name, also used as the key in match results
    pub name: String,
    /// 1-based position in the standings (0 = not ranked yet)
    pub place: usize,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            place: 0,
            points: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    /// Apply the result of one match from this team's side
    pub fn record(&mut self, scored: u32, conceded: u32, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.points += outcome.points();
        self.goals_for += scored;
        self.goals_against += conceded;
    }

    /// Number of matches played
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Goals scored minus goals conceded.
    ///
    /// Informational only: standings are ordered by points alone.
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
