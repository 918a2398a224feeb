//! Round-robin driver: every team plays every other team exactly once

use league_core::{play_match, ScoreGenerator, Team};

use crate::config::validate_team_names;
use crate::error::ChampionshipError;
use crate::results::ChampionshipResults;

/// Create fresh team records from a list of unique names
pub fn create_teams<S: AsRef<str>>(names: &[S]) -> Result<Vec<Team>, ChampionshipError> {
    validate_team_names(names)?;
    Ok(names.iter().map(|name| Team::new(name.as_ref())).collect())
}

/// Number of matches in a single round robin of `teams` participants
pub fn match_count(teams: usize) -> usize {
    teams * teams.saturating_sub(1) / 2
}

/// Fixture order: every index pair `(i, j)` with `i < j`, in lexicographic order
pub fn fixtures(teams: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..teams).flat_map(move |i| (i + 1..teams).map(move |j| (i, j)))
}

/// Play a full round robin, updating `teams` in place.
///
/// Team `i` is the home side against every team `j > i`. Returns the store
/// holding one result per pair.
pub fn play_round_robin(
    teams: &mut [Team],
    max_goals: u32,
    scorer: &mut dyn ScoreGenerator,
) -> Result<ChampionshipResults, ChampionshipError> {
    let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    validate_team_names(&names)?;

    tracing::info!(
        teams = teams.len(),
        matches = match_count(teams.len()),
        scorer = scorer.name(),
        "starting championship"
    );

    let mut results = ChampionshipResults::new();
    for (i, j) in fixtures(teams.len()) {
        let (home, away) = pair_mut(teams, i, j);
        results.add_match(play_match(home, away, max_goals, scorer));
    }

    tracing::info!(matches = results.len(), "championship finished");
    Ok(results)
}

/// Two distinct mutable team references, `i < j`
fn pair_mut(teams: &mut [Team], i: usize, j: usize) -> (&mut Team, &mut Team) {
    let (left, right) = teams.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
