//! Standings: rank teams by points and render the championship table

use league_core::Team;

/// Column headers of the standings table
pub const STANDINGS_HEADERS: [&str; 8] = [
    "Place", "Team", "Wins", "Losses", "Draws", "Scored", "Conceded", "Points",
];

/// Sort teams by points, highest first, and assign 1-based places.
///
/// The sort is stable: teams level on points keep their current relative
/// order. No further tiebreak is applied.
pub fn rank_teams(teams: &mut [Team]) {
    teams.sort_by(|a, b| b.points.cmp(&a.points));
    for (i, team) in teams.iter_mut().enumerate() {
        team.place = i + 1;
    }
}

/// Render teams as a bordered text table, in the order given
pub fn render_table(teams: &[Team]) -> String {
    let rows: Vec<[String; 8]> = teams
        .iter()
        .map(|t| {
            [
                t.place.to_string(),
                t.name.clone(),
                t.wins.to_string(),
                t.losses.to_string(),
                t.draws.to_string(),
                t.goals_for.to_string(),
                t.goals_against.to_string(),
                t.points.to_string(),
            ]
        })
        .collect();

    // Widths count chars, so double-width glyphs (CJK) will misalign columns
    let mut widths = STANDINGS_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut table = String::new();
    table.push_str(&border);
    table.push('\n');
    table.push_str(&render_row(&STANDINGS_HEADERS, &widths));
    table.push_str(&border);
    table.push('\n');
    for row in &rows {
        table.push_str(&render_row(row, &widths));
    }
    table.push_str(&border);
    table.push('\n');
    table
}

/// Rank `teams` and render the resulting table
pub fn standings_table(teams: &mut [Team]) -> String {
    rank_teams(teams);
    render_table(teams)
}

fn render_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        // Team names left-aligned, numbers right-aligned
        if i == 1 {
            line.push_str(&format!(" {:<width$} |", cell.as_ref(), width = width));
        } else {
            line.push_str(&format!(" {:>width$} |", cell.as_ref(), width = width));
        }
    }
    line.push('\n');
    line
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
