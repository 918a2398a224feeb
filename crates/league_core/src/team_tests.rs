use super::*;

#[test]
fn test_new_team_starts_empty() {
    let team = Team::new("Zenit");
    assert_eq!(team.name, "Zenit");
    assert_eq!(team.place, 0);
    assert_eq!(team.points, 0);
    assert_eq!(team.played(), 0);
    assert_eq!(team.goals_for, 0);
    assert_eq!(team.goals_against, 0);
}

#[test]
fn test_record_win_loss_draw() {
    let mut team = Team::new("Arsenal");

    team.record(3, 1, Outcome::Win);
    team.record(0, 2, Outcome::Loss);
    team.record(1, 1, Outcome::Draw);

    assert_eq!(team.wins, 1);
    assert_eq!(team.losses, 1);
    assert_eq!(team.draws, 1);
    assert_eq!(team.points, 4);
    assert_eq!(team.goals_for, 4);
    assert_eq!(team.goals_against, 4);
    assert_eq!(team.played(), 3);
}

#[test]
fn test_goal_difference_can_be_negative() {
    let mut team = Team::new("Chelsea");
    team.record(0, 5, Outcome::Loss);
    assert_eq!(team.goal_difference(), -5);
}

#[test]
fn test_display_is_name() {
    let team = Team::new("Real Madrid");
    assert_eq!(team.to_string(), "Real Madrid");
}
