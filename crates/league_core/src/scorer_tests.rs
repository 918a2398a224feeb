use super::*;

#[test]
fn test_random_scorer_stays_in_range() {
    let mut scorer = RandomScorer::new();
    for _ in 0..1000 {
        assert!(scorer.goals(5) <= 5);
    }
}

#[test]
fn test_random_scorer_covers_range() {
    let mut scorer = RandomScorer::seeded(7);
    let mut seen = [false; 6];
    for _ in 0..1000 {
        seen[scorer.goals(5) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "every value in 0..=5 should appear: {:?}", seen);
}

#[test]
fn test_seeded_scorer_is_reproducible() {
    let mut a = RandomScorer::seeded(42);
    let mut b = RandomScorer::seeded(42);
    let first: Vec<u32> = (0..50).map(|_| a.goals(5)).collect();
    let second: Vec<u32> = (0..50).map(|_| b.goals(5)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_zero_max_goals_always_zero() {
    let mut scorer = RandomScorer::seeded(1);
    for _ in 0..20 {
        assert_eq!(scorer.goals(0), 0);
    }
}

#[test]
fn test_scripted_scorer_cycles_and_clamps() {
    let mut scorer = ScriptedScorer::new(vec![1, 9]);
    assert_eq!(scorer.goals(5), 1);
    assert_eq!(scorer.goals(5), 5);
    assert_eq!(scorer.goals(5), 1);
}

#[test]
fn test_scripted_from_scorelines() {
    let mut scorer = ScriptedScorer::from_scorelines(&[(2, 1), (0, 0)]);
    let goals: Vec<u32> = (0..4).map(|_| scorer.goals(5)).collect();
    assert_eq!(goals, vec![2, 1, 0, 0]);
}

#[test]
fn test_empty_script_yields_zero() {
    let mut scorer = ScriptedScorer::default();
    assert_eq!(scorer.goals(5), 0);
    assert_eq!(scorer.name(), "scripted");
}
