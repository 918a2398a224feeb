//! Match outcome classification and the points table

/// Points for a win
pub const POINTS_FOR_WIN: u32 = 3;
/// Points for a draw
pub const POINTS_FOR_DRAW: u32 = 1;
/// Points for a loss
pub const POINTS_FOR_LOSS: u32 = 0;

/// Result of a single match from one side's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// Classify a scoreline, returning `(home, away)` outcomes
    pub fn classify(home_goals: u32, away_goals: u32) -> (Outcome, Outcome) {
        use std::cmp::Ordering;

        match home_goals.cmp(&away_goals) {
            Ordering::Greater => (Outcome::Win, Outcome::Loss),
            Ordering::Less => (Outcome::Loss, Outcome::Win),
            Ordering::Equal => (Outcome::Draw, Outcome::Draw),
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => POINTS_FOR_WIN,
            Outcome::Draw => POINTS_FOR_DRAW,
            Outcome::Loss => POINTS_FOR_LOSS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Outcome::classify(2, 1), (Outcome::Win, Outcome::Loss));
        assert_eq!(Outcome::classify(0, 4), (Outcome::Loss, Outcome::Win));
        assert_eq!(Outcome::classify(3, 3), (Outcome::Draw, Outcome::Draw));
    }

    #[test]
    fn test_points_table() {
        assert_eq!(Outcome::Win.points(), 3);
        assert_eq!(Outcome::Draw.points(), 1);
        assert_eq!(Outcome::Loss.points(), 0);
    }
}
