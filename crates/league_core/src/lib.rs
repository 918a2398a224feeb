pub mod match_engine;
pub mod outcome;
pub mod scorer;
pub mod team;

// Re-export the domain types used by the championship driver
pub use match_engine::*;
pub use outcome::*;
pub use scorer::*;
pub use team::*;

/// Default upper bound (inclusive) for goals scored by one side in a match
pub const DEFAULT_MAX_GOALS: u32 = 5;

// =============================================================================
// ScoreGenerator trait: implemented by every source of match scores
// =============================================================================

/// Source of goal counts for simulated matches.
///
/// The match engine never touches a random number generator directly; it
/// asks a `ScoreGenerator` instead. This allows swapping between an
/// entropy-backed generator for real runs, a seeded one for reproducible
/// championships, and a scripted sequence for tests.
pub trait ScoreGenerator {
    /// Produce the number of goals one side scores, in `0..=max_goals`.
    fn goals(&mut self, max_goals: u32) -> u32;

    /// Short name used in log output
    fn name(&self) -> &str {
        "unnamed"
    }
}
