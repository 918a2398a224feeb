//! Score generators
//!
//! - [`RandomScorer`]: uniform goals from a ChaCha8 stream, either seeded
//!   from OS entropy or from a fixed seed for reproducible championships
//! - [`ScriptedScorer`]: replays a fixed sequence, used to force scorelines

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ScoreGenerator;

/// Uniformly random goal counts.
#[derive(Debug, Clone)]
pub struct RandomScorer {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl RandomScorer {
    /// A new generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// A reproducible generator: the same seed always yields the same goals
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreGenerator for RandomScorer {
    fn goals(&mut self, max_goals: u32) -> u32 {
        self.rng.gen_range(0..=max_goals)
    }

    fn name(&self) -> &str {
        if self.seed.is_some() {
            "random (seeded)"
        } else {
            "random"
        }
    }
}

/// Replays a fixed list of goal counts, starting over when exhausted.
///
/// Values above `max_goals` are clamped. An empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedScorer {
    script: Vec<u32>,
    cursor: usize,
}

impl ScriptedScorer {
    pub fn new(script: Vec<u32>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Build a script from whole scorelines, in the order matches are played
    pub fn from_scorelines(scorelines: &[(u32, u32)]) -> Self {
        let script = scorelines
            .iter()
            .flat_map(|&(home, away)| [home, away])
            .collect();
        Self::new(script)
    }
}

impl ScoreGenerator for ScriptedScorer {
    fn goals(&mut self, max_goals: u32) -> u32 {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value.min(max_goals)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod scorer_tests;
