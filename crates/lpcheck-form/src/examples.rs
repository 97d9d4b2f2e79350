//! Preset example problems and random selection.

use rand::Rng;

/// A preset objective/constraints pair for filling the form
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub objective: &'static str,
    pub constraints: &'static str,
}

/// The fixed example catalog
pub const EXAMPLES: [Example; 3] = [
    Example {
        objective: "maximizar z = 3x + 2y",
        constraints: "x + 2y <= 8\n2x + y <= 10\nx >= 0\ny >= 0",
    },
    Example {
        objective: "minimizar z = 2x + 3y",
        constraints: "x + y >= 4\n2x + y >= 6\nx >= 0\ny >= 0",
    },
    Example {
        objective: "maximizar z = x + 4y",
        constraints: "x + 2y <= 12\n2x + y <= 16\nx + y >= 5\nx >= 0\ny >= 0",
    },
];

/// Pick a catalog entry uniformly at random. The random source is a
/// parameter so callers (and tests) can supply a seeded one.
pub fn pick_example<R: Rng>(rng: &mut R) -> &'static Example {
    &EXAMPLES[rng.gen_range(0..EXAMPLES.len())]
}

/// Convenience wrapper over the thread-local random source
pub fn random_example() -> &'static Example {
    pick_example(&mut rand::thread_rng())
}
