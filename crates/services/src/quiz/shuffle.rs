use rand::rngs::StdRng;
use rand::{SeedableRng, rng};

/// Randomness source for pool and answer permutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shuffle {
    /// Fresh entropy for every session.
    #[default]
    Random,
    /// Reproducible order for a given seed.
    Seeded(u64),
}

impl Shuffle {
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Random, Self::Seeded)
    }

    pub(crate) fn rng(self) -> StdRng {
        match self {
            Shuffle::Random => StdRng::from_rng(&mut rng()),
            Shuffle::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}
