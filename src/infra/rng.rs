use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// Системный RNG (thread_rng) для обычных партий.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG, выбранный из конфигурации: с seed – детерминированный, без – системный.
#[derive(Clone, Debug)]
pub enum EngineRng {
    System(SystemRng),
    Deterministic(DeterministicRng),
}

impl EngineRng {
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => EngineRng::Deterministic(DeterministicRng::from_seed(s)),
            None => EngineRng::System(SystemRng),
        }
    }

    pub fn is_deterministic(&self) -> bool {
        matches!(self, EngineRng::Deterministic(_))
    }
}

impl RandomSource for EngineRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            EngineRng::System(rng) => rng.shuffle(slice),
            EngineRng::Deterministic(rng) => rng.shuffle(slice),
        }
    }
}
