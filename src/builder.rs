use crate::backtracking::Backtracking;
use crate::best_first::BestFirst;
use crate::double_sweep::DoubleSweep;
use crate::farthest_first::FarthestFirst;
use crate::sampler::RandomSampler;
use crate::utils::ceil_sqrt;

/// Builder holds the run configuration shared by every estimator.
///
// - `seed` initialises the default sampler; fixing it makes a run reproducible.
// - `trials` overrides the number of pivots (and of sources and targets for the best-first search). The default is ⌈√|component|⌉.
// - `parallel` samples every trial up front and runs the trials on the rayon pool.
///
#[derive(Clone, Debug)]
pub struct Builder {
    seed: u64,
    trials: Option<usize>,
    parallel: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            trials: None,
            parallel: false,
        }
    }
}

impl Builder {
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
    pub fn set_trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials.max(1));
        self
    }
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }
    pub fn get_trials(&self) -> Option<usize> {
        self.trials
    }
    pub fn get_parallel(&self) -> bool {
        self.parallel
    }

    /// Number of trials for a component with `component_len` vertices.
    pub fn trials_for(&self, component_len: usize) -> usize {
        self.trials.unwrap_or_else(|| ceil_sqrt(component_len))
    }

    /// A fresh sampler seeded with this builder's seed.
    pub fn sampler(&self) -> RandomSampler {
        RandomSampler::new(self.seed)
    }

    pub fn double_sweep(self) -> DoubleSweep {
        DoubleSweep::new(self)
    }
    pub fn farthest_first(self) -> FarthestFirst {
        FarthestFirst::new(self)
    }
    pub fn best_first(self) -> BestFirst {
        BestFirst::new(self)
    }
    pub fn backtracking(self) -> Backtracking {
        Backtracking::new(self)
    }
}
