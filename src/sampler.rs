use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{LspError, Result};
use crate::graph::VertexId;
use crate::traits::Sampler;

/// Uniform sampling backed by a seeded `SmallRng`.
pub struct RandomSampler {
    rng: SmallRng,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn pick(&mut self, domain: &[VertexId]) -> Result<VertexId> {
        domain
            .choose(&mut self.rng)
            .copied()
            .ok_or(LspError::EmptyDomain)
    }
}

/// Replays a fixed script of vertices, cycling when it runs out.
///
/// The script is returned as-is, whether or not its vertices belong to the
/// sampled domain; estimators report foreign vertices as `UnknownVertex`.
#[derive(Clone, Debug)]
pub struct SequenceSampler {
    script: Vec<VertexId>,
    cursor: usize,
}

impl SequenceSampler {
    pub fn new(script: Vec<VertexId>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl Sampler for SequenceSampler {
    fn pick(&mut self, domain: &[VertexId]) -> Result<VertexId> {
        if domain.is_empty() {
            return Err(LspError::EmptyDomain);
        }
        if self.script.is_empty() {
            return Err(LspError::InvalidParameter(
                "sequence sampler has an empty script".to_string(),
            ));
        }
        let picked = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        Ok(picked)
    }
}
