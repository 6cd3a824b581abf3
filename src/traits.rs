use crate::error::Result;
use crate::graph::{Component, Graph, VertexId};
use crate::Estimate;

/// Source of the random vertex choices made by the estimators (pivots,
/// sources and targets).
///
/// Estimators reject an empty component before asking for a sample, so
/// implementations only see an empty `domain` when called directly.
///
/// # Examples
///
/// ```ignore
/// let mut sampler = SequenceSampler::new(vec![3]);
/// assert_eq!(sampler.pick(&[1, 2, 3])?, 3);
/// ```
pub trait Sampler {
    /// Picks one vertex of `domain`.
    fn pick(&mut self, domain: &[VertexId]) -> Result<VertexId>;

    /// Picks `count` vertices independently; repeats are allowed.
    fn pick_many(&mut self, domain: &[VertexId], count: usize) -> Result<Vec<VertexId>> {
        (0..count).map(|_| self.pick(domain)).collect()
    }
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn pick(&mut self, domain: &[VertexId]) -> Result<VertexId> {
        (**self).pick(domain)
    }
}

/// A Longest Simple Path estimator.
///
/// Every returned length is a lower bound: a simple path with that many
/// edges exists inside `component`. Implementations own all of their search
/// state for the duration of one call.
pub trait Estimator {
    fn name(&self) -> &'static str;

    fn search_lsp(
        &self,
        graph: &Graph,
        component: &Component,
        sampler: &mut dyn Sampler,
    ) -> Result<Estimate>;
}
