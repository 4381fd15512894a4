use indexmap::IndexMap;
use num::Float;

use crate::classifier::{corpus::ClassCorpus, term::ClassModel};

/// Weighting strategy applied when a classifier is finalized.
///
/// Implementations turn the raw counts of one class into per-term weights,
/// using the class-level corpus for the inverse frequency part.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// TF of the term at `idx` inside `model`
    fn tf(model: &ClassModel<N>, idx: usize) -> f64;

    /// IDF of the term at `idx` across all classes
    fn idf(corpus: &ClassCorpus, idx: usize) -> f64;

    /// Weight vector of one class
    /// # Arguments
    /// * `model` - class statistics
    /// * `corpus` - class-level corpus
    /// # Returns
    /// * `IndexMap<usize, N>` - term index to weight, in the class's first-seen order
    fn weights(model: &ClassModel<N>, corpus: &ClassCorpus) -> IndexMap<usize, N> {
        let mut weights = IndexMap::with_capacity(model.term_num());
        for (idx, _) in model.iter() {
            let w = Self::tf(model, idx) * Self::idf(corpus, idx);
            weights.insert(idx, N::from(w).unwrap_or_else(N::zero));
        }
        weights
    }
}

/// Default TF-IDF engine
///
/// `tf = count / total_terms(class)`
/// `idf = ln(class_num / max(1, classes_containing(term)))`
///
/// Works for `f32` and `f64` weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    pub fn new() -> Self {
        DefaultTFIDFEngine
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    #[inline]
    fn tf(model: &ClassModel<N>, idx: usize) -> f64 {
        model.term_freq(idx)
    }

    #[inline]
    fn idf(corpus: &ClassCorpus, idx: usize) -> f64 {
        let class_freq = corpus.get_class_freq(idx).max(1) as f64;
        (corpus.get_class_num() as f64 / class_freq).ln()
    }
}
