use indexmap::IndexMap;
use num::Float;

/// Term statistics of a single class.
///
/// Keeps the raw occurrence count of every vocabulary index seen in the class,
/// the total number of terms and the number of documents trained into it.
/// Raw counts are never overwritten; TF-IDF weights live in a separate map so
/// they can always be recomputed from scratch.
#[derive(Debug, Clone)]
pub struct ClassModel<N = f64>
where
    N: Float,
{
    term_count: IndexMap<usize, u64>,
    total_term_count: u64,
    doc_num: u64,
    weights: IndexMap<usize, N>,
}

impl<N> Default for ClassModel<N>
where
    N: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Counting
impl<N> ClassModel<N>
where
    N: Float,
{
    pub fn new() -> Self {
        ClassModel {
            term_count: IndexMap::new(),
            total_term_count: 0,
            doc_num: 0,
            weights: IndexMap::new(),
        }
    }

    /// Count one occurrence of the term at `idx`
    #[inline]
    pub fn add_term(&mut self, idx: usize) -> &mut Self {
        *self.term_count.entry(idx).or_insert(0) += 1;
        self.total_term_count += 1;
        self
    }

    /// Count one document made of the given term indices
    #[inline]
    pub fn add_document<I>(&mut self, indices: I) -> &mut Self
    where
        I: IntoIterator<Item = usize>,
    {
        for idx in indices {
            self.add_term(idx);
        }
        self.doc_num += 1;
        self
    }
}

/// Statistics
impl<N> ClassModel<N>
where
    N: Float,
{
    /// Raw occurrences of the term at `idx`
    #[inline]
    pub fn term_count(&self, idx: usize) -> u64 {
        self.term_count.get(&idx).copied().unwrap_or(0)
    }

    #[inline]
    pub fn term_total(&self) -> u64 {
        self.total_term_count
    }

    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of distinct terms seen in this class
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn contains_term(&self, idx: usize) -> bool {
        self.term_count.contains_key(&idx)
    }

    /// count / total, 0.0 for an empty class
    #[inline]
    pub fn term_freq(&self, idx: usize) -> f64 {
        if self.total_term_count == 0 {
            return 0.0;
        }
        self.term_count(idx) as f64 / self.total_term_count as f64
    }

    /// (term index, raw count) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.term_count.iter().map(|(&idx, &count)| (idx, count))
    }
}

/// TF-IDF weights
impl<N> ClassModel<N>
where
    N: Float,
{
    #[inline]
    pub fn weight(&self, idx: usize) -> Option<N> {
        self.weights.get(&idx).copied()
    }

    pub fn weights(&self) -> &IndexMap<usize, N> {
        &self.weights
    }

    /// Replace every weight
    pub fn set_weights(&mut self, weights: IndexMap<usize, N>) {
        self.weights = weights;
    }

    pub fn clear_weights(&mut self) {
        self.weights.clear();
    }
}
