use indexmap::IndexSet;

/// Term dictionary shared by every class
/// Each term gets a dense index on first sight; indices are never reassigned
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            terms: IndexSet::new(),
        }
    }

    /// Index of `term`, inserting it if it is new
    #[inline]
    pub fn get_or_insert(&mut self, term: &str) -> usize {
        if let Some(idx) = self.terms.get_index_of(term) {
            return idx;
        }
        self.terms.insert_full(Box::from(term)).0
    }

    /// Index of `term` if it was seen during training
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    #[inline]
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get_index(idx).map(|t| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_and_stable() {
        let mut vocab = Vocabulary::new();
        assert_eq!(vocab.get_or_insert("Rent"), 0);
        assert_eq!(vocab.get_or_insert("House"), 1);
        assert_eq!(vocab.get_or_insert("Rent"), 0);
        assert_eq!(vocab.get_or_insert("rent"), 2);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.index_of("House"), Some(1));
        assert_eq!(vocab.term(2), Some("rent"));
        assert_eq!(vocab.index_of("papaya"), None);
        assert!(!vocab.contains("papaya"));
    }

    #[test]
    fn unicode_terms() {
        let mut vocab = Vocabulary::new();
        let a = vocab.get_or_insert("आणि");
        let b = vocab.get_or_insert("₹");
        assert_ne!(a, b);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["आणि", "₹"]);
    }
}
