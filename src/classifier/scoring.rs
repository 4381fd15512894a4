use std::fmt::{self, Debug, Display};

use serde::Serialize;

use crate::utils::float::float_equals_eps;

/// Per-class scores of one classified text
///
/// Scores are normalised posteriors: they are non-negative and sum to 1.0.
#[derive(Clone, PartialEq, Serialize)]
pub struct Scores {
    /// (class label, score)
    pub list: Vec<(String, f64)>,
}

impl Scores {
    pub fn new(list: Vec<(String, f64)>) -> Self {
        Scores { list }
    }

    /// Sort by descending score
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    /// Sort by ascending score
    pub fn sort_by_score_asc(&mut self) -> &mut Self {
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| a.1.total_cmp(&b.1));
        self
    }

    /// Highest scoring entry
    /// The first one wins among equal scores
    pub fn top(&self) -> Option<(&str, f64)> {
        self.ranked().first().map(|&(label, score)| (label, score))
    }

    /// Second highest scoring entry
    pub fn runner_up(&self) -> Option<(&str, f64)> {
        self.ranked().get(1).map(|&(label, score)| (label, score))
    }

    /// True when the best score is not within `eps` of the runner-up
    pub fn is_strict(&self, eps: f64) -> bool {
        match (self.top(), self.runner_up()) {
            (Some((_, first)), Some((_, second))) => !float_equals_eps(first, second, eps),
            (Some(_), None) => true,
            _ => false,
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.list.iter().find(|(l, _)| l == label).map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.list.iter().map(|(l, s)| (l.as_str(), *s))
    }

    /// stable descending order without touching `list`
    fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().filter(|(_, s)| !s.is_nan()).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl Debug for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Scores [")?;
            for (label, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", label, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, score) in &self.list {
            writeln!(f, "{}\t{:.6}", label, score)?;
        }
        Ok(())
    }
}

/// Outcome of a classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// One class scored strictly above all others
    Label(String),
    /// The two best classes tied
    Ambiguous,
    /// No score could be computed, e.g. nothing has been trained yet
    Uncomputable,
}

impl Classification {
    /// The winning label, or an empty string for "no confident classification"
    pub fn into_label(self) -> String {
        match self {
            Classification::Label(label) => label,
            Classification::Ambiguous | Classification::Uncomputable => String::new(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Classification::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn is_confident(&self) -> bool {
        matches!(self, Classification::Label(_))
    }
}
