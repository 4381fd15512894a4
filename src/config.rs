use serde::{Deserialize, Serialize};

use crate::utils::float::EPSILON;

/// Probability assigned to a term a class has never seen.
pub const DEFAULT_UNSEEN_TERM_PROB: f64 = 1e-11;

/// How class priors are derived from the training volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorMode {
    /// documents in the class / all documents
    #[default]
    Documents,
    /// terms in the class / all terms
    Terms,
    /// 1 / number of classes
    Uniform,
}

/// Scoring parameters of a [`TextClassifier`](crate::TextClassifier).
///
/// Missing fields fall back to their defaults when deserialized, so a partial
/// document such as `{"epsilon": 1e-6}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Two scores closer than this are a tie
    pub epsilon: f64,
    /// Weight used for a term with no positive weight in a class
    pub unseen_term_prob: f64,
    pub prior: PriorMode,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            unseen_term_prob: DEFAULT_UNSEEN_TERM_PROB,
            prior: PriorMode::default(),
        }
    }
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_unseen_term_prob(mut self, prob: f64) -> Self {
        self.unseen_term_prob = prob;
        self
    }

    pub fn with_prior(mut self, prior: PriorMode) -> Self {
        self.prior = prior;
        self
    }
}
