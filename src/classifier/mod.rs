pub mod corpus;
pub mod scoring;
pub mod term;
pub mod tfidf;
pub mod vocab;

use std::marker::PhantomData;

use indexmap::{IndexMap, IndexSet};
use num::Float;
use rayon::prelude::*;

use crate::{
    classifier::{
        corpus::ClassCorpus,
        scoring::{Classification, Scores},
        term::ClassModel,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        vocab::Vocabulary,
    },
    config::{ClassifierConfig, PriorMode},
    error::{ArgumentError, ClassifierError, Result},
    utils::unique::unique,
};

/// Split a document into terms
/// Whitespace delimited, case-sensitive
#[inline]
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

#[derive(Debug, Clone)]
pub struct TextClassifier<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// class registry, first-seen order
    classes: IndexSet<Box<str>>,
    /// class statistics, aligned with `classes`
    models: Vec<ClassModel<N>>,
    vocab: Vocabulary,
    corpus: ClassCorpus,
    finalized: bool,
    /// corpus generation the weights were computed at
    weights_gen: u64,
    config: ClassifierConfig,
    _marker: PhantomData<E>,
}

/// The zero value: no registry, every operation fails with `NotInitialized`
impl<N, E> Default for TextClassifier<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    fn default() -> Self {
        Self {
            classes: IndexSet::new(),
            models: Vec::new(),
            vocab: Vocabulary::new(),
            corpus: ClassCorpus::default(),
            finalized: false,
            weights_gen: 0,
            config: ClassifierConfig::default(),
            _marker: PhantomData,
        }
    }
}

/// Registry
impl<N, E> TextClassifier<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Create a classifier for the given labels
    /// Duplicate labels are collapsed, keeping the first occurrence
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(labels, ClassifierConfig::default())
    }

    pub fn with_config<I, S>(labels: I, config: ClassifierConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<String> = labels.into_iter().map(|l| l.as_ref().to_string()).collect();
        if labels.len() < 2 {
            return Err(ArgumentError::NotEnoughClasses.into());
        }
        if labels.iter().any(|l| l.is_empty()) {
            return Err(ArgumentError::EmptyClassName.into());
        }
        let labels = unique(labels);
        if labels.len() < 2 {
            return Err(ArgumentError::NotEnoughClasses.into());
        }

        let classes: IndexSet<Box<str>> = labels.into_iter().map(String::into_boxed_str).collect();
        log::debug!("classifier created with {} classes", classes.len());
        Ok(Self {
            models: (0..classes.len()).map(|_| ClassModel::new()).collect(),
            corpus: ClassCorpus::new(classes.len()),
            classes,
            vocab: Vocabulary::new(),
            finalized: false,
            weights_gen: 0,
            config,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.classes.len() >= 2
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(ClassifierError::NotInitialized)
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Registered labels in registry order
    pub fn classes(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.as_ref()).collect()
    }

    pub fn class_num(&self) -> usize {
        self.classes.len()
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn model(&self, class: &str) -> Option<&ClassModel<N>> {
        self.classes.get_index_of(class).map(|idx| &self.models[idx])
    }

    /// Documents trained into `class`
    pub fn doc_num(&self, class: &str) -> Option<u64> {
        self.model(class).map(|m| m.doc_num())
    }

    /// Terms trained into `class`
    pub fn term_total(&self, class: &str) -> Option<u64> {
        self.model(class).map(|m| m.term_total())
    }

    /// Raw occurrences of `term` in `class`
    pub fn term_count(&self, class: &str, term: &str) -> Option<u64> {
        let model = self.model(class)?;
        Some(self.vocab.index_of(term).map_or(0, |idx| model.term_count(idx)))
    }

    /// TF-IDF weight of `term` in `class`, once finalized
    pub fn term_weight(&self, class: &str, term: &str) -> Option<f64> {
        if !self.finalized {
            return None;
        }
        let model = self.model(class)?;
        let idx = self.vocab.index_of(term)?;
        model.weight(idx).and_then(|w| w.to_f64())
    }
}

/// Training
impl<N, E> TextClassifier<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Train `class_name` with documents
    ///
    /// All documents are validated first, so a rejected call learns nothing.
    /// Training after `finalize` refreshes the weights right away.
    pub fn train<T>(&mut self, class_name: &str, documents: &[T]) -> Result<()>
    where
        T: AsRef<str>,
    {
        self.ensure_initialized()?;
        if class_name.is_empty() {
            return Err(ArgumentError::EmptyClassName.into());
        }
        if documents.is_empty() {
            return Err(ArgumentError::NoDocuments.into());
        }
        let class_idx = self
            .classes
            .get_index_of(class_name)
            .ok_or_else(|| ClassifierError::unknown_class(class_name))?;
        if documents.iter().any(|doc| doc.as_ref().is_empty()) {
            return Err(ArgumentError::EmptyDocument.into());
        }

        for doc in documents {
            let indices: Vec<usize> = tokenize(doc.as_ref())
                .map(|term| self.vocab.get_or_insert(term))
                .collect();
            let model = &mut self.models[class_idx];
            // terms this class contains for the first time
            let new_terms: IndexSet<usize> = indices
                .iter()
                .copied()
                .filter(|&idx| !model.contains_term(idx))
                .collect();
            model.add_document(indices);
            for idx in new_terms {
                self.corpus.add_class_term(idx);
            }
        }
        self.corpus.touch();
        self.update_weights();

        log::debug!(
            "trained class {:?} with {} documents, vocabulary size {}",
            class_name,
            documents.len(),
            self.vocab.len()
        );
        Ok(())
    }

    /// Switch scoring to TF-IDF weights
    /// Weights are always recomputed from raw counts, so calling it again is harmless
    pub fn finalize(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.re_calc_weights();
        self.finalized = true;
        log::debug!(
            "finalized {} classes over {} terms",
            self.classes.len(),
            self.vocab.len()
        );
        Ok(())
    }

    /// Recompute weights if training happened since the last computation
    fn update_weights(&mut self) {
        if self.finalized && self.weights_gen != self.corpus.get_gen_num() {
            self.re_calc_weights();
        }
    }

    fn re_calc_weights(&mut self) {
        let corpus = &self.corpus;
        self.models.par_iter_mut().for_each(|model| {
            let weights: IndexMap<usize, N> = E::weights(model, corpus);
            model.set_weights(weights);
        });
        self.weights_gen = self.corpus.get_gen_num();
    }
}

/// Classification
impl<N, E> TextClassifier<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Classify `text`
    ///
    /// Returns an empty label when the two best classes tie or when nothing
    /// could be scored. Use [`classify_detailed`](Self::classify_detailed) to
    /// tell those cases apart.
    pub fn classify(&self, text: &str) -> Result<String> {
        self.classify_detailed(text).map(Classification::into_label)
    }

    pub fn classify_detailed(&self, text: &str) -> Result<Classification> {
        let Some(scores) = self.scores(text)? else {
            return Ok(Classification::Uncomputable);
        };
        if !scores.is_strict(self.config.epsilon) {
            return Ok(Classification::Ambiguous);
        }
        Ok(match scores.top() {
            Some((label, _)) => Classification::Label(label.to_string()),
            None => Classification::Uncomputable,
        })
    }

    /// Normalised score of every class, in registry order
    /// `None` when no class could be scored
    pub fn scores(&self, text: &str) -> Result<Option<Scores>> {
        self.ensure_initialized()?;
        let terms: Vec<Option<usize>> = tokenize(text).map(|t| self.vocab.index_of(t)).collect();
        let priors = self.priors();

        let log_scores: Vec<f64> = self
            .models
            .par_iter()
            .zip(priors.par_iter())
            .map(|(model, &prior)| self.log_score(model, prior, &terms))
            .collect();

        let Some(normalized) = normalize_log_scores(&log_scores) else {
            log::trace!("no computable score for {:?}", text);
            return Ok(None);
        };
        let scores = Scores::new(
            self.classes
                .iter()
                .map(|c| c.to_string())
                .zip(normalized)
                .collect(),
        );
        log::trace!("scores for {:?}: {:?}", text, scores);
        Ok(Some(scores))
    }

    fn priors(&self) -> Vec<f64> {
        let volumes: Vec<u64> = match self.config.prior {
            PriorMode::Uniform => {
                let n = self.models.len() as f64;
                return vec![1.0 / n; self.models.len()];
            }
            PriorMode::Documents => self.models.iter().map(|m| m.doc_num()).collect(),
            PriorMode::Terms => self.models.iter().map(|m| m.term_total()).collect(),
        };
        let total: u64 = volumes.iter().sum();
        if total == 0 {
            return vec![0.0; volumes.len()];
        }
        volumes.into_iter().map(|v| v as f64 / total as f64).collect()
    }

    /// ln(prior) + sum of ln(p(term | class))
    fn log_score(&self, model: &ClassModel<N>, prior: f64, terms: &[Option<usize>]) -> f64 {
        if prior <= 0.0 {
            return f64::NEG_INFINITY;
        }
        terms.iter().fold(prior.ln(), |score, term| {
            let p = term.map_or(0.0, |idx| self.term_prob(model, idx));
            let p = if p > 0.0 { p } else { self.config.unseen_term_prob };
            score + p.ln()
        })
    }

    /// raw relative frequency before finalize, TF-IDF weight after
    #[inline]
    fn term_prob(&self, model: &ClassModel<N>, idx: usize) -> f64 {
        if self.finalized {
            model.weight(idx).and_then(|w| w.to_f64()).unwrap_or(0.0)
        } else {
            model.term_freq(idx)
        }
    }
}

/// log-sum-exp normalisation into posteriors summing to 1.0
/// `None` if no score is finite or any score is NaN
fn normalize_log_scores(log_scores: &[f64]) -> Option<Vec<f64>> {
    if log_scores.iter().any(|s| s.is_nan()) {
        return None;
    }
    let max = log_scores
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return None;
    }
    // -inf maps to 0.0
    let exps: Vec<f64> = log_scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    Some(exps.into_iter().map(|e| e / sum).collect())
}
