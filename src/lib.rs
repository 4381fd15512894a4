/// This crate is a naive Bayes text classifier with optional TF-IDF weighting.
pub mod classifier;
pub mod config;
pub mod error;
pub mod utils;

/// Text Classifier
/// The top-level struct of this crate.
/// It learns term frequencies per class and classifies new documents against them.
///
/// Internally, it holds:
/// - The class registry (unique labels, first-seen order)
/// - The vocabulary, mapping each term to a stable dense index
/// - Raw term counts and document counts for each class
/// - Class-level term statistics for the IDF calculation
/// - TF-IDF weights, once finalized
///
/// `TextClassifier<N, E>` has the following generic parameters:
/// - `N`: Weight type (f32 or f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// # Lifecycle
/// Build it with at least two distinct labels, `train` any number of times,
/// optionally `finalize` to switch from raw frequencies to TF-IDF weights, and
/// `classify`. Training stays legal after `finalize` and after `classify`.
///
/// `TextClassifier::default()` is an uninitialized value; every operation on it
/// fails with `ClassifierError::NotInitialized`.
///
/// # Ambiguity
/// `classify` returns an empty label when the two best classes score within
/// `ClassifierConfig::epsilon` of each other, or when nothing can be scored yet.
pub use classifier::TextClassifier;

/// TF IDF Calculation Engine Trait
/// Defines how a finalized classifier weights the terms of a class.
///
/// The default implementation, `DefaultTFIDFEngine`, computes
/// `(count / total terms of class) * ln(classes / classes containing term)`
/// for `f32` and `f64` weights.
pub use classifier::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Scores and classification outcome
/// - `Scores`: normalised per-class scores with ordering and tie detection
/// - `Classification`: a label, a tie, or no computable score
pub use classifier::scoring::{Classification, Scores};

/// Scoring parameters: tie epsilon, unseen term probability and prior mode.
pub use config::{ClassifierConfig, PriorMode};

pub use error::{ArgumentError, ClassifierError, Result};

pub use utils::float::{float_equals, EPSILON};
pub use utils::unique::unique;
