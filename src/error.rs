//! Error types for the classifier.
//!
//! Every fallible operation returns [`ClassifierError`]. Validation failures are
//! grouped under [`ClassifierError::InvalidArgument`] with an [`ArgumentError`]
//! describing which argument was rejected.

use thiserror::Error;

/// Which argument a call rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// A class label was the empty string
    #[error("class name can not be empty")]
    EmptyClassName,

    /// Fewer than two distinct labels remained after deduplication
    #[error("at least two unique classes should be defined")]
    NotEnoughClasses,

    /// `train` was called without any document
    #[error("training data is required")]
    NoDocuments,

    /// One of the training documents was the empty string
    #[error("training document can not be empty")]
    EmptyDocument,
}

/// The main error type for classifier operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Rejected argument
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// Operation on a classifier that was never built with a label set
    #[error("classifier is not initialized")]
    NotInitialized,

    /// Training referenced a label that is not registered
    #[error("class {name} is unknown")]
    UnknownClass { name: String },
}

/// Result type alias for operations that may fail with ClassifierError.
pub type Result<T> = std::result::Result<T, ClassifierError>;

impl ClassifierError {
    /// Create an unknown class error for `name`.
    pub fn unknown_class<S: Into<String>>(name: S) -> Self {
        ClassifierError::UnknownClass { name: name.into() }
    }

    /// The argument error carried by this error, if any.
    pub fn argument(&self) -> Option<ArgumentError> {
        match self {
            ClassifierError::InvalidArgument(arg) => Some(*arg),
            _ => None,
        }
    }
}
