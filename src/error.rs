use thiserror::Error;

use crate::dataset::{MovieId, PersonId};

/// Error type for dataset loading, name resolution and search
#[derive(Error, Debug)]
pub enum DegreesError {
    /// `remove` was called on an empty frontier. The search loop never does this.
    #[error("Empty frontier")]
    EmptyFrontier,

    #[error("Unknown person id: {0}")]
    UnknownPerson(PersonId),

    #[error("Unknown movie id: {0}")]
    UnknownMovie(MovieId),

    /// No person carries this name
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Ambiguous name '{name}': matches {}", .candidates.join(", "))]
    AmbiguousName {
        name: String,
        candidates: Vec<PersonId>,
    },

    /// Interactive disambiguation got an id outside the offered candidates
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using DegreesError
pub type Result<T> = std::result::Result<T, DegreesError>;
