//! Degrees of separation between people through shared movie credits.

pub mod config;
pub mod dataset;
pub mod error;
pub mod frontier;
pub mod loader;
pub mod report;
pub mod resolve;
pub mod search;

pub use config::Config;
pub use dataset::{Dataset, DatasetBuilder, Movie, MovieId, Person, PersonId};
pub use error::{DegreesError, Result};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use loader::load_data;
pub use resolve::{resolve_person, ResolutionPolicy};
pub use search::{shortest_path, Search};
