//! Error types for the seed-data crate.

use thiserror::Error;

/// Errors that can occur while sampling the seed catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The descriptor word list is empty.
    #[error("seed catalogue contains no descriptors")]
    NoDescriptors,

    /// The place word list is empty.
    #[error("seed catalogue contains no places")]
    NoPlaces,

    /// The city gazetteer is empty.
    #[error("seed catalogue contains no cities")]
    NoCities,
}
