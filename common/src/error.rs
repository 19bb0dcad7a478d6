//! Error types for loading the bundled data and decoding duration tokens.

use thiserror::Error;

/// A duration token segment that is neither empty nor a non-negative integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration bound: {segment:?}")]
    InvalidBound { segment: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse recipe data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("recipe catalog is empty")]
    Empty,

    #[error("recipe ids must be contiguous: expected {expected}, found {found}")]
    IdGap { expected: u64, found: u32 },
}

#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("failed to parse ingredient vocabulary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ingredient {0:?} is listed more than once")]
    DuplicateName(String),
}

#[derive(Error, Debug)]
pub enum RomajiError {
    #[error("failed to parse romaji table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("romaji key {0:?} is not lowercase ascii")]
    InvalidKey(String),
}
