// crates/citynorm-core/src/error.rs

use thiserror::Error;

/// Error types for the normalization pipeline.
///
/// Every variant is fatal to the run: the pipeline never retries and never
/// writes partial output.
#[derive(Error, Debug)]
pub enum CityNormError {
    /// The source file could not be opened.
    #[error("Source not found at {0}")]
    NotFound(String),

    /// The source was not valid JSON, or its top level was not an array.
    #[error("Failed to parse source JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A raw record lacks a field required for key construction.
    #[error("Record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A present coordinate value could not be coerced to a float.
    #[error("City `{id}`: cannot convert {field} value `{value}` to a number")]
    Conversion {
        id: String,
        field: &'static str,
        value: String,
    },

    /// The output document could not be written.
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CityNormError>;
