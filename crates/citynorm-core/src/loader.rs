// crates/citynorm-core/src/loader.rs

//! # Source loader
//!
//! Handles the physical layer (file I/O, decompression) and delegates the
//! payload to serde.

use crate::error::{CityNormError, Result};
use crate::model::RawCity;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load the raw city records from a JSON file.
///
/// With the `compact` feature enabled, a path ending in `.gz` is gunzipped
/// transparently. Malformed JSON or a top-level value that is not an array
/// fails with [`CityNormError::Parse`].
pub fn load_raw(path: impl AsRef<Path>) -> Result<Vec<RawCity>> {
    let reader = open_stream(path.as_ref())?;
    load_from_reader(reader)
}

/// Parse raw city records from any reader.
pub fn load_from_reader(reader: impl Read) -> Result<Vec<RawCity>> {
    let raw: Vec<RawCity> = serde_json::from_reader(reader).map_err(CityNormError::Parse)?;
    Ok(raw)
}

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CityNormError::NotFound(format!("Source not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}
