// crates/citynorm-core/src/writer.rs

//! # Output writer
//!
//! Serializes the output document with 2-space indentation and non-ASCII
//! text left unescaped, then renames a temporary sibling into place so a
//! failed run never leaves a half-written destination.

use crate::error::{CityNormError, Result};
use crate::model::CityDataset;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write the output document to `path`, creating parent directories as
/// needed. Fails with [`CityNormError::Write`] on any I/O problem.
pub fn write_dataset(path: impl AsRef<Path>, dataset: &CityDataset) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(CityNormError::Write)?;
        }
    }

    let tmp_path = tmp_sibling(path);
    {
        let file = File::create(&tmp_path).map_err(CityNormError::Write)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, dataset)
            .map_err(|e| CityNormError::Write(io::Error::new(io::ErrorKind::Other, e)))?;
        writer.flush().map_err(CityNormError::Write)?;
    }

    fs::rename(&tmp_path, path).map_err(CityNormError::Write)?;
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!("{filename}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, Metadata, NormalizedCity};

    fn sample() -> CityDataset {
        CityDataset {
            metadata: Metadata {
                version: "1.0".to_string(),
                last_updated: "2026-08-24".to_string(),
                source: "Cities Database".to_string(),
            },
            cities: vec![NormalizedCity {
                id: "Zürich_CH".to_string(),
                name: "Zürich".to_string(),
                country_code: "CH".to_string(),
                coordinates: Coordinates {
                    latitude: 47.37,
                    longitude: 8.54,
                },
                population: None,
                region: None,
            }],
        }
    }

    #[test]
    fn writes_pretty_json_with_metadata_first() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("cities.json");

        write_dataset(&dest, &sample()).unwrap();

        let text = fs::read_to_string(&dest).unwrap();
        assert!(text.starts_with("{\n  \"metadata\""));
        assert!(text.find("\"metadata\"").unwrap() < text.find("\"cities\"").unwrap());
        // Non-ASCII characters stay unescaped.
        assert!(text.contains("Zürich"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested/resources/cities.json");

        write_dataset(&dest, &sample()).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn leaves_no_tmp_residue() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("cities.json");

        write_dataset(&dest, &sample()).unwrap();
        assert!(!dir.path().join("cities.json.tmp").exists());
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // A destination whose parent is a regular file cannot be created.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let dest = blocker.join("cities.json");

        let err = write_dataset(&dest, &sample()).unwrap_err();
        assert!(matches!(err, CityNormError::Write(_)));
    }
}
