// crates/citynorm-core/src/pipeline.rs

use crate::error::Result;
use crate::model::CityDataset;
use crate::{loader, normalize, writer};
use std::path::Path;
use tracing::info;

/// Run the whole pipeline: load the raw dump, normalize it, and write the
/// output document. Returns the written dataset so callers can report on it.
pub fn process_file(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<CityDataset> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    let raw = loader::load_raw(source)?;
    let dataset = normalize::normalize(raw)?;
    writer::write_dataset(dest, &dataset)?;

    info!(
        source = %source.display(),
        dest = %dest.display(),
        cities = dataset.city_count(),
        "wrote normalized dataset"
    );
    Ok(dataset)
}
