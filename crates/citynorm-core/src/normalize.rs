// crates/citynorm-core/src/normalize.rs

//! # Normalization pass
//!
//! A single ordered pass over the raw records: deduplicate on the
//! `"{name}_{country}"` key, drop records without usable coordinates, and
//! reshape the survivors into [`NormalizedCity`] entries.

use crate::error::{CityNormError, Result};
use crate::model::{
    CityDataset, CoordValue, Coordinates, Metadata, NormalizedCity, RawCity, DATASET_SOURCE,
    DATASET_VERSION,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Transform raw records into the output document.
///
/// Duplicate policy: first occurrence wins; the key is recorded *before* the
/// coordinate filter, so a later duplicate of a coordinate-less record is
/// dropped as a duplicate, not re-evaluated. Keys are exact string
/// concatenations: records differing only in case are distinct.
///
/// Surviving records keep their first-seen source order.
pub fn normalize(raw: Vec<RawCity>) -> Result<CityDataset> {
    let total = raw.len();
    let mut seen: HashSet<String> = HashSet::new();
    let mut cities: Vec<NormalizedCity> = Vec::with_capacity(total);
    let mut skipped_duplicates = 0usize;
    let mut skipped_no_coords = 0usize;

    for (index, city) in raw.into_iter().enumerate() {
        let name = city
            .name
            .ok_or(CityNormError::MissingField { index, field: "name" })?;
        let country = city
            .country
            .ok_or(CityNormError::MissingField { index, field: "country" })?;

        let id = format!("{name}_{country}");
        if !seen.insert(id.clone()) {
            skipped_duplicates += 1;
            debug!(%id, "skipping duplicate record");
            continue;
        }

        // Coordinate presence filter. Numeric zero counts as missing here,
        // matching the source dataset's behavior.
        let (lat, lng) = match (&city.lat, &city.lng) {
            (Some(lat), Some(lng)) if !lat.is_falsy() && !lng.is_falsy() => (lat, lng),
            _ => {
                skipped_no_coords += 1;
                debug!(%id, "skipping record without coordinates");
                continue;
            }
        };

        let coordinates = Coordinates {
            latitude: coerce(lat, &id, "lat")?,
            longitude: coerce(lng, &id, "lng")?,
        };

        cities.push(NormalizedCity {
            id,
            name,
            country_code: country,
            coordinates,
            population: None,
            region: None,
        });
    }

    info!(
        total,
        kept = cities.len(),
        skipped_duplicates,
        skipped_no_coords,
        "normalized city records"
    );

    Ok(CityDataset {
        metadata: Metadata {
            version: DATASET_VERSION.to_string(),
            last_updated: chrono::Local::now().format("%Y-%m-%d").to_string(),
            source: DATASET_SOURCE.to_string(),
        },
        cities,
    })
}

fn coerce(value: &CoordValue, id: &str, field: &'static str) -> Result<f64> {
    value.to_f64().ok_or_else(|| CityNormError::Conversion {
        id: id.to_string(),
        field,
        value: match value {
            CoordValue::Number(n) => n.to_string(),
            CoordValue::Text(s) => s.clone(),
        },
    })
}
