// crates/citynorm-core/src/model.rs

use serde::{Deserialize, Serialize};

/// Version string stamped into every output document.
pub const DATASET_VERSION: &str = "1.0";
/// Source label stamped into every output document.
pub const DATASET_SOURCE: &str = "Cities Database";

/// Raw city record as it comes from the source JSON.
///
/// All fields are optional at the serde level so that a record missing
/// `name` or `country` surfaces as a `MissingField` error with its index,
/// instead of aborting the whole parse.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub lat: Option<CoordValue>,
    #[serde(default)]
    pub lng: Option<CoordValue>,
}

/// A coordinate as the source dataset encodes it: either a JSON number or a
/// numeric string, e.g. `"lat": 48.85` or `"lat": "48.85"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CoordValue {
    Number(f64),
    Text(String),
}

impl CoordValue {
    /// Whether the source filter treats this value as missing.
    ///
    /// NOTE: numeric `0.0` and the empty string count as missing, so a city
    /// sitting exactly on the equator or prime meridian is dropped. The
    /// string `"0"` is NOT missing and survives the filter.
    pub fn is_falsy(&self) -> bool {
        match self {
            CoordValue::Number(n) => *n == 0.0,
            CoordValue::Text(s) => s.is_empty(),
        }
    }

    /// Coerce to a float. `None` when a string value is not numeric.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            CoordValue::Number(n) => Some(*n),
            CoordValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// A coordinate pair in the normalized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A city entry in the normalized output.
///
/// `population` and `region` are not present in the source dataset; they
/// serialize as explicit `null` to keep the output schema stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCity {
    pub id: String,
    pub name: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub coordinates: Coordinates,
    pub population: Option<u64>,
    pub region: Option<String>,
}

/// Header block describing the generated dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    pub source: String,
}

/// Top-level output document.
///
/// Field order is load-bearing: serde serializes `metadata` before `cities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityDataset {
    pub metadata: Metadata,
    pub cities: Vec<NormalizedCity>,
}

impl CityDataset {
    /// All normalized cities, in first-seen source order.
    pub fn cities(&self) -> &[NormalizedCity] {
        &self.cities
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_value_accepts_numbers_and_strings() {
        let raw: RawCity =
            serde_json::from_str(r#"{"name":"Paris","country":"FR","lat":48.85,"lng":"2.35"}"#)
                .unwrap();
        assert_eq!(raw.lat.unwrap().to_f64(), Some(48.85));
        assert_eq!(raw.lng.unwrap().to_f64(), Some(2.35));
    }

    #[test]
    fn coord_value_falsy_rules() {
        assert!(CoordValue::Number(0.0).is_falsy());
        assert!(CoordValue::Text(String::new()).is_falsy());
        assert!(!CoordValue::Number(-12.5).is_falsy());
        // "0" is a non-empty string and passes the filter.
        assert!(!CoordValue::Text("0".to_string()).is_falsy());
    }

    #[test]
    fn coord_value_rejects_non_numeric_text() {
        assert_eq!(CoordValue::Text("north".to_string()).to_f64(), None);
        assert_eq!(CoordValue::Text(" 48.85 ".to_string()).to_f64(), Some(48.85));
    }

    #[test]
    fn normalized_city_serializes_camel_case_with_nulls() {
        let city = NormalizedCity {
            id: "Paris_FR".to_string(),
            name: "Paris".to_string(),
            country_code: "FR".to_string(),
            coordinates: Coordinates {
                latitude: 48.85,
                longitude: 2.35,
            },
            population: None,
            region: None,
        };
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["countryCode"], "FR");
        assert_eq!(json["coordinates"]["latitude"], 48.85);
        assert!(json["population"].is_null());
        assert!(json["region"].is_null());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let raw: RawCity = serde_json::from_str(r#"{"name":"Lima"}"#).unwrap();
        assert!(raw.country.is_none());
        assert!(raw.lat.is_none());
        assert!(raw.lng.is_none());
    }
}
