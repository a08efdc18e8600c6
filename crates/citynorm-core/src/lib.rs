// crates/citynorm-core/src/lib.rs

pub mod error;
pub mod loader; // The input boundary
pub mod model;
pub mod normalize; // The transform pass
pub mod pipeline;
pub mod writer; // The output boundary

// Re-exports
pub use crate::error::{CityNormError, Result};
pub use crate::model::{
    CityDataset, CoordValue, Coordinates, Metadata, NormalizedCity, RawCity,
};
pub use crate::normalize::normalize;
pub use crate::pipeline::process_file;
