//! citynorm — Command-line interface for citynorm-core
//!
//! This binary reads a raw JSON dump of city records, deduplicates them by
//! name and country, drops entries without coordinates, and writes the
//! normalized Cities Database document with a metadata header.
//!
//! Usage examples
//! --------------
//!
//! - Normalize with the fixed default locations
//!   $ citynorm
//!
//! - Point at a custom dump and destination
//!   $ citynorm --input dumps/cities_raw.json --output resources/cities.json
//!
//! The process exits non-zero with a descriptive message on any read, parse
//! or write failure; no partial output is left behind.
mod args;

use crate::args::CliArgs;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    let dataset = citynorm_core::process_file(&args.input, &args.output)?;
    println!("Processed {} cities", dataset.city_count());

    Ok(())
}
