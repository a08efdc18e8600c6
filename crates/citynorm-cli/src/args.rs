use clap::Parser;

/// Default source location, matching the upstream dump filename.
pub const DEFAULT_INPUT: &str = "cities_raw.json";
/// Default destination for the normalized dataset.
pub const DEFAULT_OUTPUT: &str = "cities.json";

/// CLI arguments for citynorm
#[derive(Debug, Parser)]
#[command(
    name = "citynorm",
    version,
    about = "Normalizes a raw city dump into the Cities Database JSON format"
)]
pub struct CliArgs {
    /// Path to the raw input JSON file (a top-level array of city records)
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Path the normalized output document is written to
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: String,
}
