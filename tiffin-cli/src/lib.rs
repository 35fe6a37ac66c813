//! Command-line interface for the Tiffin recommendation engine.
//!
//! Three subcommands cover the dashboard flows: `recommend` ranks candidates
//! by similarity to the filtered set's average profile, `top-rated` lists
//! the best-rated matches with a one-shot relaxed fallback, and `generate`
//! writes a synthetic dataset CSV. Options merge from CLI flags,
//! configuration files, and `TIFFIN`-prefixed environment variables.
#![forbid(unsafe_code)]

mod error;
mod generate;
mod recommend;
mod render;
mod source;
mod top_rated;

pub use error::CliError;

use clap::{Parser, Subcommand};

use generate::GenerateArgs;
use recommend::RecommendArgs;
use top_rated::TopRatedArgs;

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_SYNTHETIC: &str = "synthetic";
pub(crate) const ARG_COUNT: &str = "count";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_CITY: &str = "city";
pub(crate) const ARG_CUISINE: &str = "cuisine";
pub(crate) const ARG_MIN_RATING: &str = "min-rating";
pub(crate) const ARG_MAX_COST: &str = "max-cost";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_JSON: &str = "json";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_TOP_RATED_CITY: &str = "TIFFIN_CMDS_TOP_RATED_CITY";
pub(crate) const ENV_TOP_RATED_CUISINES: &str = "TIFFIN_CMDS_TOP_RATED_CUISINES";
pub(crate) const ENV_GENERATE_OUTPUT: &str = "TIFFIN_CMDS_GENERATE_OUTPUT";

/// Run the Tiffin CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
        Command::TopRated(args) => top_rated::run_top_rated(args),
        Command::Generate(args) => generate::run_generate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tiffin",
    about = "Restaurant recommendations from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank restaurants by similarity to the filtered set's average profile.
    Recommend(RecommendArgs),
    /// List the best-rated restaurants for a city and cuisine selection.
    TopRated(TopRatedArgs),
    /// Write a synthetic restaurant dataset as CSV.
    Generate(GenerateArgs),
}

#[cfg(test)]
mod tests;
