//! Top-rated command implementation for the Tiffin CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tiffin_core::{CandidateFilter, DEFAULT_LIMIT, Ranker, dedupe_by_name};
use tiffin_scorer::RatingRanker;

use crate::render::{self, RankingReport};
use crate::source::{CatalogueSource, parse_city, parse_cuisine};
use crate::{
    ARG_CITY, ARG_COUNT, ARG_CUISINE, ARG_DATASET, ARG_JSON, ARG_LIMIT, ARG_MAX_COST,
    ARG_MIN_RATING, ARG_SEED, ARG_SYNTHETIC, CliError, ENV_TOP_RATED_CITY, ENV_TOP_RATED_CUISINES,
};

/// Default minimum rating bound for top-rated searches.
const DEFAULT_MIN_RATING: f32 = 4.0;
/// Default maximum cost bound in rupees.
const DEFAULT_MAX_COST: u16 = 1000;

/// CLI arguments for the `top-rated` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the best-rated restaurants for one city and at least \
                 one cuisine. When the rating and cost bounds match nothing \
                 the search retries once without them and labels the output \
                 accordingly.",
    about = "List the best-rated restaurants for a city and cuisine"
)]
#[ortho_config(prefix = "TIFFIN")]
pub(crate) struct TopRatedArgs {
    /// Path to a restaurant dataset CSV.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Generate the catalogue instead of reading a dataset file.
    #[arg(long = ARG_SYNTHETIC)]
    #[serde(default)]
    pub(crate) synthetic: bool,
    /// Number of synthetic rows to generate.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Seed for synthetic generation.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// City to search in.
    #[arg(long = ARG_CITY, value_name = "city")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Cuisine to search for; repeat the flag for more than one.
    #[arg(long = ARG_CUISINE, value_name = "name")]
    #[serde(default)]
    pub(crate) cuisines: Option<Vec<String>>,
    /// Minimum rating bound.
    #[arg(long = ARG_MIN_RATING, value_name = "rating")]
    #[serde(default)]
    pub(crate) min_rating: Option<f32>,
    /// Maximum cost bound in rupees.
    #[arg(long = ARG_MAX_COST, value_name = "rupees")]
    #[serde(default)]
    pub(crate) max_cost: Option<u16>,
    /// Maximum number of results to return.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Emit the ranking report as JSON instead of text.
    #[arg(long = ARG_JSON)]
    #[serde(default)]
    pub(crate) json: bool,
}

impl TopRatedArgs {
    pub(crate) fn into_config(self) -> Result<TopRatedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TopRatedConfig::try_from(merged)
    }
}

/// Resolved `top-rated` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TopRatedConfig {
    /// Where the catalogue comes from.
    pub(crate) source: CatalogueSource,
    /// Strict candidate filter; relaxation drops its rating and cost bounds.
    pub(crate) filter: CandidateFilter,
    /// Maximum number of results to return.
    pub(crate) limit: usize,
    /// Whether to emit JSON instead of text.
    pub(crate) json: bool,
}

impl TopRatedConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.source.validate()
    }
}

impl TryFrom<TopRatedArgs> for TopRatedConfig {
    type Error = CliError;

    fn try_from(args: TopRatedArgs) -> Result<Self, Self::Error> {
        let source =
            CatalogueSource::resolve(args.dataset, args.synthetic, args.count, args.seed)?;
        let city_value = args.city.ok_or(CliError::MissingArgument {
            field: ARG_CITY,
            env: ENV_TOP_RATED_CITY,
        })?;
        let cuisine_values = args.cuisines.unwrap_or_default();
        if cuisine_values.is_empty() {
            return Err(CliError::MissingArgument {
                field: ARG_CUISINE,
                env: ENV_TOP_RATED_CUISINES,
            });
        }
        let mut filter = CandidateFilter::new()
            .with_city(parse_city(&city_value)?)
            .with_min_rating(args.min_rating.unwrap_or(DEFAULT_MIN_RATING))
            .with_max_cost(args.max_cost.unwrap_or(DEFAULT_MAX_COST));
        for value in &cuisine_values {
            filter = filter.with_cuisine(parse_cuisine(value)?);
        }
        Ok(Self {
            source,
            filter,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            json: args.json,
        })
    }
}

pub(super) fn run_top_rated(args: TopRatedArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_top_rated_with(args, &mut stdout)
}

pub(super) fn run_top_rated_with(
    args: TopRatedArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_top_rated_config(args)?;
    let catalogue = config.source.load()?;
    let strict = dedupe_by_name(catalogue.select(&config.filter));
    let (candidates, relaxed) = if strict.is_empty() {
        // Keep the city and cuisine constraints; only rating and cost relax.
        let fallback = dedupe_by_name(catalogue.select(&config.filter.without_limits()));
        (fallback, true)
    } else {
        (strict, false)
    };
    if candidates.is_empty() {
        if config.json {
            let report = RankingReport {
                loaded: catalogue.len(),
                matched: 0,
                relaxed,
                recommendations: &[],
            };
            return render::write_json(writer, &report);
        }
        return render::write_no_matches(writer);
    }
    let ranked = RatingRanker::new()
        .with_limit(config.limit)
        .rank(&candidates)
        .map_err(|source| CliError::Rank { source })?;
    let report = RankingReport {
        loaded: catalogue.len(),
        matched: candidates.len(),
        relaxed,
        recommendations: &ranked,
    };
    if config.json {
        render::write_json(writer, &report)
    } else {
        render::write_text(writer, &candidates, &report)
    }
}

fn resolve_top_rated_config(args: TopRatedArgs) -> Result<TopRatedConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}
