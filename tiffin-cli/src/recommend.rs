//! Recommend command implementation for the Tiffin CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tiffin_core::{CandidateFilter, DEFAULT_LIMIT, Ranker};
use tiffin_scorer::MatchScorer;

use crate::render::{self, RankingReport};
use crate::source::{CatalogueSource, parse_city, parse_cuisine};
use crate::{
    ARG_CITY, ARG_COUNT, ARG_CUISINE, ARG_DATASET, ARG_JSON, ARG_LIMIT, ARG_MAX_COST,
    ARG_MIN_RATING, ARG_SEED, ARG_SYNTHETIC, CliError,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank restaurants by cosine similarity to the average \
                 feature profile of everything passing the filters. The \
                 catalogue comes from a CSV dataset or from deterministic \
                 synthetic generation.",
    about = "Recommend restaurants matching the filtered profile"
)]
#[ortho_config(prefix = "TIFFIN")]
pub(crate) struct RecommendArgs {
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
    /// Restrict candidates to one city.
    #[arg(long = ARG_CITY, value_name = "city")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Accept a cuisine; repeat the flag for more than one.
    #[arg(long = ARG_CUISINE, value_name = "name")]
    #[serde(default)]
    pub(crate) cuisines: Option<Vec<String>>,
    /// Keep only candidates rated at least this highly.
    #[arg(long = ARG_MIN_RATING, value_name = "rating")]
    #[serde(default)]
    pub(crate) min_rating: Option<f32>,
    /// Keep only candidates costing at most this many rupees.
    #[arg(long = ARG_MAX_COST, value_name = "rupees")]
    #[serde(default)]
    pub(crate) max_cost: Option<u16>,
    /// Maximum number of recommendations to return.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Emit the ranking report as JSON instead of text.
    #[arg(long = ARG_JSON)]
    #[serde(default)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Where the catalogue comes from.
    pub(crate) source: CatalogueSource,
    /// Active candidate filter.
    pub(crate) filter: CandidateFilter,
    /// Maximum number of recommendations to return.
    pub(crate) limit: usize,
    /// Whether to emit JSON instead of text.
    pub(crate) json: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.source.validate()
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let source =
            CatalogueSource::resolve(args.dataset, args.synthetic, args.count, args.seed)?;
        let mut filter = CandidateFilter::new();
        if let Some(value) = &args.city {
            filter = filter.with_city(parse_city(value)?);
        }
        let cuisine_values = args.cuisines.unwrap_or_default();
        for value in &cuisine_values {
            filter = filter.with_cuisine(parse_cuisine(value)?);
        }
        if let Some(min_rating) = args.min_rating {
            filter = filter.with_min_rating(min_rating);
        }
        if let Some(max_cost) = args.max_cost {
            filter = filter.with_max_cost(max_cost);
        }
        Ok(Self {
            source,
            filter,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            json: args.json,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let catalogue = config.source.load()?;
    let candidates = catalogue.select(&config.filter);
    if candidates.is_empty() {
        if config.json {
            let report = RankingReport {
                loaded: catalogue.len(),
                matched: 0,
                relaxed: false,
                recommendations: &[],
            };
            return render::write_json(writer, &report);
        }
        return render::write_no_matches(writer);
    }
    let ranked = MatchScorer::new()
        .with_limit(config.limit)
        .rank(&candidates)
        .map_err(|source| CliError::Rank { source })?;
    let report = RankingReport {
        loaded: catalogue.len(),
        matched: candidates.len(),
        relaxed: false,
        recommendations: &ranked,
    };
    if config.json {
        render::write_json(writer, &report)
    } else {
        render::write_text(writer, &candidates, &report)
    }
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}
