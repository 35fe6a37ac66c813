//! Generate command implementation for the Tiffin CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tiffin_data::SyntheticConfig;

use crate::{ARG_COUNT, ARG_OUTPUT, ARG_SEED, CliError, ENV_GENERATE_OUTPUT};

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Write a deterministic synthetic restaurant dataset as CSV. \
                 The same count and seed always produce the same rows, so \
                 generated datasets can be reproduced exactly.",
    about = "Write a synthetic restaurant dataset as CSV"
)]
#[ortho_config(prefix = "TIFFIN")]
pub(crate) struct GenerateArgs {
    /// Destination CSV path; parent directories are created as needed.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Number of rows to generate.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Seed for deterministic generation.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GenerateConfig::try_from(merged)
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateConfig {
    /// Destination CSV path.
    pub(crate) output: Utf8PathBuf,
    /// Synthetic generation parameters.
    pub(crate) synthetic: SyntheticConfig,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_GENERATE_OUTPUT,
        })?;
        Ok(Self {
            output,
            synthetic: SyntheticConfig {
                count: args.count.unwrap_or(SyntheticConfig::DEFAULT_COUNT),
                seed: args.seed.unwrap_or(SyntheticConfig::DEFAULT_SEED),
            },
        })
    }
}

pub(super) fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_generate_with(args, &mut stdout)
}

pub(super) fn run_generate_with(
    args: GenerateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let restaurants = tiffin_data::generate(config.synthetic);
    tiffin_data::write_csv(&config.output, &restaurants)?;
    writeln!(
        writer,
        "Wrote {} restaurants to {}",
        restaurants.len(),
        config.output
    )
    .map_err(CliError::WriteOutput)
}
