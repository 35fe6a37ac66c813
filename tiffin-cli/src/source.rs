//! Catalogue sources and selector parsing shared by the commands.

use camino::{Utf8Path, Utf8PathBuf};
use tiffin_core::{Catalogue, City, Cuisine};
use tiffin_data::SyntheticConfig;

use crate::{ARG_CITY, ARG_CUISINE, ARG_DATASET, ARG_SYNTHETIC, CliError};

/// Where a command's catalogue comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogueSource {
    /// Read restaurants from a CSV dataset.
    Csv(Utf8PathBuf),
    /// Generate a deterministic synthetic catalogue.
    Synthetic(SyntheticConfig),
}

impl CatalogueSource {
    /// Resolve the source from merged dataset arguments.
    ///
    /// Synthetic generation is the default when no dataset is named; naming
    /// a dataset and forcing synthetic generation at the same time is an
    /// error. The count and seed only apply to synthetic catalogues.
    pub(crate) fn resolve(
        dataset: Option<Utf8PathBuf>,
        synthetic: bool,
        count: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Self, CliError> {
        match (dataset, synthetic) {
            (Some(_), true) => Err(CliError::ConflictingArguments {
                first: ARG_DATASET,
                second: ARG_SYNTHETIC,
            }),
            (Some(path), false) => Ok(Self::Csv(path)),
            (None, _) => Ok(Self::Synthetic(SyntheticConfig {
                count: count.unwrap_or(SyntheticConfig::DEFAULT_COUNT),
                seed: seed.unwrap_or(SyntheticConfig::DEFAULT_SEED),
            })),
        }
    }

    /// Validate that a CSV source names an existing file.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        match self {
            Self::Csv(path) => require_existing(path, ARG_DATASET),
            Self::Synthetic(_) => Ok(()),
        }
    }

    /// Load the catalogue this source describes.
    pub(crate) fn load(&self) -> Result<Catalogue, CliError> {
        match self {
            Self::Csv(path) => {
                let report = tiffin_data::ingest_csv_report(path)?;
                Ok(Catalogue::new(report.restaurants))
            }
            Self::Synthetic(config) => Ok(Catalogue::new(tiffin_data::generate(*config))),
        }
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match tiffin_data::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse a city selector, mapping failures onto [`CliError`].
pub(crate) fn parse_city(value: &str) -> Result<City, CliError> {
    value.parse().map_err(|message| CliError::InvalidSelector {
        field: ARG_CITY,
        message,
    })
}

/// Parse a cuisine selector, mapping failures onto [`CliError`].
pub(crate) fn parse_cuisine(value: &str) -> Result<Cuisine, CliError> {
    value.parse().map_err(|message| CliError::InvalidSelector {
        field: ARG_CUISINE,
        message,
    })
}
