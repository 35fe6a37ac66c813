//! CSV ingestion and export for restaurant catalogues.
//!
//! Rows are validated into [`Restaurant`] records at the boundary. Rows that
//! fail validation are skipped with a warning rather than aborting the load,
//! so one bad entry cannot take down an otherwise usable catalogue.

use camino::{Utf8Path, Utf8PathBuf};
use csv::StringRecord;
use log::warn;
use thiserror::Error;
use tiffin_core::{City, Cuisine, Restaurant};

use crate::fs;

const COLUMN_ID: &str = "id";
const COLUMN_NAME: &str = "name";
const COLUMN_CITY: &str = "city";
const COLUMN_CUISINE: &str = "cuisine";
const COLUMN_RATING: &str = "rating";
const COLUMN_COST: &str = "cost";
const COLUMN_ADDRESS: &str = "address";

/// Detailed report of a CSV ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvIngestReport {
    /// Restaurants that passed validation, in file order.
    pub restaurants: Vec<Restaurant>,
    /// Number of rows skipped because they failed validation.
    pub skipped: usize,
}

/// Errors returned when ingesting a restaurant CSV file.
#[derive(Debug, Error)]
pub enum CsvIngestError {
    #[error("failed to open restaurant CSV at {path}")]
    Open {
        #[source]
        source: std::io::Error,
        path: Utf8PathBuf,
    },
    #[error("failed to read restaurant CSV at {path}")]
    Read {
        #[source]
        source: csv::Error,
        path: Utf8PathBuf,
    },
    #[error("restaurant CSV at {path} is missing the '{column}' column")]
    MissingColumn {
        column: &'static str,
        path: Utf8PathBuf,
    },
}

/// Errors returned when writing a restaurant CSV file.
#[derive(Debug, Error)]
pub enum CsvWriteError {
    #[error("failed to create restaurant CSV at {path}")]
    Create {
        #[source]
        source: std::io::Error,
        path: Utf8PathBuf,
    },
    #[error("failed to write restaurant CSV at {path}")]
    Write {
        #[source]
        source: csv::Error,
        path: Utf8PathBuf,
    },
    #[error("failed to flush restaurant CSV at {path}")]
    Flush {
        #[source]
        source: std::io::Error,
        path: Utf8PathBuf,
    },
}

/// Load a restaurant catalogue from a CSV file.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use tiffin_data::ingest_csv;
///
/// # fn main() -> Result<(), tiffin_data::CsvIngestError> {
/// let restaurants = ingest_csv(Utf8Path::new("catalogue.csv"))?;
/// println!("Loaded {} restaurants", restaurants.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_csv(path: &Utf8Path) -> Result<Vec<Restaurant>, CsvIngestError> {
    ingest_csv_report(path).map(|report| report.restaurants)
}

/// Load a restaurant catalogue, reporting skipped rows alongside the rows
/// that validated.
///
/// The canonical layout names `name`, `city` and `cuisine` columns; `id`,
/// `rating`, `cost` and `address` are optional. Rows missing an `id` value
/// are numbered by file position. Cuisine cells may hold several
/// comma-separated entries.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use tiffin_data::ingest_csv_report;
///
/// # fn main() -> Result<(), tiffin_data::CsvIngestError> {
/// let report = ingest_csv_report(Utf8Path::new("catalogue.csv"))?;
/// println!("Loaded {}, skipped {}", report.restaurants.len(), report.skipped);
/// # Ok(())
/// # }
/// ```
pub fn ingest_csv_report(path: &Utf8Path) -> Result<CsvIngestReport, CsvIngestError> {
    let file = fs::open_utf8_file(path).map_err(|source| CsvIngestError::Open {
        source,
        path: path.to_owned(),
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader
        .headers()
        .map_err(|source| CsvIngestError::Read {
            source,
            path: path.to_owned(),
        })?
        .clone();
    let columns = ColumnIndices::resolve(&headers, path)?;

    let mut restaurants = Vec::new();
    let mut skipped = 0_usize;
    let mut row_number: u64 = 0;
    for row in reader.records() {
        let record = row.map_err(|source| CsvIngestError::Read {
            source,
            path: path.to_owned(),
        })?;
        row_number += 1;
        match parse_row(&record, &columns, row_number) {
            Ok(restaurant) => restaurants.push(restaurant),
            Err(reason) => {
                skipped += 1;
                // The header occupies line one of the file.
                warn!("Skipped CSV row {}: {reason}", row_number + 1);
            }
        }
    }

    Ok(CsvIngestReport {
        restaurants,
        skipped,
    })
}

/// Write a restaurant catalogue to a CSV file using the canonical column
/// layout.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use tiffin_data::write_csv;
///
/// # fn main() -> Result<(), tiffin_data::CsvWriteError> {
/// write_csv(Utf8Path::new("catalogue.csv"), &[])?;
/// # Ok(())
/// # }
/// ```
pub fn write_csv(path: &Utf8Path, restaurants: &[Restaurant]) -> Result<(), CsvWriteError> {
    let file = fs::create_utf8_file(path).map_err(|source| CsvWriteError::Create {
        source,
        path: path.to_owned(),
    })?;
    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record([
            COLUMN_ID,
            COLUMN_NAME,
            COLUMN_CITY,
            COLUMN_CUISINE,
            COLUMN_RATING,
            COLUMN_COST,
            COLUMN_ADDRESS,
        ])
        .map_err(|source| CsvWriteError::Write {
            source,
            path: path.to_owned(),
        })?;

    for restaurant in restaurants {
        let cuisines = restaurant
            .cuisines
            .iter()
            .map(|cuisine| cuisine.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let rating = restaurant
            .rating
            .map(|value| value.to_string())
            .unwrap_or_default();
        let cost = restaurant
            .cost
            .map(|value| value.to_string())
            .unwrap_or_default();
        let address = restaurant.address.clone().unwrap_or_default();
        writer
            .write_record([
                restaurant.id.to_string().as_str(),
                restaurant.name.as_str(),
                restaurant.city.as_str(),
                cuisines.as_str(),
                rating.as_str(),
                cost.as_str(),
                address.as_str(),
            ])
            .map_err(|source| CsvWriteError::Write {
                source,
                path: path.to_owned(),
            })?;
    }

    writer.flush().map_err(|source| CsvWriteError::Flush {
        source,
        path: path.to_owned(),
    })
}

struct ColumnIndices {
    id: Option<usize>,
    name: usize,
    city: usize,
    cuisine: usize,
    rating: Option<usize>,
    cost: Option<usize>,
    address: Option<usize>,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, path: &Utf8Path) -> Result<Self, CsvIngestError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(column))
        };
        let require = |column: &'static str| {
            find(column).ok_or_else(|| CsvIngestError::MissingColumn {
                column,
                path: path.to_owned(),
            })
        };
        Ok(Self {
            id: find(COLUMN_ID),
            name: require(COLUMN_NAME)?,
            city: require(COLUMN_CITY)?,
            cuisine: require(COLUMN_CUISINE)?,
            rating: find(COLUMN_RATING),
            cost: find(COLUMN_COST),
            address: find(COLUMN_ADDRESS),
        })
    }
}

fn parse_row(
    record: &StringRecord,
    columns: &ColumnIndices,
    fallback_id: u64,
) -> Result<Restaurant, String> {
    let id = match columns.id.map(|index| cell(record, index)) {
        Some(raw) if !raw.is_empty() => raw
            .parse::<u64>()
            .map_err(|_| format!("invalid id '{raw}'"))?,
        _ => fallback_id,
    };
    let city: City = cell(record, columns.city).parse()?;
    let cuisines = parse_cuisines(cell(record, columns.cuisine))?;
    let name = cell(record, columns.name);

    let mut restaurant =
        Restaurant::new(id, name, city, cuisines).map_err(|err| err.to_string())?;

    if let Some(index) = columns.rating {
        let raw = cell(record, index);
        if !raw.is_empty() {
            let value: f32 = raw
                .parse()
                .map_err(|_| format!("invalid rating '{raw}'"))?;
            restaurant = restaurant
                .try_with_rating(value)
                .map_err(|err| err.to_string())?;
        }
    }
    if let Some(index) = columns.cost {
        let raw = cell(record, index);
        if !raw.is_empty() {
            restaurant = restaurant
                .try_with_cost(parse_cost(raw)?)
                .map_err(|err| err.to_string())?;
        }
    }
    if let Some(index) = columns.address {
        let raw = cell(record, index);
        if !raw.is_empty() {
            restaurant = restaurant.with_address(raw);
        }
    }

    Ok(restaurant)
}

fn cell<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("").trim()
}

fn parse_cuisines(raw: &str) -> Result<Vec<Cuisine>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<Cuisine>())
        .collect()
}

/// Parse a cost cell, accepting whole rupees or a decimal export that
/// rounds to whole rupees.
fn parse_cost(raw: &str) -> Result<u16, String> {
    if let Ok(value) = raw.parse::<u16>() {
        return Ok(value);
    }
    let value: f32 = raw.parse().map_err(|_| format!("invalid cost '{raw}'"))?;
    if !value.is_finite() || value < 0.0 || value > f32::from(u16::MAX) {
        return Err(format!("invalid cost '{raw}'"));
    }
    Ok(value.round() as u16)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tempfile::TempDir;
    use tiffin_core::test_support::sample_catalogue;

    use super::*;

    fn write_fixture(dir: &TempDir, contents: &str) -> Utf8PathBuf {
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("catalogue.csv")).expect("utf8 path");
        std::fs::write(path.as_std_path(), contents).expect("write fixture");
        path
    }

    #[rstest]
    fn loads_valid_rows() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_fixture(
            &temp,
            "id,name,city,cuisine,rating,cost,address\n\
             7,Spice Route,Bengaluru,\"Biryani, Chinese\",4.5,450,Indiranagar\n\
             8,Dosa Palace,chennai,south indian,,,\n",
        );

        let report = ingest_csv_report(&path).expect("ingest fixture");
        assert_eq!(report.skipped, 0);
        assert_eq!(report.restaurants.len(), 2);

        let first = report.restaurants.first().expect("first row");
        assert_eq!(first.id, 7);
        assert_eq!(first.name, "Spice Route");
        assert_eq!(first.city, City::Bangalore);
        assert_eq!(first.cuisines, vec![Cuisine::Biryani, Cuisine::Chinese]);
        assert_eq!(first.rating, Some(4.5));
        assert_eq!(first.cost, Some(450));
        assert_eq!(first.address.as_deref(), Some("Indiranagar"));

        let second = report.restaurants.get(1).expect("second row");
        assert_eq!(second.city, City::Chennai);
        assert_eq!(second.rating, None);
        assert_eq!(second.cost, None);
        assert_eq!(second.address, None);
    }

    #[rstest]
    fn skips_rows_that_fail_validation() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_fixture(
            &temp,
            "name,city,cuisine,rating,cost\n\
             Good House,delhi,north indian,4.2,550\n\
             Lost House,atlantis,biryani,4.0,350\n\
             Odd House,mumbai,chinese,nine,350\n\
             Free House,mumbai,chinese,4.0,0\n",
        );

        let report = ingest_csv_report(&path).expect("ingest fixture");
        assert_eq!(report.skipped, 3);
        assert_eq!(report.restaurants.len(), 1);
        let survivor = report.restaurants.first().expect("surviving row");
        assert_eq!(survivor.name, "Good House");
    }

    #[rstest]
    fn numbers_rows_without_an_id_column() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_fixture(
            &temp,
            "name,city,cuisine\n\
             First,mumbai,chinese\n\
             Second,delhi,biryani\n",
        );

        let restaurants = ingest_csv(&path).expect("ingest fixture");
        let ids: Vec<u64> = restaurants.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    #[case("id,name,cuisine\nx,y,z\n", "city")]
    #[case("id,city,cuisine\nx,y,z\n", "name")]
    #[case("name,city\nx,y\n", "cuisine")]
    fn rejects_missing_required_columns(#[case] contents: &str, #[case] expected: &str) {
        let temp = TempDir::new().expect("tempdir");
        let path = write_fixture(&temp, contents);

        let err = ingest_csv(&path).expect_err("expected missing column error");
        match err {
            CsvIngestError::MissingColumn { column, .. } => assert_eq!(column, expected),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[rstest]
    fn propagates_open_errors() {
        let temp = TempDir::new().expect("tempdir");
        let missing =
            Utf8PathBuf::from_path_buf(temp.path().join("absent.csv")).expect("utf8 path");

        let err = ingest_csv(&missing).expect_err("expected failure for missing file");
        match err {
            CsvIngestError::Open { path, .. } => assert_eq!(path, missing),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[rstest]
    fn written_catalogues_read_back_identically() {
        let temp = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(temp.path().join("out/catalogue.csv"))
            .expect("utf8 path");
        let catalogue = sample_catalogue();

        write_csv(&path, catalogue.restaurants()).expect("write catalogue");
        let reloaded = ingest_csv(&path).expect("reload catalogue");

        assert_eq!(reloaded, catalogue.restaurants());
    }

    #[rstest]
    #[case("450", Some(450))]
    #[case("450.0", Some(450))]
    #[case("449.6", Some(450))]
    #[case("free", None)]
    fn parses_cost_cells(#[case] raw: &str, #[case] expected: Option<u16>) {
        assert_eq!(parse_cost(raw).ok(), expected);
    }
}
