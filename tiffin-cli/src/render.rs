//! Plain-text and JSON rendering for ranked recommendations.

use std::io::Write;

use serde::Serialize;
use tiffin_core::{Recommendation, Restaurant};

use crate::CliError;

/// Number of leading results rendered as card blocks.
const CARD_LIMIT: usize = 6;

/// Machine-readable result of one ranking invocation.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RankingReport<'a> {
    /// Rows in the loaded catalogue.
    pub(crate) loaded: usize,
    /// Rows passing the active filter.
    pub(crate) matched: usize,
    /// Whether the rating and cost bounds were dropped to find matches.
    pub(crate) relaxed: bool,
    /// Ranked results, best first.
    pub(crate) recommendations: &'a [Recommendation],
}

/// Write the report as pretty-printed JSON.
pub(crate) fn write_json(
    writer: &mut dyn Write,
    report: &RankingReport<'_>,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Write the standard signal for an empty candidate set.
pub(crate) fn write_no_matches(writer: &mut dyn Write) -> Result<(), CliError> {
    writeln!(writer, "No restaurants match the selected filters.").map_err(CliError::WriteOutput)
}

/// Write the human-readable report: summary, table, cards, and metrics.
pub(crate) fn write_text(
    writer: &mut dyn Write,
    candidates: &[Restaurant],
    report: &RankingReport<'_>,
) -> Result<(), CliError> {
    write_summary(writer, report)?;
    write_table(writer, report.recommendations)?;
    write_cards(writer, report.recommendations)?;
    write_metrics(writer, candidates, report.recommendations)
}

fn write_summary(writer: &mut dyn Write, report: &RankingReport<'_>) -> Result<(), CliError> {
    let mut line = format!(
        "Loaded {} restaurants; {} match the active filters",
        report.loaded, report.matched
    );
    if report.relaxed {
        line.push_str(" (rating and cost bounds relaxed)");
    }
    writeln!(writer, "{line}.").map_err(CliError::WriteOutput)?;
    writeln!(writer).map_err(CliError::WriteOutput)
}

fn write_table(writer: &mut dyn Write, recommendations: &[Recommendation]) -> Result<(), CliError> {
    let cuisine_labels: Vec<String> = recommendations
        .iter()
        .map(|entry| cuisine_list(&entry.restaurant))
        .collect();
    let name_width = column_width(
        "Name",
        recommendations
            .iter()
            .map(|entry| entry.restaurant.name.as_str()),
    );
    let cuisine_width = column_width("Cuisines", cuisine_labels.iter().map(String::as_str));

    writeln!(
        writer,
        "{:>3}  {:<name_width$}  {:<9}  {:<cuisine_width$}  {:>6}  {:>5}  {:>6}",
        "#", "Name", "City", "Cuisines", "Rating", "Cost", "Score"
    )
    .map_err(CliError::WriteOutput)?;

    for (position, (entry, cuisines)) in recommendations.iter().zip(&cuisine_labels).enumerate() {
        let restaurant = &entry.restaurant;
        writeln!(
            writer,
            "{:>3}  {:<name_width$}  {:<9}  {:<cuisine_width$}  {:>6}  {:>5}  {:>6.3}",
            position + 1,
            restaurant.name,
            restaurant.city,
            cuisines,
            format_rating(restaurant.rating),
            format_cost(restaurant.cost),
            entry.score,
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn write_cards(writer: &mut dyn Write, recommendations: &[Recommendation]) -> Result<(), CliError> {
    writeln!(writer).map_err(CliError::WriteOutput)?;
    for (position, entry) in recommendations.iter().take(CARD_LIMIT).enumerate() {
        let restaurant = &entry.restaurant;
        writeln!(writer, "#{} {}", position + 1, restaurant.name).map_err(CliError::WriteOutput)?;
        match &restaurant.address {
            Some(address) => writeln!(writer, "   {address}, {}", restaurant.city),
            None => writeln!(writer, "   {}", restaurant.city),
        }
        .map_err(CliError::WriteOutput)?;
        writeln!(
            writer,
            "   {} | rating {} | cost {} | score {:.3}",
            cuisine_list(restaurant),
            format_rating(restaurant.rating),
            format_cost(restaurant.cost),
            entry.score,
        )
        .map_err(CliError::WriteOutput)?;
        writeln!(writer).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn write_metrics(
    writer: &mut dyn Write,
    candidates: &[Restaurant],
    recommendations: &[Recommendation],
) -> Result<(), CliError> {
    let average = average_rating(candidates)
        .map_or_else(|| "-".to_owned(), |value| format!("{value:.2}"));
    let best = recommendations
        .first()
        .map_or_else(|| "-".to_owned(), |entry| format!("{:.3}", entry.score));
    writeln!(
        writer,
        "{} matches | average rating {average} | best score {best}",
        candidates.len()
    )
    .map_err(CliError::WriteOutput)
}

/// Mean rating over the candidates that have one, `None` when none do.
fn average_rating(candidates: &[Restaurant]) -> Option<f64> {
    let rated: Vec<f64> = candidates
        .iter()
        .filter_map(|restaurant| restaurant.rating.map(f64::from))
        .collect();
    if rated.is_empty() {
        return None;
    }
    let total: f64 = rated.iter().sum();
    Some(total / rated.len() as f64)
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

fn cuisine_list(restaurant: &Restaurant) -> String {
    restaurant
        .cuisines
        .iter()
        .map(|cuisine| cuisine.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_rating(rating: Option<f32>) -> String {
    rating.map_or_else(|| "-".to_owned(), |value| format!("{value:.1}"))
}

fn format_cost(cost: Option<u16>) -> String {
    cost.map_or_else(|| "-".to_owned(), |value| value.to_string())
}
