// Delimited time-series decoding for the atmos feed
use crate::domain::sample::Sample;

const TIME_COLUMN: &str = "dt_time";
const PM25_COLUMN: &str = "pm2.5cnc";
const PM10_COLUMN: &str = "pm10cnc";

/// Decodes the feed's comma-delimited table into samples, one per data row,
/// preserving row order.
///
/// Never fails: fewer than two non-blank lines yields an empty vec. Columns
/// are located by header name, so column order in the source is irrelevant.
/// A named column missing from the header yields the field default (0 for
/// numerics, "Unknown" for the time field). The feed marks gaps with a
/// literal "NaN" token; that and any other non-numeric cell coerce to 0
/// rather than propagating a non-numeric marker downstream.
pub fn parse(text: &str) -> Vec<Sample> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<&str> = lines[0].split(',').map(str::trim).collect();
    let time_idx = headers.iter().position(|h| *h == TIME_COLUMN);
    let pm25_idx = headers.iter().position(|h| *h == PM25_COLUMN);
    let pm10_idx = headers.iter().position(|h| *h == PM10_COLUMN);

    lines[1..]
        .iter()
        .map(|line| {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            Sample::new(
                text_cell(&cells, time_idx),
                numeric_cell(&cells, pm25_idx),
                numeric_cell(&cells, pm10_idx),
            )
        })
        .collect()
}

fn text_cell(cells: &[&str], idx: Option<usize>) -> String {
    match idx.and_then(|i| cells.get(i)).filter(|c| !c.is_empty()) {
        Some(cell) => (*cell).to_string(),
        None => "Unknown".to_string(),
    }
}

fn numeric_cell(cells: &[&str], idx: Option<usize>) -> f64 {
    idx.and_then(|i| cells.get(i))
        .and_then(|cell| cell.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
