//! Price lists stored as files.
//!
//! JSON may be a bare array of slots or a tariff API response with the slots under `results`.
//! TOML must be a `[[results]]` array. Timestamps are RFC 3339 strings.

use std::{ffi::OsStr, fs, path::Path};

use chrono::{DateTime, Local};
use price_optimiser::{
    core::{PriceList, PriceSlot},
    ops::Interval,
    prelude::*,
    quantity::rate::UnitRate,
};
use serde::Deserialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some(extension) if extension.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<PriceList> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read the price list from `{}`", path.display()))?;
    let price_list = parse(&contents, Format::from_path(path))?;
    info!(n_slots = price_list.len(), "loaded the price list");
    for irregularity in price_list.irregularities() {
        warn!(?irregularity, "the price list is irregular");
    }
    Ok(price_list)
}

pub fn parse(contents: &str, format: Format) -> Result<PriceList> {
    let file: PriceFile = match format {
        Format::Json => serde_json::from_str(contents).context("failed to parse the JSON")?,
        Format::Toml => toml::from_str(contents).context("failed to parse the TOML")?,
    };
    let records = match file {
        PriceFile::Response { results } => results,
        PriceFile::Bare(records) => records,
    };
    let slots = records
        .into_iter()
        .filter_map(|record| {
            let Some(valid_to) = record.valid_to else {
                // Open-ended slots are published for fixed tariffs.
                warn!(%record.valid_from, "skipped an open-ended slot");
                return None;
            };
            Some(PriceSlot::new(
                Interval::new(record.valid_from, valid_to),
                record.value_inc_vat,
                record.value_exc_vat,
            ))
        })
        .collect();

    // Tariff APIs tend to list the newest slots first:
    Ok(PriceList::from_unsorted(slots))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceFile {
    Response { results: Vec<PriceRecord> },
    Bare(Vec<PriceRecord>),
}

#[derive(Deserialize)]
struct PriceRecord {
    valid_from: DateTime<Local>,
    valid_to: Option<DateTime<Local>>,
    value_inc_vat: UnitRate,
    value_exc_vat: UnitRate,
}
