//! Load, filter and save, as one call per tool.

use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::config::RunConfig;
use crate::country::CountryCode;
use crate::errors::Result;
use crate::feed;
use crate::filter::{filter_basic, filter_records, FilterMode};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub country: CountryCode,
    /// `None` for the basic tool, which only ever looks at `ip_whois.country`.
    pub mode: Option<FilterMode>,
    pub total: usize,
    pub matched: usize,
    pub output: PathBuf,
}

impl Summary {
    pub fn ignored(&self) -> usize {
        self.total - self.matched
    }
}

/// Advanced run: an empty feed is an error, output name defaults to
/// `feeds/<input-stem>_<mode>_<timestamp>.json`.
pub fn run_advanced<Tz>(cfg: &RunConfig, now: &DateTime<Tz>) -> Result<Summary>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let records = feed::load_records(&cfg.input)?;
    feed::require_records(&records, &cfg.input)?;

    let output = cfg
        .output
        .clone()
        .unwrap_or_else(|| feed::advanced_output_path(&cfg.input, cfg.mode, now));

    let matched = filter_records(&records, cfg.country.as_str(), cfg.mode);
    feed::save_records(&output, &matched)?;

    info!(
        country = %cfg.country,
        mode = %cfg.mode,
        total = records.len(),
        matched = matched.len(),
        output = %output.display(),
        "filtered feed"
    );
    Ok(Summary {
        country: cfg.country,
        mode: Some(cfg.mode),
        total: records.len(),
        matched: matched.len(),
        output,
    })
}

/// Basic run: `ip_whois.country` only, an empty feed gives an empty result.
pub fn run_basic<Tz>(cfg: &RunConfig, now: &DateTime<Tz>) -> Result<Summary>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let records = feed::load_records(&cfg.input)?;
    let output = cfg
        .output
        .clone()
        .unwrap_or_else(|| feed::basic_output_path(&cfg.output_dir, cfg.country, now));

    let matched = filter_basic(&records, cfg.country.as_str());
    feed::save_records(&output, &matched)?;

    info!(
        country = %cfg.country,
        total = records.len(),
        matched = matched.len(),
        output = %output.display(),
        "filtered feed"
    );
    Ok(Summary {
        country: cfg.country,
        mode: None,
        total: records.len(),
        matched: matched.len(),
        output,
    })
}
