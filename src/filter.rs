use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which record field(s) take part in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// `ip_geo`, the geographic location.
    Geo,
    /// `ip_whois.country`, the administrative registration.
    Admin,
    /// Either of the two.
    #[default]
    Combined,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::Geo, FilterMode::Admin, FilterMode::Combined];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Geo => "geo",
            FilterMode::Admin => "admin",
            FilterMode::Combined => "combined",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown filter mode '{s}', expected one of: {}",
                    FilterMode::ALL.iter().join(", ")
                )
            })
    }
}

// Field lookup in the style of a `@.a.b` path: anything that is not a string is treated as absent.
fn str_field<'a>(record: &'a Value, path: &[&str]) -> &'a str {
    let mut node = record;
    for key in path {
        node = match node {
            Value::Object(m) => match m.get(*key) {
                Some(v) => v,
                None => return "",
            },
            _ => return "",
        };
    }
    node.as_str().unwrap_or("")
}

/// `ip_geo` compared in lowercase.
pub fn matches_geo(record: &Value, country: &str) -> bool {
    str_field(record, &["ip_geo"]).to_lowercase() == country.to_lowercase()
}

/// `ip_whois.country` compared in uppercase.
pub fn matches_admin(record: &Value, country: &str) -> bool {
    str_field(record, &["ip_whois", "country"]).to_uppercase() == country.to_uppercase()
}

fn select<F>(records: &[Value], pred: F) -> Vec<Value>
where
    F: Fn(&Value) -> bool,
{
    records.iter().filter(|r| pred(r)).cloned().collect()
}

/// Records whose geographic location is `country`.
pub fn filter_geo(records: &[Value], country: &str) -> Vec<Value> {
    select(records, |r| matches_geo(r, country))
}

/// Records whose whois registration country is `country`.
pub fn filter_admin(records: &[Value], country: &str) -> Vec<Value> {
    select(records, |r| matches_admin(r, country))
}

/// Records matching either field. A record matching both is kept once.
pub fn filter_combined(records: &[Value], country: &str) -> Vec<Value> {
    select(records, |r| matches_geo(r, country) || matches_admin(r, country))
}

/// Single-field filter used by the basic tool.
pub fn filter_basic(records: &[Value], country: &str) -> Vec<Value> {
    filter_admin(records, country)
}

pub fn filter_records(records: &[Value], country: &str, mode: FilterMode) -> Vec<Value> {
    match mode {
        FilterMode::Geo => filter_geo(records, country),
        FilterMode::Admin => filter_admin(records, country),
        FilterMode::Combined => filter_combined(records, country),
    }
}
