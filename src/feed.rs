//! Reading feeds from disk and writing filtered copies back.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

use crate::country::CountryCode;
use crate::errors::{FilterError, Result};
use crate::filter::FilterMode;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Load a feed: a top-level JSON array of objects. An empty array is fine.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FilterError::NotFound { path: path.to_path_buf() });
    }
    // Raw bytes, so bad UTF-8 is reported by the JSON parser.
    let bytes = fs::read(path).map_err(|e| FilterError::from_io(path, e))?;
    let malformed = |reason: String| FilterError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    let data: Value =
        serde_json::from_slice(&bytes).map_err(|e| malformed(format!("invalid JSON: {e}")))?;
    let records = match data {
        Value::Array(a) => a,
        other => {
            return Err(malformed(format!(
                "expected a list of records, found {}",
                kind(&other)
            )))
        }
    };
    if let Some((i, v)) = records.iter().enumerate().find(|(_, v)| !v.is_object()) {
        return Err(malformed(format!(
            "record {i} is {}, expected an object",
            kind(v)
        )));
    }

    debug!(path = %path.display(), records = records.len(), "loaded feed");
    Ok(records)
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Reject a feed with no records.
pub fn require_records(records: &[Value], path: impl AsRef<Path>) -> Result<()> {
    if records.is_empty() {
        return Err(FilterError::Empty {
            path: path.as_ref().to_path_buf(),
        });
    }
    Ok(())
}

/// Create the parent directories of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            fs::create_dir_all(dir).map_err(|e| FilterError::from_io(dir, e))?;
            debug!(dir = %dir.display(), "created output directory");
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Save records as a JSON array indented by four spaces. Non-ASCII text is written as is.
pub fn save_records(path: impl AsRef<Path>, records: &[Value]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let io_err = |e| FilterError::from_io(path, e);

    let file = fs::File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    records
        .serialize(&mut ser)
        .map_err(|e| io_err(std::io::Error::from(e)))?;
    out.flush().map_err(io_err)?;

    debug!(path = %path.display(), records = records.len(), "saved filtered feed");
    Ok(())
}

/// `feeds/<input-stem>_<mode>_<timestamp>.json`
pub fn advanced_output_path<Tz: TimeZone>(
    input: impl AsRef<Path>,
    mode: FilterMode,
    now: &DateTime<Tz>,
) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    let stem = input
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(crate::config::DEFAULT_OUTPUT_DIR).join(format!(
        "{stem}_{mode}_{}.json",
        now.format(TIMESTAMP_FORMAT)
    ))
}

/// `<dir>/IP_Reputation_filtered_<CODE>_<timestamp>.json`
pub fn basic_output_path<Tz: TimeZone>(
    dir: impl AsRef<Path>,
    country: CountryCode,
    now: &DateTime<Tz>,
) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    dir.as_ref().join(format!(
        "IP_Reputation_filtered_{country}_{}.json",
        now.format(TIMESTAMP_FORMAT)
    ))
}
