use std::path::PathBuf;

use crate::country::CountryCode;
use crate::filter::FilterMode;

pub const DEFAULT_INPUT: &str = "./feeds/IP_Reputation_Data_Feed.json";
pub const DEFAULT_OUTPUT_DIR: &str = "feeds";

/// Options for one filtering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub country: CountryCode,
    pub mode: FilterMode,
    pub input: PathBuf,
    /// Generated from the input name when unset.
    pub output: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl RunConfig {
    pub fn new(country: CountryCode) -> Self {
        Self {
            country,
            mode: FilterMode::default(),
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
