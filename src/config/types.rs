use std::time::Duration;

use serde::Deserialize;

use crate::args::{HarnessKind, OutputFormat, Protocol};
use crate::error::ValidationError;

/// File-level settings. Every key is optional; unset keys keep the CLI value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "url")]
    pub host: Option<String>,
    pub port: Option<u16>,
    pub protocol: Option<Protocol>,
    #[serde(alias = "file")]
    pub template: Option<String>,
    pub concurrency: Option<usize>,
    pub invocations: Option<usize>,
    pub warmup: Option<usize>,
    pub delay_us: Option<u64>,
    #[serde(alias = "logging")]
    pub log_file: Option<String>,
    pub verbose: Option<bool>,
    pub multi_client: Option<bool>,
    pub harness: Option<HarnessKind>,
    pub harness_interval: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub pool_size: Option<usize>,
    pub seed: Option<u64>,
    pub strict_status: Option<bool>,
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => crate::args::parsers::parse_duration_value(text),
        }
    }
}
