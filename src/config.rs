// In: src/config.rs

//! Runtime configuration for the deltapack library.
//!
//! The pack format itself has no knobs: block length and compaction threshold
//! are fixed constants in [`crate::format`], because changing them would change
//! what a pack's length means. What can be configured is how the stream helpers
//! behave and how the library logs. `CodecConfig` is created once at the
//! application boundary (e.g. from a JSON document) and shared read-only via
//! `Arc<CodecConfig>`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Once;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::DeltaPackError;

//==================================================================================
// I. Logging Configuration
//==================================================================================

/// Where and how verbosely the library logs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace` (case-insensitive).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Append log records to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// Parses `level` into a `log` filter.
    pub fn level_filter(&self) -> Result<LevelFilter, DeltaPackError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| DeltaPackError::Config(format!("unknown log level {:?}", self.level)))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

//==================================================================================
// II. The Unified CodecConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    /// If true, `StreamEncoder` decodes every pack right after encoding it and
    /// fails if the block does not come back unchanged.
    #[serde(default)]
    pub verify_round_trip: bool,

    /// If true, `StreamEncoder` emits a `debug` record per block with the
    /// selected kernel and word count.
    #[serde(default)]
    pub log_block_stats: bool,

    /// If set, the stream helpers install a global logger on first use.
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl CodecConfig {
    /// Loads a configuration from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DeltaPackError> {
        Ok(serde_json::from_str(json)?)
    }
}

//==================================================================================
// III. Logger Installation
//==================================================================================

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend for the `log` facade.
///
/// Only the first successful call in a process has an effect; later calls
/// still validate their configuration but leave the installed logger alone.
pub fn init_logging(config: &LoggingConfig) -> Result<(), DeltaPackError> {
    let level = config.level_filter()?;
    let file = match &config.log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
