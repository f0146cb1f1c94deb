use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use payguard_core::{ImportConfig, ImportConfigBuilder};
use serde::Deserialize;

use crate::errors::ConfigError;

/// Optional `payguard.toml`. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub import: ImportSection,
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportSection {
    pub delimiter: Option<String>,
    pub page_size: Option<usize>,
    /// Pins the date used by the "not in the future" rule
    pub today: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub dir: Option<String>,
}

pub fn parse_config(path: Option<&str>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let path = Path::new(path);
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

impl Config {
    pub fn import_config(&self) -> Result<ImportConfig, ConfigError> {
        let mut builder = ImportConfigBuilder::new();

        if let Some(value) = &self.import.delimiter {
            let delimiter = match value.as_bytes() {
                [b] if b.is_ascii() => *b,
                _ if value == "\\t" => b'\t',
                _ => {
                    return Err(ConfigError::InvalidDelimiter {
                        value: value.clone(),
                    })
                }
            };
            builder = builder.with_delimiter(delimiter);
        }

        if let Some(page_size) = self.import.page_size {
            if page_size == 0 {
                return Err(ConfigError::InvalidPageSize);
            }
            builder = builder.with_page_size(page_size);
        }

        if let Some(value) = &self.import.today {
            let today = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                ConfigError::InvalidToday {
                    value: value.clone(),
                }
            })?;
            builder = builder.with_today(today);
        }

        Ok(builder.build())
    }
}
