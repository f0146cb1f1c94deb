use chrono::NaiveDate;

use crate::view::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub struct ImportConfig {
    delimiter: u8,
    page_size: usize,
    today: Option<NaiveDate>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            page_size: DEFAULT_PAGE_SIZE,
            today: None,
        }
    }
}

impl ImportConfig {
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Date the future-date rule compares against, defaulting to the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

pub struct ImportConfigBuilder {
    delimiter: u8,
    page_size: usize,
    today: Option<NaiveDate>,
}

impl Default for ImportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportConfigBuilder {
    /// Create a new [`ImportConfigBuilder`]
    pub fn new() -> Self {
        let config = ImportConfig::default();
        Self {
            delimiter: config.delimiter,
            page_size: config.page_size,
            today: config.today,
        }
    }

    /// Build an [`ImportConfig`]
    pub fn build(self) -> ImportConfig {
        ImportConfig {
            delimiter: self.delimiter,
            page_size: self.page_size,
            today: self.today,
        }
    }

    pub fn with_delimiter(self, delimiter: u8) -> Self {
        Self { delimiter, ..self }
    }

    /// Page sizes below 1 are raised to 1
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..self
        }
    }

    /// Pin the validation date instead of reading the clock
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self {
            today: Some(today),
            ..self
        }
    }
}
