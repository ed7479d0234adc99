use crate::config::SnifferConfig;
use crate::detect::{DelimiterDetector, EndlineDetector, HeaderDetector, QuoteDetector};
use crate::dialect::{Delimiter, Dialect, LineTerminator, QuoteChar};
use crate::error::Result;
use crate::source::{self, Rows};
use log::debug;
use std::path::Path;

/// Entry point for all detections.
///
/// Holds no state besides its configuration. Each call reads the file
/// again, so results are never stale but also never shared; use
/// [`Sniffer::sniff`] to get every property from a single call.
#[derive(Debug, Clone, Default)]
pub struct Sniffer {
    config: SnifferConfig,
}

impl Sniffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SnifferConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnifferConfig {
        &self.config
    }

    pub fn detect_endline(&self, path: &Path) -> Result<LineTerminator> {
        EndlineDetector::detect(path, &self.config)
    }

    pub fn is_quote_enclosed(&self, path: &Path) -> Result<bool> {
        QuoteDetector::is_quote_enclosed(path)
    }

    pub fn quote_char(&self, path: &Path) -> Result<Option<QuoteChar>> {
        QuoteDetector::quote_char(path)
    }

    pub fn detect_delimiter(&self, path: &Path) -> Result<Delimiter> {
        DelimiterDetector::detect(path, &self.config)
    }

    pub fn has_header(&self, path: &Path) -> Result<bool> {
        HeaderDetector::detect(path, &self.config)
    }

    pub fn first_line(&self, path: &Path, cleaned: bool) -> Result<Option<String>> {
        source::first_line(path, cleaned)
    }

    /// First parsed row, or an empty row for an empty file.
    pub fn first_row(&self, path: &Path) -> Result<Vec<String>> {
        match self.rows(path)?.next() {
            Some(row) => row,
            None => Ok(Vec::new()),
        }
    }

    /// Rows of `path`, parsed with the detected delimiter, terminator and
    /// quote character. Each call starts a fresh scan.
    pub fn rows(&self, path: &Path) -> Result<Rows> {
        let delimiter = self.detect_delimiter(path)?;
        let terminator = self.detect_endline(path)?;
        let quote = self.quote_char(path)?;
        Rows::open(path, delimiter, terminator, quote)
    }

    pub fn sniff(&self, path: &Path) -> Result<Dialect> {
        let dialect = Dialect {
            line_terminator: self.detect_endline(path)?,
            quote_char: self.quote_char(path)?,
            delimiter: self.detect_delimiter(path)?,
            has_header: self.has_header(path)?,
        };
        debug!("{}: sniffed {:?}", path.display(), dialect);
        Ok(dialect)
    }
}
