use crate::config::SnifferConfig;
use crate::dialect::LineTerminator;
use crate::error::Result;
use crate::source::first_raw_line;
use log::debug;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::path::Path;

static TERMINATOR_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\r\n]+").unwrap()
});

pub struct EndlineDetector;

impl EndlineDetector {
    /// Detect the line terminator from the first line of `path`.
    ///
    /// Only the first `endline_byte_cap` bytes are looked at. Files with no
    /// terminator in that window (including empty files) get
    /// `default_line_terminator`.
    pub fn detect(path: &Path, config: &SnifferConfig) -> Result<LineTerminator> {
        let line = match first_raw_line(path, config.endline_byte_cap)? {
            Some(line) => line,
            None => {
                debug!("{}: empty file, using default terminator", path.display());
                return Ok(config.default_line_terminator);
            }
        };

        let detected = TERMINATOR_RUN_REGEX
            .find(&line)
            .and_then(|run| LineTerminator::from_run(run.as_bytes()));

        match detected {
            Some(terminator) => Ok(terminator),
            None => {
                debug!(
                    "{}: no terminator in first {} bytes, using default",
                    path.display(),
                    config.endline_byte_cap
                );
                Ok(config.default_line_terminator)
            }
        }
    }
}
