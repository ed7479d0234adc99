//! Heuristic sniffing of delimited text files.
//!
//! Given a path, the sniffer guesses the line terminator, the quote
//! character, the field delimiter (one of `,`, tab, `;`, `|`) and whether
//! the first row is a header. Detection only ever samples the start of a
//! file, so cost does not grow with file size.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let path = Path::new("contacts.csv");
//! let delimiter = csv_sniffer::detect_delimiter(path)?;
//! let has_header = csv_sniffer::has_header(path)?;
//! println!("delimiter {:?}, header {}", delimiter, has_header);
//! # Ok::<(), csv_sniffer::SnifferError>(())
//! ```

pub mod config;
pub mod detect;
pub mod dialect;
pub mod error;
pub mod sniffer;
pub mod source;

pub use config::SnifferConfig;
pub use dialect::{Delimiter, Dialect, LineTerminator, QuoteChar};
pub use error::{Result, SnifferError};
pub use sniffer::Sniffer;
pub use source::Rows;

use std::path::Path;

pub fn detect_endline(path: &Path) -> Result<LineTerminator> {
    Sniffer::default().detect_endline(path)
}

pub fn is_quote_enclosed(path: &Path) -> Result<bool> {
    Sniffer::default().is_quote_enclosed(path)
}

pub fn get_quote_char(path: &Path) -> Result<Option<QuoteChar>> {
    Sniffer::default().quote_char(path)
}

pub fn detect_delimiter(path: &Path) -> Result<Delimiter> {
    Sniffer::default().detect_delimiter(path)
}

pub fn has_header(path: &Path) -> Result<bool> {
    Sniffer::default().has_header(path)
}

pub fn first_line(path: &Path, cleaned: bool) -> Result<Option<String>> {
    Sniffer::default().first_line(path, cleaned)
}

pub fn first_row(path: &Path) -> Result<Vec<String>> {
    Sniffer::default().first_row(path)
}

pub fn rows(path: &Path) -> Result<Rows> {
    Sniffer::default().rows(path)
}

pub fn sniff(path: &Path) -> Result<Dialect> {
    Sniffer::default().sniff(path)
}
