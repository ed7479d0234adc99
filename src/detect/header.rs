use super::delimiter::DelimiterDetector;
use super::endline::EndlineDetector;
use super::quote::QuoteDetector;
use crate::config::SnifferConfig;
use crate::error::Result;
use crate::source::Rows;
use log::{debug, trace};
use std::path::Path;

/// Shape of the values seen in one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    /// Character length of the trimmed value.
    StringLength(usize),
    /// Rows disagreed; the column no longer votes.
    Unknown,
}

impl ColumnType {
    /// Classify a single cell. Never returns `Unknown`.
    pub fn infer(cell: &str) -> Self {
        let value = cell.trim();
        if is_integer(value) {
            ColumnType::Integer
        } else if is_float(value) {
            ColumnType::Float
        } else {
            ColumnType::StringLength(value.chars().count())
        }
    }
}

// A value counts as a number only when formatting it back gives the same text,
// so "007", "+5", "-0" and "1e3" stay strings.
fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == value.len(),
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

// Exponent forms never format back to their input in canonical notation.
fn is_float(value: &str) -> bool {
    if value.contains(['e', 'E']) {
        return false;
    }
    value
        .parse::<f64>()
        .map(|f| f.is_finite() && format!("{:?}", f) == value)
        .unwrap_or(false)
}

/// Per-column types collected from the data rows under a presumed header.
///
/// Each column moves from empty to a concrete type on its first
/// observation and to `Unknown` on its first conflicting one. `Unknown` is
/// final.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTypeProfile {
    columns: Vec<Option<ColumnType>>,
}

impl ColumnTypeProfile {
    pub fn new(width: usize) -> Self {
        Self {
            columns: vec![None; width],
        }
    }

    pub fn get(&self, column: usize) -> Option<ColumnType> {
        self.columns.get(column).copied().flatten()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Fold one data row into the profile. Cells beyond the profile width
    /// are ignored; columns the row lacks are left untouched.
    pub fn observe<S: AsRef<str>>(&mut self, row: &[S]) {
        for (slot, cell) in self.columns.iter_mut().zip(row) {
            let seen = ColumnType::infer(cell.as_ref());
            *slot = match *slot {
                None => Some(seen),
                Some(ColumnType::Unknown) => Some(ColumnType::Unknown),
                Some(current) if current == seen => Some(current),
                Some(_) => Some(ColumnType::Unknown),
            };
        }
    }

    /// Sum of per-column votes for `header` being a header row.
    ///
    /// A column votes +1 when the header cell does not fit the column's
    /// type and -1 when it does. Empty and `Unknown` columns abstain.
    pub fn vote<S: AsRef<str>>(&self, header: &[S]) -> i64 {
        self.columns
            .iter()
            .zip(header)
            .map(|(column, cell)| {
                let value = cell.as_ref().trim();
                let fits = match column {
                    None | Some(ColumnType::Unknown) => return 0,
                    Some(ColumnType::StringLength(len)) => value.chars().count() == *len,
                    Some(ColumnType::Integer) => is_integer(value),
                    Some(ColumnType::Float) => is_float(value),
                };
                if fits {
                    -1
                } else {
                    1
                }
            })
            .sum()
    }
}

pub struct HeaderDetector;

impl HeaderDetector {
    /// Decide whether the first row of `path` is a header.
    ///
    /// The rows after it (at most `sample_lines`) build a column type
    /// profile; the first row is a header when it disagrees with that
    /// profile in more columns than it agrees.
    pub fn detect(path: &Path, config: &SnifferConfig) -> Result<bool> {
        let delimiter = DelimiterDetector::detect(path, config)?;
        let terminator = EndlineDetector::detect(path, config)?;
        let quote = QuoteDetector::quote_char(path)?;

        let mut rows = Rows::open(path, delimiter, terminator, quote)?;
        let header = match rows.next() {
            Some(row) => row?,
            None => {
                debug!("{}: no rows, no header", path.display());
                return Ok(false);
            }
        };

        let mut profile = ColumnTypeProfile::new(header.len());
        for row in rows.take(config.sample_lines) {
            profile.observe(&row?);
        }
        trace!("{}: column profile {:?}", path.display(), profile);

        let votes = profile.vote(&header);
        debug!("{}: header vote total {}", path.display(), votes);
        Ok(votes > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_cell_types() {
        assert_eq!(ColumnType::infer("42"), ColumnType::Integer);
        assert_eq!(ColumnType::infer(" -7 "), ColumnType::Integer);
        assert_eq!(ColumnType::infer("3.25"), ColumnType::Float);
        assert_eq!(ColumnType::infer("1.0"), ColumnType::Float);
        assert_eq!(ColumnType::infer("007"), ColumnType::StringLength(3));
        assert_eq!(ColumnType::infer("+5"), ColumnType::StringLength(2));
        assert_eq!(ColumnType::infer("inf"), ColumnType::StringLength(3));
        assert_eq!(ColumnType::infer("0"), ColumnType::Integer);
        assert_eq!(ColumnType::infer("-0"), ColumnType::StringLength(2));
        assert_eq!(ColumnType::infer("-"), ColumnType::StringLength(1));
        assert_eq!(ColumnType::infer("12345678901234567890"), ColumnType::Integer);
        assert_eq!(ColumnType::infer("-98765432109876543210"), ColumnType::Integer);
        assert_eq!(ColumnType::infer("1e-7"), ColumnType::StringLength(4));
        assert_eq!(ColumnType::infer("1e16"), ColumnType::StringLength(4));
        assert_eq!(ColumnType::infer("2.5E3"), ColumnType::StringLength(5));
        assert_eq!(ColumnType::infer("555-123-4567"), ColumnType::StringLength(12));
        assert_eq!(ColumnType::infer("  Jane  "), ColumnType::StringLength(4));
    }

    #[test]
    fn conflict_collapses_to_unknown_for_good() {
        let mut profile = ColumnTypeProfile::new(1);
        assert_eq!(profile.get(0), None);

        profile.observe(&["1"]);
        assert_eq!(profile.get(0), Some(ColumnType::Integer));

        profile.observe(&["abc"]);
        assert_eq!(profile.get(0), Some(ColumnType::Unknown));

        profile.observe(&["1"]);
        profile.observe(&["1"]);
        assert_eq!(profile.get(0), Some(ColumnType::Unknown));
    }

    #[test]
    fn short_rows_leave_missing_columns_untouched() {
        let mut profile = ColumnTypeProfile::new(3);
        profile.observe(&["a", "1"]);
        profile.observe(&["b", "2", "x", "extra"]);
        assert_eq!(profile.get(0), Some(ColumnType::StringLength(1)));
        assert_eq!(profile.get(1), Some(ColumnType::Integer));
        assert_eq!(profile.get(2), Some(ColumnType::StringLength(1)));
        assert_eq!(profile.width(), 3);
    }

    #[test]
    fn votes_follow_type_contrast() {
        let mut profile = ColumnTypeProfile::new(4);
        profile.observe(&["1", "1.5", "abc", "x"]);
        profile.observe(&["2", "2.5", "def", "yy"]);

        // Integer column vs text header: +1. Float column vs float: -1.
        // Length 3 vs "xyz": -1. Unknown column abstains.
        assert_eq!(profile.vote(&["id", "0.5", "xyz", "anything"]), -1);
        assert_eq!(profile.vote(&["id", "price", "label", "anything"]), 3);
    }

    #[test]
    fn empty_profile_abstains() {
        let profile = ColumnTypeProfile::new(2);
        assert_eq!(profile.vote(&["a", "b"]), 0);
    }
}
