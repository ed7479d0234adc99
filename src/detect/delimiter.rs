use super::frequency::{FrequencyCounter, FrequencyVector};
use super::quote::QuoteDetector;
use crate::config::SnifferConfig;
use crate::dialect::{Delimiter, QuoteChar};
use crate::error::Result;
use crate::source::{first_line, DecodedLines};
use log::{debug, trace};
use std::path::Path;

pub struct DelimiterDetector;

impl DelimiterDetector {
    /// Detect the field delimiter of `path`. Always yields a candidate.
    ///
    /// Three strategies are tried in turn:
    ///
    /// 1. For quote-enclosed files, the character right after the first
    ///    quoted cell.
    /// 2. The first sampled line in which at most one candidate occurs.
    /// 3. The most frequent candidate in the first line, preferring tab and
    ///    then pipe when they share the highest count.
    pub fn detect(path: &Path, config: &SnifferConfig) -> Result<Delimiter> {
        if let Some(line) = first_line(path, true)? {
            if QuoteDetector::enclosing_quote(&line).is_some() {
                if let Some(delimiter) = delimiter_after_first_cell(&line) {
                    debug!("{}: {:?} follows the first quoted cell", path.display(), delimiter);
                    return Ok(delimiter);
                }
            }
        }

        for (index, line) in DecodedLines::open(path)?
            .take(config.sample_lines)
            .enumerate()
        {
            let freq = FrequencyCounter::count(&line?);
            trace!("{}: line {} counts {:?}", path.display(), index + 1, freq.counts());

            if let Some(delimiter) = freq.sole_candidate() {
                debug!(
                    "{}: line {} only uses {:?}",
                    path.display(),
                    index + 1,
                    delimiter
                );
                return Ok(delimiter);
            }
        }

        // An empty file has no line to count; it falls back to Comma.
        let delimiter = match first_line(path, false)? {
            Some(line) => most_frequent(&FrequencyCounter::count(&line)),
            None => Delimiter::Comma,
        };
        debug!("{}: falling back to {:?} from first line", path.display(), delimiter);
        Ok(delimiter)
    }
}

/// Delimiter directly following the closing quote of the first cell.
///
/// The closing quote is the earliest quote character at index 2 or later
/// (the cell holds at least one character) that is immediately followed by
/// a candidate delimiter.
pub(crate) fn delimiter_after_first_cell(line: &str) -> Option<Delimiter> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .windows(2)
        .skip(2)
        .find_map(|pair| match QuoteChar::from_char(pair[0]) {
            Some(_) => Delimiter::from_char(pair[1]),
            None => None,
        })
}

/// Tie-break for the first-line fallback.
///
/// Tab wins whenever it matches the highest count, then pipe, otherwise the
/// earliest leading candidate. Comma only wins when it strictly leads both.
pub(crate) fn most_frequent(freq: &FrequencyVector) -> Delimiter {
    let (leader, max) = freq.leader();
    if max == freq.get(Delimiter::Tab) {
        Delimiter::Tab
    } else if max == freq.get(Delimiter::Pipe) {
        Delimiter::Pipe
    } else {
        leader
    }
}
