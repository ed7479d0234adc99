use crate::dialect::QuoteChar;
use crate::error::Result;
use crate::source::first_line;
use std::path::Path;

pub struct QuoteDetector;

impl QuoteDetector {
    /// True when the trimmed first line starts and ends with the same quote.
    pub fn is_quote_enclosed(path: &Path) -> Result<bool> {
        Ok(Self::quote_char(path)?.is_some())
    }

    pub fn quote_char(path: &Path) -> Result<Option<QuoteChar>> {
        Ok(first_line(path, true)?.and_then(|line| Self::enclosing_quote(&line)))
    }

    /// The quote wrapping an already trimmed line, if any.
    pub fn enclosing_quote(line: &str) -> Option<QuoteChar> {
        let first = line.chars().next()?;
        let quote = QuoteChar::from_char(first)?;
        if line.ends_with(first) {
            Some(quote)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_quotes_enclose() {
        assert_eq!(
            QuoteDetector::enclosing_quote("'Name' |'Number'"),
            Some(QuoteChar::Single)
        );
        assert_eq!(
            QuoteDetector::enclosing_quote("\"a\"|\"b\""),
            Some(QuoteChar::Double)
        );
    }

    #[test]
    fn mixed_or_missing_quotes_do_not_enclose() {
        assert_eq!(QuoteDetector::enclosing_quote("'a\""), None);
        assert_eq!(QuoteDetector::enclosing_quote("a,'b'"), None);
        assert_eq!(QuoteDetector::enclosing_quote("'a',b"), None);
        assert_eq!(QuoteDetector::enclosing_quote(""), None);
    }

    #[test]
    fn lone_quote_encloses_itself() {
        assert_eq!(QuoteDetector::enclosing_quote("\""), Some(QuoteChar::Double));
    }
}
