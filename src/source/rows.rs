use super::open_text;
use crate::dialect::{Delimiter, LineTerminator, QuoteChar};
use crate::error::Result;
use csv::{ByteRecordsIntoIter, ReaderBuilder};
use std::io::BufRead;
use std::path::Path;

/// Parsed rows of a delimited file.
///
/// Every row is returned, including the first one; rows may have differing
/// lengths. Cells that are not valid UTF-8 are decoded lossily.
pub struct Rows {
    records: ByteRecordsIntoIter<Box<dyn BufRead>>,
}

impl Rows {
    pub fn open(
        path: &Path,
        delimiter: Delimiter,
        terminator: LineTerminator,
        quote: Option<QuoteChar>,
    ) -> Result<Self> {
        let reader = open_text(path)?;
        let quote = quote.unwrap_or(QuoteChar::Double).as_char() as u8;

        let records = ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .terminator(terminator.csv_terminator())
            .quote(quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_byte_records();

        Ok(Self { records })
    }
}

impl Iterator for Rows {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|record| {
            let record = record?;
            Ok(record
                .iter()
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
                .collect())
        })
    }
}
