use serde::{Deserialize, Serialize};
use std::fmt;

/// Field delimiters the sniffer considers.
///
/// The declaration order is significant: it is the scan order used when
/// breaking ties between equally frequent candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl Delimiter {
    /// All candidates in tie-break order.
    pub const ALL: [Delimiter; 4] = [
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Semicolon,
        Delimiter::Pipe,
    ];

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Pipe => '|',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ',' => Some(Delimiter::Comma),
            '\t' => Some(Delimiter::Tab),
            ';' => Some(Delimiter::Semicolon),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }

    /// Position of this candidate in [`Delimiter::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineTerminator {
    #[serde(rename = "\n")]
    Lf,
    #[serde(rename = "\r")]
    Cr,
    #[serde(rename = "\r\n")]
    CrLf,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::Cr => "\r",
            LineTerminator::CrLf => "\r\n",
        }
    }

    /// Classify a run of `\r`/`\n` bytes by its leading terminator.
    ///
    /// A run such as `"\n\n"` (blank lines following the first line) still
    /// names a single `\n` terminator.
    pub fn from_run(run: &[u8]) -> Option<Self> {
        match run {
            [b'\r', b'\n', ..] => Some(LineTerminator::CrLf),
            [b'\r', ..] => Some(LineTerminator::Cr),
            [b'\n', ..] => Some(LineTerminator::Lf),
            _ => None,
        }
    }

    pub fn platform_default() -> Self {
        if cfg!(windows) {
            LineTerminator::CrLf
        } else {
            LineTerminator::Lf
        }
    }

    pub(crate) fn csv_terminator(self) -> csv::Terminator {
        match self {
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
            LineTerminator::Cr => csv::Terminator::Any(b'\r'),
            LineTerminator::CrLf => csv::Terminator::CRLF,
        }
    }
}

impl Default for LineTerminator {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Display for LineTerminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteChar {
    #[serde(rename = "'")]
    Single,
    #[serde(rename = "\"")]
    Double,
}

impl QuoteChar {
    pub fn as_char(self) -> char {
        match self {
            QuoteChar::Single => '\'',
            QuoteChar::Double => '"',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(QuoteChar::Single),
            '"' => Some(QuoteChar::Double),
            _ => None,
        }
    }
}

/// Everything the sniffer can tell about one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dialect {
    pub line_terminator: LineTerminator,
    pub quote_char: Option<QuoteChar>,
    pub delimiter: Delimiter,
    pub has_header: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_order_matches_index() {
        for (i, d) in Delimiter::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn delimiter_char_mapping() {
        for d in Delimiter::ALL {
            assert_eq!(Delimiter::from_char(d.as_char()), Some(d));
        }
        assert_eq!(Delimiter::from_char(':'), None);
        assert_eq!(Delimiter::Tab.as_byte(), b'\t');
    }

    #[test]
    fn terminator_from_run_uses_leading_sequence() {
        assert_eq!(LineTerminator::from_run(b"\r\n"), Some(LineTerminator::CrLf));
        assert_eq!(LineTerminator::from_run(b"\r\n\r\n"), Some(LineTerminator::CrLf));
        assert_eq!(LineTerminator::from_run(b"\r\r"), Some(LineTerminator::Cr));
        assert_eq!(LineTerminator::from_run(b"\n\n"), Some(LineTerminator::Lf));
        assert_eq!(LineTerminator::from_run(b"\n\r"), Some(LineTerminator::Lf));
        assert_eq!(LineTerminator::from_run(b""), None);
    }

    #[test]
    fn quote_char_mapping() {
        assert_eq!(QuoteChar::from_char('\''), Some(QuoteChar::Single));
        assert_eq!(QuoteChar::from_char('"'), Some(QuoteChar::Double));
        assert_eq!(QuoteChar::from_char('`'), None);
    }
}
