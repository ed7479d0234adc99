use super::open_text;
use crate::error::{Result, SnifferError};
use std::io::{BufRead, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Read the first line of `path` as raw bytes, terminator included.
///
/// Reading stops after the first `\n` or after `cap` bytes, whichever comes
/// first. Returns `None` for an empty file.
pub fn first_raw_line(path: &Path, cap: usize) -> Result<Option<Vec<u8>>> {
    let mut reader = open_text(path)?.take(cap as u64);
    let mut buf = Vec::new();
    reader
        .read_until(b'\n', &mut buf)
        .map_err(|e| SnifferError::io(path, e))?;

    if buf.is_empty() {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}

/// The first decoded line of `path`, without its terminator.
///
/// With `cleaned`, surrounding whitespace is trimmed as well.
pub fn first_line(path: &Path, cleaned: bool) -> Result<Option<String>> {
    match DecodedLines::open(path)?.next() {
        Some(line) => {
            let line = line?;
            if cleaned {
                Ok(Some(line.trim().to_string()))
            } else {
                Ok(Some(line))
            }
        }
        None => Ok(None),
    }
}

/// Lazily yields the decoded lines of a file, without their terminators.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Bytes that are not valid
/// UTF-8 are replaced rather than reported.
pub struct DecodedLines {
    path: PathBuf,
    reader: Box<dyn BufRead>,
    // The previous line ended in `\r`; a `\n` right after it belongs to it.
    pending_cr: bool,
    finished: bool,
}

impl DecodedLines {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            reader: open_text(path)?,
            pending_cr: false,
            finished: false,
        })
    }

    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = Vec::new();

        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                break;
            }

            if self.pending_cr {
                self.pending_cr = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    buf.extend_from_slice(&available[..end]);
                    self.pending_cr = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return Ok(Some(decode(buf)));
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        if buf.is_empty() {
            Ok(None)
        } else {
            Ok(Some(decode(buf)))
        }
    }
}

impl Iterator for DecodedLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(SnifferError::io(&self.path, e)))
            }
        }
    }
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
