//! Reading side of the sniffer: opening files, stripping byte-order marks,
//! and handing out raw lines, decoded lines and parsed rows.

pub mod lines;
pub mod rows;

pub use lines::{first_line, first_raw_line, DecodedLines};
pub use rows::Rows;

use crate::error::{Result, SnifferError};
use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};
use log::trace;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const TRANSCODE_CHUNK: usize = 8 * 1024;

/// Open `path` as UTF-8 text.
///
/// A UTF-8 byte-order mark is skipped. Any other BOM (UTF-16LE/BE) makes
/// the file be transcoded to UTF-8 as it is read.
pub fn open_text(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| SnifferError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let bom = Encoding::for_bom(reader.fill_buf().map_err(|e| SnifferError::io(path, e))?);

    match bom {
        None => Ok(Box::new(reader)),
        Some((encoding, bom_len)) if encoding == UTF_8 => {
            trace!("{}: skipping UTF-8 byte-order mark", path.display());
            reader.consume(bom_len);
            Ok(Box::new(reader))
        }
        Some((encoding, bom_len)) => {
            trace!("{}: transcoding from {}", path.display(), encoding.name());
            reader.consume(bom_len);
            let decoder = encoding.new_decoder_without_bom_handling();
            Ok(Box::new(BufReader::new(Utf8Transcoder::new(reader, decoder))))
        }
    }
}

/// `Read` adapter turning a non-UTF-8 byte stream into UTF-8, one chunk at
/// a time. Malformed input becomes U+FFFD.
pub(crate) struct Utf8Transcoder<R> {
    inner: R,
    decoder: Decoder,
    input: Vec<u8>,
    input_pos: usize,
    input_len: usize,
    output: Vec<u8>,
    output_pos: usize,
    output_len: usize,
    eof: bool,
    finished: bool,
}

impl<R: Read> Utf8Transcoder<R> {
    pub(crate) fn new(inner: R, decoder: Decoder) -> Self {
        Self {
            inner,
            decoder,
            input: vec![0; TRANSCODE_CHUNK],
            input_pos: 0,
            input_len: 0,
            output: vec![0; TRANSCODE_CHUNK * 3],
            output_pos: 0,
            output_len: 0,
            eof: false,
            finished: false,
        }
    }
}

impl<R: Read> Read for Utf8Transcoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            if self.output_pos < self.output_len {
                let n = buf.len().min(self.output_len - self.output_pos);
                buf[..n].copy_from_slice(&self.output[self.output_pos..self.output_pos + n]);
                self.output_pos += n;
                return Ok(n);
            }

            if self.finished {
                return Ok(0);
            }

            if self.input_pos == self.input_len && !self.eof {
                let n = self.inner.read(&mut self.input)?;
                self.input_pos = 0;
                self.input_len = n;
                self.eof = n == 0;
            }

            let (result, read, written, _) = self.decoder.decode_to_utf8(
                &self.input[self.input_pos..self.input_len],
                &mut self.output,
                self.eof,
            );
            self.input_pos += read;
            self.output_pos = 0;
            self.output_len = written;

            if self.eof && result == CoderResult::InputEmpty {
                self.finished = true;
            }
        }
    }
}
