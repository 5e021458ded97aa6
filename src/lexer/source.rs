use std::io::{BufRead, Read};

use crate::error::Result;

/// Default upper bound for one buffered line, terminator included
pub const MAX_LINE_LENGTH: usize = 1024;

/// Line-buffered character source over any reader
///
/// Holds one line at a time. `next_char` transparently loads the following
/// line once the buffer is used up.
pub struct CharSource<R> {
    /// Underlying input stream
    reader: R,
    /// Currently loaded line
    line: Vec<char>,
    /// Position of the current character in `line`
    cursor: usize,
    /// Maximum number of bytes per load, including the terminator slot
    max_line_length: usize,
    /// Set once a load returned no data
    exhausted: bool,
    /// Number of loads so far
    lines_loaded: usize,
    /// Start of a UTF-8 sequence cut off by the previous load
    pending: Vec<u8>,
}

impl<R: BufRead> CharSource<R> {
    /// Creates a character source with the default line limit
    pub fn new(reader: R) -> Self {
        Self::with_max_line_length(reader, MAX_LINE_LENGTH)
    }

    /// Creates a character source reading at most `max_line_length - 1` bytes per load
    pub fn with_max_line_length(reader: R, max_line_length: usize) -> Self {
        CharSource {
            reader,
            line: Vec::new(),
            cursor: 0,
            max_line_length: max_line_length.max(2),
            exhausted: false,
            lines_loaded: 0,
            pending: Vec::new(),
        }
    }

    /// Reads the next line into the buffer
    ///
    /// Returns `false` when the stream is exhausted.
    pub fn load_line(&mut self) -> Result<bool> {
        let mut bytes = std::mem::take(&mut self.pending);
        let limit = (self.max_line_length - 1).saturating_sub(bytes.len()).max(1) as u64;
        let read = self
            .reader
            .by_ref()
            .take(limit)
            .read_until(b'\n', &mut bytes)?;

        if bytes.is_empty() {
            self.exhausted = true;
            self.line.clear();
            self.cursor = 0;
            return Ok(false);
        }

        if read > 0 {
            self.pending = split_incomplete_tail(&mut bytes);
        }
        self.line = String::from_utf8_lossy(&bytes).chars().collect();
        self.cursor = 0;
        self.lines_loaded += 1;
        tracing::debug!(line = self.lines_loaded, len = self.line.len(), "loaded line");
        Ok(true)
    }

    /// Returns the current character without consuming it
    ///
    /// Loads further lines while the buffer is used up; `None` means end of input.
    pub fn current_char(&mut self) -> Result<Option<char>> {
        while self.cursor >= self.line.len() {
            if self.exhausted || !self.load_line()? {
                return Ok(None);
            }
        }
        Ok(Some(self.line[self.cursor]))
    }

    /// Consumes and returns the current character
    pub fn next_char(&mut self) -> Result<Option<char>> {
        let c = self.current_char()?;
        if c.is_some() {
            self.cursor += 1;
        }
        Ok(c)
    }

    /// Text of the line loaded last
    pub fn current_line(&self) -> String {
        self.line.iter().collect()
    }

    /// Drops whatever is left of the current line
    pub fn discard_line(&mut self) {
        self.cursor = self.line.len();
    }

    /// Returns true once the stream reported end of input
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Splits off a trailing UTF-8 sequence that the chunk limit cut short
fn split_incomplete_tail(bytes: &mut Vec<u8>) -> Vec<u8> {
    match std::str::from_utf8(bytes) {
        Err(err) if err.error_len().is_none() => bytes.split_off(err.valid_up_to()),
        _ => Vec::new(),
    }
}
