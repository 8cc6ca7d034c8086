use std::collections::VecDeque;
use std::io;
use std::io::BufRead;

/// Reads whitespace-separated tokens from a reader, one at a time.
///
/// Lines are only read when every token from the previous line has been handed out, so several
/// guesses can be typed on one line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> TokenReader<R> {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the reader is exhausted.
    ///
    /// Bytes that are not valid UTF-8 come back as `U+FFFD`, so they never end the input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut bytes = Vec::new();
            if self.reader.read_until(b'\n', &mut bytes)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&bytes);
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}
