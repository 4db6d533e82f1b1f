//! module for scanning tokens out of netpbm headers
use log;

// same set as C's isspace
const WHITESPACE_BYTES: &[u8] = b" \t\n\x0b\x0c\r";

pub(crate) fn is_whitespace(byte: u8) -> bool {
    WHITESPACE_BYTES.contains(&byte)
}

/// Moves `position` past every comment line that starts there.
///
/// A comment is a `#` at the start of the buffer or right after a `\n`, and runs up to and
/// including the next `\n`. Consecutive comment lines are all skipped.
pub(crate) fn skip_comments(data: &[u8], mut position: usize) -> usize {
    while position < data.len()
        && (position == 0 || data[position - 1] == b'\n')
        && data[position] == b'#'
    {
        position = match data[position..].iter().position(|byte| *byte == b'\n') {
            Some(i) => position + i + 1,
            None => data.len(),
        };
    }
    position
}

/// Forward-only cursor over the bytes of a netpbm file.
///
/// Comment lines are invisible to every read. A token read stops by consuming one delimiter
/// byte and then stepping back over it, so the cursor rests on the delimiter afterwards.
pub struct TokenScanner<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> TokenScanner<'a> {
    pub fn new(data: &'a [u8]) -> TokenScanner<'a> {
        log::debug!("Created new TokenScanner over {} bytes", data.len());
        TokenScanner { data, position: 0 }
    }

    fn step_back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Returns the next byte that is not part of a comment line, or `None` at the end of data.
    pub fn next_character(&mut self) -> Option<u8> {
        self.position = skip_comments(self.data, self.position);
        let byte = *self.data.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    /// Returns the next run of non-whitespace bytes.
    pub fn next_word(&mut self) -> Option<&'a [u8]> {
        self.next_run(|byte| !is_whitespace(byte))
    }

    /// Returns the next run of ASCII digits parsed as a base-10 number.
    ///
    /// Bytes before the first digit are skipped. The value saturates at `u64::MAX`.
    pub fn next_unsigned_integer(&mut self) -> Option<u64> {
        let digits = self.next_run(|byte| byte.is_ascii_digit())?;
        let value = digits.iter().fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        });
        log::debug!("next_unsigned_integer -> {value}");
        Some(value)
    }

    // A comment needs a preceding `\n`, which always ends a run, so accepted bytes are
    // contiguous in the buffer.
    fn next_run(&mut self, accept: impl Fn(u8) -> bool) -> Option<&'a [u8]> {
        let mut start = None;
        while let Some(byte) = self.next_character() {
            if accept(byte) {
                start.get_or_insert(self.position - 1);
            } else if start.is_some() {
                self.step_back();
                return start.map(|start| &self.data[start..self.position]);
            }
        }
        start.map(|start| &self.data[start..self.position])
    }

    /// Skips whitespace and comment lines, then returns everything after the cursor.
    ///
    /// Comments inside the returned slice are left in place.
    pub fn remaining_data(&mut self) -> &'a [u8] {
        while let Some(byte) = self.next_character() {
            if !is_whitespace(byte) {
                self.step_back();
                break;
            }
        }
        log::debug!("remaining data starts at {} of {}", self.position, self.data.len());
        &self.data[self.position..]
    }
}
