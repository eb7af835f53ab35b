//! Delimiter-framed integer decoding.

use thiserror::Error;

/// Default frame delimiter.
pub const DEFAULT_DELIMITER: u8 = b'|';

/// Frames longer than this are dropped; no valid `i32` needs more.
pub const MAX_FRAME_LEN: usize = 64;

/// Reasons a buffered frame was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Input frame is not valid UTF-8")]
    NotUtf8,

    #[error("Input frame {0:?} is not a decimal integer")]
    NotAnInteger(String),

    #[error("Input frame exceeded {} bytes without a delimiter", MAX_FRAME_LEN)]
    FrameTooLong,
}

/// Buffers bytes until the delimiter arrives, then parses the frame.
///
/// Whitespace around the number (such as the `\r\n` a microcontroller's
/// `println` appends) is ignored. The buffer is cleared after every frame,
/// valid or not, so one bad frame never poisons the next.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    delimiter: u8,
    buffer: Vec<u8>,
    overflowed: bool,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl FrameDecoder {
    pub fn new(delimiter: u8) -> Self {
        Self {
            delimiter,
            buffer: Vec::with_capacity(MAX_FRAME_LEN),
            overflowed: false,
        }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Bytes received since the last delimiter.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Feeds one byte. Returns a result whenever a frame completes.
    pub fn push(&mut self, byte: u8) -> Option<Result<i32, InputError>> {
        if byte != self.delimiter {
            if self.buffer.len() >= MAX_FRAME_LEN {
                self.overflowed = true;
                self.buffer.clear();
            }
            self.buffer.push(byte);
            return None;
        }

        let result = if std::mem::take(&mut self.overflowed) {
            Err(InputError::FrameTooLong)
        } else {
            parse_frame(&self.buffer)
        };
        self.buffer.clear();
        Some(result)
    }

    /// Feeds a chunk of bytes, returning every completed frame in order.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Result<i32, InputError>> {
        bytes.iter().filter_map(|&byte| self.push(byte)).collect()
    }
}

fn parse_frame(frame: &[u8]) -> Result<i32, InputError> {
    let text = std::str::from_utf8(frame).map_err(|_| InputError::NotUtf8)?;
    let trimmed = text.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_delimited_values() {
        let mut decoder = FrameDecoder::default();
        assert_eq!(decoder.feed(b"120|87|-4|"), vec![Ok(120), Ok(87), Ok(-4)]);
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn frames_may_span_chunks() {
        let mut decoder = FrameDecoder::default();
        assert!(decoder.feed(b"12").is_empty());
        assert_eq!(decoder.pending(), b"12");
        assert_eq!(decoder.feed(b"3|4"), vec![Ok(123)]);
        assert_eq!(decoder.pending(), b"4");
    }

    #[test]
    fn whitespace_around_numbers_is_ignored() {
        let mut decoder = FrameDecoder::default();
        assert_eq!(decoder.feed(b"\r\n 42\r\n|"), vec![Ok(42)]);
    }

    #[test]
    fn malformed_frames_are_reported_and_buffer_reset() {
        let mut decoder = FrameDecoder::default();
        let results = decoder.feed(b"abc|||7|");
        assert_eq!(
            results,
            vec![
                Err(InputError::NotAnInteger("abc".to_string())),
                Err(InputError::NotAnInteger(String::new())),
                Err(InputError::NotAnInteger(String::new())),
                Ok(7),
            ]
        );
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut decoder = FrameDecoder::default();
        assert_eq!(decoder.feed(&[0xff, 0xfe, b'|']), vec![Err(InputError::NotUtf8)]);
    }

    #[test]
    fn out_of_range_integer_is_rejected() {
        let mut decoder = FrameDecoder::default();
        let results = decoder.feed(b"99999999999|");
        assert!(matches!(results[0], Err(InputError::NotAnInteger(_))));
    }

    #[test]
    fn overlong_frame_is_dropped() {
        let mut decoder = FrameDecoder::default();
        let noise = vec![b'1'; MAX_FRAME_LEN + 10];
        assert!(decoder.feed(&noise).is_empty());
        assert_eq!(decoder.feed(b"|5|"), vec![Err(InputError::FrameTooLong), Ok(5)]);
    }

    #[test]
    fn custom_delimiter() {
        let mut decoder = FrameDecoder::new(b'\n');
        assert_eq!(decoder.delimiter(), b'\n');
        assert_eq!(
            decoder.feed(b"10\n|20\n"),
            vec![Ok(10), Err(InputError::NotAnInteger("|20".to_string()))]
        );
    }
}
