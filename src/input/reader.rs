//! Background reader pumping a byte source into the input slot.

use super::decoder::FrameDecoder;
use super::slot::InputPublisher;
use log::{debug, error, info, warn};
use std::io::{self, ErrorKind, Read};
use std::thread::{self, JoinHandle};

/// Counters reported when a reader finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReaderStats {
    /// Frames parsed and published
    pub accepted: u64,
    /// Frames discarded as malformed
    pub rejected: u64,
}

/// Reads `reader` until EOF or a hard error, publishing every valid frame.
///
/// Malformed frames are logged and skipped, so the published value stays at
/// the last good frame.
pub fn pump<R: Read>(
    mut reader: R,
    mut decoder: FrameDecoder,
    publisher: &InputPublisher,
) -> ReaderStats {
    let mut stats = ReaderStats::default();
    let mut chunk = [0u8; 256];

    loop {
        let read = match reader.read(&mut chunk) {
            Ok(0) => {
                info!("Input source reached end of stream");
                break;
            }
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                error!("Input source read failed: {}", err);
                break;
            }
        };

        for result in decoder.feed(&chunk[..read]) {
            match result {
                Ok(value) => {
                    debug!("Input value {}", value);
                    publisher.publish(value);
                    stats.accepted += 1;
                }
                Err(err) => {
                    warn!("Discarding malformed input frame: {}", err);
                    stats.rejected += 1;
                }
            }
        }
    }

    if !decoder.pending().is_empty() {
        debug!(
            "Dropping {} trailing bytes without delimiter",
            decoder.pending().len()
        );
    }

    stats
}

/// Runs [`pump`] on a dedicated thread.
///
/// # Errors
/// Returns an error if the thread cannot be spawned.
pub fn spawn_reader<R: Read + Send + 'static>(
    reader: R,
    decoder: FrameDecoder,
    publisher: InputPublisher,
) -> io::Result<JoinHandle<ReaderStats>> {
    thread::Builder::new()
        .name("easel-input".into())
        .spawn(move || pump(reader, decoder, &publisher))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::input_slot;
    use std::io::Cursor;

    #[test]
    fn pump_publishes_last_good_value() {
        let (publisher, latest) = input_slot(0);
        let stats = pump(Cursor::new(b"10|20|oops|".to_vec()), FrameDecoder::default(), &publisher);

        assert_eq!(stats, ReaderStats { accepted: 2, rejected: 1 });
        assert_eq!(latest.latest(), 20);
    }

    #[test]
    fn trailing_partial_frame_is_not_published() {
        let (publisher, latest) = input_slot(3);
        let stats = pump(Cursor::new(b"12".to_vec()), FrameDecoder::default(), &publisher);
        assert_eq!(stats.accepted, 0);
        assert_eq!(latest.latest(), 3);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "device unplugged"))
        }
    }

    #[test]
    fn read_error_stops_pump() {
        let (publisher, latest) = input_slot(8);
        let stats = pump(FailingReader, FrameDecoder::default(), &publisher);
        assert_eq!(stats, ReaderStats::default());
        assert_eq!(latest.latest(), 8);
    }

    #[test]
    fn spawned_reader_feeds_slot() {
        let (publisher, latest) = input_slot(0);
        let handle =
            spawn_reader(Cursor::new(b"1|2|3|".to_vec()), FrameDecoder::default(), publisher)
                .unwrap();
        let stats = handle.join().unwrap();
        assert_eq!(stats.accepted, 3);
        assert_eq!(latest.latest(), 3);
    }
}
