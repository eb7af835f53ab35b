//! Single-slot channel carrying the most recent input value.

use tokio::sync::watch;

/// Writing half, owned by whatever reads the input source.
#[derive(Debug)]
pub struct InputPublisher {
    sender: watch::Sender<i32>,
}

/// Reading half, polled once per frame.
#[derive(Debug, Clone)]
pub struct LatestInput {
    receiver: watch::Receiver<i32>,
}

/// Creates a connected publisher/reader pair holding `initial` until the first publish.
pub fn input_slot(initial: i32) -> (InputPublisher, LatestInput) {
    let (sender, receiver) = watch::channel(initial);
    (InputPublisher { sender }, LatestInput { receiver })
}

impl InputPublisher {
    /// Replaces the stored value. Never blocks; the last write wins.
    pub fn publish(&self, value: i32) {
        self.sender.send_replace(value);
    }
}

impl LatestInput {
    /// Non-blocking snapshot of the latest value.
    pub fn latest(&self) -> i32 {
        *self.receiver.borrow()
    }

    /// Takes a snapshot and marks it seen, reporting whether it changed since the last call.
    ///
    /// Once the publisher is gone the value is still readable but never reported as changed.
    pub fn take(&mut self) -> (i32, bool) {
        let changed = self.receiver.has_changed().unwrap_or(false);
        let value = *self.receiver.borrow_and_update();
        (value, changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_sees_initial_value_until_published() {
        let (publisher, latest) = input_slot(5);
        assert_eq!(latest.latest(), 5);
        publisher.publish(9);
        assert_eq!(latest.latest(), 9);
    }

    #[test]
    fn last_write_wins() {
        let (publisher, mut latest) = input_slot(0);
        publisher.publish(1);
        publisher.publish(2);
        publisher.publish(3);
        assert_eq!(latest.take(), (3, true));
        assert_eq!(latest.take(), (3, false));
    }

    #[test]
    fn value_survives_publisher_drop() {
        let (publisher, mut latest) = input_slot(0);
        publisher.publish(42);
        drop(publisher);
        assert_eq!(latest.latest(), 42);
        assert_eq!(latest.take(), (42, false));
    }

    #[test]
    fn publishing_across_threads() {
        let (publisher, latest) = input_slot(0);
        std::thread::spawn(move || publisher.publish(77))
            .join()
            .unwrap();
        assert_eq!(latest.latest(), 77);
    }
}
