use std::time::SystemTime;

use bytes::Bytes;

use crate::channel::Channel;

/// One decoded unit of process output.
///
/// Entries are immutable: the decoder fills every field once and consumers
/// only read through the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    channel: Channel,
    bytes: Bytes,
    text: String,
    observed_at: SystemTime,
}

impl LogEntry {
    /// Create an entry, decoding `bytes` as UTF-8 (invalid sequences become U+FFFD).
    pub fn new(channel: Channel, bytes: impl Into<Bytes>, observed_at: SystemTime) -> Self {
        let bytes = bytes.into();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Self {
            channel,
            bytes,
            text,
            observed_at,
        }
    }

    /// The stream this entry belongs to.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Raw payload bytes exactly as they appeared on the wire.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Best-effort UTF-8 decoding of [`bytes`](Self::bytes).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the decoder produced this entry. The wire format carries no timestamp.
    pub fn observed_at(&self) -> SystemTime {
        self.observed_at
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Hands out decode timestamps that never go backwards within one scan.
///
/// `SystemTime` is not monotonic, so a wall-clock step back between two
/// frames is clamped to the previous reading.
#[derive(Debug, Default)]
pub(crate) struct ObservationClock {
    last: Option<SystemTime>,
}

impl ObservationClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn observe(&mut self) -> SystemTime {
        self.observe_with(SystemTime::now())
    }

    fn observe_with(&mut self, now: SystemTime) -> SystemTime {
        let stamp = match self.last {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last = Some(stamp);
        stamp
    }
}
