use bytes::Bytes;
use muxlog_frame::{demultiplex, Channel, LogEntry};
use tracing::debug;

use crate::separate::{separate, SeparatedStreams};

/// Parsed view of one process's complete output.
///
/// Built once from a log buffer and exit code. The per-channel byte and text
/// fields are always the in-order concatenation of [`entries`](Self::entries)
/// for that channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    out_bytes: Bytes,
    err_bytes: Bytes,
    out_text: String,
    err_text: String,
    exit_code: i64,
    entries: Vec<LogEntry>,
}

impl ExecutionResult {
    /// Build from already-decoded entries, e.g. the output of strict decoding.
    pub fn from_entries(entries: Vec<LogEntry>, exit_code: i64) -> Self {
        let SeparatedStreams {
            out_bytes,
            err_bytes,
            out_text,
            err_text,
        } = separate(&entries);

        Self {
            out_bytes,
            err_bytes,
            out_text,
            err_text,
            exit_code,
            entries,
        }
    }

    pub fn out_bytes(&self) -> &Bytes {
        &self.out_bytes
    }

    pub fn err_bytes(&self) -> &Bytes {
        &self.err_bytes
    }

    pub fn out_text(&self) -> &str {
        &self.out_text
    }

    pub fn err_text(&self) -> &str {
        &self.err_text
    }

    pub fn exit_code(&self) -> i64 {
        self.exit_code
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// True when stdout carried at least one byte.
    pub fn has_out(&self) -> bool {
        !self.out_bytes.is_empty()
    }

    /// True when stderr carried at least one byte.
    pub fn has_err(&self) -> bool {
        !self.err_bytes.is_empty()
    }

    /// Entries belonging to `channel`, in arrival order.
    pub fn entries_on(&self, channel: Channel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.channel() == channel)
    }
}

/// Demultiplex `buffer` and combine it with the process exit code.
pub fn build(buffer: &[u8], exit_code: i64) -> ExecutionResult {
    let result = ExecutionResult::from_entries(demultiplex(buffer), exit_code);
    debug!(
        buffer_size = buffer.len(),
        entries = result.entries.len(),
        out_size = result.out_bytes.len(),
        err_size = result.err_bytes.len(),
        exit_code,
        "built execution result"
    );
    result
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;
    use muxlog_frame::{encode_frame, encode_raw_frame};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_buffer_has_no_output() {
        let result = build(&[], 0);
        assert!(result.entries().is_empty());
        assert!(!result.has_out());
        assert!(!result.has_err());
        assert_eq!(result.out_text(), "");
        assert_eq!(result.err_text(), "");
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn channel_bytes_reconstruct_from_entries() {
        let mut buf = BytesMut::new();
        encode_frame(Channel::Out, b"line 1\n", &mut buf).unwrap();
        encode_frame(Channel::Err, b"warn\n", &mut buf).unwrap();
        encode_raw_frame(0, b"ignored", &mut buf).unwrap();
        encode_frame(Channel::Out, b"line 2\n", &mut buf).unwrap();

        let result = build(&buf, 3);
        assert_eq!(result.entries().len(), 3);
        assert_eq!(result.out_bytes().as_ref(), b"line 1\nline 2\n");
        assert_eq!(result.err_bytes().as_ref(), b"warn\n");
        assert_eq!(result.exit_code(), 3);

        let rebuilt: Vec<u8> = result
            .entries_on(Channel::Out)
            .flat_map(|e| e.bytes().iter().copied())
            .collect();
        assert_eq!(rebuilt.as_slice(), result.out_bytes().as_ref());
    }

    #[test]
    fn empty_frames_do_not_count_as_output() {
        let mut buf = BytesMut::new();
        encode_frame(Channel::Out, b"", &mut buf).unwrap();
        encode_frame(Channel::Err, b"", &mut buf).unwrap();

        let result = build(&buf, 0);
        assert_eq!(result.entries().len(), 2);
        assert!(!result.has_out());
        assert!(!result.has_err());
    }

    #[test]
    fn build_is_deterministic_apart_from_timestamps() {
        let mut buf = BytesMut::new();
        encode_frame(Channel::Err, b"oops", &mut buf).unwrap();

        let a = build(&buf, 1);
        let b = build(&buf, 1);
        assert_eq!(a.out_bytes(), b.out_bytes());
        assert_eq!(a.err_text(), b.err_text());
        assert_eq!(a.has_err(), b.has_err());
    }

    proptest! {
        #[test]
        fn channel_bytes_are_in_order_concatenations(
            frames in proptest::collection::vec(
                (any::<bool>(), proptest::collection::vec(any::<u8>(), 0..32)),
                0..12,
            ),
            exit_code in any::<i64>(),
        ) {
            let mut buf = BytesMut::new();
            let mut expected_out = Vec::new();
            let mut expected_err = Vec::new();
            for (is_out, payload) in &frames {
                let channel = if *is_out { Channel::Out } else { Channel::Err };
                encode_frame(channel, payload, &mut buf).unwrap();
                if *is_out {
                    expected_out.extend_from_slice(payload);
                } else {
                    expected_err.extend_from_slice(payload);
                }
            }

            let result = build(&buf, exit_code);
            prop_assert_eq!(result.out_bytes().as_ref(), expected_out.as_slice());
            prop_assert_eq!(result.err_bytes().as_ref(), expected_err.as_slice());
            prop_assert_eq!(result.has_out(), !expected_out.is_empty());
            prop_assert_eq!(result.has_err(), !expected_err.is_empty());
            prop_assert_eq!(result.exit_code(), exit_code);
        }
    }
}
