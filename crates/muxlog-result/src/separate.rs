use bytes::{Bytes, BytesMut};
use muxlog_frame::{Channel, LogEntry};

/// Per-channel concatenation of a run of log entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatedStreams {
    pub out_bytes: Bytes,
    pub err_bytes: Bytes,
    pub out_text: String,
    pub err_text: String,
}

/// Split entries by channel, concatenating bytes and text in arrival order.
pub fn separate(entries: &[LogEntry]) -> SeparatedStreams {
    let mut out_bytes = BytesMut::new();
    let mut err_bytes = BytesMut::new();
    let mut out_text = String::new();
    let mut err_text = String::new();

    for entry in entries {
        let (bytes, text) = match entry.channel() {
            Channel::Out => (&mut out_bytes, &mut out_text),
            Channel::Err => (&mut err_bytes, &mut err_text),
        };
        bytes.extend_from_slice(entry.bytes());
        text.push_str(entry.text());
    }

    SeparatedStreams {
        out_bytes: out_bytes.freeze(),
        err_bytes: err_bytes.freeze(),
        out_text,
        err_text,
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::*;

    fn entry(channel: Channel, payload: &'static [u8]) -> LogEntry {
        LogEntry::new(channel, payload, SystemTime::UNIX_EPOCH)
    }

    #[test]
    fn empty_input_yields_empty_streams() {
        assert_eq!(separate(&[]), SeparatedStreams::default());
    }

    #[test]
    fn partitions_preserve_relative_order() {
        let entries = [
            entry(Channel::Out, b"a"),
            entry(Channel::Err, b"1"),
            entry(Channel::Out, b"b"),
            entry(Channel::Err, b"2"),
            entry(Channel::Out, b"c"),
        ];

        let streams = separate(&entries);
        assert_eq!(streams.out_bytes.as_ref(), b"abc");
        assert_eq!(streams.err_bytes.as_ref(), b"12");
        assert_eq!(streams.out_text, "abc");
        assert_eq!(streams.err_text, "12");
    }

    #[test]
    fn one_sided_output_leaves_other_channel_empty() {
        let streams = separate(&[entry(Channel::Err, b"boom\n")]);
        assert!(streams.out_bytes.is_empty());
        assert!(streams.out_text.is_empty());
        assert_eq!(streams.err_text, "boom\n");
    }

    #[test]
    fn bytes_and_text_are_concatenated_independently() {
        let entries = [
            entry(Channel::Out, &[0xe2, 0x82]),
            entry(Channel::Out, &[0xac]),
        ];

        let streams = separate(&entries);
        // A multi-byte character split across frames survives in the raw bytes
        // but each entry's text was decoded on its own.
        assert_eq!(streams.out_bytes.as_ref(), "€".as_bytes());
        assert_eq!(streams.out_text, "\u{fffd}\u{fffd}");
    }
}
