//! Output channels carried by the multiplexed log stream.
//!
//! The container engine tags every frame with the stream it came from.
//! Only two tags are meaningful; everything else is treated as unknown and
//! skipped by the decoder.

/// Wire tag for the process's standard output.
pub const STDOUT_TAG: u8 = 1;

/// Wire tag for the process's standard error.
pub const STDERR_TAG: u8 = 2;

/// One of the two independent text streams produced by a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Standard output.
    Out,
    /// Standard error.
    Err,
}

impl Channel {
    /// Map a wire tag to a channel. Returns `None` for unknown tags.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            STDOUT_TAG => Some(Channel::Out),
            STDERR_TAG => Some(Channel::Err),
            _ => None,
        }
    }

    /// The wire tag written in byte 0 of a frame header.
    pub fn tag(self) -> u8 {
        match self {
            Channel::Out => STDOUT_TAG,
            Channel::Err => STDERR_TAG,
        }
    }

    /// Human-readable stream name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Out => "stdout",
            Channel::Err => "stderr",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_channels() {
        assert_eq!(Channel::from_tag(1), Some(Channel::Out));
        assert_eq!(Channel::from_tag(2), Some(Channel::Err));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        for tag in [0u8, 3, 4, 0x7f, 0xff] {
            assert_eq!(Channel::from_tag(tag), None, "tag {tag}");
        }
    }

    #[test]
    fn tag_roundtrips_through_from_tag() {
        for channel in [Channel::Out, Channel::Err] {
            assert_eq!(Channel::from_tag(channel.tag()), Some(channel));
        }
    }

    #[test]
    fn display_uses_stream_name() {
        assert_eq!(Channel::Out.to_string(), "stdout");
        assert_eq!(Channel::Err.to_string(), "stderr");
    }
}
