/// Errors reported by strict decoding and by frame encoding.
///
/// The lenient decoder never produces these; it absorbs malformed tails
/// and unknown tags instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Fewer than a full header's worth of bytes remain at `offset`.
    #[error("truncated frame header at offset {offset} ({remaining} of 8 bytes)")]
    TruncatedHeader { offset: usize, remaining: usize },

    /// The header at `offset` declares more payload than the buffer holds.
    #[error("truncated frame payload at offset {offset} (declared {declared} bytes, {available} available)")]
    TruncatedPayload {
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// The header at `offset` carries a channel tag other than 1 or 2.
    #[error("unknown channel tag {tag} at offset {offset}")]
    UnknownChannel { tag: u8, offset: usize },

    /// The payload exceeds the configured (or wire-representable) maximum.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
