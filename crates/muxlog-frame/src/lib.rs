//! Decoder for the multiplexed stdout/stderr stream returned by a container
//! engine's "fetch logs" call.
//!
//! Every chunk of output is framed with:
//! - A 1-byte channel tag (`1` stdout, `2` stderr)
//! - 3 reserved bytes
//! - A 4-byte big-endian payload length
//!
//! [`demultiplex`] is total: truncated tails are dropped and unknown tags are
//! skipped. [`demultiplex_strict`] reports the same conditions as errors.

pub mod channel;
pub mod codec;
pub mod demux;
pub mod entry;
pub mod error;

pub use channel::{Channel, STDERR_TAG, STDOUT_TAG};
pub use codec::{
    decode_frame, encode_frame, encode_raw_frame, DecodeStep, DemuxConfig, DEFAULT_MAX_PAYLOAD,
    HEADER_SIZE,
};
pub use demux::{demultiplex, demultiplex_bytes, demultiplex_strict};
pub use entry::LogEntry;
pub use error::{FrameError, Result};
