use std::ops::Range;

use bytes::{BufMut, BytesMut};

use crate::channel::Channel;
use crate::error::{FrameError, Result};

/// Frame header: channel tag (1) + reserved (3) + length (4) = 8 bytes.
pub const HEADER_SIZE: usize = 8;

/// Default maximum payload size accepted by strict decoding: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Outcome of decoding the frame that starts at a given offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStep {
    /// The offset sits exactly at the end of the buffer.
    End,
    /// A complete frame. `tag` is the raw channel byte, which may be unknown.
    Frame {
        tag: u8,
        payload: Range<usize>,
        next: usize,
    },
    /// Between 1 and 7 bytes remain; not enough for a header.
    TruncatedHeader { remaining: usize },
    /// The header is complete but its payload runs past the buffer end.
    TruncatedPayload { declared: usize, available: usize },
}

/// Decode the frame header at `offset` and locate its payload.
///
/// Wire format:
/// ```text
/// ┌──────────┬────────────────┬─────────────┬──────────────────┐
/// │ Tag (1B) │ Reserved (3B)  │ Length      │ Payload          │
/// │ 1 | 2    │ ignored        │ (4B BE u32) │ (Length bytes)   │
/// └──────────┴────────────────┴─────────────┴──────────────────┘
/// ```
///
/// Never fails; truncation is reported as a step so callers decide
/// whether it is fatal.
pub fn decode_frame(buf: &[u8], offset: usize) -> DecodeStep {
    let remaining = buf.len().saturating_sub(offset);
    if remaining == 0 {
        return DecodeStep::End;
    }
    if remaining < HEADER_SIZE {
        return DecodeStep::TruncatedHeader { remaining };
    }

    let header = &buf[offset..offset + HEADER_SIZE];
    let tag = header[0];
    let declared = u32::from_be_bytes([header[4], header[5], header[6], header[7]]) as usize;

    let start = offset + HEADER_SIZE;
    let available = remaining - HEADER_SIZE;
    if declared > available {
        return DecodeStep::TruncatedPayload {
            declared,
            available,
        };
    }

    let end = start + declared;
    DecodeStep::Frame {
        tag,
        payload: start..end,
        next: end,
    }
}

/// Append one frame for `channel` to `dst`. Reserved header bytes are zeroed.
pub fn encode_frame(channel: Channel, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    encode_raw_frame(channel.tag(), payload, dst)
}

/// Append one frame with an arbitrary tag byte, including tags the decoder skips.
pub fn encode_raw_frame(tag: u8, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > u32::MAX as usize {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: u32::MAX as usize,
        });
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_u8(tag);
    dst.put_slice(&[0, 0, 0]);
    dst.put_u32(payload.len() as u32);
    dst.put_slice(payload);
    Ok(())
}

/// Configuration for strict demultiplexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemuxConfig {
    /// Largest payload a single frame may declare. Default: 16 MiB.
    pub max_payload_size: usize,
}

impl Default for DemuxConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}
