use bytes::Bytes;
use tracing::{debug, trace};

use crate::channel::Channel;
use crate::codec::{decode_frame, DecodeStep, DemuxConfig};
use crate::entry::{LogEntry, ObservationClock};
use crate::error::{FrameError, Result};

/// Decode a multiplexed log buffer into ordered entries.
///
/// Total over all inputs: a partial trailing header or payload ends the scan
/// with whatever was decoded so far, and frames with unknown channel tags are
/// skipped without stopping the scan.
pub fn demultiplex(buffer: &[u8]) -> Vec<LogEntry> {
    demultiplex_bytes(&Bytes::copy_from_slice(buffer))
}

/// Like [`demultiplex`], but entry payloads are zero-copy slices of `buffer`.
pub fn demultiplex_bytes(buffer: &Bytes) -> Vec<LogEntry> {
    let mut clock = ObservationClock::new();
    let mut entries = Vec::new();
    let mut offset = 0usize;

    loop {
        match decode_frame(buffer, offset) {
            DecodeStep::End => break,
            DecodeStep::TruncatedHeader { remaining } => {
                debug!(offset, remaining, "dropping partial frame header");
                break;
            }
            DecodeStep::TruncatedPayload {
                declared,
                available,
            } => {
                debug!(offset, declared, available, "dropping truncated frame payload");
                break;
            }
            DecodeStep::Frame { tag, payload, next } => {
                match Channel::from_tag(tag) {
                    Some(channel) => {
                        trace!(offset, %channel, size = payload.len(), "decoded frame");
                        entries.push(LogEntry::new(
                            channel,
                            buffer.slice(payload),
                            clock.observe(),
                        ));
                    }
                    None => {
                        debug!(offset, tag, size = payload.len(), "skipping frame with unknown channel tag");
                    }
                }
                offset = next;
            }
        }
    }

    entries
}

/// Decode a multiplexed log buffer, rejecting anything the lenient scan absorbs.
///
/// Fails on a partial trailing header or payload, an unknown channel tag, or
/// a frame declaring more than `config.max_payload_size` bytes.
pub fn demultiplex_strict(buffer: &[u8], config: &DemuxConfig) -> Result<Vec<LogEntry>> {
    let buffer = Bytes::copy_from_slice(buffer);
    let mut clock = ObservationClock::new();
    let mut entries = Vec::new();
    let mut offset = 0usize;

    loop {
        match decode_frame(&buffer, offset) {
            DecodeStep::End => return Ok(entries),
            DecodeStep::TruncatedHeader { remaining } => {
                return Err(FrameError::TruncatedHeader { offset, remaining });
            }
            DecodeStep::TruncatedPayload {
                declared,
                available,
            } => {
                check_payload_size(declared, config)?;
                return Err(FrameError::TruncatedPayload {
                    offset,
                    declared,
                    available,
                });
            }
            DecodeStep::Frame { tag, payload, next } => {
                check_payload_size(payload.len(), config)?;
                let channel =
                    Channel::from_tag(tag).ok_or(FrameError::UnknownChannel { tag, offset })?;
                entries.push(LogEntry::new(
                    channel,
                    buffer.slice(payload),
                    clock.observe(),
                ));
                offset = next;
            }
        }
    }
}

fn check_payload_size(size: usize, config: &DemuxConfig) -> Result<()> {
    if size > config.max_payload_size {
        return Err(FrameError::PayloadTooLarge {
            size,
            max: config.max_payload_size,
        });
    }
    Ok(())
}
