use std::time::{SystemTime, UNIX_EPOCH};

use muxlog_frame::Channel;
use serde::{Serialize, Serializer};

use crate::result::ExecutionResult;

/// Aggregate statistics over a result's entries.
///
/// `out_size` and `err_size` are UTF-8 byte lengths, not character counts:
/// non-ASCII characters take 2 to 4 bytes, and each U+FFFD substituted for
/// invalid input takes 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSummary {
    pub total_entries: usize,
    pub out_entries: usize,
    pub err_entries: usize,
    /// Byte length of the decoded stdout text.
    pub out_size: usize,
    /// Byte length of the decoded stderr text.
    pub err_size: usize,
    #[serde(serialize_with = "serialize_unix_millis")]
    pub last_observed_at: Option<SystemTime>,
    pub has_mixed_streams: bool,
}

pub fn summarize(result: &ExecutionResult) -> LogSummary {
    let entries = result.entries();
    let out_entries = entries
        .iter()
        .filter(|e| e.channel() == Channel::Out)
        .count();
    let err_entries = entries.len() - out_entries;

    LogSummary {
        total_entries: entries.len(),
        out_entries,
        err_entries,
        out_size: result.out_text().len(),
        err_size: result.err_text().len(),
        last_observed_at: entries.last().map(|e| e.observed_at()),
        has_mixed_streams: out_entries > 0 && err_entries > 0,
    }
}

fn serialize_unix_millis<S: Serializer>(
    value: &Option<SystemTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(at) => {
            let millis = at
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0);
            serializer.serialize_some(&millis)
        }
        None => serializer.serialize_none(),
    }
}
