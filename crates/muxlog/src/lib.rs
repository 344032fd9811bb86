//! Container log demultiplexing and result classification.
//!
//! muxlog decodes the multiplexed stdout/stderr buffer a container engine
//! returns from its logs endpoint and turns it, together with the process
//! exit code, into a typed result for workflow runtimes.
//!
//! # Crate Structure
//!
//! - [`frame`]: Wire format, channels, and the lenient/strict demultiplexers
//! - [`result`]: Execution results, formatting, classification, sanitizing, summaries
//!
//! ```
//! use muxlog::frame::{encode_frame, Channel};
//! use muxlog::result::{build, classify, format};
//!
//! let mut buf = bytes::BytesMut::new();
//! encode_frame(Channel::Err, b"Error: No such image: nonexistent:latest", &mut buf).unwrap();
//!
//! let result = build(&buf, 1);
//! assert!(!format(&result).success);
//! assert!(classify(result.err_text()).has_error());
//! ```

/// Re-export frame types.
pub mod frame {
    pub use muxlog_frame::*;
}

/// Re-export result types.
pub mod result {
    pub use muxlog_result::*;
}
