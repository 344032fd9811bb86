//! Typed results over demultiplexed container logs.
//!
//! A log buffer and exit code go in through [`build`]; out come the
//! separated streams ([`ExecutionResult`]), the runtime-facing projection
//! ([`format`]), a stderr classification ([`classify`]) and entry statistics
//! ([`summarize`]). Text headed for users passes through [`sanitize`].
//!
//! Everything here is a pure function over in-memory values.

pub mod classify;
pub mod format;
pub mod record;
pub mod report;
pub mod result;
pub mod sanitize;
pub mod separate;
pub mod summary;

pub use classify::{classify, ClassifiedError, ErrorKind};
pub use format::{format, format_for_display, FormattedResult};
pub use record::ExecutionRecord;
pub use report::{failure_report, FailureReport};
pub use result::{build, ExecutionResult};
pub use sanitize::{sanitize, sanitize_opt};
pub use separate::{separate, SeparatedStreams};
pub use summary::{summarize, LogSummary};
