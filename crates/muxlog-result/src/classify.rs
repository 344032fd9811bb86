//! Classification of a process's stderr into a closed set of failure kinds.
//!
//! The last non-blank line of stderr is taken as the failure message, since
//! diagnostics usually end with the most specific line. The message is then
//! matched case-insensitively against ordered rules; the first match wins and
//! [`ErrorKind::Unknown`] catches everything else.

use serde::Serialize;
use tracing::trace;

/// Failure categories recognized in stderr output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The container image does not exist locally or in the registry.
    ImageNotFound,
    /// The engine or the process was refused access to a resource.
    PermissionError,
    /// The process reported a non-zero exit code in its output.
    NonZeroExit,
    /// The requested command or resource could not be found.
    CommandNotFound,
    /// Anything no other rule recognized.
    Unknown,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ImageNotFound => "ImageNotFound",
            ErrorKind::PermissionError => "PermissionError",
            ErrorKind::NonZeroExit => "NonZeroExit",
            ErrorKind::CommandNotFound => "CommandNotFound",
            ErrorKind::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying stderr text.
///
/// `message` and `kind` are present exactly when `has_error` is true; `code`
/// is present only for [`ErrorKind::NonZeroExit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedError {
    has_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl ClassifiedError {
    fn none() -> Self {
        Self {
            has_error: false,
            message: None,
            kind: None,
            code: None,
        }
    }

    fn error(message: String, kind: ErrorKind, code: Option<String>) -> Self {
        Self {
            has_error: true,
            message: Some(message),
            kind: Some(kind),
            code,
        }
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    /// Exit code digits captured from the message, for [`ErrorKind::NonZeroExit`].
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// Classify stderr text. Blank input means no error.
pub fn classify(err_text: &str) -> ClassifiedError {
    let Some(message) = last_message_line(err_text) else {
        return ClassifiedError::none();
    };

    let (kind, code) = match_rules(message);
    trace!(%kind, code = code.as_deref(), "classified stderr");
    ClassifiedError::error(message.to_string(), kind, code)
}

fn last_message_line(text: &str) -> Option<&str> {
    text.split(['\n', '\r'])
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
}

fn match_rules(message: &str) -> (ErrorKind, Option<String>) {
    let lower = message.to_ascii_lowercase();

    if lower.contains("no such image") {
        return (ErrorKind::ImageNotFound, None);
    }
    if lower.contains("permission denied") {
        return (ErrorKind::PermissionError, None);
    }
    if let Some(code) = exit_code_digits(&lower) {
        return (ErrorKind::NonZeroExit, Some(code.to_string()));
    }
    if lower.contains("not found") {
        return (ErrorKind::CommandNotFound, None);
    }
    (ErrorKind::Unknown, None)
}

/// Find "exit code" followed by digits, allowing blanks and one `:` between.
fn exit_code_digits(lower: &str) -> Option<&str> {
    const NEEDLE: &str = "exit code";

    lower.match_indices(NEEDLE).find_map(|(idx, _)| {
        let rest = lower[idx + NEEDLE.len()..].trim_start_matches([' ', '\t']);
        let rest = rest.strip_prefix(':').unwrap_or(rest);
        let rest = rest.trim_start_matches([' ', '\t']);
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    })
}
