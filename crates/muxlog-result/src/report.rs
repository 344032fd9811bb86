use serde::Serialize;

use crate::classify::{classify, ErrorKind};
use crate::result::ExecutionResult;
use crate::sanitize::sanitize;

/// User-facing description of a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    pub exit_code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

/// Describe a run that exited non-zero, using the classified stderr as detail.
///
/// Returns `None` for exit code 0; stderr text alone (warnings, progress)
/// does not make a run a failure.
pub fn failure_report(result: &ExecutionResult) -> Option<FailureReport> {
    let exit_code = result.exit_code();
    if exit_code == 0 {
        return None;
    }

    let classified = classify(result.err_text());
    let message = match classified.message().map(sanitize).filter(|m| !m.is_empty()) {
        Some(detail) => format!("container exited with code {exit_code}: {detail}"),
        None => format!("container exited with code {exit_code}"),
    };

    Some(FailureReport {
        exit_code,
        kind: classified.kind(),
        code: classified.code().map(str::to_string),
        message,
    })
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;
    use muxlog_frame::{encode_frame, Channel};

    use super::*;
    use crate::result::build;

    fn run(stdout: &str, stderr: &str, exit_code: i64) -> ExecutionResult {
        let mut buf = BytesMut::new();
        if !stdout.is_empty() {
            encode_frame(Channel::Out, stdout.as_bytes(), &mut buf).unwrap();
        }
        if !stderr.is_empty() {
            encode_frame(Channel::Err, stderr.as_bytes(), &mut buf).unwrap();
        }
        build(&buf, exit_code)
    }

    #[test]
    fn clean_run_has_no_report() {
        assert_eq!(failure_report(&run("ok\n", "", 0)), None);
        assert_eq!(failure_report(&run("", "  \n", 0)), None);
    }

    #[test]
    fn missing_image_report() {
        let report = failure_report(&run("", "Error: No such image: nonexistent:latest", 1)).unwrap();
        assert_eq!(report.kind, Some(ErrorKind::ImageNotFound));
        assert_eq!(
            report.message,
            "container exited with code 1: Error: No such image: nonexistent:latest"
        );
    }

    #[test]
    fn non_zero_exit_without_stderr() {
        let report = failure_report(&run("partial\n", "", 137)).unwrap();
        assert_eq!(report.kind, None);
        assert_eq!(report.message, "container exited with code 137");
    }

    #[test]
    fn stderr_with_zero_exit_is_not_a_failure() {
        assert_eq!(failure_report(&run("done\n", "warning: slow disk\n", 0)), None);
        assert_eq!(failure_report(&run("", "cat: /x: Permission denied\n", 0)), None);
    }

    #[test]
    fn permission_error_with_non_zero_exit() {
        let report = failure_report(&run("", "cat: /x: Permission denied\n", 1)).unwrap();
        assert_eq!(report.kind, Some(ErrorKind::PermissionError));
        assert_eq!(report.message, "container exited with code 1: cat: /x: Permission denied");
    }

    #[test]
    fn message_is_sanitized() {
        let report = failure_report(&run("", "\u{1b}[31mexit code 3\u{1b}[0m\n", 3)).unwrap();
        assert_eq!(report.code.as_deref(), Some("3"));
        assert_eq!(report.message, "container exited with code 3: [31mexit code 3[0m");
    }
}
