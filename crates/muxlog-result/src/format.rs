use serde::Serialize;

use crate::result::ExecutionResult;
use crate::sanitize::sanitize;

/// Minimal external-facing projection of an [`ExecutionResult`].
///
/// Raw bytes and per-entry detail are dropped. Field names on the wire follow
/// the workflow runtime's record keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResult {
    #[serde(rename = "stdout")]
    pub out_text: String,
    #[serde(rename = "stderr")]
    pub err_text: String,
    #[serde(rename = "exitCode")]
    pub exit_code: i64,
    pub success: bool,
    #[serde(rename = "hasOutput")]
    pub has_output: bool,
}

/// Project a result into its external shape, texts verbatim.
pub fn format(result: &ExecutionResult) -> FormattedResult {
    FormattedResult {
        out_text: result.out_text().to_string(),
        err_text: result.err_text().to_string(),
        exit_code: result.exit_code(),
        success: result.exit_code() == 0,
        has_output: result.has_out() || result.has_err(),
    }
}

/// Like [`format`], with both texts passed through [`sanitize`] for display.
///
/// `has_output` still reflects the raw streams, so output consisting only of
/// control characters counts as output.
pub fn format_for_display(result: &ExecutionResult) -> FormattedResult {
    let mut formatted = format(result);
    formatted.out_text = sanitize(&formatted.out_text);
    formatted.err_text = sanitize(&formatted.err_text);
    formatted
}
