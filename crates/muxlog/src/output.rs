use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use muxlog_result::{ClassifiedError, ExecutionRecord, FailureReport, FormattedResult, LogSummary};
use serde::Serialize;

const PARSE_SCHEMA_ID: &str = "https://schemas.3leaps.dev/muxlog/cli/v1/parse-report.schema.json";
const CLASSIFY_SCHEMA_ID: &str =
    "https://schemas.3leaps.dev/muxlog/cli/v1/classification.schema.json";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Everything `muxlog parse` reports about one log buffer.
pub struct ParseReport {
    pub record: ExecutionRecord,
    pub display: FormattedResult,
    pub error: ClassifiedError,
    pub summary: LogSummary,
    pub failure: Option<FailureReport>,
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    schema_id: &'a str,
    result: serde_json::Value,
    error: &'a ClassifiedError,
    summary: &'a LogSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<&'a FailureReport>,
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    schema_id: &'a str,
    #[serde(flatten)]
    error: &'a ClassifiedError,
}

pub fn print_parse_report(report: &ParseReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ParseOutput {
                schema_id: PARSE_SCHEMA_ID,
                result: report.record.to_json(),
                error: &report.error,
                summary: &report.summary,
                failure: report.failure.as_ref(),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let formatted = report.record.formatted();
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"])
                .add_row(vec!["exit code".to_string(), formatted.exit_code.to_string()])
                .add_row(vec!["success".to_string(), formatted.success.to_string()])
                .add_row(vec![
                    "entries".to_string(),
                    format!(
                        "{} (stdout {}, stderr {})",
                        report.summary.total_entries,
                        report.summary.out_entries,
                        report.summary.err_entries
                    ),
                ])
                .add_row(vec![
                    "size".to_string(),
                    format!(
                        "stdout {} B, stderr {} B",
                        report.summary.out_size, report.summary.err_size
                    ),
                ])
                .add_row(vec!["stdout".to_string(), report.display.out_text.clone()])
                .add_row(vec!["stderr".to_string(), report.display.err_text.clone()])
                .add_row(vec!["error".to_string(), error_cell(&report.error)]);
            if let Some(failure) = &report.failure {
                table.add_row(vec!["failure".to_string(), failure.message.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let formatted = report.record.formatted();
            println!(
                "exit_code={} success={} entries={} mixed={} error={}",
                formatted.exit_code,
                formatted.success,
                report.summary.total_entries,
                report.summary.has_mixed_streams,
                error_cell(&report.error)
            );
            if !report.display.out_text.is_empty() {
                println!("--- stdout ---\n{}", report.display.out_text);
            }
            if !report.display.err_text.is_empty() {
                println!("--- stderr ---\n{}", report.display.err_text);
            }
            if let Some(failure) = &report.failure {
                println!("failure: {}", failure.message);
            }
        }
        OutputFormat::Raw => {
            for text in [&report.display.out_text, &report.display.err_text] {
                if !text.is_empty() {
                    print_raw(text.as_bytes());
                    print_raw(b"\n");
                }
            }
        }
    }
}

pub fn print_classification(error: &ClassifiedError, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&ClassifyOutput {
            schema_id: CLASSIFY_SCHEMA_ID,
            error,
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["HAS ERROR", "KIND", "CODE", "MESSAGE"])
                .add_row(vec![
                    error.has_error().to_string(),
                    error.kind().map(|k| k.to_string()).unwrap_or_default(),
                    error.code().unwrap_or_default().to_string(),
                    error.message().unwrap_or_default().to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => println!("{}", error_cell(error)),
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn error_cell(error: &ClassifiedError) -> String {
    match (error.kind(), error.code(), error.message()) {
        (Some(kind), Some(code), Some(message)) => format!("{kind} (code {code}): {message}"),
        (Some(kind), None, Some(message)) => format!("{kind}: {message}"),
        _ => "none".to_string(),
    }
}
