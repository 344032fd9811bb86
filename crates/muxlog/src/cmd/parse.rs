use std::fs;
use std::io::Read;
use std::path::Path;

use muxlog_frame::{demultiplex_strict, DemuxConfig};
use muxlog_result::{
    build, classify, failure_report, format, format_for_display, summarize, ExecutionRecord,
    ExecutionResult,
};
use tracing::{debug, info};

use crate::cmd::ParseArgs;
use crate::exit::{frame_error, io_error, CliResult, SUCCESS};
use crate::output::{print_parse_report, OutputFormat, ParseReport};

pub fn run(args: ParseArgs, format_kind: OutputFormat) -> CliResult<i32> {
    let buffer = read_input(&args.input)?;
    debug!(size = buffer.len(), input = %args.input.display(), "read log buffer");

    let result = decode(&buffer, &args)?;
    info!(
        entries = result.entries().len(),
        exit_code = result.exit_code(),
        "parsed container log"
    );

    let mut record = ExecutionRecord::new(format(&result));
    if let Some(image) = &args.image {
        record = record.with_image(image.as_str());
    }
    if let Some(command) = &args.command {
        record = record.with_command(command.as_str());
    }

    let report = ParseReport {
        record,
        display: format_for_display(&result),
        error: classify(result.err_text()),
        summary: summarize(&result),
        failure: failure_report(&result),
    };
    print_parse_report(&report, format_kind);

    Ok(SUCCESS)
}

fn decode(buffer: &[u8], args: &ParseArgs) -> CliResult<ExecutionResult> {
    if !args.strict {
        return Ok(build(buffer, args.exit_code));
    }

    let config = DemuxConfig {
        max_payload_size: args
            .max_payload
            .unwrap_or(DemuxConfig::default().max_payload_size),
    };
    let entries = demultiplex_strict(buffer, &config)
        .map_err(|err| frame_error("strict decode failed", err))?;
    Ok(ExecutionResult::from_entries(entries, args.exit_code))
}

fn read_input(path: &Path) -> CliResult<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|err| io_error("failed reading stdin", err))?;
        return Ok(buf);
    }

    fs::read(path).map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bytes::BytesMut;
    use muxlog_frame::{encode_frame, encode_raw_frame, Channel};

    use super::*;
    use crate::exit::DATA_INVALID;

    fn args(strict: bool) -> ParseArgs {
        ParseArgs {
            input: PathBuf::from("-"),
            exit_code: 0,
            strict,
            max_payload: None,
            image: None,
            command: None,
        }
    }

    #[test]
    fn lenient_decode_skips_unknown_tags() {
        let mut buf = BytesMut::new();
        encode_raw_frame(5, b"noise", &mut buf).unwrap();
        encode_frame(Channel::Out, b"kept", &mut buf).unwrap();

        let result = decode(&buf, &args(false)).unwrap();
        assert_eq!(result.out_text(), "kept");
    }

    #[test]
    fn strict_decode_rejects_unknown_tags() {
        let mut buf = BytesMut::new();
        encode_raw_frame(5, b"noise", &mut buf).unwrap();

        let err = decode(&buf, &args(true)).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn strict_decode_honors_max_payload() {
        let mut buf = BytesMut::new();
        encode_frame(Channel::Err, b"0123456789", &mut buf).unwrap();

        let mut strict = args(true);
        strict.max_payload = Some(4);
        let err = decode(&buf, &strict).unwrap_err();
        assert!(err.message.contains("payload too large"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_input(Path::new("/nonexistent/muxlog/input.log")).unwrap_err();
        assert!(err.message.starts_with("failed reading /nonexistent/muxlog/input.log"));
    }
}
