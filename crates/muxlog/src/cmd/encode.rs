use std::fs;

use bytes::BytesMut;
use muxlog_frame::{encode_frame, Channel};
use tracing::debug;

use crate::cmd::EncodeArgs;
use crate::exit::{frame_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::print_raw;

pub fn run(args: EncodeArgs) -> CliResult<i32> {
    let mut buf = BytesMut::new();
    for spec in &args.frames {
        let (channel, text) = parse_frame_spec(spec)?;
        encode_frame(channel, text.as_bytes(), &mut buf)
            .map_err(|err| frame_error("encode failed", err))?;
    }
    debug!(frames = args.frames.len(), size = buf.len(), "encoded log buffer");

    match &args.output {
        Some(path) => fs::write(path, &buf)
            .map_err(|err| io_error(&format!("failed writing {}", path.display()), err))?,
        None => print_raw(&buf),
    }

    Ok(SUCCESS)
}

fn parse_frame_spec(spec: &str) -> CliResult<(Channel, &str)> {
    let (name, text) = spec.split_once(':').ok_or_else(|| {
        CliError::new(USAGE, format!("frame must be CHANNEL:TEXT, got {spec:?}"))
    })?;

    let channel = match name {
        "out" | "stdout" => Channel::Out,
        "err" | "stderr" => Channel::Err,
        other => {
            return Err(CliError::new(
                USAGE,
                format!("unknown channel {other:?} (expected out or err)"),
            ))
        }
    };

    Ok((channel, text))
}
