use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod classify;
pub mod encode;
pub mod parse;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Demultiplex a captured log buffer and report the result.
    Parse(ParseArgs),
    /// Build a multiplexed log buffer from text frames.
    Encode(EncodeArgs),
    /// Classify a stderr message.
    Classify(ClassifyArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Parse(args) => parse::run(args, format),
        Command::Encode(args) => encode::run(args),
        Command::Classify(args) => classify::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Log buffer file, or `-` for stdin.
    pub input: PathBuf,
    /// Exit code the container process reported.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub exit_code: i64,
    /// Reject truncated frames and unknown channel tags instead of skipping them.
    #[arg(long)]
    pub strict: bool,
    /// Largest frame payload accepted in strict mode, in bytes.
    #[arg(long, value_name = "BYTES", requires = "strict")]
    pub max_payload: Option<usize>,
    /// Image name to attach to the result record.
    #[arg(long)]
    pub image: Option<String>,
    /// Command to attach to the result record.
    #[arg(long)]
    pub command: Option<String>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Frame as `out:TEXT` or `err:TEXT`. Repeat to add frames in order.
    #[arg(long = "frame", value_name = "CHANNEL:TEXT", required = true)]
    pub frames: Vec<String>,
    /// Write the buffer to a file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Stderr text to classify.
    pub text: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
