use muxlog_result::classify;

use crate::cmd::ClassifyArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_classification, OutputFormat};

pub fn run(args: ClassifyArgs, format: OutputFormat) -> CliResult<i32> {
    let classified = classify(&args.text);
    print_classification(&classified, format);
    Ok(SUCCESS)
}
