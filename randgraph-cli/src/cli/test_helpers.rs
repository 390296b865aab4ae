//! Small helpers shared across CLI tests.

use std::path::Path;

use super::commands::{run_generate, run_inspect};
use super::{CliError, ExecutionSummary, GenerateCommand, InspectCommand};

pub(super) fn generate_command(output: &Path, vertices: usize, seed: u64) -> GenerateCommand {
    GenerateCommand {
        vertices,
        output: output.to_path_buf(),
        seed: Some(seed),
        id_length: 12,
    }
}

pub(super) fn generate_expecting_success(command: GenerateCommand) -> ExecutionSummary {
    match run_generate(command) {
        Ok(summary) => summary,
        Err(err) => panic!("generate must succeed: {err}"),
    }
}

pub(super) fn inspect_expecting_error(path: &Path, panic_msg: &str) -> CliError {
    match run_inspect(InspectCommand {
        path: path.to_path_buf(),
    }) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
