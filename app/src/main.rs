use std::process::ExitCode;

mod cli;
mod global_settings;
mod result;

fn main() -> ExitCode {
    cli::exec()
}
