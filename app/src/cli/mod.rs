use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mibc_lang_driver::render_reports_to_string;

use crate::global_settings::GlobalSettings;

mod check;
mod compile;
mod lex;

pub fn exec() -> ExitCode {
    use Command::*;
    let cli = Cli::parse();
    let settings = GlobalSettings::from_env();
    settings.init_logger();

    let result = match cli.command {
        Compile(args) => compile::exec(args),
        Check(args) => check::exec(args, &settings),
        Lex(args) => lex::exec(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprint!("{}", render_reports_to_string(&[report], settings.colorize));
            ExitCode::FAILURE
        }
    }
}

#[derive(Parser)]
#[clap(version, author, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile MIB modules and everything they import
    Compile(compile::Args),
    /// Parse a single file and build its symbol tables
    Check(check::Args),
    /// Print the tokens of a file
    Lex(lex::Args),
}
