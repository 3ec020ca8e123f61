use std::fs;
use std::path::PathBuf;

use mibc_lang_parser::lexer::Lexer;

use crate::result::AppError;

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
}

pub fn exec(args: Args) -> miette::Result<()> {
    let src = fs::read_to_string(&args.filepath)
        .map_err(|source| AppError::Read { path: args.filepath.clone(), source })?;
    for tok in Lexer::new(&src) {
        match tok {
            Ok((start, tok, end)) => println!("{tok} at ({start},{end})"),
            Err((start, _, _)) => return Err(AppError::Lexical { start }.into()),
        }
    }
    Ok(())
}
