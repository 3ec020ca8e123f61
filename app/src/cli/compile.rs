use std::path::PathBuf;

use mibc_lang_driver::{
    CompileOptions, Compiler, FileReader, FileSearcher, FileWriter, Outcome, Reader, Searcher,
    StubSearcher, Writer,
};
use mibc_lang_parser::DialectConfig;

use crate::result::AppError;

#[derive(clap::Args)]
pub struct Args {
    /// Directory to read MIB sources from, may be given several times
    #[clap(long = "mib-source", value_name = "DIR", default_value = ".")]
    mib_sources: Vec<PathBuf>,
    /// Directory the compiled modules are written to
    #[clap(long, value_name = "DIR", default_value = "mibs")]
    destination: PathBuf,
    /// Grammar dialect: smiv2, smiv1 or smiv1-relaxed
    #[clap(long, default_value = "smiv2")]
    dialect: DialectConfig,
    /// Compile even if the destination holds the module already
    #[clap(long)]
    rebuild: bool,
    /// Do not compile imported modules
    #[clap(long)]
    no_deps: bool,
    /// Compile but do not write anything
    #[clap(long)]
    dry_run: bool,
    /// Leave descriptions and other documentation out of the output
    #[clap(long)]
    no_docs: bool,
    #[clap(value_name = "MODULE", required = true)]
    modules: Vec<String>,
}

pub fn exec(args: Args) -> miette::Result<()> {
    let mut compiler = Compiler::new(args.dialect);
    compiler
        .add_sources([Box::new(FileReader::with_dirs(&args.mib_sources)) as Box<dyn Reader>])
        .add_searchers([
            Box::new(StubSearcher::base_modules()) as Box<dyn Searcher>,
            Box::new(FileSearcher::new(&args.destination)),
        ])
        .add_writers([Box::new(FileWriter::new(&args.destination)) as Box<dyn Writer>]);

    let options = CompileOptions {
        rebuild: args.rebuild,
        no_deps: args.no_deps,
        keep_documentation: !args.no_docs,
        dry_run: args.dry_run,
    };
    let report = compiler.compile(&args.modules, &options);

    for (name, outcome) in &report.outcomes {
        println!("{name}: {outcome}");
    }
    for (name, errors) in &report.errors {
        for err in errors {
            log::error!("{name}: {err}");
        }
    }

    let not_compiled: Vec<&str> = args
        .modules
        .iter()
        .filter(|module| {
            !matches!(report.outcome(module), Some(Outcome::Compiled | Outcome::Unchanged))
        })
        .map(String::as_str)
        .collect();
    if not_compiled.is_empty() {
        Ok(())
    } else {
        Err(AppError::NotCompiled(format!("Not compiled: {}", not_compiled.join(", "))).into())
    }
}
