use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use miette::{NamedSource, Report};
use mibc_lang_lowering::{SymbolTable, build_symbol_table};
use mibc_lang_parser::{DialectConfig, parse};

use crate::global_settings::GlobalSettings;
use crate::result::AppError;

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
    /// Grammar dialect: smiv2, smiv1 or smiv1-relaxed
    #[clap(long, default_value = "smiv2")]
    dialect: DialectConfig,
}

pub fn exec(cmd: Args, settings: &GlobalSettings) -> miette::Result<()> {
    let path = cmd.filepath.display().to_string();
    let src = fs::read_to_string(&cmd.filepath)
        .map_err(|source| AppError::Read { path: cmd.filepath.clone(), source })?;
    let src = src.replace("\r\n", "\n");

    let modules = parse(&src, cmd.dialect)
        .map_err(|err| Report::new(err).with_source_code(NamedSource::new(&path, src.clone())))?;

    // Modules later in the file may import from earlier ones.
    let mut tables = BTreeMap::<String, SymbolTable>::new();
    for module in &modules {
        let build = build_symbol_table(module, &tables, true);
        if !build.warnings.is_empty() {
            let reports: Vec<Report> = build
                .warnings
                .into_iter()
                .map(|warning| {
                    Report::new(warning).with_source_code(NamedSource::new(&path, src.clone()))
                })
                .collect();
            eprint!("{}", mibc_lang_driver::render_reports_to_string(&reports, settings.colorize));
        }
        println!(
            "{}: {} declarations, {} local symbols, {} symbols",
            module.name,
            module.decls.len(),
            build.table.local_symbols().len(),
            build.table.symbols().len()
        );
        tables.insert(module.name.id.clone(), build.table);
    }
    println!("{path} checked successfully!");
    Ok(())
}
