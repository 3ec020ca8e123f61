use std::collections::BTreeMap;

use mibc_lang_lowering::base_modules::is_base_module;
use mibc_lang_lowering::{SymbolTable, build_symbol_table, ir, lower_module};
use mibc_lang_parser::{DialectConfig, cst, parse};

use crate::dependency_graph::DependencyGraph;
use crate::reader::{Reader, Source};
use crate::registry::{Outcome, Registry};
use crate::result::DriverError;
use crate::searcher::Searcher;
use crate::writer::Writer;

/// Flags of one compile run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Compile even when a searcher reports an up-to-date artifact on disk.
    pub rebuild: bool,
    /// Compile only the requested modules, not their imports.
    pub no_deps: bool,
    /// Keep `DESCRIPTION`, `REFERENCE` and the like in the output.
    pub keep_documentation: bool,
    /// Do everything except writing.
    pub dry_run: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { rebuild: false, no_deps: false, keep_documentation: true, dry_run: false }
    }
}

/// Result of [`Compiler::compile`].
#[derive(Debug, Default)]
pub struct CompileReport {
    /// Outcome of every module the run touched, requested or imported.
    pub outcomes: BTreeMap<String, Outcome>,
    /// Errors by module name. Modules without errors have no entry.
    pub errors: BTreeMap<String, Vec<DriverError>>,
}

impl CompileReport {
    pub fn outcome(&self, module: &str) -> Option<Outcome> {
        self.outcomes.get(module).copied()
    }

    pub fn errors(&self, module: &str) -> &[DriverError] {
        self.errors.get(module).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Compiles modules and everything they import.
///
/// Sources come from the readers, tried in the order they were added. Before
/// a module is read, the searchers are asked whether it is compiled already.
/// Every compiled module is passed to all writers.
pub struct Compiler {
    dialect: DialectConfig,
    readers: Vec<Box<dyn Reader>>,
    searchers: Vec<Box<dyn Searcher>>,
    writers: Vec<Box<dyn Writer>>,
}

impl Compiler {
    pub fn new(dialect: DialectConfig) -> Self {
        Self { dialect, readers: Vec::new(), searchers: Vec::new(), writers: Vec::new() }
    }

    pub fn add_sources<I>(&mut self, readers: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<dyn Reader>>,
    {
        self.readers.extend(readers);
        self
    }

    pub fn add_searchers<I>(&mut self, searchers: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<dyn Searcher>>,
    {
        self.searchers.extend(searchers);
        self
    }

    pub fn add_writers<I>(&mut self, writers: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<dyn Writer>>,
    {
        self.writers.extend(writers);
        self
    }

    /// Compile `modules` and, unless [`CompileOptions::no_deps`] is set, all
    /// modules they import, directly or not.
    ///
    /// Each module is loaded at most once per call, also within import
    /// cycles. A module whose import is missing or failed is still compiled,
    /// with the imported names treated as unknown.
    pub fn compile<I, S>(&mut self, modules: I, options: &CompileOptions) -> CompileReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Compiler { dialect, readers, searchers, writers } = self;
        let mut session = Session {
            dialect: *dialect,
            options,
            readers,
            searchers,
            writers,
            registry: Registry::default(),
            tables: BTreeMap::new(),
            deps: DependencyGraph::default(),
            errors: BTreeMap::new(),
        };
        for module in modules {
            session.request(module.as_ref());
        }
        session.finish()
    }
}

/// State of one [`Compiler::compile`] call.
struct Session<'a> {
    dialect: DialectConfig,
    options: &'a CompileOptions,
    readers: &'a mut [Box<dyn Reader>],
    searchers: &'a mut [Box<dyn Searcher>],
    writers: &'a mut [Box<dyn Writer>],
    registry: Registry,
    /// Symbol tables by module name. Modules still in progress have a
    /// preliminary table here, built before their imports were available.
    tables: BTreeMap<String, SymbolTable>,
    deps: DependencyGraph,
    errors: BTreeMap<String, Vec<DriverError>>,
}

impl Session<'_> {
    fn request(&mut self, name: &str) {
        if !self.registry.start(name) {
            log::trace!("{name} is already known");
            return;
        }
        log::debug!("Loading {name}");

        let up_to_date = match self.search(name) {
            Some(location) if is_base_module(name) => {
                log::info!("{name}: {} ({location})", Outcome::Unchanged);
                self.registry.finish(name, Outcome::Unchanged);
                return;
            }
            Some(location) => {
                // Dependents still need the symbol table of the artifact.
                log::debug!("{name} is up to date at {location}");
                true
            }
            None => false,
        };

        let source = match self.read(name) {
            Ok(source) => source,
            Err(_) if up_to_date => {
                log::warn!("No source found for {name}, importers see its names as unknown");
                self.registry.finish(name, Outcome::Unchanged);
                return;
            }
            Err(outcome) => {
                log::warn!("No source found for {name}");
                self.registry.finish(name, outcome);
                return;
            }
        };

        let modules = match parse(&source.text, self.dialect) {
            Ok(modules) => modules,
            Err(err) => {
                log::warn!("Could not parse {}: {err}", source.origin);
                self.fail(name, err.into());
                return;
            }
        };
        if modules.is_empty() {
            self.fail(name, DriverError::NoModule { module: name.to_owned() });
            return;
        }

        // A source may declare modules under other names than the requested one.
        let declared_as_requested = modules.iter().any(|module| module.name.id == name);
        let fresh: Vec<&cst::Module> = modules
            .iter()
            .filter(|module| module.name.id == name || self.registry.start(&module.name.id))
            .collect();
        for (i, module) in fresh.into_iter().enumerate() {
            let alias = (i == 0 && !declared_as_requested).then_some(name);
            let write = !(up_to_date && (module.name.id == name || alias.is_some()));
            self.compile_module(module, alias, write);
        }
        if self.registry.is_loading(name) {
            // Every declared module had been loaded already.
            self.registry.finish(name, Outcome::Unchanged);
        }
    }

    /// Build the symbol table of `module` and lower it. Unless `write` is
    /// false, the lowered module is passed to the writers.
    fn compile_module(&mut self, module: &cst::Module, alias: Option<&str>, write: bool) {
        let name = module.name.id.as_str();
        let keep_documentation = self.options.keep_documentation;
        log::debug!("Compiling {name}");

        let preliminary = build_symbol_table(module, &self.tables, keep_documentation);
        self.insert_table(name, alias, preliminary.table);
        let imported = preliminary.info.imported;
        self.deps.insert(name.to_owned(), imported.clone());

        if self.options.no_deps {
            log::debug!("Not loading the imports of {name}");
        } else {
            for dep in &imported {
                self.request(dep);
            }
        }

        let build = build_symbol_table(module, &self.tables, keep_documentation);
        for warning in &build.warnings {
            log::warn!("{name}: {warning}");
        }
        let lowered = lower_module(module, &build.table, &build.info, keep_documentation);
        self.insert_table(name, alias, build.table);

        let outcome = if !write {
            Outcome::Unchanged
        } else if self.options.dry_run {
            log::debug!("Dry run, not writing {name}");
            Outcome::Compiled
        } else {
            self.write(&lowered)
        };
        log::info!("{name}: {outcome}");
        self.registry.finish(name, outcome);
        if let Some(alias) = alias {
            self.registry.finish(alias, outcome);
        }
    }

    fn insert_table(&mut self, name: &str, alias: Option<&str>, table: SymbolTable) {
        if let Some(alias) = alias {
            self.tables.insert(alias.to_owned(), table.clone());
        }
        self.tables.insert(name.to_owned(), table);
    }

    fn search(&mut self, name: &str) -> Option<String> {
        for searcher in self.searchers.iter_mut() {
            match searcher.find(name, self.options.rebuild) {
                Ok(Some(location)) => return Some(location),
                Ok(None) => {}
                Err(err) => record(&mut self.errors, name, err),
            }
        }
        None
    }

    /// The first source any reader has for `name`. Without one, the module
    /// is [`Outcome::Failed`] if a reader returned an error and
    /// [`Outcome::Missing`] otherwise.
    fn read(&mut self, name: &str) -> Result<Source, Outcome> {
        let mut outcome = Outcome::Missing;
        for reader in self.readers.iter_mut() {
            match reader.read(name) {
                Ok(Some(source)) => return Ok(source),
                Ok(None) => {}
                Err(err) => {
                    log::warn!("Reading {name} failed: {err}");
                    record(&mut self.errors, name, err);
                    outcome = Outcome::Failed;
                }
            }
        }
        Err(outcome)
    }

    fn write(&mut self, module: &ir::Module) -> Outcome {
        let name = &module.info.name;
        let mut outcome = Outcome::Compiled;
        for writer in self.writers.iter_mut() {
            if let Err(err) = writer.write(module) {
                log::warn!("Writing {name} failed: {err}");
                record(&mut self.errors, name, err);
                outcome = Outcome::Failed;
            }
        }
        outcome
    }

    fn fail(&mut self, name: &str, err: DriverError) {
        record(&mut self.errors, name, err);
        log::info!("{name}: {}", Outcome::Failed);
        self.registry.finish(name, Outcome::Failed);
    }

    fn finish(self) -> CompileReport {
        log::trace!("Dependency tree:");
        self.deps.print_dependency_tree();
        CompileReport { outcomes: self.registry.into_outcomes(), errors: self.errors }
    }
}

fn record(errors: &mut BTreeMap<String, Vec<DriverError>>, name: &str, err: DriverError) {
    errors.entry(name.to_owned()).or_default().push(err);
}
