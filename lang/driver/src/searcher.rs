use std::path::{Path, PathBuf};

use fxhash::FxHashSet as HashSet;

use crate::result::DriverError;

/// Finds already compiled modules, which are then not compiled again.
pub trait Searcher {
    /// Location of an up-to-date artifact of `module`, if there is one.
    ///
    /// With `rebuild` set, artifacts on disk do not count as up to date.
    fn find(&mut self, module: &str, rebuild: bool) -> Result<Option<String>, DriverError>;
}

/// Claims a fixed set of modules as compiled, rebuild or not.
///
/// Used for modules that are built in, such as the base modules.
pub struct StubSearcher {
    modules: HashSet<String>,
}

impl StubSearcher {
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { modules: modules.into_iter().map(Into::into).collect() }
    }

    /// The built-in base modules.
    pub fn base_modules() -> Self {
        Self::new(mibc_lang_lowering::base_modules::BASE_MODULES)
    }
}

impl Searcher for StubSearcher {
    fn find(&mut self, module: &str, _rebuild: bool) -> Result<Option<String>, DriverError> {
        Ok(self.modules.contains(module).then(|| "<built-in>".to_owned()))
    }
}

/// Looks for `<dir>/<MODULE>.json` as written by [`crate::FileWriter`].
pub struct FileSearcher {
    dir: PathBuf,
}

impl FileSearcher {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }
}

impl Searcher for FileSearcher {
    fn find(&mut self, module: &str, rebuild: bool) -> Result<Option<String>, DriverError> {
        if rebuild {
            return Ok(None);
        }
        let path = self.dir.join(format!("{module}.json"));
        match path.try_exists() {
            Ok(true) => Ok(Some(path.display().to_string())),
            Ok(false) => Ok(None),
            Err(err) => {
                Err(DriverError::Searcher { module: module.to_owned(), message: err.to_string() })
            }
        }
    }
}
