use std::borrow::Cow;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap as HashMap;

use crate::result::DriverError;

/// Source text of a module and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Path or other description of the origin, for messages.
    pub origin: String,
    pub text: String,
}

/// Supplies the source text of modules by name.
pub trait Reader {
    /// `Ok(None)` if this reader does not know the module.
    fn read(&mut self, module: &str) -> Result<Option<Source>, DriverError>;
}

/// Reads modules from a set of directories.
///
/// For each directory, the module name is tried as written, upper-cased and
/// lower-cased, each bare and with the suffixes `.txt`, `.mib` and `.my`.
pub struct FileReader {
    dirs: Vec<PathBuf>,
}

const SUFFIXES: [&str; 4] = ["", ".txt", ".mib", ".my"];

impl FileReader {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dirs: vec![dir.as_ref().to_path_buf()] }
    }

    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self { dirs: dirs.into_iter().map(|dir| dir.as_ref().to_path_buf()).collect() }
    }

    fn candidates<'a>(&'a self, module: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        let mut names = vec![module.to_owned(), module.to_uppercase(), module.to_lowercase()];
        names.dedup();
        self.dirs.iter().flat_map(move |dir| {
            let names = names.clone();
            names.into_iter().flat_map(move |name| {
                SUFFIXES.iter().map(move |suffix| dir.join(format!("{name}{suffix}")))
            })
        })
    }
}

impl Reader for FileReader {
    fn read(&mut self, module: &str) -> Result<Option<Source>, DriverError> {
        let Some(path) = self.candidates(module).find(|path| path.is_file()) else {
            log::trace!("No file for {module}");
            return Ok(None);
        };
        log::debug!("Reading {module} from {}", path.display());
        let bytes = std::fs::read(&path).map_err(|err| DriverError::Reader {
            module: module.to_owned(),
            message: format!("{}: {err}", path.display()),
        })?;
        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            log::debug!("{} is not valid UTF-8, replacing invalid bytes", path.display());
        }
        // Spans are identical on all platforms only with Unix line endings.
        let text = text.replace("\r\n", "\n");
        Ok(Some(Source { origin: path.display().to_string(), text }))
    }
}

/// Keeps module sources in memory.
#[derive(Default)]
pub struct InMemoryReader {
    sources: HashMap<String, String>,
}

impl InMemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, module: impl Into<String>, text: impl Into<String>) {
        self.sources.insert(module.into(), text.into());
    }

    pub fn with(mut self, module: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(module, text);
        self
    }
}

impl Reader for InMemoryReader {
    fn read(&mut self, module: &str) -> Result<Option<Source>, DriverError> {
        Ok(self
            .sources
            .get(module)
            .map(|text| Source { origin: format!("<memory>/{module}"), text: text.clone() }))
    }
}

/// Asks a closure for the source text.
pub struct CallbackReader<F> {
    callback: F,
}

impl<F> CallbackReader<F>
where
    F: FnMut(&str) -> Option<String>,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Reader for CallbackReader<F>
where
    F: FnMut(&str) -> Option<String>,
{
    fn read(&mut self, module: &str) -> Result<Option<Source>, DriverError> {
        let origin = format!("<callback>/{module}");
        Ok((self.callback)(module).map(|text| Source { origin, text }))
    }
}
