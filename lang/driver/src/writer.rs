use std::path::{Path, PathBuf};

use mibc_lang_lowering::ir;

use crate::result::DriverError;

/// Receives every successfully compiled module.
pub trait Writer {
    fn write(&mut self, module: &ir::Module) -> Result<(), DriverError>;
}

/// Writes each module as pretty-printed JSON to `<dir>/<MODULE>.json`.
pub struct FileWriter {
    dir: PathBuf,
}

impl FileWriter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn path(&self, module: &str) -> PathBuf {
        self.dir.join(format!("{module}.json"))
    }
}

impl Writer for FileWriter {
    fn write(&mut self, module: &ir::Module) -> Result<(), DriverError> {
        let name = &module.info.name;
        let json = serde_json::to_string_pretty(module).map_err(|err| DriverError::Serialize {
            module: name.clone(),
            message: err.to_string(),
        })?;
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path(name);
        log::debug!("Writing {name} to {}", path.display());
        std::fs::write(&path, json)?;
        Ok(())
    }
}

/// Hands each module to a closure.
pub struct CallbackWriter<F> {
    callback: F,
}

impl<F> CallbackWriter<F>
where
    F: FnMut(&ir::Module) -> Result<(), DriverError>,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Writer for CallbackWriter<F>
where
    F: FnMut(&ir::Module) -> Result<(), DriverError>,
{
    fn write(&mut self, module: &ir::Module) -> Result<(), DriverError> {
        (self.callback)(module)
    }
}
