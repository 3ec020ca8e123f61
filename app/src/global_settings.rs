use std::env;
use std::io::IsTerminal;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct GlobalSettings {
    pub colorize: bool,
    pub log_level: log::LevelFilter,
}

impl GlobalSettings {
    pub fn from_env() -> Self {
        let colorize = match env::var("MIBC_COLORIZE").ok().as_deref().map(str::to_lowercase) {
            Some(var) if var == "always" || var == "true" => true,
            Some(var) if var == "never" || var == "false" => false,
            _ => std::io::stderr().is_terminal(),
        };

        let log_level = env::var("MIBC_LOG_LEVEL")
            .ok()
            .and_then(|var| log::LevelFilter::from_str(&var.to_uppercase()).ok())
            .unwrap_or(log::LevelFilter::Info);

        Self { colorize, log_level }
    }

    pub fn init_logger(&self) {
        let style = if self.colorize {
            env_logger::WriteStyle::Always
        } else {
            env_logger::WriteStyle::Never
        };
        env_logger::Builder::new()
            .filter_level(self.log_level)
            .write_style(style)
            .format_timestamp(None)
            .init();
    }
}
