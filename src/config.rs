//! Run configuration resolved from the command line and environment

use std::path::PathBuf;

/// Document checked when neither an argument nor the environment names one.
pub const DEFAULT_PATH: &str = r"c:\Users\biges\Desktop\BusBuddy\FETCHABILITY-INDEX.json";

/// Environment variable overriding [`DEFAULT_PATH`].
pub const PATH_ENV: &str = "JSONCHECK_PATH";

/// Environment variable selecting the report format.
pub const FORMAT_ENV: &str = "JSONCHECK_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Line-oriented report (VALID / INVALID / ERROR)
    #[default]
    Text,
    /// Single pretty-printed JSON object
    Json,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub path: PathBuf,
    pub format: Format,
    /// Also render parse failures as a graphical diagnostic on stderr
    pub fancy: bool,
}

impl Settings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: Format::default(),
            fancy: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_the_fallback_path() {
        let settings = Settings::default();
        assert_eq!(settings.path, PathBuf::from(DEFAULT_PATH));
        assert_eq!(settings.format, Format::Text);
        assert!(!settings.fancy);
    }
}
