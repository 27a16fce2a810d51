use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration for a generator run
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the DBDesigner 4 model
    pub input: Option<PathBuf>,

    /// Namespace the generated modules are nested in. Empty means the root.
    pub namespace: String,

    /// Directory generated files are written below. Defaults to the current
    /// directory.
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input model path
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Set the namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the output directory
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Load a configuration file.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration `{}`", path.display()))?;
        let config: Config = contents
            .parse()
            .with_context(|| format!("invalid configuration `{}`", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Directory generated files are written below
    pub fn output_dir(&self) -> &Path {
        self.output_path.as_deref().unwrap_or_else(|| Path::new("."))
    }

    fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };

        self.input = self.input.map(resolve);
        self.output_path = self.output_path.map(resolve);
        self
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
