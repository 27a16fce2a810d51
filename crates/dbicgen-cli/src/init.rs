use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

const TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/dbicgen.toml"));

#[derive(Parser, Debug)]
pub struct InitCommand {
    /// Where to write the configuration file
    #[arg(default_value = "dbicgen.toml")]
    path: PathBuf,
}

impl InitCommand {
    pub(crate) fn run(self) -> Result<()> {
        exec(&self.path)?;

        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!("Created {}", self.path.display())).dim()
        );

        Ok(())
    }
}

/// Write the template configuration to `path`, refusing to overwrite an
/// existing file.
pub fn exec(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        bail!("`{}` already exists", path.display());
    }

    fs::write(path, TEMPLATE)?;
    Ok(())
}
