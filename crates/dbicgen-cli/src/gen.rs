use crate::{Config, Writer};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dbicgen_core::Namespace;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct GenCommand {
    /// Configuration file; command-line options take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// DBDesigner 4 model to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Namespace for the generated modules, e.g. `MyApp::DB`
    #[arg(short, long)]
    namespace: Option<String>,

    /// Directory the generated files are written below
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the files that would be written without writing them
    #[arg(long)]
    dry_run: bool,
}

impl GenCommand {
    pub(crate) fn run(self) -> Result<()> {
        let dry_run = self.dry_run;
        let config = self.into_config()?;

        exec(&config, dry_run)?;
        Ok(())
    }

    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.input = Some(input);
        }

        if let Some(namespace) = self.namespace {
            config.namespace = namespace;
        }

        if let Some(output) = self.output {
            config.output_path = Some(output);
        }

        Ok(config)
    }
}

/// Run the generator.
///
/// Every module is generated before the first file is written. Writing stops
/// at the first file that cannot be written. Returns the paths of the
/// written (or, for a dry run, the planned) files.
pub fn exec(config: &Config, dry_run: bool) -> Result<Vec<PathBuf>> {
    let namespace = Namespace::parse(&config.namespace)?;

    let input = config.input.as_ref().context(
        "no input model given; pass `--input` or set `input` in the configuration file",
    )?;

    let schema = dbicgen_core::schema::from_file(input)?;
    if schema.is_empty() {
        log::warn!("`{}` declares no tables", input.display());
    }

    let output = dbicgen_codegen::generate(&schema, &namespace)?;

    log::info!(
        "generated {} classes and schema module `{}`",
        output.classes.len(),
        output.schema.module_name
    );

    let writer = Writer::new(config.output_dir());

    // Every target path is checked before the first file is written.
    let planned = output
        .files()
        .map(|file| -> Result<_> { Ok((writer.path_for(file.module_name)?, file)) })
        .collect::<Result<Vec<_>>>()?;

    let mut paths = vec![];

    println!();

    for (path, file) in planned {
        if dry_run {
            println!("  {:>10}    {}", style("would write").dim(), path.display());
            paths.push(path);
        } else {
            let path = writer.write(file)?;
            println!("  {:>10}    {}", style("writing").green(), path.display());
            paths.push(path);
        }
    }

    println!();
    println!(
        "  {} {}",
        style("✓").green().bold(),
        style(format!(
            "{} classes for schema `{}`",
            output.classes.len(),
            output.schema.module_name
        ))
        .dim()
    );
    println!();

    Ok(paths)
}
