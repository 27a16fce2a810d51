use dbicgen_codegen::GeneratedFile;
use dbicgen_core::{Error, Result, SEPARATOR};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Suffix of generated Perl module files
const FILE_SUFFIX: &str = "pm";

/// Persists generated modules below a root directory.
///
/// A module `A::B::C` is written to `<root>/A/B/C.pm`.
#[derive(Debug, Clone)]
pub struct Writer {
    root: PathBuf,
}

impl Writer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Target path of the file holding `module_name`.
    ///
    /// Fails when a segment of the module name would leave the root
    /// directory: empty segments, `.`, `..` and segments holding a path
    /// separator are rejected.
    pub fn path_for(&self, module_name: &str) -> Result<PathBuf> {
        let mut path = self.root.clone();
        let mut segments = module_name.split(SEPARATOR).peekable();

        while let Some(segment) = segments.next() {
            if !is_plain_segment(segment) {
                return Err(Error::write(
                    &self.root,
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "module `{module_name}` does not map to a file below the output directory"
                        ),
                    ),
                ));
            }

            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{segment}.{FILE_SUFFIX}"));
            }
        }

        Ok(path)
    }

    /// Write one module, creating intermediate directories as needed.
    pub fn write(&self, file: GeneratedFile<'_>) -> Result<PathBuf> {
        let path = self.path_for(file.module_name)?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|err| Error::write(dir, err))?;
        }

        fs::write(&path, file.source).map_err(|err| Error::write(&path, err))?;

        log::trace!("wrote `{}` to `{}`", file.module_name, path.display());

        Ok(path)
    }
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(|c: char| matches!(c, '/' | '\\' | '\0'))
}
