use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Separator between the segments of a generated module path.
pub const SEPARATOR: &str = "::";

/// Prefix under which every generated module is nested.
///
/// The empty namespace is the root: generated modules then start directly
/// with the schema name. Otherwise each `::`-separated segment starts with
/// an uppercase ASCII letter followed by word characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// The root namespace
    pub fn root() -> Self {
        Self::default()
    }

    pub fn parse(src: &str) -> Result<Self> {
        if src.is_empty() {
            return Ok(Self::root());
        }

        let segments = src.split(SEPARATOR).collect::<Vec<_>>();

        if !segments.iter().all(|segment| is_valid_segment(segment)) {
            return Err(Error::invalid_namespace(src));
        }

        Ok(Self {
            segments: segments.into_iter().map(String::from).collect(),
        })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Builds a module path below this namespace.
    ///
    /// Empty parts are skipped, so joining onto the root namespace never
    /// produces a leading separator.
    pub fn join<'a>(&'a self, parts: impl IntoIterator<Item = &'a str>) -> String {
        self.segments
            .iter()
            .map(String::as_str)
            .chain(parts)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl FromStr for Namespace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(SEPARATOR))
    }
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();

    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
