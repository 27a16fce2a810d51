use super::Error;

/// Error when the run is configured in a way that cannot produce output.
///
/// This occurs when:
/// - The namespace is not a valid `::`-separated module prefix
/// - Every aggregate schema name candidate is already taken by a table
///
/// Both are detected before any file is written.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    kind: ConfigurationErrorKind,
}

#[derive(Debug)]
enum ConfigurationErrorKind {
    InvalidNamespace { namespace: Box<str> },
    NoSchemaName,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ConfigurationErrorKind::InvalidNamespace { namespace } => write!(
                f,
                "invalid namespace `{namespace}`: every `::` segment must start with an uppercase letter followed by word characters"
            ),
            ConfigurationErrorKind::NoSchemaName => f.write_str(
                "no available schema name: every candidate collides with a table name",
            ),
        }
    }
}

impl Error {
    /// Creates an invalid namespace error.
    pub fn invalid_namespace(namespace: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            kind: ConfigurationErrorKind::InvalidNamespace {
                namespace: namespace.into().into(),
            },
        }))
    }

    /// Creates an error signaling that no aggregate schema name is free.
    pub fn no_schema_name() -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            kind: ConfigurationErrorKind::NoSchemaName,
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Configuration(_))
    }

    /// Returns `true` if this error is an invalid namespace error.
    pub fn is_invalid_namespace(&self) -> bool {
        matches!(
            self.root().kind(),
            super::ErrorKind::Configuration(ConfigurationError {
                kind: ConfigurationErrorKind::InvalidNamespace { .. }
            })
        )
    }

    /// Returns `true` if this error is a no available schema name error.
    pub fn is_no_schema_name(&self) -> bool {
        matches!(
            self.root().kind(),
            super::ErrorKind::Configuration(ConfigurationError {
                kind: ConfigurationErrorKind::NoSchemaName
            })
        )
    }
}
