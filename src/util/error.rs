// DataViz Pro - util/error.rs
//
// Typed errors for the config loader and the collaborator seams.
// I/O and parse failures keep their cause reachable through source().

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Collaborator errors
// ---------------------------------------------------------------------------

/// Errors returned by the external collaborator seams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// No implementation is attached for this collaborator in this build.
    Unavailable { collaborator: &'static str },
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { collaborator } => {
                write!(f, "{collaborator} is not available in this build")
            }
        }
    }
}

impl std::error::Error for CollaboratorError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_collaborator_error_message_names_collaborator() {
        let e = CollaboratorError::Unavailable {
            collaborator: "Spreadsheet import",
        };
        assert_eq!(
            e.to_string(),
            "Spreadsheet import is not available in this build"
        );
    }

    #[test]
    fn test_config_io_error_preserves_source() {
        let e = ConfigError::Io {
            path: PathBuf::from("config.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().starts_with("Config I/O error 'config.toml'"));
        let io_err = e.source().expect("io error source");
        assert_eq!(io_err.to_string(), "denied");
    }

    #[test]
    fn test_out_of_range_has_no_source() {
        let e = ConfigError::ValueOutOfRange {
            field: "ui.font_size".to_string(),
            value: "99".to_string(),
            expected: "10-24".to_string(),
        };
        assert!(e.source().is_none());
        assert!(e.to_string().contains("ui.font_size"));
    }
}
