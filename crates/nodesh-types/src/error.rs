//! Error types for nodesh.

use std::io;

/// Errors produced by the shell itself (as opposed to command handlers).
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Navigation state points at a node that does not exist in the tree.
    #[error("node resolution error: no module named '{0}'")]
    NodeResolution(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Failure reported by a command handler.
///
/// The dispatcher reports each kind once and keeps the shell running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Malformed or missing arguments.
    #[error("usage error: {0}")]
    Usage(String),

    /// The handler rejected an argument value. The message is shown verbatim.
    #[error("{0}")]
    Validation(String),

    /// Any other failure while handling the command.
    #[error("command failed: {0}")]
    Unclassified(String),
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        Self::Unclassified(e.to_string())
    }
}

impl From<std::num::ParseIntError> for CommandError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_resolution_display() {
        let e = ShellError::NodeResolution("interface".into());
        assert_eq!(
            format!("{e}"),
            "node resolution error: no module named 'interface'"
        );
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: ShellError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: ShellError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: ShellError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn validation_displays_message_verbatim() {
        let e = CommandError::Validation("mtu must be between 68 and 9000".into());
        assert_eq!(format!("{e}"), "mtu must be between 68 and 9000");
    }

    #[test]
    fn parse_int_error_is_validation() {
        let e: CommandError = "abc".parse::<u16>().unwrap_err().into();
        assert!(matches!(e, CommandError::Validation(_)));
    }

    #[test]
    fn io_error_is_unclassified() {
        let e: CommandError = io::Error::other("disk full").into();
        assert_eq!(e, CommandError::Unclassified("disk full".into()));
    }
}
