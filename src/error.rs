//! Crate-wide error type.
//!
//! Only [`TcaMcpError::NotFound`], [`TcaMcpError::UnknownTool`] and
//! [`TcaMcpError::InvalidArguments`] ever cross the MCP boundary; they map
//! onto protocol error objects via the `From` impl below. Soft outcomes
//! (unknown template, no search hits, clean lint) are never errors.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors produced by the catalog, dispatcher, and config loader.
#[derive(Debug, Error)]
pub enum TcaMcpError {
    /// A documentation entry or template key is not in the catalog.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// `call_tool` named a tool outside the fixed catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments do not match the declared input schema.
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl TcaMcpError {
    pub fn doc_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Documentation",
            key: key.into(),
        }
    }

    pub fn template_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Template",
            key: key.into(),
        }
    }

    pub fn resource_not_found(uri: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "Resource",
            key: uri.into(),
        }
    }
}

impl From<TcaMcpError> for McpError {
    fn from(err: TcaMcpError) -> Self {
        let message = err.to_string();
        match err {
            TcaMcpError::NotFound { .. } => McpError::resource_not_found(message, None),
            TcaMcpError::UnknownTool(_) | TcaMcpError::InvalidArguments { .. } => {
                McpError::invalid_params(message, None)
            }
            _ => McpError::internal_error(message, None),
        }
    }
}

pub type Result<T> = std::result::Result<T, TcaMcpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_key() {
        let err = TcaMcpError::doc_not_found("reducers-2");
        assert_eq!(err.to_string(), "Documentation not found: reducers-2");
    }

    #[test]
    fn unknown_tool_maps_to_invalid_params() {
        let err: McpError = TcaMcpError::UnknownTool("nope".into()).into();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Unknown tool: nope"));
    }

    #[test]
    fn not_found_maps_to_resource_not_found() {
        let err: McpError = TcaMcpError::resource_not_found("tca://docs/x").into();
        assert_eq!(err.code, rmcp::model::ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[test]
    fn config_maps_to_internal_error() {
        let err: McpError = TcaMcpError::Config("bad".into()).into();
        assert_eq!(err.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    }
}
