use thiserror::Error;

/// Every way a document can fail to be modeled. Any of these aborts the
/// whole parse; there is no partial `ApiModel`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported document version {version} (accepted: 2.0 through 3.0.1)")]
    UnsupportedVersion { version: String },

    #[error("malformed version string: {0:?}")]
    MalformedVersion(String),

    #[error("missing required field `{field}` at {location}")]
    MissingField { location: String, field: String },

    #[error("expected {expected} at {location}")]
    TypeMismatch {
        location: String,
        expected: &'static str,
    },

    #[error("invalid format `{format}` for type `{type_name}` at {location}")]
    InvalidFormat {
        location: String,
        type_name: String,
        format: String,
    },

    #[error("definition `{name}` must be of type `object`, found {found}")]
    UnsupportedRootType { name: String, found: String },

    #[error("security requirement at {location} must have exactly one key, found {keys}")]
    MalformedSecurityEntry { location: String, keys: usize },

    #[error("unsupported construct at {location}: {reason}")]
    UnsupportedConstruct { location: String, reason: String },
}
