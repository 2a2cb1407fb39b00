pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;
pub mod spec;

use serde_json::Value;

use crate::error::ParseError;
use crate::model::ApiModel;

/// Parse a Swagger/OpenAPI document from YAML.
pub fn from_yaml(input: &str, filename: &str) -> Result<ApiModel, ParseError> {
    let document: Value = serde_yaml_ng::from_str(input)?;
    from_value(&document, filename)
}

/// Parse a Swagger/OpenAPI document from JSON.
pub fn from_json(input: &str, filename: &str) -> Result<ApiModel, ParseError> {
    let document: Value = serde_json::from_str(input)?;
    from_value(&document, filename)
}

/// Build the model from an already-decoded document.
pub fn from_value(document: &Value, filename: &str) -> Result<ApiModel, ParseError> {
    spec::build_model(document, filename)
}
