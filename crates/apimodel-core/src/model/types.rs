use indexmap::IndexMap;
use serde::Serialize;

use super::operations::{PathModel, SecurityRequirement};
use super::schemas::TypeDefinition;
use crate::version::Version;

/// The complete model of one Swagger/OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiModel {
    pub filename: String,
    pub version: Version,
    pub info: ApiInfo,
    pub servers: Vec<Server>,
    pub produces: Vec<String>,
    pub consumes: Vec<String>,
    pub security_definitions: IndexMap<String, SecurityDefinition>,
    /// Document-wide security requirements.
    pub security: Vec<SecurityRequirement>,
    pub paths: IndexMap<String, PathModel>,
    pub definitions: IndexMap<String, TypeDefinition>,
}

/// API metadata from the `info` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiInfo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct License {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// A server URL template and its variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub url: String,
    pub description: String,
    pub variables: IndexMap<String, ServerVariable>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerVariable {
    pub name: String,
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

/// A security scheme declared by the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityDefinition {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The scheme `type` as written (`apiKey`, `basic`, `oauth2`, `http`, ...).
    pub scheme_type: String,
    /// Name of the header/query/cookie field carrying the credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
