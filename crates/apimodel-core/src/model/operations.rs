use indexmap::IndexMap;
use serde::Serialize;

use super::schemas::TypeModel;

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Body,
    FormData,
    Cookie,
}

impl ParameterLocation {
    /// Map an `in` token to a location.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "query" => Some(Self::Query),
            "path" => Some(Self::Path),
            "header" => Some(Self::Header),
            "body" => Some(Self::Body),
            "formData" => Some(Self::FormData),
            "cookie" => Some(Self::Cookie),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
            Self::Body => "body",
            Self::FormData => "formData",
            Self::Cookie => "cookie",
        }
    }
}

/// An operation parameter with its resolved type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    pub type_model: TypeModel,
}

/// A named security scheme plus the scopes an operation requires from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityRequirement {
    pub scheme: String,
    pub scopes: Vec<String>,
}

/// Status code used when a response is keyed `default`.
pub const DEFAULT_RESPONSE_CODE: i64 = 200;

/// Status code recorded for keys that are neither numeric nor `default`.
pub const UNPARSABLE_RESPONSE_CODE: i64 = -1;

/// A response keyed by its status-code token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub code: String,
    pub int_code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<TypeModel>,
}

impl Response {
    pub fn new(
        code: impl Into<String>,
        description: Option<String>,
        body: Option<TypeModel>,
    ) -> Self {
        let code = code.into();
        let int_code = status_code(&code);
        Self {
            code,
            int_code,
            description,
            body,
        }
    }
}

/// `default` maps to 200; anything else that is not an integer maps to -1.
pub fn status_code(token: &str) -> i64 {
    if token == "default" {
        return DEFAULT_RESPONSE_CODE;
    }
    token.parse().unwrap_or(UNPARSABLE_RESPONSE_CODE)
}

/// One HTTP method on one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationModel {
    pub path: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub security: Vec<SecurityRequirement>,
    /// Populated from `tags`, not from `operationId`; see
    /// `declared_operation_id` for the latter.
    pub operation_id: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_operation_id: Option<String>,
    pub parameters: Vec<Parameter>,
    pub responses: IndexMap<String, Response>,
}

/// All operations declared under one path, keyed by method token as written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathModel {
    pub path: String,
    pub methods: IndexMap<String, OperationModel>,
}
