use indexmap::IndexMap;

use crate::error::ParseError;
use crate::model::{Server, ServerVariable};
use crate::value::Node;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_SERVER_DESCRIPTION: &str = "API";

/// Synthesize the single server a Swagger 2.0 document describes through
/// `host`, `basePath` and `schemes`.
pub fn build_swagger_server(document: &Node<'_>) -> Result<Server, ParseError> {
    let host = document
        .opt_string("host")?
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let base_path = document
        .opt_string("basePath")?
        .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
    let schemes = document.string_list("schemes")?;

    let scheme = schemes
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_SCHEME.to_string());
    let separator = if base_path.starts_with('/') { "" } else { "/" };
    let url = format!("{scheme}://{host}{separator}{base_path}");

    let variable = ServerVariable {
        name: "scheme".to_string(),
        default: scheme,
        description: None,
        enum_values: (!schemes.is_empty()).then_some(schemes),
    };

    let mut variables = IndexMap::new();
    variables.insert(variable.name.clone(), variable);

    Ok(Server {
        url,
        description: DEFAULT_SERVER_DESCRIPTION.to_string(),
        variables,
    })
}

/// Build one entry of an OpenAPI 3 `servers` list.
pub fn build_server(node: &Node<'_>) -> Result<Server, ParseError> {
    let mut variables = IndexMap::new();
    for (name, var) in node.entries("variables") {
        let variable = ServerVariable {
            name: name.clone(),
            default: var.required_string("default")?,
            description: var.opt_string("description")?,
            enum_values: var
                .present_field("enum")
                .map(|values| values.as_string_list())
                .transpose()?,
        };
        variables.insert(name, variable);
    }

    Ok(Server {
        url: node.required_string("url")?,
        description: node
            .opt_string("description")?
            .unwrap_or_else(|| DEFAULT_SERVER_DESCRIPTION.to_string()),
        variables,
    })
}

pub fn build_servers(items: Vec<Node<'_>>) -> Result<Vec<Server>, ParseError> {
    items.iter().map(build_server).collect()
}
