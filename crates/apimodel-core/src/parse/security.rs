use indexmap::IndexMap;

use crate::error::ParseError;
use crate::model::{SecurityDefinition, SecurityRequirement};
use crate::value::Node;

/// Build one security requirement from a single-key `{scheme: [scopes]}` object.
pub fn build_security_requirement(node: &Node<'_>) -> Result<SecurityRequirement, ParseError> {
    let mut entries = node.as_entries();
    if entries.len() != 1 {
        return Err(ParseError::MalformedSecurityEntry {
            location: node.location(),
            keys: entries.len(),
        });
    }
    let (scheme, scopes) = entries.remove(0);
    let scopes = match scopes.value() {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::Array(_) => scopes.as_string_list()?,
        _ => {
            return Err(ParseError::TypeMismatch {
                location: scopes.location(),
                expected: "a list of scopes",
            });
        }
    };
    Ok(SecurityRequirement { scheme, scopes })
}

/// Build every requirement of a `security` list, in order.
pub fn build_security_requirements(
    items: Vec<Node<'_>>,
) -> Result<Vec<SecurityRequirement>, ParseError> {
    items.iter().map(build_security_requirement).collect()
}

/// Build one entry of `securityDefinitions` / `components.securitySchemes`.
pub fn build_security_definition(
    key: &str,
    node: &Node<'_>,
) -> Result<SecurityDefinition, ParseError> {
    Ok(SecurityDefinition {
        key: key.to_string(),
        description: node.opt_string("description")?,
        scheme_type: node.required_string("type")?,
        field_name: node.opt_string("name")?,
        location: node.opt_string("in")?,
    })
}

pub fn build_security_definitions(
    entries: Vec<(String, Node<'_>)>,
) -> Result<IndexMap<String, SecurityDefinition>, ParseError> {
    let mut definitions = IndexMap::with_capacity(entries.len());
    for (key, node) in entries {
        let definition = build_security_definition(&key, &node)?;
        definitions.insert(key, definition);
    }
    Ok(definitions)
}
