use std::collections::HashSet;

use indexmap::IndexMap;

use super::schema::resolve_type;
use crate::error::ParseError;
use crate::model::{Property, TypeDefinition};
use crate::value::Node;

/// Build one named definition. Only object-shaped definitions are modeled.
pub fn build_definition(name: &str, node: &Node<'_>) -> Result<TypeDefinition, ParseError> {
    match node.opt_string("type")?.as_deref() {
        Some("object") => {}
        Some(other) => {
            return Err(ParseError::UnsupportedRootType {
                name: name.to_string(),
                found: format!("`{other}`"),
            });
        }
        None => {
            return Err(ParseError::UnsupportedRootType {
                name: name.to_string(),
                found: "no type".to_string(),
            });
        }
    }

    let required: HashSet<String> = node.string_list("required")?.into_iter().collect();

    let mut properties = IndexMap::new();
    for (prop_name, prop_node) in node.entries("properties") {
        let resolved = resolve_type(&prop_node)?;
        let is_required = required.contains(&prop_name);
        properties.insert(
            prop_name.clone(),
            Property::new(prop_name, resolved, is_required),
        );
    }

    Ok(TypeDefinition {
        name: name.to_string(),
        description: node.opt_string("description")?,
        properties,
    })
}

/// Build every entry of a `definitions` / `components.schemas` map, in order.
pub fn build_definitions(
    entries: Vec<(String, Node<'_>)>,
) -> Result<IndexMap<String, TypeDefinition>, ParseError> {
    let mut definitions = IndexMap::with_capacity(entries.len());
    for (name, node) in entries {
        log::trace!("building definition {name}");
        let definition = build_definition(&name, &node)?;
        definitions.insert(name, definition);
    }
    Ok(definitions)
}
