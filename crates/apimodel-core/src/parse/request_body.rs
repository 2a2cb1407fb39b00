use super::media_type::content_schema;
use super::schema::resolve_type;
use crate::error::ParseError;
use crate::model::{Parameter, ParameterLocation};
use crate::value::Node;

/// Name given to the parameter synthesized from an OpenAPI 3 `requestBody`.
pub const REQUEST_BODY_PARAMETER: &str = "body";

/// Model an OpenAPI 3 `requestBody` as a `body` parameter.
///
/// A `$ref` request body resolves to a reference to the named request body.
pub fn build_request_body(node: &Node<'_>) -> Result<Parameter, ParseError> {
    let type_model = match content_schema(node) {
        Some(schema) => resolve_type(&schema)?,
        None => resolve_type(node)?,
    };

    Ok(Parameter {
        name: REQUEST_BODY_PARAMETER.to_string(),
        location: ParameterLocation::Body,
        required: node.opt_bool("required")?.unwrap_or(false),
        description: node.opt_string("description")?,
        default: None,
        type_model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeModel;
    use serde_json::json;

    #[test]
    fn test_content_schema_becomes_body_parameter() {
        let doc = json!({
            "required": true,
            "description": "Pet to add",
            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/NewPet"}}}
        });
        let p = build_request_body(&Node::root(&doc)).unwrap();
        assert_eq!(p.name, "body");
        assert_eq!(p.location, ParameterLocation::Body);
        assert!(p.required);
        assert_eq!(p.type_model, TypeModel::Reference("NewPet".into()));
    }

    #[test]
    fn test_reference_request_body() {
        let doc = json!({"$ref": "#/components/requestBodies/PetBody"});
        let p = build_request_body(&Node::root(&doc)).unwrap();
        assert!(!p.required);
        assert_eq!(p.type_model, TypeModel::Reference("PetBody".into()));
    }
}
