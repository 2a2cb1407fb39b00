use super::schema::resolve_type;
use crate::error::ParseError;
use crate::model::{Parameter, ParameterLocation};
use crate::value::Node;

/// Build one parameter.
///
/// The type comes from `schema` when present; otherwise the schema keywords
/// are read from the parameter itself (Swagger 2.0 non-body parameters).
pub fn build_parameter(node: &Node<'_>) -> Result<Parameter, ParseError> {
    let name = node.required_string("name")?;
    let token = node.required_string("in")?;
    let location =
        ParameterLocation::from_token(&token).ok_or_else(|| ParseError::UnsupportedConstruct {
            location: node.child_location("in"),
            reason: format!("unknown parameter location `{token}`"),
        })?;

    let type_model = match node.present_field("schema") {
        Some(schema) => resolve_type(&schema)?,
        None => resolve_type(node)?,
    };

    Ok(Parameter {
        name,
        location,
        required: node.opt_bool("required")?.unwrap_or(false),
        description: node.opt_string("description")?,
        default: node.present_field("default").map(|d| d.value().clone()),
        type_model,
    })
}
