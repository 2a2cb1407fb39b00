use indexmap::IndexMap;

use crate::error::ParseError;
use crate::model::{IntegerWidth, StringKind, TypeModel};
use crate::value::Node;

/// Resolve one schema node to a `TypeModel`.
///
/// Recognised `type`s with an unknown `format` are errors. Schemas without a
/// recognised `type` (composition keywords, vendor types, no `type` at all)
/// degrade to `TypeModel::Primitive`.
pub fn resolve_type(node: &Node<'_>) -> Result<TypeModel, ParseError> {
    if let Some(reference) = node.present_field("$ref") {
        let target = reference.as_string()?;
        let name = target.rsplit('/').next().unwrap_or(&target).to_string();
        return Ok(TypeModel::Reference(name));
    }

    // A non-scalar `type` (e.g. `["string", "null"]`) is left unrecognised.
    let type_name = node
        .present_field("type")
        .and_then(|t| t.as_string().ok());
    let format = node.opt_string("format")?;

    let invalid_format = |type_name: &str, format: &str| ParseError::InvalidFormat {
        location: node.location(),
        type_name: type_name.to_string(),
        format: format.to_string(),
    };

    let resolved = match type_name.as_deref() {
        Some("integer") => match format.as_deref() {
            None | Some("null") | Some("int32") => TypeModel::IntegerLike(IntegerWidth::Int32),
            Some("int64") => TypeModel::IntegerLike(IntegerWidth::Int64),
            Some(other) => return Err(invalid_format("integer", other)),
        },
        Some("number") => match format.as_deref() {
            Some("float") => TypeModel::Float,
            None | Some("null") | Some("double") => TypeModel::Double,
            Some(other) => return Err(invalid_format("number", other)),
        },
        Some("string") => match format.as_deref() {
            None | Some("null") | Some("string") => TypeModel::StringLike(StringKind::Plain),
            Some("byte") => TypeModel::StringLike(StringKind::Base64),
            Some("binary") => TypeModel::StringLike(StringKind::Binary),
            Some("date") => TypeModel::StringLike(StringKind::Date),
            Some("date-time") => TypeModel::StringLike(StringKind::DateTime),
            Some("password") => TypeModel::StringLike(StringKind::Password),
            Some(other) => return Err(invalid_format("string", other)),
        },
        Some("boolean") => TypeModel::Bool,
        Some("array") => {
            let element = match node.present_field("items") {
                Some(items) => resolve_type(&items)?,
                None => unknown_type(None, None, &serde_json::Value::Null),
            };
            TypeModel::Array(Box::new(element))
        }
        Some("object") => {
            let fields: IndexMap<String, TypeModel> = node
                .entries("properties")
                .into_iter()
                .map(|(name, property)| Ok((name, resolve_type(&property)?)))
                .collect::<Result<_, ParseError>>()?;
            TypeModel::Object(fields)
        }
        Some("null") => {
            return Err(ParseError::UnsupportedConstruct {
                location: node.location(),
                reason: "explicit `type: null` is not supported".to_string(),
            });
        }
        _ => unknown_type(type_name.clone(), format.clone(), node.value()),
    };
    Ok(resolved)
}

fn unknown_type(
    type_name: Option<String>,
    format: Option<String>,
    node: &serde_json::Value,
) -> TypeModel {
    TypeModel::Primitive {
        type_name,
        format,
        node: node.clone(),
    }
}
