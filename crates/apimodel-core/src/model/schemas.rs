use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// String encodings distinguished by the `format` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKind {
    Plain,
    Base64,
    Binary,
    Date,
    DateTime,
    Password,
}

/// Integer widths distinguished by the `format` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerWidth {
    Int32,
    Int64,
}

/// A resolved schema type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeModel {
    /// Fallback for schemas the resolver does not model (missing `type`,
    /// `allOf`, `oneOf`, ...). Keeps the source node for inspection.
    Primitive {
        type_name: Option<String>,
        format: Option<String>,
        node: serde_json::Value,
    },
    StringLike(StringKind),
    IntegerLike(IntegerWidth),
    Bool,
    Float,
    Double,
    /// Named reference; holds the last segment of the `$ref` pointer.
    Reference(String),
    Array(Box<TypeModel>),
    Object(IndexMap<String, TypeModel>),
    Optional(Box<TypeModel>),
}

impl TypeModel {
    /// Wrap in `Optional`, unless already optional.
    pub fn optional(self) -> TypeModel {
        match self {
            TypeModel::Optional(_) => self,
            other => TypeModel::Optional(Box::new(other)),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeModel::Optional(_))
    }

    /// The type with any `Optional` wrapper removed.
    pub fn inner(&self) -> &TypeModel {
        match self {
            TypeModel::Optional(inner) => inner.as_ref(),
            other => other,
        }
    }
}

impl fmt::Display for TypeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeModel::Primitive {
                type_name, format, ..
            } => match (type_name, format) {
                (None, _) => write!(f, "any"),
                (Some(t), None) => write!(f, "{t}"),
                (Some(t), Some(raw)) => write!(f, "{t}({raw})"),
            },
            TypeModel::StringLike(kind) => f.write_str(match kind {
                StringKind::Plain => "string",
                StringKind::Base64 => "base64",
                StringKind::Binary => "binary",
                StringKind::Date => "date",
                StringKind::DateTime => "date-time",
                StringKind::Password => "password",
            }),
            TypeModel::IntegerLike(IntegerWidth::Int32) => write!(f, "int32"),
            TypeModel::IntegerLike(IntegerWidth::Int64) => write!(f, "int64"),
            TypeModel::Bool => write!(f, "bool"),
            TypeModel::Float => write!(f, "float"),
            TypeModel::Double => write!(f, "double"),
            TypeModel::Reference(name) => write!(f, "{name}"),
            TypeModel::Array(element) => write!(f, "array<{element}>"),
            TypeModel::Object(fields) => {
                let rendered: Vec<String> = fields
                    .iter()
                    .map(|(name, ty)| format!("{name}: {ty}"))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            TypeModel::Optional(inner) => write!(f, "{inner}?"),
        }
    }
}

/// A property of a named definition.
///
/// `type_model` is the effective type: wrapped in `Optional` exactly when the
/// property is not required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub type_model: TypeModel,
    pub required: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, resolved: TypeModel, required: bool) -> Self {
        let type_model = if required {
            resolved
        } else {
            resolved.optional()
        };
        Self {
            name: name.into(),
            type_model,
            required,
        }
    }
}

/// A named, object-shaped type from `definitions` or `components.schemas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: IndexMap<String, Property>,
}
