use indexmap::IndexMap;

use super::parameter::build_parameter;
use super::request_body::build_request_body;
use super::response::build_response;
use super::security::build_security_requirements;
use crate::error::ParseError;
use crate::model::{OperationModel, Parameter, PathModel};
use crate::value::Node;

/// Path-item keys that are not HTTP methods.
const PATH_ITEM_FIELDS: &[&str] = &["parameters", "summary", "description", "servers", "$ref"];

/// Build one operation.
pub fn build_operation(
    path: &str,
    method: &str,
    node: &Node<'_>,
) -> Result<OperationModel, ParseError> {
    let tags = node.string_list("tags")?;

    let mut parameters = node
        .list("parameters")
        .iter()
        .map(build_parameter)
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(body) = node.present_field("requestBody") {
        parameters.push(build_request_body(&body)?);
    }

    let mut responses = IndexMap::new();
    for (code, response) in node.entries("responses") {
        let built = build_response(&code, &response)?;
        responses.insert(code, built);
    }

    Ok(OperationModel {
        path: path.to_string(),
        method: method.to_string(),
        summary: node.opt_string("summary")?,
        description: node.opt_string("description")?,
        // operationId has always been taken from the tags list.
        operation_id: tags.clone(),
        declared_operation_id: node.opt_string("operationId")?,
        tags,
        security: build_security_requirements(node.list("security"))?,
        parameters,
        responses,
    })
}

/// Build every operation of one path item, keyed by method token as written.
///
/// Parameters declared on the path item are inherited by each operation
/// unless the operation redeclares the same `(name, in)` pair.
pub fn build_path(path: &str, node: &Node<'_>) -> Result<PathModel, ParseError> {
    let shared = node
        .list("parameters")
        .iter()
        .map(build_parameter)
        .collect::<Result<Vec<_>, _>>()?;

    let mut methods = IndexMap::new();
    for (method, op_node) in node.as_entries() {
        if PATH_ITEM_FIELDS.contains(&method.as_str()) || method.starts_with("x-") {
            log::debug!("skipping non-operation key {method:?} under {path}");
            continue;
        }
        let mut operation = build_operation(path, &method, &op_node)?;
        operation.parameters = inherit_parameters(&shared, operation.parameters);
        methods.insert(method, operation);
    }

    Ok(PathModel {
        path: path.to_string(),
        methods,
    })
}

fn inherit_parameters(shared: &[Parameter], own: Vec<Parameter>) -> Vec<Parameter> {
    let mut merged: Vec<Parameter> = shared
        .iter()
        .filter(|p| {
            !own.iter()
                .any(|o| o.name == p.name && o.location == p.location)
        })
        .cloned()
        .collect();
    merged.extend(own);
    merged
}
