use super::media_type::body_schema;
use super::schema::resolve_type;
use crate::error::ParseError;
use crate::model::{Response, UNPARSABLE_RESPONSE_CODE};
use crate::value::Node;

/// Build one response. A response without a schema has no body.
pub fn build_response(code: &str, node: &Node<'_>) -> Result<Response, ParseError> {
    let body = body_schema(node).map(|schema| resolve_type(&schema)).transpose()?;
    let response = Response::new(code, node.opt_string("description")?, body);
    if response.int_code == UNPARSABLE_RESPONSE_CODE {
        log::warn!(
            "response code {code:?} at {} is not numeric; keeping it as {UNPARSABLE_RESPONSE_CODE}",
            node.location()
        );
    }
    Ok(response)
}
