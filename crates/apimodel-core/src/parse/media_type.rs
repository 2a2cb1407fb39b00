use crate::value::Node;

/// The schema of the first media type under `content` that declares one.
///
/// OpenAPI 3 moves body schemas from `schema` into `content.<media>.schema`.
pub fn content_schema<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    node.entries("content")
        .into_iter()
        .find_map(|(_, media)| media.present_field("schema"))
}

/// The schema a response or request body carries, Swagger 2.0 style first.
pub fn body_schema<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    node.present_field("schema").or_else(|| content_schema(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_media_type_with_schema() {
        let doc = json!({
            "content": {
                "text/plain": {},
                "application/json": {"schema": {"type": "string"}},
                "application/xml": {"schema": {"type": "integer"}}
            }
        });
        let schema = content_schema(&Node::root(&doc)).unwrap();
        assert_eq!(schema.location(), "#/content/application~1json/schema");
    }

    #[test]
    fn test_direct_schema_wins() {
        let doc = json!({
            "schema": {"type": "boolean"},
            "content": {"application/json": {"schema": {"type": "string"}}}
        });
        assert_eq!(body_schema(&Node::root(&doc)).unwrap().location(), "#/schema");
    }

    #[test]
    fn test_no_schema() {
        let doc = json!({"description": "empty"});
        assert!(body_schema(&Node::root(&doc)).is_none());
    }
}
