use indexmap::IndexMap;
use serde_json::Value;

use super::components::build_definitions;
use super::operation::build_path;
use super::security::{build_security_definitions, build_security_requirements};
use super::server::{build_servers, build_swagger_server};
use crate::error::ParseError;
use crate::model::{ApiInfo, ApiModel, Contact, License};
use crate::value::Node;
use crate::version::Version;

/// Oldest accepted document version.
pub fn min_supported_version() -> Version {
    Version::new([2, 0])
}

/// Newest accepted document version.
pub fn max_supported_version() -> Version {
    Version::new([3, 0, 1])
}

/// Build the complete model of a decoded Swagger 2.0 / OpenAPI 3.0 document.
pub fn build_model(document: &Value, filename: &str) -> Result<ApiModel, ParseError> {
    let root = Node::root(document);

    let version = read_version(&root)?;
    let openapi3 = version >= Version::new([3]);
    log::debug!(
        "{filename}: document version {version} ({})",
        if openapi3 { "openapi" } else { "swagger" }
    );

    let info = match root.present_field("info") {
        Some(info) => build_info(&info)?,
        None => ApiInfo::default(),
    };

    let servers = if openapi3 {
        build_servers(root.list("servers"))?
    } else {
        vec![build_swagger_server(&root)?]
    };

    let components = root.present_field("components").filter(|_| openapi3);

    let mut security_definitions = build_security_definitions(root.entries("securityDefinitions"))?;
    if let Some(components) = &components {
        security_definitions.extend(build_security_definitions(
            components.entries("securitySchemes"),
        )?);
    }

    let mut paths = IndexMap::new();
    for (path, item) in root.entries("paths") {
        if path.starts_with("x-") {
            continue;
        }
        log::trace!("building path {path}");
        let built = build_path(&path, &item)?;
        paths.insert(path, built);
    }

    let mut definitions = build_definitions(root.entries("definitions"))?;
    if let Some(components) = &components {
        definitions.extend(build_definitions(components.entries("schemas"))?);
    }

    let model = ApiModel {
        filename: filename.to_string(),
        version,
        info,
        servers,
        produces: root.string_list("produces")?,
        consumes: root.string_list("consumes")?,
        security_definitions,
        security: build_security_requirements(root.list("security"))?,
        paths,
        definitions,
    };
    log::debug!(
        "{filename}: {} servers, {} paths, {} definitions, {} security definitions",
        model.servers.len(),
        model.paths.len(),
        model.definitions.len(),
        model.security_definitions.len()
    );
    Ok(model)
}

/// Read `swagger` (or `openapi`) and check it lies in the accepted range.
fn read_version(root: &Node<'_>) -> Result<Version, ParseError> {
    let field = root
        .present_field("swagger")
        .or_else(|| root.present_field("openapi"))
        .ok_or_else(|| ParseError::MissingField {
            location: root.location(),
            field: "swagger".to_string(),
        })?;
    let raw = field.as_string()?;
    let version = Version::parse(&raw)?;
    if !version.in_range(&min_supported_version(), &max_supported_version()) {
        return Err(ParseError::UnsupportedVersion { version: raw });
    }
    Ok(version)
}

fn build_info(node: &Node<'_>) -> Result<ApiInfo, ParseError> {
    let contact = match node.present_field("contact") {
        Some(c) => Some(Contact {
            name: c.opt_string("name")?,
            url: c.opt_string("url")?,
            email: c.opt_string("email")?,
        }),
        None => None,
    };
    let license = match node.present_field("license") {
        Some(l) => Some(License {
            name: l.opt_string("name")?,
            url: l.opt_string("url")?,
        }),
        None => None,
    };

    Ok(ApiInfo {
        title: node.opt_string("title")?.unwrap_or_default(),
        description: node.opt_string("description")?,
        terms_of_service: node.opt_string("termsOfService")?,
        version: node.opt_string("version")?.unwrap_or_default(),
        contact,
        license,
    })
}
