use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Project configuration loaded from `.apimodel.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiModelConfig {
    pub input: String,
    pub input_format: InputFormat,
    pub inspect: InspectConfig,
}

impl Default for ApiModelConfig {
    fn default() -> Self {
        Self {
            input: "swagger.yaml".to_string(),
            input_format: InputFormat::Auto,
            inspect: InspectConfig::default(),
        }
    }
}

/// How the input document is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// `.json` files are JSON, everything else YAML.
    #[default]
    Auto,
    Json,
    Yaml,
}

impl InputFormat {
    /// Resolve `Auto` against a file path.
    pub fn for_path(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some("json") => InputFormat::Json,
                _ => InputFormat::Yaml,
            },
            explicit => explicit,
        }
    }
}

/// Output options for `apimodel inspect`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    pub format: OutputFormat,
    /// Keep the raw schema node carried by unmodeled (`primitive`) types.
    pub include_nodes: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apimodel.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ApiModelConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: ApiModelConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# apimodel configuration
input: swagger.yaml
input_format: auto    # auto | json | yaml (auto: .json is JSON, anything else YAML)

inspect:
  format: yaml          # yaml | json
  include_nodes: false  # keep raw schema nodes of unmodeled types in the output
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiModelConfig::default();
        assert_eq!(config.input, "swagger.yaml");
        assert_eq!(config.input_format, InputFormat::Auto);
        assert_eq!(config.inspect.format, OutputFormat::Yaml);
        assert!(!config.inspect.include_nodes);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api/openapi.json
input_format: json
inspect:
  format: json
  include_nodes: true
"#;
        let config: ApiModelConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api/openapi.json");
        assert_eq!(config.input_format, InputFormat::Json);
        assert_eq!(config.inspect.format, OutputFormat::Json);
        assert!(config.inspect.include_nodes);
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: petstore.yaml\n";
        let config: ApiModelConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "petstore.yaml");
        assert_eq!(config.input_format, InputFormat::Auto);
        assert_eq!(config.inspect.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_default_content_parses() {
        let config: ApiModelConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input, "swagger.yaml");
    }

    #[test]
    fn test_input_format_for_path() {
        assert_eq!(
            InputFormat::Auto.for_path(Path::new("api.json")),
            InputFormat::Json
        );
        assert_eq!(
            InputFormat::Auto.for_path(Path::new("api.yml")),
            InputFormat::Yaml
        );
        assert_eq!(
            InputFormat::Yaml.for_path(Path::new("api.json")),
            InputFormat::Yaml
        );
    }
}
