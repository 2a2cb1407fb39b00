use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use apimodel_core::config::{self, ApiModelConfig, CONFIG_FILE_NAME, InputFormat, OutputFormat};
use apimodel_core::model::ApiModel;
use apimodel_core::parse;

#[derive(Parser)]
#[command(
    name = "apimodel",
    about = "Swagger 2.0 / OpenAPI 3.0 model parser",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a document can be modeled
    Validate {
        /// Path to the Swagger/OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the parsed model of a document
    Inspect {
        /// Path to the Swagger/OpenAPI document
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (defaults to the config file setting)
        #[arg(long)]
        format: Option<InspectFormat>,
    },

    /// Initialize a new apimodel configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apimodel", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<ApiModelConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_model(path: &Path, cfg: &ApiModelConfig) -> Result<ApiModel> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    log::debug!("loading {}", path.display());

    let model = match cfg.input_format.for_path(path) {
        InputFormat::Json => parse::from_json(&content, &filename),
        _ => parse::from_yaml(&content, &filename),
    }
    .with_context(|| format!("{} could not be modeled", path.display()))?;
    Ok(model)
}

fn cmd_validate(input: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let model = load_model(&input, &cfg)?;

    let operations: usize = model.paths.values().map(|p| p.methods.len()).sum();

    eprintln!("Valid document {} (version {})", model.filename, model.version);
    eprintln!("  Title: {}", model.info.title);
    eprintln!("  API version: {}", model.info.version);
    eprintln!("  Servers: {}", model.servers.len());
    eprintln!("  Paths: {}", model.paths.len());
    eprintln!("  Operations: {}", operations);
    eprintln!("  Definitions: {}", model.definitions.len());
    eprintln!("  Security definitions: {}", model.security_definitions.len());
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: Option<PathBuf>, format: Option<InspectFormat>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let model = load_model(&input, &cfg)?;

    let mut value = serde_json::to_value(&model)?;
    if !cfg.inspect.include_nodes {
        strip_fallback_nodes(&mut value);
    }

    let format = format.unwrap_or(match cfg.inspect.format {
        OutputFormat::Yaml => InspectFormat::Yaml,
        OutputFormat::Json => InspectFormat::Json,
    });

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&value)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&value)?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Drop the raw schema node from every serialized `primitive` type.
fn strip_fallback_nodes(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if map.get("kind").and_then(|k| k.as_str()) == Some("primitive") {
                if let Some(serde_json::Value::Object(of)) = map.get_mut("of") {
                    of.remove("node");
                }
            }
            for child in map.values_mut() {
                strip_fallback_nodes(child);
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(strip_fallback_nodes),
        _ => {}
    }
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
