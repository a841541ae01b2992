//! Subcommand handlers
//!
//! Handlers return the text to print so they can be tested without a process.

use std::fs;
use std::path::Path;

use serde_json::json;
use tracing::{debug, info};
use xpath_attrs::{parse_pattern, predicate, AttributeSpec, Axis, Pattern, XPathLocator};

use crate::commands::{Commands, LocateArgs, ParseArgs, SpecArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};

/// Run a subcommand and produce its output
pub fn execute(config: &CliConfig, command: &Commands) -> CliResult<String> {
    match command {
        Commands::Child(args) => run_locate(config, Axis::Child, args),
        Commands::Parent(args) => run_locate(config, Axis::Parent, args),
        Commands::NextSibling(args) => run_locate(config, Axis::NextSibling, args),
        Commands::PrevSibling(args) => run_locate(config, Axis::PrevSibling, args),
        Commands::Predicate(args) => run_predicate(config, args),
        Commands::Parse(args) => run_parse(config, args),
    }
}

/// Read a JSON attribute specification file
pub fn load_spec_file(path: &Path) -> CliResult<AttributeSpec> {
    let json = fs::read_to_string(path).map_err(|source| CliError::SpecFile {
        path: path.to_path_buf(),
        source,
    })?;
    let spec = AttributeSpec::from_json_str(&json)?;
    info!(path = %path.display(), attributes = spec.len(), "loaded attribute specification");
    Ok(spec)
}

/// Spec file entries first, then `--attr` values in command-line order
pub fn build_spec(args: &SpecArgs) -> CliResult<AttributeSpec> {
    let mut spec = match &args.spec {
        Some(path) => load_spec_file(path)?,
        None => AttributeSpec::new(),
    };
    for attr in &args.attrs {
        spec.insert(attr.name.as_str(), attr.value.clone());
    }
    debug!(attributes = spec.len(), "attribute specification ready");
    Ok(spec)
}

fn run_locate(config: &CliConfig, axis: Axis, args: &LocateArgs) -> CliResult<String> {
    let spec = build_spec(&args.spec)?;
    let mut locator = XPathLocator::new(axis, &spec);
    if let Some(node) = &args.node {
        locator = locator.node(node.as_str());
    }

    let rendered = if args.bare {
        locator.expression()
    } else {
        locator.to_string()
    };

    match config.format {
        OutputFormat::Text => Ok(rendered),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "axis": locator.axis(),
            "node": locator.node_test(),
            "predicate": locator.predicate(),
            "locator": rendered,
        }))?),
    }
}

fn run_predicate(config: &CliConfig, args: &SpecArgs) -> CliResult<String> {
    let spec = build_spec(args)?;
    let xpath = predicate(&spec);
    match config.format {
        OutputFormat::Text => Ok(xpath),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({ "predicate": xpath }))?),
    }
}

fn run_parse(config: &CliConfig, args: &ParseArgs) -> CliResult<String> {
    let pattern = Pattern::from_literal(&args.pattern)?;
    let descriptor = parse_pattern(&pattern)?;
    match config.format {
        OutputFormat::Text => Ok(format!(
            "ignore_case:  {}\nstart_anchor: {}\nend_anchor:   {}\ncontent:      {:?}",
            descriptor.ignore_case, descriptor.start_anchor, descriptor.end_anchor, descriptor.content
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&descriptor)?),
    }
}
