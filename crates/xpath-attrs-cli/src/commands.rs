//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use xpath_attrs::{AttributeValue, Pattern};

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};

/// Build XPath locators from attribute matchers
#[derive(Parser, Debug)]
#[command(name = "xpath-attrs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate matching descendants (`//`)
    Child(LocateArgs),

    /// Locate matching ancestors (`ancestor::`)
    Parent(LocateArgs),

    /// Locate matching later siblings (`following-sibling::`)
    NextSibling(LocateArgs),

    /// Locate matching earlier siblings (`preceding-sibling::`)
    PrevSibling(LocateArgs),

    /// Print only the predicate for the attributes
    Predicate(SpecArgs),

    /// Show how a /source/flags pattern is decomposed
    Parse(ParseArgs),
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON object
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Attribute matchers, from a file and/or the command line
#[derive(Args, Debug, Clone)]
pub struct SpecArgs {
    /// Attribute matcher: `name=value` (exact) or `name~/source/flags` (pattern)
    #[arg(short, long = "attr", value_name = "ATTR", value_parser = parse_attr_arg)]
    pub attrs: Vec<AttrArg>,

    /// JSON file with an attribute specification object, applied before --attr
    #[arg(short, long, value_name = "FILE")]
    pub spec: Option<PathBuf>,
}

/// Arguments for the axis subcommands
#[derive(Args, Debug, Clone)]
pub struct LocateArgs {
    /// Attribute matchers
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Element name to match instead of `*`
    #[arg(short, long, value_name = "NODE")]
    pub node: Option<String>,

    /// Omit the `xpath=` prefix
    #[arg(long)]
    pub bare: bool,
}

/// Arguments for the parse subcommand
#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Pattern in /source/flags notation
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,
}

/// One `--attr` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrArg {
    /// Attribute name
    pub name: String,
    /// Matcher
    pub value: AttributeValue,
}

/// Parse `name=value` or `name~/source/flags`
///
/// The first `=` or `~` separates the name from the matcher.
pub fn parse_attr_arg(arg: &str) -> CliResult<AttrArg> {
    let Some(split) = arg.find(['=', '~']) else {
        return Err(CliError::invalid_argument(format!(
            "{arg:?} must be name=value or name~/pattern/flags"
        )));
    };
    let (name, rest) = arg.split_at(split);
    if name.is_empty() {
        return Err(CliError::invalid_argument(format!(
            "{arg:?} has an empty attribute name"
        )));
    }

    let value = match rest.split_at(1) {
        ("~", literal) => AttributeValue::pattern(&Pattern::from_literal(literal)?)?,
        (_, exact) => AttributeValue::exact(exact),
    };
    Ok(AttrArg {
        name: name.to_string(),
        value,
    })
}
