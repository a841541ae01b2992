//! xpath-attrs CLI library
//!
//! Command-line front end for building XPath attribute locators and for
//! inspecting how a pattern is decomposed.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
mod logging;

pub use commands::{
    parse_attr_arg, AttrArg, Cli, Commands, FormatArg, LocateArgs, ParseArgs, SpecArgs,
};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::init_tracing;
