//! xpath-attrs: build XPath locators from attribute matchers
//!
//! ## Usage
//!
//! ```bash
//! xpath-attrs child -a id=container                # xpath=//*[@id='container']
//! xpath-attrs parent -a 'id~/^Contain/i' -n div     # case-insensitive prefix
//! xpath-attrs next-sibling --spec attrs.json --bare
//! xpath-attrs parse '/child-2$/i' --format json
//! ```

use std::process::ExitCode;

use clap::Parser;
use xpath_attrs_cli::{handlers, init_tracing, Cli, CliConfig, CliResult, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let config = build_config(&cli);
    init_tracing(config.verbosity);

    let output = handlers::execute(&config, &cli.command)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        Verbosity::from_count(cli.verbose)
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_format(cli.format.into())
}
