//! CLI argument parsing for stackgen.
//!
//! Uses clap derive macros for declarative argument definitions. The tool
//! takes no operational arguments: both paths are fixed relative to the
//! project root, so clap only services `--help`/`--version` and rejects
//! anything else.

use clap::Parser;

/// Stackgen: regenerate the extension's tech-stack data file.
///
/// Converts the hand-maintained stack description (`lib/tech_stack.yaml`)
/// into the generated script (`lib/tech_stack_data.js`) that assigns
/// `window.TECH_STACK_DATA` for the extension runtime.
#[derive(Parser, Debug)]
#[command(name = "stackgen")]
#[command(author, version, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_with_no_arguments() {
        assert!(Cli::try_parse_from(["stackgen"]).is_ok());
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["stackgen", "lib/other.yaml"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["stackgen", "--watch"]).is_err());
    }
}
