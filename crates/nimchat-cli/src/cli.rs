//! Command-line arguments for the `nimchat` binary.
//!
//! There are no subcommands: running the binary starts a chat session. The
//! flags only control diagnostics, never the model or its parameters.

use clap::Parser;

/// Chat with Llama 3.1 on NVIDIA NIM from your terminal.
#[derive(Parser, Debug)]
#[command(name = "nimchat", version, about, long_about = None)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log diagnostics to stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long)]
    pub otel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["nimchat"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.otel);
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["nimchat", "-vv", "--otel"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.otel);
    }

    #[test]
    fn test_rejects_positional_input() {
        assert!(Cli::try_parse_from(["nimchat", "hello"]).is_err());
    }
}
