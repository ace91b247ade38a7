use crate::censys::DEFAULT_API_URL;
use crate::config::{DEFAULT_OUTPUT, DEFAULT_QUERY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cert-index")]
#[command(version)]
#[command(about = "Certificate info to CSV")]
#[command(
    long_about = "Search the Censys certificate index and write subject DN, SHA-256 fingerprint \
and validity dates of every match to a CSV file.\n\n\
Credentials are read from CENSYS_APP_ID and CENSYS_SECRET, either in the environment \
or in a .env file in the working directory."
)]
pub struct Cli {
    /// Increase output verbosity (-v DEBUG, -vv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output for csv
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Censys search query
    #[arg(long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Censys API base URL
    #[arg(long, env = "CENSYS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl Cli {
    /// Tracing filter directive for the selected verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "cert_index=error";
        }
        match self.verbose {
            0 => "cert_index=info",  // Default: progress and quota
            1 => "cert_index=debug", // -v: debug level
            _ => "cert_index=trace", // -vv+: trace level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cert-index"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.output, PathBuf::from("certificates_index.csv"));
        assert_eq!(cli.query, "parsed.names: censys.io and tags: trusted");
        assert_eq!(cli.log_filter(), "cert_index=info");
    }

    #[test]
    fn test_output_flag() {
        let cli = Cli::try_parse_from(["cert-index", "-o", "report.csv"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("report.csv"));

        let cli = Cli::try_parse_from(["cert-index", "--output", "report.csv"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("report.csv"));
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["cert-index", "-v"]).unwrap();
        assert_eq!(cli.log_filter(), "cert_index=debug");

        let cli = Cli::try_parse_from(["cert-index", "--verbose"]).unwrap();
        assert_eq!(cli.log_filter(), "cert_index=debug");

        let cli = Cli::try_parse_from(["cert-index", "-vv"]).unwrap();
        assert_eq!(cli.log_filter(), "cert_index=trace");

        let cli = Cli::try_parse_from(["cert-index", "-q"]).unwrap();
        assert_eq!(cli.log_filter(), "cert_index=error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["cert-index", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_query_flag() {
        let cli = Cli::try_parse_from(["cert-index", "--query", "tags: trusted"]).unwrap();
        assert_eq!(cli.query, "tags: trusted");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
