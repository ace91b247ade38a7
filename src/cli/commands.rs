use crate::cert::{ExportSummary, Exporter};
use crate::censys::auth::Credentials;
use crate::censys::client::CensysClient;
use crate::cli::args::Cli;
use crate::config::ExportConfig;
use crate::utils::errors::{CertIndexError, Result};
use std::future::Future;
use std::io;

/// How a run ended, and what the process reports for it
#[derive(Debug)]
pub enum RunOutcome {
    Completed,
    Interrupted,
    Failed(CertIndexError),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed | Self::Interrupted => 0,
            Self::Failed(e) => e.exit_code(),
        }
    }

    /// Line(s) printed for the operator, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Completed => None,
            Self::Interrupted => Some("Quitting...".to_string()),
            Self::Failed(e) => Some(format!("Something Went Wrong:\n{e}")),
        }
    }
}

/// Drive `work` to completion unless `interrupt` resolves first.
///
/// The interrupt is polled first, so it wins when both are ready.
pub async fn run_until_interrupted<W, I>(work: W, interrupt: I) -> RunOutcome
where
    W: Future<Output = Result<()>>,
    I: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = interrupt => RunOutcome::Interrupted,
        result = work => match result {
            Ok(()) => RunOutcome::Completed,
            Err(e) => RunOutcome::Failed(e),
        },
    }
}

/// Initialize logging - always to stderr
pub fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(cli.log_filter())
        .init();
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    init_logging(&cli);
    export_from_cli(cli, Credentials::from_env).await?;
    Ok(())
}

/// Load credentials, then export with the CLI's query, output and API URL.
///
/// Credentials are checked before any network call.
pub async fn export_from_cli<F>(cli: Cli, load_credentials: F) -> Result<ExportSummary>
where
    F: FnOnce() -> Result<Credentials>,
{
    let credentials = load_credentials()?;
    let config = ExportConfig::new(credentials)
        .with_api_url(cli.api_url)
        .with_query(cli.query)
        .with_output(cli.output);

    export(&config).await
}

/// Run one export with an explicit configuration
pub async fn export(config: &ExportConfig) -> Result<ExportSummary> {
    tracing::trace!("Using Censys API at {}", config.api_url);
    let client = CensysClient::new(config.api_url.clone(), config.credentials.clone())?;

    Exporter::new(client)
        .run(&config.query, &config.output)
        .await
}
