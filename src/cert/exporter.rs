use crate::cert::writer::write_csv_file;
use crate::censys::client::CensysClient;
use crate::utils::errors::Result;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub records_written: usize,
    /// Matches reported by the search, across all pages
    pub total_matches: u64,
    pub pages: u32,
    pub output_path: PathBuf,
}

impl ExportSummary {
    /// Only the first page is fetched, so larger result sets are cut short
    pub fn truncated(&self) -> bool {
        self.pages > 1 || self.total_matches > self.records_written as u64
    }
}

/// Search the certificate index and write matching certificates to CSV
pub struct Exporter {
    client: CensysClient,
}

impl Exporter {
    pub fn new(client: CensysClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, query: &str, output_path: &Path) -> Result<ExportSummary> {
        tracing::debug!("Searching for `{}`", query);
        let certificates = self.client.search_certificates(query).await?;
        let metadata = certificates.metadata().clone();

        let account = self.client.account().await?;
        tracing::info!(
            "Used {} of {} calls for {}",
            account.quota.used,
            account.quota.allowance,
            account.email
        );
        if let Some(resets_at) = &account.quota.resets_at {
            tracing::debug!("Quota resets at {resets_at}");
        }

        // Off the runtime thread so an interrupt is still noticed mid-write
        let path = output_path.to_path_buf();
        let records_written =
            tokio::task::spawn_blocking(move || write_csv_file(&path, certificates))
                .await
                .map_err(io::Error::from)??;

        let summary = ExportSummary {
            records_written,
            total_matches: metadata.count,
            pages: metadata.pages,
            output_path: output_path.to_path_buf(),
        };

        if summary.truncated() {
            tracing::warn!(
                "Search matched {} certificates over {} pages; only the first page ({} rows) was written",
                summary.total_matches,
                summary.pages,
                summary.records_written
            );
        }
        tracing::debug!("Wrote {records_written} certificates");
        tracing::info!("Wrote to {}", output_path.display());

        Ok(summary)
    }
}
