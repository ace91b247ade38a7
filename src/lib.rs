pub mod cert;
pub mod censys;
pub mod cli;
pub mod config;
pub mod utils;

pub use cert::{CertificateRecord, ExportSummary, Exporter, SearchResults};
pub use censys::{auth::Credentials, client::CensysClient};
pub use config::ExportConfig;
pub use utils::errors::{CertIndexError, Result};
