pub mod exporter;
pub mod record;
pub mod writer;

pub use exporter::{ExportSummary, Exporter};
pub use record::{CertificateRecord, SearchResults};
pub use writer::{write_csv, write_csv_file, CSV_HEADER};
