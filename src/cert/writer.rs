use crate::cert::CertificateRecord;
use crate::utils::errors::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Output columns, in order
pub const CSV_HEADER: [&str; 4] = [
    "subject_dn",
    "fingerprint_sha256",
    "validity_start",
    "validity_end",
];

/// Write the header and one row per record; returns the number of rows written.
///
/// The header is always written, so an empty result set still yields a valid file.
pub fn write_csv<W, I>(writer: W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Result<CertificateRecord>>,
{
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    let mut written = 0;
    for record in records {
        csv_writer.serialize(record?)?;
        written += 1;
    }

    csv_writer.flush()?;
    Ok(written)
}

/// Create (or truncate) `path` and write the records to it
pub fn write_csv_file<I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = Result<CertificateRecord>>,
{
    let file = File::create(path)?;
    tracing::trace!("Opened {} for writing", path.display());
    write_csv(file, records)
}
