//! Batch input for **FASTA / FASTQ / FASTQ.GZ** files.
//!
//! ### Design
//! - Records are parsed with `needletail` (format and compression sniffed
//!   from content).
//! - **Parallelism**: analysis runs on a local Rayon pool; `threads = None`
//!   uses all logical cores.
//! - A record that fails validation (e.g. contains `N`) is reported with its
//!   error and does not stop the batch. Across several files, an unreadable
//!   file is collected in [`BatchOutcome::failed_files`] instead.
//!
//! ### Example
//! ```no_run
//! use motifscan::{config::ScanConfig, seqio};
//! let results = seqio::analyze_file("contigs.fa", Some(4), &ScanConfig::default()).unwrap();
//! println!("analysed {} records", results.len());
//! ```
use std::path::Path;

use needletail::parse_fastx_file;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ScanConfig;
use crate::detect::Scanner;
use crate::error::Result;
use crate::report::{analyze_with, Analysis};
use crate::sequence::normalize;

/// A raw record as read from disk.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Per-record outcome; exactly one of `analysis` / `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct RecordAnalysis {
    pub id: String,
    pub analysis: Option<Analysis>,
    pub error: Option<String>,
}

/// Read every record of a FASTA/FASTQ file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let mut reader = parse_fastx_file(path.as_ref())?;
    let mut out = Vec::new();
    while let Some(record) = reader.next() {
        let rec = record?;
        out.push(RawRecord {
            id: String::from_utf8_lossy(rec.id()).to_string(),
            seq: rec.seq().to_vec(),
        });
    }
    Ok(out)
}

/// Analyse every record of `path` on a pool of `threads` workers.
pub fn analyze_file<P: AsRef<Path>>(path: P, threads: Option<usize>, cfg: &ScanConfig) -> Result<Vec<RecordAnalysis>> {
    let path = path.as_ref();
    let records = read_records(path)?;
    let scanner = Scanner::with_kinds(&cfg.motif_kinds()?);

    let n = threads.filter(|&t| t > 0).unwrap_or_else(num_cpus::get).max(1);
    let pool = ThreadPoolBuilder::new().num_threads(n).build()?;

    let results: Vec<RecordAnalysis> = pool.install(|| {
        records
            .par_iter()
            .map(|r| {
                let text = String::from_utf8_lossy(&r.seq);
                match normalize(&text) {
                    Ok(seq) => RecordAnalysis {
                        id: r.id.clone(),
                        analysis: Some(analyze_with(&scanner, seq, cfg)),
                        error: None,
                    },
                    Err(e) => RecordAnalysis { id: r.id.clone(), analysis: None, error: Some(e.to_string()) },
                }
            })
            .collect()
    });

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    info!(path = %path.display(), records = results.len(), failed, threads = n, "batch analysed");
    Ok(results)
}

/// A file of a multi-file batch that could not be read or parsed.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    pub records: Vec<RecordAnalysis>,
    pub failed_files: Vec<FileFailure>,
}

/// Run [`analyze_file`] over every path, in order. Unknown motif kinds in
/// `cfg` fail the whole batch up front; per-file read errors do not.
pub fn analyze_files<P: AsRef<Path>>(paths: &[P], threads: Option<usize>, cfg: &ScanConfig) -> Result<BatchOutcome> {
    cfg.motif_kinds()?;
    let mut outcome = BatchOutcome::default();
    for path in paths {
        let path = path.as_ref();
        match analyze_file(path, threads, cfg) {
            Ok(rows) => outcome.records.extend(rows),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "batch input failed");
                outcome.failed_files.push(FileFailure { path: path.display().to_string(), error: e.to_string() });
            }
        }
    }
    Ok(outcome)
}
