pub mod classify;
pub mod frame;
pub mod motif;

pub use classify::{Candidate, OutputRow, RecordClassifier, SkipReason};
pub use frame::{find_stop_codon, resolve_frame};
pub use motif::{MotifOccurrence, MotifScanner};

use crate::config::{ExportConfig, ScanConfig};
use crate::error::AltStartResult;
use crate::io::csv::write_rows_to_path;
use crate::io::fasta::SequenceStore;
use crate::seq::header::{HeaderExtractor, NcbiCdsHeader};
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub header: Box<str>,
    pub reason: SkipReason,
}

/// Rows in input order plus every record that was left out and why.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub rows: Vec<OutputRow>,
    pub skipped: Vec<SkippedRecord>,
}

impl ScanReport {
    pub fn records_seen(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }

    pub fn skip_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for skipped in &self.skipped {
            *counts.entry(skipped.reason.label()).or_insert(0) += 1;
        }
        counts
    }
}

pub fn scan_store<E: HeaderExtractor>(
    store: &SequenceStore,
    config: &ScanConfig,
    extractor: &E,
) -> AltStartResult<ScanReport> {
    let classifier = RecordClassifier::new(config, extractor)?;
    let outcomes: Vec<Result<OutputRow, SkipReason>> =
        par_map!(store.records(), |record| classifier.classify(record));

    let mut report = ScanReport::default();
    for (record, outcome) in store.iter().zip(outcomes) {
        match outcome {
            Ok(row) => report.rows.push(row),
            Err(reason) => {
                debug!("{}: {}", record.header(), reason);
                report.skipped.push(SkippedRecord {
                    header: record.header.clone(),
                    reason,
                });
            }
        }
    }
    Ok(report)
}

/// Read `input`, scan every record and write the qualifying rows to `output`.
///
/// Nothing is written when reading or scanning fails.
pub fn run(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ScanConfig,
    export: &ExportConfig,
) -> AltStartResult<ScanReport> {
    config.validate()?;
    export.validate()?;

    let input = input.as_ref();
    info!("Reading sequences from {}", input.display());
    let store = SequenceStore::from_path(input)?;
    info!("Loaded {} records", store.len());

    let report = scan_store(&store, config, &NcbiCdsHeader)?;
    for (reason, count) in report.skip_counts() {
        info!("Skipped ({reason}): {count}");
    }
    info!("Qualifying records: {}", report.rows.len());

    let output = output.as_ref();
    write_rows_to_path(output, &report.rows, export)?;
    info!("Results saved to {}", output.display());

    Ok(report)
}
