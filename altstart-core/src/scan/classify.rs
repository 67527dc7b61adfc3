use crate::config::ScanConfig;
use crate::error::AltStartResult;
use crate::scan::frame::resolve_frame;
use crate::scan::motif::{MotifOccurrence, MotifScanner};
use crate::seq::exon::extract_exons;
use crate::seq::header::{AnnotationField, HeaderExtractor};
use crate::seq::record::SequenceRecord;
use std::fmt;

/// Why a record produced no output row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    NoQualifyingMotif,
    AmbiguousFrame,
    UnknownExon,
    FirstExon,
    MissingAnnotationField(AnnotationField),
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::NoQualifyingMotif => "no qualifying motif",
            SkipReason::AmbiguousFrame => "ambiguous frame",
            SkipReason::UnknownExon => "unknown exon",
            SkipReason::FirstExon => "first exon",
            SkipReason::MissingAnnotationField(_) => "missing annotation field",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingAnnotationField(field) => {
                write!(f, "{} '{}'", self.label(), field)
            }
            _ => f.write_str(self.label()),
        }
    }
}

/// The selected alternative start of one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub position: usize,
    pub substring: Box<str>,
    pub exon: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputRow {
    pub gene: Box<str>,
    pub gene_id: Box<str>,
    pub protein: Box<str>,
    pub protein_id: Box<str>,
    pub total_length: usize,
    pub substring: Box<str>,
    pub position: usize,
    pub exon: usize,
}

/// Per-record pipeline: motif scan, frame resolution, exon lookup, then
/// header annotation.
pub struct RecordClassifier<'a, E: HeaderExtractor> {
    scanner: MotifScanner,
    config: &'a ScanConfig,
    extractor: &'a E,
}

impl<'a, E: HeaderExtractor> RecordClassifier<'a, E> {
    pub fn new(config: &'a ScanConfig, extractor: &'a E) -> AltStartResult<Self> {
        config.validate()?;
        Ok(Self {
            scanner: MotifScanner::new(config)?,
            config,
            extractor,
        })
    }

    /// Select the alternative start of `record`, if it has one.
    pub fn candidate(&self, record: &SequenceRecord) -> Result<Candidate, SkipReason> {
        let seq = record.sequence();
        let occurrences = self.scanner.scan(seq);
        let (first, second) = match occurrences.as_slice() {
            [first, second, ..] => (*first, *second),
            _ => return Err(SkipReason::NoQualifyingMotif),
        };

        let chosen = resolve_frame(seq, first, second, self.config)
            .ok_or(SkipReason::AmbiguousFrame)?;
        let exon = extract_exons(record.header()).locate(chosen.start);

        Ok(Candidate {
            position: chosen.start,
            substring: self.window(seq, chosen),
            exon,
        })
    }

    pub fn classify(&self, record: &SequenceRecord) -> Result<OutputRow, SkipReason> {
        let candidate = self.candidate(record)?;
        let exon = match candidate.exon {
            None => return Err(SkipReason::UnknownExon),
            Some(1) => return Err(SkipReason::FirstExon),
            Some(exon) => exon,
        };
        let annotation = self
            .extractor
            .annotation(record.header())
            .map_err(SkipReason::MissingAnnotationField)?;

        Ok(OutputRow {
            gene: annotation.gene,
            gene_id: annotation.gene_id,
            protein: annotation.protein,
            protein_id: annotation.protein_id,
            total_length: record.len(),
            substring: candidate.substring,
            position: candidate.position,
            exon,
        })
    }

    fn window(&self, seq: &[u8], occ: MotifOccurrence) -> Box<str> {
        let start = occ.start.saturating_sub(self.scanner.context_len());
        let end = occ.end.min(seq.len());
        String::from_utf8_lossy(&seq[start..end]).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::header::NcbiCdsHeader;

    const FIELDS: &str = "[gene=Abc1] [db_xref=GeneID:1234] [protein=alpha beta] [protein_id=NP_1.1]";

    fn padded(n: usize) -> String {
        "N".repeat(n)
    }

    fn record(location: &str, seq: String) -> SequenceRecord {
        SequenceRecord::new(format!("lcl|x {FIELDS} [location={location}]"), seq)
    }

    #[test]
    fn in_frame_first_occurrence_window() {
        let cfg = ScanConfig::default();
        let classifier = RecordClassifier::new(&cfg, &NcbiCdsHeader).unwrap();
        let seq = format!("{}ATGG{}ATGG", padded(21), padded(50));
        let rec = record("join(1..10,11..200)", seq.clone());
        let cand = classifier.candidate(&rec).unwrap();
        assert_eq!(cand.position, 21);
        assert_eq!(&*cand.substring, &seq[6..25]);
        assert_eq!(cand.exon, Some(2));
    }

    #[test]
    fn single_occurrence_is_no_signal() {
        let cfg = ScanConfig::default();
        let classifier = RecordClassifier::new(&cfg, &NcbiCdsHeader).unwrap();
        let rec = record("join(1..10,11..200)", format!("{}ATGG", padded(30)));
        assert_eq!(classifier.classify(&rec), Err(SkipReason::NoQualifyingMotif));
    }

    #[test]
    fn out_of_frame_pair_without_stop_is_ambiguous() {
        let cfg = ScanConfig::default();
        let classifier = RecordClassifier::new(&cfg, &NcbiCdsHeader).unwrap();
        let seq = format!("{}ATGG{}ATGG", padded(19), padded(50));
        let rec = record("join(1..10,11..200)", seq);
        assert_eq!(classifier.classify(&rec), Err(SkipReason::AmbiguousFrame));
    }

    #[test]
    fn exon_outcomes() {
        let cfg = ScanConfig::default();
        let classifier = RecordClassifier::new(&cfg, &NcbiCdsHeader).unwrap();
        let seq = format!("{}ATGG{}ATGG", padded(21), padded(50));

        let rec = record("join(1..30,100..200)", seq.clone());
        assert_eq!(classifier.classify(&rec), Err(SkipReason::FirstExon));

        let rec = record("1..78", seq.clone());
        assert_eq!(classifier.classify(&rec), Err(SkipReason::UnknownExon));

        let rec = record("join(1..5,6..10)", seq);
        assert_eq!(classifier.classify(&rec), Err(SkipReason::UnknownExon));
    }

    #[test]
    fn row_carries_annotation() {
        let cfg = ScanConfig::default();
        let classifier = RecordClassifier::new(&cfg, &NcbiCdsHeader).unwrap();
        let seq = format!("{}ATGG{}ATGG", padded(21), padded(50));
        let rec = record("complement(join(500..600,100..110))", seq.clone());
        let row = classifier.classify(&rec).unwrap();
        assert_eq!(&*row.gene, "Abc1");
        assert_eq!(&*row.gene_id, "1234");
        assert_eq!(&*row.protein, "alpha beta");
        assert_eq!(&*row.protein_id, "NP_1.1");
        assert_eq!(row.total_length, seq.len());
        assert_eq!(row.position, 21);
        assert_eq!(row.exon, 2);
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(SkipReason::FirstExon.to_string(), "first exon");
        assert_eq!(
            SkipReason::MissingAnnotationField(AnnotationField::ProteinId).to_string(),
            "missing annotation field 'protein_id'"
        );
    }
}
