pub mod exon;
pub mod header;
pub mod record;

pub use exon::{extract_exons, locate_exon, ExonInterval, ExonList};
pub use header::{AnnotationField, HeaderAnnotation, HeaderExtractor, NcbiCdsHeader};
pub use record::SequenceRecord;
