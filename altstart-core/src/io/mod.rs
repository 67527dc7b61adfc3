pub mod csv;
pub mod fasta;

pub use self::csv::{write_rows, write_rows_to_path, OUTPUT_COLUMNS};
pub use fasta::{FastaRecords, SequenceStore};
