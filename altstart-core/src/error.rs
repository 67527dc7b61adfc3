use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AltStartError {
    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),

    #[error("invalid exon interval: start ({start}) > end ({end})")]
    InvalidInterval { start: usize, end: usize },

    #[error("malformed exon range '{token}': {msg}")]
    MalformedExonRange { token: String, msg: &'static str },

    #[error("invalid motif pattern '{pattern}': {source}")]
    InvalidMotif {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid configuration: {msg}")]
    InvalidConfig { msg: String },

    #[error("csv write error in {path}: {source}")]
    CsvWrite {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("output io error in {path}: {source}")]
    OutputIo {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type AltStartResult<T> = Result<T, AltStartError>;
