use altstart_core::config::{
    ExportConfig, ScanConfig, DEFAULT_CONTEXT_LEN, DEFAULT_MAX_STOP_DISTANCE, DEFAULT_MOTIF,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "altstart",
    about = "Report in-frame alternative ATGG start contexts downstream of the first exon"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "input",
        required = true,
        value_name = "PATH",
        help = "Path to a cds_from_genomic FASTA file"
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long = "output",
        required = true,
        value_name = "PATH",
        help = "Path to the output table"
    )]
    pub output: PathBuf,

    #[arg(
        short = 'm',
        long = "motif",
        value_name = "REGEX",
        default_value = DEFAULT_MOTIF,
        help = "Start-context motif pattern"
    )]
    pub motif: String,

    #[arg(
        short = 'c',
        long = "context",
        value_name = "BASES",
        default_value_t = DEFAULT_CONTEXT_LEN,
        help = "Upstream bases that must be free of the forbidden base"
    )]
    pub context: usize,

    #[arg(
        short = 'f',
        long = "forbidden",
        value_name = "BASE",
        default_value_t = 'T',
        help = "Base not allowed in the upstream context"
    )]
    pub forbidden: char,

    #[arg(
        short = 's',
        long = "max-stop-distance",
        value_name = "BASES",
        default_value_t = DEFAULT_MAX_STOP_DISTANCE,
        help = "Maximum distance from an out-of-frame motif to its closing stop codon"
    )]
    pub max_stop_distance: usize,

    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = ',',
        help = "Output field delimiter"
    )]
    pub delimiter: char,

    #[arg(
        short = 't',
        long = "threads",
        help = "Number of threads",
        value_name = "THREADS",
        default_value_t = num_cpus::get()
    )]
    pub threads: usize,

    #[arg(short = 'v', long = "verbose", help = "Log every skipped record")]
    pub verbose: bool,
}

impl Args {
    pub fn check(&self) -> Result<(), CliError> {
        validate_input(&self.input)?;
        validate_output(&self.output)?;

        if !self.forbidden.is_ascii_alphabetic() {
            return Err(CliError::InvalidInput(format!(
                "forbidden base {:?} is not an ASCII letter",
                self.forbidden
            )));
        }
        if !self.delimiter.is_ascii() {
            return Err(CliError::InvalidInput(format!(
                "delimiter {:?} is not a single ASCII character",
                self.delimiter
            )));
        }
        if self.threads == 0 {
            return Err(CliError::InvalidInput(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Scan and export settings; call after `check`.
    pub fn configs(&self) -> (ScanConfig, ExportConfig) {
        let scan = ScanConfig::default()
            .with_motif(self.motif.clone())
            .with_context_len(self.context)
            .with_forbidden_base(self.forbidden as u8)
            .with_max_stop_distance(self.max_stop_distance);
        let export = ExportConfig {
            delimiter: self.delimiter as u8,
        };
        (scan, export)
    }
}

fn validate_input(arg: &Path) -> Result<(), CliError> {
    if !arg.exists() {
        return Err(CliError::InvalidInput(format!("{:?} does not exist", arg)));
    }
    if !arg.is_file() {
        return Err(CliError::InvalidInput(format!("{:?} is not a file", arg)));
    }
    std::fs::File::open(arg)?;
    Ok(())
}

fn validate_output(arg: &Path) -> Result<(), CliError> {
    match arg.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(CliError::InvalidInput(
            format!("output directory {:?} does not exist", dir),
        )),
        _ => Ok(()),
    }
}
