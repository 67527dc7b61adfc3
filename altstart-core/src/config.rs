use crate::error::{AltStartError, AltStartResult};

pub const DEFAULT_MOTIF: &str = "ATGG";
pub const DEFAULT_CONTEXT_LEN: usize = 15;
pub const DEFAULT_FORBIDDEN_BASE: u8 = b'T';
pub const DEFAULT_MAX_STOP_DISTANCE: usize = 300;
pub const DEFAULT_STOP_CODONS: [[u8; 3]; 3] = [*b"TAG", *b"TGA", *b"TAA"];

/// Thresholds and patterns driving the per-record scan.
///
/// Defaults reproduce the empirical values: an `ATGG` motif, 15 upstream
/// bases free of `T`, and a stop codon no further than 300 bases from the
/// first out-of-frame occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    pub motif: String,
    pub context_len: usize,
    pub forbidden_base: u8,
    pub max_stop_distance: usize,
    pub stop_codons: Vec<[u8; 3]>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            motif: DEFAULT_MOTIF.to_string(),
            context_len: DEFAULT_CONTEXT_LEN,
            forbidden_base: DEFAULT_FORBIDDEN_BASE,
            max_stop_distance: DEFAULT_MAX_STOP_DISTANCE,
            stop_codons: DEFAULT_STOP_CODONS.to_vec(),
        }
    }
}

impl ScanConfig {
    pub fn with_motif(mut self, motif: impl Into<String>) -> Self {
        self.motif = motif.into();
        self
    }

    pub fn with_context_len(mut self, context_len: usize) -> Self {
        self.context_len = context_len;
        self
    }

    pub fn with_forbidden_base(mut self, base: u8) -> Self {
        self.forbidden_base = base;
        self
    }

    pub fn with_max_stop_distance(mut self, distance: usize) -> Self {
        self.max_stop_distance = distance;
        self
    }

    pub fn validate(&self) -> AltStartResult<()> {
        if self.motif.is_empty() {
            return Err(AltStartError::InvalidConfig {
                msg: "motif pattern must not be empty".to_string(),
            });
        }
        regex::bytes::Regex::new(&self.motif).map_err(|e| AltStartError::InvalidMotif {
            pattern: self.motif.clone(),
            source: e,
        })?;
        if !self.forbidden_base.is_ascii_alphabetic() {
            return Err(AltStartError::InvalidConfig {
                msg: format!(
                    "forbidden base must be an ASCII letter, got {:?}",
                    self.forbidden_base as char
                ),
            });
        }
        if self.stop_codons.is_empty() {
            return Err(AltStartError::InvalidConfig {
                msg: "at least one stop codon is required".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    pub delimiter: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> AltStartResult<()> {
        if !self.delimiter.is_ascii() || self.delimiter == b'"' || self.delimiter == b'\n' {
            return Err(AltStartError::InvalidConfig {
                msg: format!("unusable delimiter {:?}", self.delimiter as char),
            });
        }
        Ok(())
    }
}
