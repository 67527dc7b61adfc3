use crate::config::ScanConfig;
use crate::error::{AltStartError, AltStartResult};
use memchr::memchr;
use regex::bytes::Regex;

/// A motif match: `start` is the 0-based offset, `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MotifOccurrence {
    pub start: usize,
    pub end: usize,
}

impl MotifOccurrence {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Clone, Debug)]
pub struct MotifScanner {
    pattern: Regex,
    context_len: usize,
    forbidden_base: u8,
}

impl MotifScanner {
    pub fn new(config: &ScanConfig) -> AltStartResult<Self> {
        let pattern = Regex::new(&config.motif).map_err(|e| AltStartError::InvalidMotif {
            pattern: config.motif.clone(),
            source: e,
        })?;
        if pattern.is_match(b"") {
            return Err(AltStartError::InvalidConfig {
                msg: format!("motif pattern '{}' matches the empty string", config.motif),
            });
        }
        Ok(Self {
            pattern,
            context_len: config.context_len,
            forbidden_base: config.forbidden_base,
        })
    }

    /// Non-overlapping, leftmost-first matches whose upstream context is clean.
    pub fn scan(&self, seq: &[u8]) -> Vec<MotifOccurrence> {
        self.pattern
            .find_iter(seq)
            .filter(|m| self.has_clean_context(seq, m.start()))
            .map(|m| MotifOccurrence::new(m.start(), m.end()))
            .collect()
    }

    /// True when `pos` has a full context window with no forbidden base in it.
    pub fn has_clean_context(&self, seq: &[u8], pos: usize) -> bool {
        if pos < self.context_len || pos > seq.len() {
            return false;
        }
        memchr(self.forbidden_base, &seq[pos - self.context_len..pos]).is_none()
    }

    pub fn context_len(&self) -> usize {
        self.context_len
    }
}
