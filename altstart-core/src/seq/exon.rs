use crate::error::{AltStartError, AltStartResult};
use log::warn;
use regex::Regex;
use std::sync::LazyLock;

static COMPLEMENT_JOIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"location=complement\(join\(([^)]+)\)\)").expect("static regex is valid")
});
static PLAIN_JOIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"location=join\(([^)]+)\)").expect("static regex is valid"));

/// Genomic exon coordinates, 1-based and inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExonInterval {
    start: usize,
    end: usize,
}

#[allow(clippy::len_without_is_empty)]
impl ExonInterval {
    pub fn new(start: usize, end: usize) -> AltStartResult<Self> {
        if start > end {
            return Err(AltStartError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Saturates at `usize::MAX` for a span covering the whole address range.
    pub fn len(&self) -> usize {
        (self.end - self.start).saturating_add(1)
    }
}

/// Exons in transcript (5' to 3') order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExonList {
    exons: Vec<ExonInterval>,
}

impl ExonList {
    pub fn new(exons: Vec<ExonInterval>) -> Self {
        Self { exons }
    }

    pub fn as_slice(&self) -> &[ExonInterval] {
        &self.exons
    }

    pub fn len(&self) -> usize {
        self.exons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exons.is_empty()
    }

    /// Spliced length covered by all exons.
    pub fn total_len(&self) -> usize {
        self.exons
            .iter()
            .map(ExonInterval::len)
            .fold(0, usize::saturating_add)
    }

    pub fn locate(&self, offset: usize) -> Option<usize> {
        locate_exon(offset, self)
    }
}

impl From<Vec<ExonInterval>> for ExonList {
    fn from(exons: Vec<ExonInterval>) -> Self {
        Self::new(exons)
    }
}

/// Parse the `location=` clause of a CDS header into transcript-ordered exons.
///
/// `complement(join(..))` takes priority over a plain `join(..)` and yields
/// the ranges in reverse annotation order. Headers carrying neither shape
/// produce an empty list. Malformed ranges are logged and skipped.
pub fn extract_exons(header: &str) -> ExonList {
    let (ranges, reversed) = if let Some(caps) = COMPLEMENT_JOIN.captures(header) {
        (caps.get(1), true)
    } else if let Some(caps) = PLAIN_JOIN.captures(header) {
        (caps.get(1), false)
    } else {
        return ExonList::default();
    };
    let Some(ranges) = ranges else {
        return ExonList::default();
    };

    let mut exons = Vec::new();
    for token in ranges.as_str().split(',') {
        match parse_exon_range(token) {
            Ok(exon) => exons.push(exon),
            Err(err) => warn!("Skipping malformed exon range: {err}"),
        }
    }
    if reversed {
        exons.reverse();
    }
    ExonList::new(exons)
}

/// Parse one `start..end` token, ignoring decorations such as `<` and `>`.
pub fn parse_exon_range(token: &str) -> AltStartResult<ExonInterval> {
    let malformed = |msg: &'static str| AltStartError::MalformedExonRange {
        token: token.to_string(),
        msg,
    };

    let mut parts = token.split("..");
    let (start, end) = match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => (start, end),
        (_, None, _) => return Err(malformed("missing '..' separator")),
        _ => return Err(malformed("more than one '..' separator")),
    };

    let start = parse_coordinate(start).ok_or_else(|| malformed("unreadable start coordinate"))?;
    let end = parse_coordinate(end).ok_or_else(|| malformed("unreadable end coordinate"))?;
    if start <= end && (end - start).checked_add(1).is_none() {
        return Err(malformed("range length overflows"));
    }
    ExonInterval::new(start, end).map_err(|_| malformed("end precedes start"))
}

fn parse_coordinate(raw: &str) -> Option<usize> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Map a 0-based cDNA offset to its 1-based exon number.
///
/// Returns `None` when the offset lies beyond the spliced length or the list
/// is empty.
pub fn locate_exon(offset: usize, exons: &ExonList) -> Option<usize> {
    let mut cumulative = 0usize;
    for (idx, exon) in exons.as_slice().iter().enumerate() {
        let next = cumulative.saturating_add(exon.len());
        if offset >= cumulative && offset < next {
            return Some(idx + 1);
        }
        cumulative = next;
    }
    None
}
