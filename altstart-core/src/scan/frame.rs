use crate::config::ScanConfig;
use crate::scan::motif::MotifOccurrence;

/// First stop codon read in steps of three from `start`, below `end`.
pub fn find_stop_codon(seq: &[u8], start: usize, end: usize, stops: &[[u8; 3]]) -> Option<usize> {
    (start..end).step_by(3).find(|&i| match seq.get(i..i + 3) {
        Some(codon) => stops.iter().any(|stop| stop == codon),
        None => false,
    })
}

/// Pick the alternative start from the first two qualifying occurrences.
///
/// An in-frame first occurrence wins outright. Otherwise the second one is
/// only trusted when it is in frame and the first occurrence's frame is
/// closed by a stop codon within `max_stop_distance` bases.
pub fn resolve_frame(
    seq: &[u8],
    first: MotifOccurrence,
    second: MotifOccurrence,
    config: &ScanConfig,
) -> Option<MotifOccurrence> {
    if first.start % 3 == 0 {
        return Some(first);
    }
    if second.start % 3 != 0 {
        return None;
    }

    let stop = find_stop_codon(seq, first.start, second.start, &config.stop_codons)?;
    let distance = stop - first.start;
    if distance % 3 == 0 && distance <= config.max_stop_distance {
        Some(second)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn occ(start: usize) -> MotifOccurrence {
        MotifOccurrence::new(start, start + 4)
    }

    fn seq_with(len: usize, edits: &[(usize, &str)]) -> Vec<u8> {
        let mut seq = vec![b'C'; len];
        for &(at, bases) in edits {
            seq[at..at + bases.len()].copy_from_slice(bases.as_bytes());
        }
        seq
    }

    #[test]
    fn stop_codon_search_steps_by_three() {
        let stops = ScanConfig::default().stop_codons;
        let seq = seq_with(40, &[(11, "TAG"), (16, "TAA")]);
        assert_eq!(find_stop_codon(&seq, 0, 30, &stops), None);
        assert_eq!(find_stop_codon(&seq, 1, 30, &stops), Some(16));
        assert_eq!(find_stop_codon(&seq, 2, 30, &stops), Some(11));
        assert_eq!(find_stop_codon(&seq, 1, 16, &stops), None);
    }

    #[test]
    fn stop_codon_search_tolerates_short_tail() {
        let stops = ScanConfig::default().stop_codons;
        assert_eq!(find_stop_codon(b"CCCCTA", 1, 10, &stops), None);
    }

    #[test]
    fn in_frame_first_occurrence_wins() {
        let seq = seq_with(100, &[(21, "ATGG"), (60, "ATGG")]);
        let cfg = ScanConfig::default();
        assert_eq!(resolve_frame(&seq, occ(21), occ(60), &cfg), Some(occ(21)));
    }

    #[test]
    fn out_of_frame_first_needs_stop_codon() {
        let cfg = ScanConfig::default();
        let seq = seq_with(100, &[(20, "ATGG"), (60, "ATGG")]);
        assert_eq!(resolve_frame(&seq, occ(20), occ(60), &cfg), None);

        // TGA at 20 + 9, in the first occurrence's frame
        let seq = seq_with(100, &[(20, "ATGG"), (29, "TGA"), (60, "ATGG")]);
        assert_eq!(resolve_frame(&seq, occ(20), occ(60), &cfg), Some(occ(60)));
    }

    #[test]
    fn stop_codon_in_other_frame_is_ignored() {
        let cfg = ScanConfig::default();
        let seq = seq_with(100, &[(20, "ATGG"), (30, "TAA"), (60, "ATGG")]);
        assert_eq!(resolve_frame(&seq, occ(20), occ(60), &cfg), None);
    }

    #[test]
    fn stop_codon_beyond_distance_limit() {
        let cfg = ScanConfig::default().with_max_stop_distance(6);
        let seq = seq_with(100, &[(20, "ATGG"), (29, "TAG"), (60, "ATGG")]);
        assert_eq!(resolve_frame(&seq, occ(20), occ(60), &cfg), None);

        let cfg = ScanConfig::default().with_max_stop_distance(9);
        assert_eq!(resolve_frame(&seq, occ(20), occ(60), &cfg), Some(occ(60)));
    }

    #[test]
    fn default_distance_limit_is_inclusive_at_300() {
        let cfg = ScanConfig::default();
        let seq = seq_with(400, &[(1, "ATGG"), (301, "TAA"), (351, "ATGG")]);
        // second at 351 is in frame (351 = 3 * 117)
        assert_eq!(resolve_frame(&seq, occ(1), occ(351), &cfg), Some(occ(351)));

        let seq = seq_with(400, &[(1, "ATGG"), (304, "TAA"), (351, "ATGG")]);
        assert_eq!(resolve_frame(&seq, occ(1), occ(351), &cfg), None);
    }

    #[test]
    fn neither_in_frame() {
        let cfg = ScanConfig::default();
        let seq = seq_with(100, &[(20, "ATGG"), (26, "TAG"), (61, "ATGG")]);
        assert_eq!(resolve_frame(&seq, occ(20), occ(61), &cfg), None);
    }

    proptest! {
        #[test]
        fn never_selects_when_both_out_of_frame(
            seq in prop::collection::vec(
                prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
                300,
            ),
            k in 0usize..50,
            k2 in 1usize..30,
            r1 in 1usize..3,
            r2 in 1usize..3,
        ) {
            let first = 3 * k + r1;
            let second = 3 * (k + k2) + r2;
            let got = resolve_frame(&seq, occ(first), occ(second), &ScanConfig::default());
            prop_assert_eq!(got, None);
        }

        #[test]
        fn selection_is_always_in_frame(
            seq in prop::collection::vec(
                prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
                300,
            ),
            a in 0usize..150,
            gap in 1usize..100,
        ) {
            let second = a + gap;
            if let Some(chosen) = resolve_frame(&seq, occ(a), occ(second), &ScanConfig::default()) {
                prop_assert_eq!(chosen.start % 3, 0);
            }
        }
    }
}
