/// The number of symbols taken on each side of the origin of replication.
pub const ORI_FLANK: usize = 300;

/// Slices `sequence[start..end]` where negative bounds count backwards from the end of the sequence.
///
/// A bound that is still negative after wrapping becomes zero, a bound past the end becomes the length,
/// and a start that is not before the end yields an empty slice.
/// A negative start is not clamped to zero first, so a window reaching over the start of the sequence
/// begins near its tail instead, and is usually empty.
pub fn slice_wrapping(sequence: &[u8], start: isize, end: isize) -> &[u8] {
    let start = normalise_bound(start, sequence.len());
    let end = normalise_bound(end, sequence.len());

    if start < end {
        &sequence[start..end]
    } else {
        &[]
    }
}

fn normalise_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        (bound as usize).min(len)
    }
}

/// Returns the window of `flank` symbols on each side of `ori_index`, with the bounds handled by [`slice_wrapping`].
/// A flank too large for `isize` saturates, so the window then covers the whole sequence.
pub fn extract_ori_region(sequence: &[u8], ori_index: usize, flank: usize) -> &[u8] {
    let ori_index = isize::try_from(ori_index).unwrap_or(isize::MAX);
    let flank = isize::try_from(flank).unwrap_or(isize::MAX);
    slice_wrapping(
        sequence,
        ori_index.saturating_sub(flank),
        ori_index.saturating_add(flank),
    )
}

#[cfg(test)]
mod tests {
    use super::{extract_ori_region, slice_wrapping, ORI_FLANK};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn numbered_sequence(len: usize) -> Vec<u8> {
        (0..len).map(|i| b"ACGT"[i % 4]).collect()
    }

    #[test]
    fn test_centered_window() {
        let sequence = numbered_sequence(1000);
        let region = extract_ori_region(&sequence, 500, ORI_FLANK);
        assert_eq!(region.len(), 600);
        assert_eq!(region, &sequence[200..800]);
    }

    #[test]
    fn test_negative_start_wraps() {
        // seq[-290:310] on 1000 symbols is seq[710:310], which is empty.
        let sequence = numbered_sequence(1000);
        assert!(extract_ori_region(&sequence, 10, ORI_FLANK).is_empty());

        // seq[-290:310] on 400 symbols is seq[110:310].
        let sequence = numbered_sequence(400);
        let region = extract_ori_region(&sequence, 10, ORI_FLANK);
        assert_eq!(region, &sequence[110..310]);
    }

    #[test]
    fn test_negative_start_past_the_beginning() {
        // seq[-290:310] on 100 symbols is seq[0:100].
        let sequence = numbered_sequence(100);
        assert_eq!(extract_ori_region(&sequence, 10, ORI_FLANK), &sequence[..]);
    }

    #[test]
    fn test_end_is_clamped() {
        let sequence = numbered_sequence(1000);
        let region = extract_ori_region(&sequence, 900, ORI_FLANK);
        assert_eq!(region.len(), 400);
        assert_eq!(region, &sequence[600..]);
    }

    #[test]
    fn test_slice_wrapping() {
        let sequence = b"ACGTACGTAC";
        assert_eq!(slice_wrapping(sequence, 2, 5), b"GTA");
        assert_eq!(slice_wrapping(sequence, -3, 10), b"TAC");
        assert_eq!(slice_wrapping(sequence, -3, -1), b"TA");
        assert_eq!(slice_wrapping(sequence, 8, 100), b"AC");
        assert_eq!(slice_wrapping(sequence, -100, 2), b"AC");
        assert!(slice_wrapping(sequence, 5, 5).is_empty());
        assert!(slice_wrapping(sequence, 7, 3).is_empty());
        assert!(slice_wrapping(b"", -1, 1).is_empty());
    }

    #[test]
    fn test_huge_flank() {
        let sequence = numbered_sequence(1000);
        assert_eq!(extract_ori_region(&sequence, 500, usize::MAX), &sequence[..]);
        assert_eq!(
            extract_ori_region(&sequence, 0, isize::MAX as usize),
            &sequence[..]
        );
        assert_eq!(
            extract_ori_region(&sequence, 999, isize::MAX as usize + 1),
            &sequence[..]
        );
    }

    /// Negative-index slice normalisation, computed in a wider integer type.
    fn expected_bounds(len: usize, start: isize, end: isize) -> (usize, usize) {
        let len = len as i128;
        let normalise = |bound: isize| {
            let bound = bound as i128;
            if bound < 0 {
                (bound + len).max(0)
            } else {
                bound.min(len)
            }
        };
        let (start, end) = (normalise(start), normalise(end));
        if start < end {
            (start as usize, end as usize)
        } else {
            (0, 0)
        }
    }

    #[test]
    fn test_random_slices() {
        let mut random = StdRng::seed_from_u64(0);

        for _ in 0..2000 {
            let sequence = numbered_sequence(random.gen_range(0..=1000));
            let start = random.gen_range(-1500..=1500);
            let end = random.gen_range(-1500..=1500);
            let (expected_start, expected_end) = expected_bounds(sequence.len(), start, end);
            assert_eq!(
                slice_wrapping(&sequence, start, end),
                &sequence[expected_start..expected_end],
                "len {} start {} end {}",
                sequence.len(),
                start,
                end
            );
        }
    }

    #[test]
    fn test_random_regions() {
        let mut random = StdRng::seed_from_u64(0);

        for _ in 0..1000 {
            let sequence = numbered_sequence(random.gen_range(1..=1500));
            let ori_index = random.gen_range(0..sequence.len());
            let (expected_start, expected_end) = expected_bounds(
                sequence.len(),
                ori_index as isize - ORI_FLANK as isize,
                ori_index as isize + ORI_FLANK as isize,
            );
            let region = extract_ori_region(&sequence, ori_index, ORI_FLANK);
            assert_eq!(region, &sequence[expected_start..expected_end]);
            assert!(region.len() <= 2 * ORI_FLANK);
        }
    }
}
