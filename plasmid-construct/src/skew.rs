use crate::error::{Error, ErrorKind};
use log::debug;

/// Computes the cumulative GC skew of the given sequence.
///
/// The value at position `i` is the number of `G` minus the number of `C` in `sequence[..=i]`.
/// Any other symbol leaves the running value unchanged.
pub fn skew_trace(sequence: &[u8]) -> Vec<i64> {
    let mut score = 0;
    sequence
        .iter()
        .map(|&symbol| {
            match symbol {
                b'G' => score += 1,
                b'C' => score -= 1,
                _ => {}
            }
            score
        })
        .collect()
}

/// The result of scanning a sequence for its GC skew minimum.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SkewScan {
    trace: Vec<i64>,
    ori_index: usize,
}

impl SkewScan {
    /// Scans the given sequence and locates the first position of minimal skew.
    /// Fails with [`ErrorKind::EmptyInput`] if the sequence is empty.
    pub fn scan(sequence: &[u8]) -> crate::error::Result<Self> {
        let trace = skew_trace(sequence);
        let ori_index = first_minimum(&trace).ok_or_else(|| Error::from(ErrorKind::EmptyInput))?;
        debug!(
            "Skew minimum {} at position {} of {}",
            trace[ori_index],
            ori_index,
            trace.len()
        );

        Ok(Self { trace, ori_index })
    }

    /// The cumulative skew value at every position of the scanned sequence.
    pub fn trace(&self) -> &[i64] {
        &self.trace
    }

    /// The first position holding the minimum skew value.
    pub fn ori_index(&self) -> usize {
        self.ori_index
    }

    /// The minimum skew value.
    pub fn minimum(&self) -> i64 {
        self.trace[self.ori_index]
    }
}

/// Returns the position of the minimum GC skew of the sequence.
pub fn find_ori(sequence: &[u8]) -> crate::error::Result<usize> {
    SkewScan::scan(sequence).map(|scan| scan.ori_index())
}

// `Iterator::min_by_key` returns the last of several equal minima, so the scan is done by hand.
fn first_minimum(trace: &[i64]) -> Option<usize> {
    let mut result: Option<usize> = None;
    for (index, value) in trace.iter().enumerate() {
        match result {
            Some(minimum) if trace[minimum] <= *value => {}
            _ => result = Some(index),
        }
    }
    result
}
