use crate::error::{CfmaskError, Result};

/// Per-value occurrence counts over a contiguous run of integer values.
///
/// Bin `i` counts occurrences of the value `origin + i`.
#[derive(Clone, Debug)]
pub struct Histogram {
    origin: i64,
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Allocate `bins` zeroed bins starting at `origin`.
    ///
    /// Fails with [`CfmaskError::HistogramAllocation`] instead of aborting when
    /// the allocator cannot satisfy the request.
    pub fn zeroed(origin: i64, bins: usize) -> Result<Self> {
        let mut counts = Vec::new();
        counts
            .try_reserve_exact(bins)
            .map_err(|_| CfmaskError::HistogramAllocation { bins })?;
        counts.resize(bins, 0);
        Ok(Self {
            origin,
            counts,
            total: 0,
        })
    }

    pub fn origin(&self) -> i64 {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of recorded occurrences across all bins.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Count one occurrence of `value`. Returns `false` (and records nothing)
    /// when the value has no bin.
    pub fn record(&mut self, value: i64) -> bool {
        let slot = value
            .checked_sub(self.origin)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|index| self.counts.get_mut(index));
        match slot {
            Some(count) => {
                *count += 1;
                self.total += 1;
                true
            }
            None => false,
        }
    }

    /// Smallest represented value whose cumulative count reaches `percent`
    /// of the total, scanning bins in ascending order.
    ///
    /// Returns `None` when no bin reaches it (`percent` above 100).
    pub fn first_reaching(&self, percent: f32) -> Option<i64> {
        // Compared against whole counts so that 100% is exactly reachable.
        let target = f64::from(percent) * self.total as f64 / 100.0;
        let mut sum = 0u64;
        for (index, &count) in self.counts.iter().enumerate() {
            sum += count;
            if sum as f64 >= target {
                return Some(self.origin + index as i64);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_has_requested_bins() {
        let h = Histogram::zeroed(-5, 11).unwrap();
        assert_eq!(h.len(), 11);
        assert_eq!(h.origin(), -5);
        assert_eq!(h.total(), 0);
        assert!(h.counts().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_record_in_and_out_of_range() {
        let mut h = Histogram::zeroed(10, 3).unwrap();
        assert!(h.record(10));
        assert!(h.record(12));
        assert!(h.record(12));
        assert!(!h.record(9));
        assert!(!h.record(13));
        assert!(!h.record(i64::MIN));
        assert_eq!(h.counts(), &[1, 0, 2]);
        assert_eq!(h.total(), 3);
    }

    #[test]
    fn test_first_reaching_skips_empty_leading_bins() {
        let mut h = Histogram::zeroed(0, 5).unwrap();
        h.record(3);
        h.record(4);
        // Empty bins already satisfy a zero target.
        assert_eq!(h.first_reaching(0.0), Some(0));
        assert_eq!(h.first_reaching(50.0), Some(3));
        assert_eq!(h.first_reaching(51.0), Some(4));
        assert_eq!(h.first_reaching(100.0), Some(4));
        assert_eq!(h.first_reaching(100.5), None);
    }

    #[test]
    fn test_first_reaching_exact_hundred_for_awkward_totals() {
        for total in [3u64, 7, 9, 11, 13, 49, 97] {
            let mut h = Histogram::zeroed(0, 2).unwrap();
            for _ in 0..total {
                h.record(0);
            }
            assert_eq!(h.first_reaching(100.0), Some(0), "total = {total}");
        }
    }

    #[test]
    fn test_zeroed_reports_oversized_allocation() {
        let err = Histogram::zeroed(0, usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            CfmaskError::HistogramAllocation { bins } if bins == usize::MAX
        ));
    }
}
