//! Histogram-based percentile estimation over integer-binned samples.
//!
//! Used to derive adaptive classification thresholds from the pixel value
//! distribution of a scene. Samples are counted into one bin per integer value
//! of the caller-declared range and the bins are scanned in ascending order
//! for the first value whose cumulative share reaches the target percentage.

pub mod domain;
pub mod histogram;

use std::marker::PhantomData;

use tracing::debug;

use crate::consts::EMPTY_SAMPLE_SENTINEL;
use crate::error::{CfmaskError, Result};

pub use domain::{round_half_even, Continuous, Discrete, SampleDomain};
pub use histogram::Histogram;

use domain::as_f64;

/// Percentile estimator over one sample buffer.
///
/// The histogram is built once; any number of percentiles can then be read
/// from it.
#[derive(Clone, Debug)]
pub struct PercentileEstimator<D: SampleDomain> {
    /// `None` when the sample buffer was empty.
    histogram: Option<Histogram>,
    /// Reported when no bin reaches the target (the caller's `max`).
    fallback: f32,
    _domain: PhantomData<D>,
}

impl<D: SampleDomain> PercentileEstimator<D> {
    /// Build the histogram for `samples` over the inclusive range `[min, max]`.
    pub fn new(samples: &[D::Sample], min: D::Sample, max: D::Sample) -> Result<Self> {
        Self::from_samples(samples.iter().copied(), min, max)
    }

    /// Like [`PercentileEstimator::new`], for samples produced by an iterator
    /// (e.g. the valid pixels of a band).
    ///
    /// An empty input is not an error: every query then returns the `0.0`
    /// sentinel, regardless of the range.
    pub fn from_samples<I>(samples: I, min: D::Sample, max: D::Sample) -> Result<Self>
    where
        I: IntoIterator<Item = D::Sample>,
    {
        let mut samples = samples.into_iter().peekable();
        if samples.peek().is_none() {
            return Ok(Self {
                histogram: None,
                fallback: EMPTY_SAMPLE_SENTINEL,
                _domain: PhantomData,
            });
        }

        let start = D::to_bin(min).ok_or(CfmaskError::UnrepresentableBound(as_f64(min)))?;
        let end = D::to_bin(max).ok_or(CfmaskError::UnrepresentableBound(as_f64(max)))?;
        // Raw bounds are compared: float bounds may round into the same bin.
        if max < min || end < start {
            return Err(CfmaskError::InvalidRange {
                min: as_f64(min),
                max: as_f64(max),
            });
        }

        let bins = end
            .checked_sub(start)
            .and_then(|span| usize::try_from(span).ok())
            .and_then(|span| span.checked_add(1 + D::EXTRA_BINS))
            .ok_or(CfmaskError::HistogramAllocation { bins: usize::MAX })?;
        let mut histogram = Histogram::zeroed(start, bins)?;

        for (index, sample) in samples.enumerate() {
            let bin = D::to_bin(sample).ok_or(CfmaskError::UnmappableSample {
                index,
                value: as_f64(sample),
            })?;
            // Samples must lie within the declared bounds; the extra bins only
            // absorb rounding.
            if sample < min || sample > max || !histogram.record(bin) {
                return Err(CfmaskError::SampleOutOfRange {
                    index,
                    value: as_f64(sample),
                    min: as_f64(min),
                    max: as_f64(max),
                });
            }
        }

        debug!(
            origin = start,
            bins,
            samples = histogram.total(),
            "Percentile histogram built"
        );

        Ok(Self {
            histogram: Some(histogram),
            fallback: as_f64(max) as f32,
            _domain: PhantomData,
        })
    }

    /// Number of samples counted into the histogram.
    pub fn sample_count(&self) -> u64 {
        self.histogram.as_ref().map_or(0, Histogram::total)
    }

    pub fn histogram(&self) -> Option<&Histogram> {
        self.histogram.as_ref()
    }

    /// Smallest binned value such that at least `percent`% of the samples are
    /// less than or equal to it.
    ///
    /// `percent <= 0` yields the lowest bin and `percent > 100` yields `max`.
    /// NaN is rejected.
    pub fn percentile(&self, percent: f32) -> Result<f32> {
        let Some(histogram) = &self.histogram else {
            return Ok(EMPTY_SAMPLE_SENTINEL);
        };
        if percent.is_nan() {
            return Err(CfmaskError::InvalidPercent(percent));
        }

        let mut result = self.fallback;
        match histogram.first_reaching(percent) {
            Some(value) => {
                result = value as f32;
                debug!(percent, value, "Percentile bin found");
            }
            None => debug!(percent, fallback = result, "No bin reached percentile"),
        }
        Ok(result)
    }
}

/// One-shot percentile over `samples` in the domain `D`.
pub fn estimate_percentile<D: SampleDomain>(
    samples: &[D::Sample],
    min: D::Sample,
    max: D::Sample,
    percent: f32,
) -> Result<f32> {
    PercentileEstimator::<D>::new(samples, min, max)?.percentile(percent)
}

/// Percentile of integer samples within `[min, max]`.
pub fn estimate_percentile_discrete(
    samples: &[i16],
    min: i16,
    max: i16,
    percent: f32,
) -> Result<f32> {
    estimate_percentile::<Discrete<i16>>(samples, min, max, percent)
}

/// Percentile of floating-point samples within `[min, max]`.
///
/// Samples are rounded to the nearest integer before binning, so the result is
/// always integer-valued (or `max` when no bin reaches `percent`).
pub fn estimate_percentile_continuous(
    samples: &[f32],
    min: f32,
    max: f32,
    percent: f32,
) -> Result<f32> {
    estimate_percentile::<Continuous<f32>>(samples, min, max, percent)
}
