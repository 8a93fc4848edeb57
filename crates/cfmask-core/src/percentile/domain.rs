use std::fmt::Debug;
use std::marker::PhantomData;

use num_traits::{Float, PrimInt, ToPrimitive};

use crate::consts::CONTINUOUS_EXTRA_BINS;

/// A numeric sample domain that can be discretized onto integer histogram bins.
///
/// A bin is identified by the integer value it represents, so the reverse
/// mapping from bin back to a reported value is the identity.
pub trait SampleDomain {
    type Sample: Copy + Debug + PartialOrd + ToPrimitive;

    /// Bins appended past the bin of the upper bound.
    const EXTRA_BINS: usize;

    /// Integer bin for `sample`, or `None` if it has no integer representation
    /// (NaN, infinity, or outside `i64`).
    fn to_bin(sample: Self::Sample) -> Option<i64>;
}

/// Integer-valued samples, binned by their own value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discrete<T>(PhantomData<T>);

impl<T: PrimInt + Debug> SampleDomain for Discrete<T> {
    type Sample = T;

    const EXTRA_BINS: usize = 0;

    fn to_bin(sample: T) -> Option<i64> {
        sample.to_i64()
    }
}

/// Floating-point samples, binned by rounding to the nearest integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Continuous<T>(PhantomData<T>);

impl<T: Float + Debug> SampleDomain for Continuous<T> {
    type Sample = T;

    const EXTRA_BINS: usize = CONTINUOUS_EXTRA_BINS;

    fn to_bin(sample: T) -> Option<i64> {
        if !sample.is_finite() {
            return None;
        }
        round_half_even(sample).to_i64()
    }
}

/// Round to the nearest integer, ties to even (IEEE default rounding).
pub fn round_half_even<T: Float>(x: T) -> T {
    let rounded = x.round();
    let two = T::one() + T::one();
    if (rounded - x).abs() == T::one() / two {
        (x / two).round() * two
    } else {
        rounded
    }
}

/// Lossy widening used for error reports and the fallback result.
pub(crate) fn as_f64<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
