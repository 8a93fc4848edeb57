/// Value returned by every percentile query over an empty sample buffer.
pub const EMPTY_SAMPLE_SENTINEL: f32 = 0.0;

/// Trailing bins added past the rounded upper bound for continuous samples,
/// absorbing values that round one unit above `max`.
pub const CONTINUOUS_EXTRA_BINS: usize = 1;

/// Default cloud probability threshold (percent).
pub const DEFAULT_CLOUD_PROBABILITY: f32 = 22.5;

/// Default dilation buffer around cloud pixels, in pixels.
pub const DEFAULT_CLOUD_DILATION: u32 = 3;

/// Default dilation buffer around cloud shadow pixels, in pixels.
pub const DEFAULT_SHADOW_DILATION: u32 = 3;

/// Days in each month of a common year (index 0 = January).
pub const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in each month of a leap year (index 0 = January).
pub const DAYS_PER_MONTH_LEAP: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
