use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfmaskError {
    #[error("Failed to allocate histogram of {bins} bins")]
    HistogramAllocation { bins: usize },

    #[error("Invalid value range: max {max} is below min {min}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Range bound {0} cannot be mapped to a histogram bin")]
    UnrepresentableBound(f64),

    #[error("Sample {index} (value {value}) lies outside the range [{min}, {max}]")]
    SampleOutOfRange {
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Sample {index} (value {value}) cannot be mapped to a histogram bin")]
    UnmappableSample { index: usize, value: f64 },

    #[error("Percentage must be a number, got {0}")]
    InvalidPercent(f32),

    #[error("Month {0} out of range (1-12)")]
    InvalidMonth(u32),

    #[error("Day {day} out of range for month {month} of {year}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CfmaskError>;
