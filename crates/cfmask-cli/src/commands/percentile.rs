use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use cfmask_core::percentile::{Continuous, Discrete, PercentileEstimator, SampleDomain};
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
pub enum DomainArg {
    /// 16-bit integer samples
    Discrete,
    /// Floating-point samples, rounded to the nearest integer bin
    Continuous,
}

#[derive(Args)]
pub struct PercentileArgs {
    /// Text file of samples separated by whitespace or commas
    pub file: PathBuf,

    /// Target percentages (e.g. "17.5,82.5")
    #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub percent: Vec<f32>,

    /// Lower bound of the value range (defaults to the smallest sample)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<String>,

    /// Upper bound of the value range (defaults to the largest sample)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<String>,

    /// Sample domain
    #[arg(long, value_enum, default_value = "discrete")]
    pub domain: DomainArg,
}

pub fn run(args: &PercentileArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read samples from {}", args.file.display()))?;

    match args.domain {
        DomainArg::Discrete => report::<Discrete<i16>>(&contents, args),
        DomainArg::Continuous => report::<Continuous<f32>>(&contents, args),
    }
}

fn report<D>(contents: &str, args: &PercentileArgs) -> Result<()>
where
    D: SampleDomain,
    D::Sample: FromStr + PartialOrd + Default,
    <D::Sample as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let samples = parse_samples::<D::Sample>(contents)?;
    let (min, max) =
        resolve_range::<D::Sample>(&samples, args.min.as_deref(), args.max.as_deref())?;
    debug!(count = samples.len(), ?min, ?max, "Samples loaded");

    let estimator = PercentileEstimator::<D>::new(&samples, min, max)?;

    println!("Samples: {}", estimator.sample_count());
    println!("Range:   [{:?}, {:?}]", min, max);
    for &percent in &args.percent {
        let value = estimator
            .percentile(percent)
            .with_context(|| format!("Failed to estimate the {}th percentile", percent))?;
        println!("{:>7.2}%  {}", percent, value);
    }
    Ok(())
}

fn parse_samples<T>(contents: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    contents
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<T>()
                .with_context(|| format!("Invalid sample #{} '{}'", i + 1, token))
        })
        .collect()
}

/// Explicit bounds win; missing ones come from the observed samples. An empty
/// file gets a zero range, which the estimator never inspects.
fn resolve_range<T>(samples: &[T], min: Option<&str>, max: Option<&str>) -> Result<(T, T)>
where
    T: Copy + PartialOrd + Default + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let lo = match min {
        Some(v) => parse_bound::<T>(v, "--min")?,
        None => samples
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
            .unwrap_or_default(),
    };
    let hi = match max {
        Some(v) => parse_bound::<T>(v, "--max")?,
        None => samples
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or_default(),
    };
    Ok((lo, hi))
}

fn parse_bound<T>(value: &str, flag: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("{} '{}' does not fit the sample domain", flag, value))
}
