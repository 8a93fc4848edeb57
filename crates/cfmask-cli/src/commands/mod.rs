pub mod config;
pub mod doy;
pub mod percentile;
