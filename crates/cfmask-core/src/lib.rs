pub mod calendar;
pub mod config;
pub mod consts;
pub mod error;
pub mod percentile;
