use anyhow::Result;
use clap::Args;
use cfmask_core::calendar::{day_of_year, is_leap_year};

#[derive(Args)]
pub struct DoyArgs {
    /// Year (e.g. 2013)
    #[arg(long)]
    pub year: i32,

    /// Month (1-12)
    #[arg(long)]
    pub month: u32,

    /// Day of month
    #[arg(long)]
    pub day: u32,
}

pub fn run(args: &DoyArgs) -> Result<()> {
    let doy = day_of_year(args.year, args.month, args.day)?;
    println!("Day of year: {}", doy);
    println!("Leap year:   {}", is_leap_year(args.year));
    Ok(())
}
