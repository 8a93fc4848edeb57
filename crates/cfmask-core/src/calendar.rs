use crate::consts::{DAYS_PER_MONTH, DAYS_PER_MONTH_LEAP};
use crate::error::{CfmaskError, Result};

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    Ok(month_table(year)[month_index(month)?])
}

/// Day of year (1-based) for a calendar date.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    let index = month_index(month)?;
    let table = month_table(year);
    if day == 0 || day > table[index] {
        return Err(CfmaskError::InvalidDay { year, month, day });
    }
    Ok(table[..index].iter().sum::<u32>() + day)
}

fn month_table(year: i32) -> &'static [u32; 12] {
    if is_leap_year(year) {
        &DAYS_PER_MONTH_LEAP
    } else {
        &DAYS_PER_MONTH
    }
}

fn month_index(month: u32) -> Result<usize> {
    if (1..=12).contains(&month) {
        Ok(month as usize - 1)
    } else {
        Err(CfmaskError::InvalidMonth(month))
    }
}
