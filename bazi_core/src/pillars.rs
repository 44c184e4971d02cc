//! Pillar derivation for the four chart positions.
//!
//! Year and month pillars use fixed-epoch approximations (no true lunar
//! calendar, no astronomical solar terms); the day pillar is an exact day
//! count from the 1900-01-01 epoch; the hour pillar splits the day into
//! twelve double-hour branches.

use crate::cycle;
use crate::solar_terms::SolarTermBoundary;
use crate::tables::{HOUR_STEM_TABLE, MONTH_BRANCHES, MONTH_STEM_TABLE};
use crate::types::Pillar;
use crate::{Error, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Epoch for the year pillar: 1900 is 庚子, cycle index 36.
const YEAR_EPOCH: i32 = 1900;
const YEAR_EPOCH_INDEX: i64 = 36;

/// Epoch for the day pillar: 1900-01-01 is 甲子, cycle index 0.
static DAY_EPOCH: Lazy<NaiveDate> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("epoch date is a valid calendar date")
});

/// Year pillar from the calendar year.
///
/// Periodic with period 60. The true lunar-new-year boundary is not
/// consulted; the calendar year alone picks the pillar.
pub fn year_pillar(year: i32) -> Pillar {
    let index = (YEAR_EPOCH_INDEX + i64::from(year) - i64::from(YEAR_EPOCH)).rem_euclid(60);
    cycle::pillar_at(index as usize)
}

/// Month pillar from the calendar date.
///
/// The branch walks the twelve-month sequence opened by the start-of-spring
/// boundary; the stem comes from the five-tiger rotation keyed by the year
/// stem.
pub fn month_pillar(
    year: i32,
    month: u32,
    day: u32,
    boundary: &dyn SolarTermBoundary,
) -> Pillar {
    let lunar_month = boundary.lunar_month(month, day);
    let year_stem = year_pillar(year).stem;
    let column = (lunar_month - 1) as usize;
    Pillar::new(
        MONTH_STEM_TABLE[year_stem.index() as usize][column],
        MONTH_BRANCHES[column],
    )
}

/// Day pillar from the calendar date. Exact, no approximation.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let days = date.signed_duration_since(*DAY_EPOCH).num_days();
    cycle::pillar_at(days.rem_euclid(60) as usize)
}

/// Hour pillar from the calendar date and the hour of day.
///
/// Branch 0 (子) spans 23:00-01:00, so hours 23 and 0 share it; each later
/// branch covers the next two hours. The stem comes from the five-rat
/// rotation keyed by the day stem.
pub fn hour_pillar(date: NaiveDate, hour: u32) -> Result<Pillar> {
    if hour > 23 {
        return Err(Error::InvalidInput(format!(
            "hour {} out of range 0-23",
            hour
        )));
    }
    let branch_index = (((hour + 1) / 2) % 12) as usize;
    let day_stem = day_pillar(date).stem;
    Ok(Pillar::new(
        HOUR_STEM_TABLE[day_stem.index() as usize][branch_index],
        cycle::BRANCHES[branch_index],
    ))
}
