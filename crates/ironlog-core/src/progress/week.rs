//! Monday-based week boundaries.

use jiff::{civil::Date, Timestamp, ToSpan, Zoned};

use crate::error::Result;

/// An inclusive range covering Monday 00:00:00.000 through Sunday
/// 23:59:59.999 in the reference instant's time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: Zoned,
    pub end: Zoned,
}

impl WeekWindow {
    /// The week containing `reference`, in `reference`'s time zone.
    pub fn containing(reference: &Zoned) -> Result<Self> {
        let monday = monday_of(reference.date())?;
        let next_monday = monday.checked_add(7.days())?;
        let tz = reference.time_zone().clone();

        let start = monday.to_zoned(tz.clone())?;
        let end = next_monday.to_zoned(tz)?.checked_sub(1.millisecond())?;
        Ok(Self { start, end })
    }

    /// The week containing now, in the system time zone.
    pub fn current() -> Result<Self> {
        Self::containing(&Zoned::now())
    }

    /// The week containing local midnight of `date` in the system time zone.
    pub fn of_date(date: Date) -> Result<Self> {
        Self::containing(&date.to_zoned(jiff::tz::TimeZone::system())?)
    }

    /// Start bound as an absolute instant.
    pub fn start_timestamp(&self) -> Timestamp {
        self.start.timestamp()
    }

    /// End bound as an absolute instant.
    pub fn end_timestamp(&self) -> Timestamp {
        self.end.timestamp()
    }

    /// Calendar date of the week's Monday.
    pub fn first_day(&self) -> Date {
        self.start.date()
    }

    /// Calendar date of the week's Sunday.
    pub fn last_day(&self) -> Date {
        self.end.date()
    }
}

/// Monday on or before `date`. Sunday belongs to the week that started six
/// days earlier.
fn monday_of(date: Date) -> Result<Date> {
    let offset: i64 = match date.weekday().to_sunday_zero_offset() {
        1 => 0,
        0 => -6,
        day => 1 - i64::from(day),
    };
    Ok(date.checked_add(offset.days())?)
}
