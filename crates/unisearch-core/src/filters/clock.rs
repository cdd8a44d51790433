//! Time source for relative date ranges

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, SubsecRound,
    TimeZone, Utc,
};

/// Where "now" comes from when a builder expands `today()`, `last_days()`, ...
///
/// Readings are truncated to milliseconds, the precision of the query
/// parameter wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// System clock, calendar boundaries in the local time zone
    #[default]
    System,

    /// A fixed instant, calendar boundaries in that instant's offset
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    /// Fixed clock reading the given UTC instant with a UTC calendar
    pub fn fixed_utc(now: DateTime<Utc>) -> Self {
        Clock::Fixed(now.fixed_offset())
    }

    /// Current instant
    pub fn now(&self) -> DateTime<Utc> {
        self.reading().0
    }

    /// Current instant together with the calendar date it falls on
    pub fn reading(&self) -> (DateTime<Utc>, NaiveDate) {
        match self {
            Clock::System => {
                let local = Local::now().trunc_subsecs(3);
                (local.with_timezone(&Utc), local.date_naive())
            }
            Clock::Fixed(now) => {
                let now = now.trunc_subsecs(3);
                (now.with_timezone(&Utc), now.date_naive())
            }
        }
    }

    /// Midnight at the start of `date` on this clock's calendar
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
            return DateTime::<Utc>::MIN_UTC;
        };

        let resolved = match self {
            Clock::System => resolve_local(&Local, midnight),
            Clock::Fixed(now) => resolve_local(now.offset(), midnight),
        };

        resolved.unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
    }
}

/// Instant of `local` in `tz`. A wall time skipped by a forward jump is read
/// with the offset in effect just before the jump, landing on the first
/// valid instant after it.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    if let Some(dt) = tz.from_local_datetime(&local).earliest() {
        return Some(dt.with_timezone(&Utc));
    }

    let day_before = local.checked_sub_days(Days::new(1))?;
    let offset = tz.from_local_datetime(&day_before).earliest()?.offset().fix();
    offset
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Monday of the week containing `date`
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

pub(crate) fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

pub(crate) fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}
