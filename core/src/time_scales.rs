//! Conversion between civil time and Terrestrial Time.
//!
//! Solar positions are computed in TT, while the input instants are civil
//! Beijing time. Inside the UTC era the difference TT − UT is exact from the
//! leap-second table; outside it a long-term model is used, pinned to the
//! table at both edges so the function stays continuous.

use std::f64::consts::PI;
use std::sync::OnceLock;

use bazi_common::{Date, SolarTime};

/// Civil timezone of all input instants, minutes east of UTC (Beijing).
pub const CIVIL_TZ_MINUTES: i32 = 480;

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time),
/// represented as a Julian date.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented as a Julian date.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

impl Ut {
    /// Julian date of a civil Beijing-time instant.
    ///
    /// # Example
    ///
    /// ```
    /// use bazi_common::SolarTime;
    /// use bazi_core::time_scales::Ut;
    ///
    /// let time = SolarTime::from_ymdh(2020, 1, 1, 0).unwrap();
    /// let ut = Ut::from_civil(&time);
    /// assert!((ut.0 - 2458849.166667).abs() < 1e-6);
    /// ```
    pub fn from_civil(time: &SolarTime) -> Self {
        let day_frac = time.seconds_of_day() as f64 / 86400.0;
        Ut(time.date().jdn() as f64 - 0.5 + day_frac - CIVIL_TZ_MINUTES as f64 / 1440.0)
    }
}

impl From<Ut> for Tt {
    fn from(ut: Ut) -> Tt {
        Tt(ut.0 + delta_t(ut) / 86400.0)
    }
}

/// TT − UT in seconds at the given instant.
pub fn delta_t(ut: Ut) -> f64 {
    let table = leap_seconds::table();
    if ut.0 < table.starts {
        return estimate(ut.0) + table.pre_offset;
    }
    if ut.0 >= table.expires {
        return estimate(ut.0) + table.post_offset;
    }
    let steps = table.steps.partition_point(|&jd| jd <= ut.0);
    leap_seconds::TT_UTC_AT_START + steps as f64
}

/// Long-term TT − UT model (parabola plus a 14-century tidal cosine term),
/// anchored by the offsets in [`leap_seconds::Table`].
fn estimate(jd: f64) -> f64 {
    let y = (jd - 2451544.5) / 365.2425 + 2000.0;
    let t = (y - 1825.0) / 100.0;
    31.4115 * t * t + 284.8435805251424 * (2.0 * PI * (t + 0.75) / 14.0).cos()
}

mod leap_seconds {
    use super::{Date, OnceLock, estimate};

    /// End-of-day UTC dates on which a leap second was inserted.
    pub const DATES: &[(i32, u32, u32)] = &[
        (1972, 6, 30),
        (1972, 12, 31),
        (1973, 12, 31),
        (1974, 12, 31),
        (1975, 12, 31),
        (1976, 12, 31),
        (1977, 12, 31),
        (1978, 12, 31),
        (1979, 12, 31),
        (1981, 6, 30),
        (1982, 6, 30),
        (1983, 6, 30),
        (1985, 6, 30),
        (1987, 12, 31),
        (1989, 12, 31),
        (1990, 12, 31),
        (1992, 6, 30),
        (1993, 6, 30),
        (1994, 6, 30),
        (1995, 12, 31),
        (1997, 6, 30),
        (1998, 12, 31),
        (2005, 12, 31),
        (2008, 12, 31),
        (2012, 6, 30),
        (2015, 6, 30),
        (2016, 12, 31),
    ];
    /// Last date the table is known to cover (no further leap seconds
    /// have been announced up to this day).
    pub const DATE_EXPIRES: (i32, u32, u32) = (2021, 12, 31);

    /// TT − UTC at the start of the UTC era (32.184 s TT − TAI plus the
    /// initial 10 s TAI − UTC of 1972-01-01).
    pub const TT_UTC_AT_START: f64 = 42.184;

    #[derive(Debug)]
    pub struct Table {
        /// UT Julian date of 1972-01-01T00:00Z.
        pub starts: f64,
        /// Midnight after each leap second, UT Julian dates, ascending.
        pub steps: Vec<f64>,
        /// UT Julian date after which the table no longer applies.
        pub expires: f64,
        /// Continuity corrections for [`estimate`] on either side.
        pub pre_offset: f64,
        pub post_offset: f64,
    }

    static TABLE: OnceLock<Table> = OnceLock::new();

    pub fn table() -> &'static Table {
        TABLE.get_or_init(|| {
            let starts = midnight_after(1971, 12, 31);
            let steps: Vec<f64> = DATES
                .iter()
                .map(|&(y, m, d)| midnight_after(y, m, d))
                .collect();
            let (y, m, d) = DATE_EXPIRES;
            let expires = midnight_after(y, m, d);
            Table {
                starts,
                steps,
                expires,
                pre_offset: TT_UTC_AT_START - estimate(starts),
                post_offset: TT_UTC_AT_START + DATES.len() as f64 - estimate(expires),
            }
        })
    }

    /// UT Julian date of the midnight ending the given UTC day.
    fn midnight_after(year: i32, month: u32, day: u32) -> f64 {
        let date = Date::from_gregorian(year, month, day)
            .unwrap_or_else(|e| panic!("leap second table broken: {e}"));
        date.jdn() as f64 + 0.5
    }
}
