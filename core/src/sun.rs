//! Apparent position of the Sun and the jie (节) boundaries derived from it.
//!
//! The month pillar follows the twelve jie solar terms, which are defined by
//! the Sun reaching apparent ecliptic longitudes 315°, 345°, 15°, … 285°.
//! A low-precision series is enough here: its error is about 0.01°, some
//! fifteen minutes of time at a term boundary.

use bazi_common::Date;
use bazi_common::error::DateError;

use crate::time_scales::{Tt, Ut};

/// Mean motion of the Sun in longitude, degrees per day.
const MEAN_MOTION: f64 = 360.0 / 365.2422;

/// Apparent geocentric ecliptic longitude of the Sun in degrees, `[0, 360)`.
pub fn apparent_longitude(tt: Tt) -> f64 {
    let t = (tt.0 - 2451545.0) / 36525.0;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    (l0 + c - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

/// Index of the jie month the Sun sits in: 0 for 立春..惊蛰 (the 寅 month)
/// through 11 for 小寒..立春 (the 丑 month).
pub fn jie_sector(longitude: f64) -> u32 {
    ((longitude - 315.0).rem_euclid(360.0) / 30.0) as u32 % 12
}

/// Name of the jie opening the given month sector.
pub fn jie_name(sector: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "立春", "惊蛰", "清明", "立夏", "芒种", "小暑", "立秋", "白露", "寒露", "立冬", "大雪",
        "小寒",
    ];
    NAMES[(sector % 12) as usize]
}

/// Instant of 立春 (longitude 315°) in the given Gregorian year, UT.
///
/// The year pillar turns over here. Newton iteration from February 4
/// converges in a few rounds since the longitude moves at close to one
/// degree per day.
pub fn lichun_ut(year: i32) -> Result<Ut, DateError> {
    let mut jd = Date::from_gregorian(year, 2, 4)?.jdn() as f64;
    for _ in 0..6 {
        let lambda = apparent_longitude(Tt::from(Ut(jd)));
        let err = (lambda - 315.0 + 180.0).rem_euclid(360.0) - 180.0;
        if err.abs() < 1e-7 {
            break;
        }
        jd -= err / MEAN_MOTION;
    }
    Ok(Ut(jd))
}
