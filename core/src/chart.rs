//! Deriving the Eight Characters of an instant.

use bazi_common::SolarTime;
use bazi_common::error::DateError;
use tracing::debug;

use crate::ganzhi::{Branch, Pillar, Stem};
use crate::sun;
use crate::time_scales::{Tt, Ut};

/// The four pillars of a chart, in year, month, day, hour order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EightChar {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl EightChar {
    /// Derives the Eight Characters for a civil Beijing-time instant.
    ///
    /// Boundaries follow the standard convention: the year pillar turns
    /// over at the exact 立春 instant, the month pillar at the twelve jie
    /// instants, the day pillar at civil midnight, and the hour pillar
    /// every two hours starting from 23:00. The late 子 hour (23:00 on)
    /// counts its stem from the following day while the day pillar stays
    /// with the civil day.
    ///
    /// # Example
    ///
    /// ```
    /// use bazi_common::SolarTime;
    /// use bazi_core::EightChar;
    ///
    /// let time = SolarTime::from_ymdh(2023, 5, 15, 12).unwrap();
    /// let chart = EightChar::from_solar(&time).unwrap();
    /// assert_eq!("癸卯", chart.year.to_string());
    /// ```
    pub fn from_solar(time: &SolarTime) -> Result<Self, DateError> {
        let ut = Ut::from_civil(time);
        let lambda = sun::apparent_longitude(Tt::from(ut));

        let (civil_year, _, _) = time.date().gregorian();
        let effective_year = if ut < sun::lichun_ut(civil_year)? {
            civil_year - 1
        } else {
            civil_year
        };
        let year = Pillar::from_sexagenary(sexagenary_year(effective_year));

        let sector = sun::jie_sector(lambda);
        let month = Pillar::new(
            month_stem(year.stem, sector),
            Branch::from_index(2 + sector),
        );

        let day = Pillar::from_sexagenary(time.date().sexagenary());

        let hour_branch = Branch::from_hour(time.hour());
        let hour_day = if time.hour() >= 23 {
            time.date() + 1
        } else {
            time.date()
        };
        let hour_day_stem = Stem::from_index((hour_day.sexagenary() + 9) % 10);
        let hour = Pillar::new(hour_stem(hour_day_stem, hour_branch), hour_branch);

        debug!(
            lambda,
            sector,
            jie = sun::jie_name(sector),
            effective_year,
            "chart derived"
        );

        Ok(EightChar {
            year,
            month,
            day,
            hour,
        })
    }

    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The stems in year, month, day, hour order.
    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(|p| p.stem)
    }

    /// The branches in year, month, day, hour order.
    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(|p| p.branch)
    }
}

/// Sexagenary cycle number of a Gregorian year, 1..=60.
///
/// The year here is the effective one, already adjusted for 立春.
pub fn sexagenary_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

/// Five-tigers rule: the stem of a jie month from the year stem.
fn month_stem(year_stem: Stem, sector: u32) -> Stem {
    Stem::from_index((year_stem.index() % 5) * 2 + 2 + sector)
}

/// Five-rats rule: the stem of a double hour from the day stem.
fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    Stem::from_index((day_stem.index() % 5) * 2 + hour_branch.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(year: i32, month: u32, day: u32, hour: u32) -> EightChar {
        let time = SolarTime::from_ymdh(year, month, day, hour).unwrap();
        EightChar::from_solar(&time).unwrap()
    }

    fn names(chart: &EightChar) -> [String; 4] {
        chart.pillars().map(|p| p.to_string())
    }

    #[test]
    fn year_cycle() {
        assert_eq!(1, sexagenary_year(1984)); // 甲子
        assert_eq!(40, sexagenary_year(2023)); // 癸卯
        assert_eq!(36, sexagenary_year(2019)); // 己亥
        assert_eq!(1, sexagenary_year(-2696));
    }

    #[test]
    fn month_stem_rule() {
        // 甲 and 己 years open with a 丙寅 month.
        assert_eq!(Stem::Bing, month_stem(Stem::Jia, 0));
        assert_eq!(Stem::Bing, month_stem(Stem::Ji, 0));
        // 癸 year, 巳 month (sector 3) is 丁巳.
        assert_eq!(Stem::Ding, month_stem(Stem::Gui, 3));
    }

    #[test]
    fn hour_stem_rule() {
        // 戊 and 癸 days open with a 壬子 hour.
        assert_eq!(Stem::Ren, hour_stem(Stem::Wu, Branch::Zi));
        assert_eq!(Stem::Ren, hour_stem(Stem::Gui, Branch::Zi));
        // 癸 day at noon is 戊午.
        assert_eq!(Stem::Wu, hour_stem(Stem::Gui, Branch::Wu));
    }

    #[test]
    fn reference_chart_2023() {
        assert_eq!(
            ["癸卯", "丁巳", "癸酉", "戊午"],
            names(&chart(2023, 5, 15, 12))
        );
    }

    #[test]
    fn reference_chart_2020() {
        assert_eq!(["己亥", "丙子", "癸卯", "壬子"], names(&chart(2020, 1, 1, 0)));
    }

    #[test]
    fn year_turns_over_at_lichun() {
        // 立春 2023 fell on February 4, 10:42 Beijing time.
        assert_eq!("壬寅", chart(2023, 2, 3, 12).year.to_string());
        assert_eq!("癸卯", chart(2023, 2, 5, 0).year.to_string());
    }

    #[test]
    fn late_zi_hour_uses_next_day_stem() {
        let c = chart(2023, 5, 15, 23);
        assert_eq!("癸酉", c.day.to_string());
        assert_eq!("甲子", c.hour.to_string());
    }
}
