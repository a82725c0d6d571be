#![cfg(test)]
use bazi_common::SolarTime;
use bazi_core::{Branch, EightChar, Stem};

fn chart(year: i32, month: u32, day: u32, hour: u32) -> EightChar {
    let time = SolarTime::from_ymdh(year, month, day, hour).expect("valid test date");
    EightChar::from_solar(&time).expect("chart derivable")
}

fn pillar_names(chart: &EightChar) -> [String; 4] {
    chart.pillars().map(|p| p.to_string())
}

/// Full charts for dates verified against the standard sexagenary
/// computation.
#[test]
fn reference_charts() {
    assert_eq!(
        ["癸卯", "丁巳", "癸酉", "戊午"],
        pillar_names(&chart(2023, 5, 15, 12))
    );
    assert_eq!(
        ["己亥", "丙子", "癸卯", "壬子"],
        pillar_names(&chart(2020, 1, 1, 0))
    );
    assert_eq!(
        ["庚辰", "辛巳", "庚寅", "壬午"],
        pillar_names(&chart(2000, 6, 1, 12))
    );
    assert_eq!(
        ["壬辰", "壬子", "丙辰", "丁酉"],
        pillar_names(&chart(2012, 12, 21, 18))
    );
}

/// The mapping is a pure function: the same input always produces the
/// same chart.
#[test]
fn derivation_is_deterministic() {
    let time = SolarTime::from_ymdh(1988, 8, 8, 8).expect("valid test date");
    let first = EightChar::from_solar(&time).expect("chart derivable");
    for _ in 0..3 {
        assert_eq!(first, EightChar::from_solar(&time).expect("chart derivable"));
    }
}

/// Every derived symbol comes from the fixed ten-stem and twelve-branch
/// sets, across a spread of years, months and hours.
#[test]
fn symbols_stay_in_the_closed_sets() {
    let stem_glyphs: Vec<&str> = Stem::ALL.iter().map(|s| s.glyph()).collect();
    let branch_glyphs: Vec<&str> = Branch::ALL.iter().map(|b| b.glyph()).collect();

    for year in [1970, 1988, 2005, 2023] {
        for month in 1..=12 {
            for hour in [0, 6, 13, 23] {
                let c = chart(year, month, 15, hour);
                for stem in c.stems() {
                    assert!(stem_glyphs.contains(&stem.glyph()));
                }
                for branch in c.branches() {
                    assert!(branch_glyphs.contains(&branch.glyph()));
                }
            }
        }
    }
}

/// Batch input keeps its order: N parsed lines give N charts whose date
/// stamps appear in input order.
#[test]
fn batch_lines_keep_input_order() {
    let input = "2023 5 15 12\n2020 1 1 0\n";
    let stamps: Vec<String> = input
        .lines()
        .map(|line| {
            let time: SolarTime = line.parse().expect("valid line");
            EightChar::from_solar(&time).expect("chart derivable");
            time.to_string()
        })
        .collect();
    assert_eq!(vec!["2023-05-15-12", "2020-01-01-00"], stamps);
}

/// An impossible calendar date never reaches derivation.
#[test]
fn impossible_dates_are_rejected() {
    assert!("2023 2 30 12".parse::<SolarTime>().is_err());
    assert!(SolarTime::from_ymdh(2023, 4, 31, 0).is_err());
    assert!(SolarTime::from_ymdh(2023, 5, 15, 24).is_err());
}

/// The year pillar follows 立春, not January 1.
#[test]
fn year_boundary_is_lichun() {
    // 2019-02-04 was still 戊戌; 立春 2019 fell on February 4, 11:14.
    assert_eq!("戊戌", chart(2019, 2, 3, 12).year.to_string());
    assert_eq!("己亥", chart(2019, 2, 5, 12).year.to_string());
    // January belongs to the previous sexagenary year.
    assert_eq!("癸卯", chart(2024, 1, 20, 8).year.to_string());
}
