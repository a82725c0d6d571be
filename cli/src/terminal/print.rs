//! Report output.
//!
//! Each record is three styled lines and an unstyled separator on standard
//! output. Diagnostics go to stderr through `tracing`, so the report stream
//! stays clean enough to pipe.

use bazi_common::SolarTime;
use bazi_core::EightChar;
use colored::*;

pub const SEPARATOR_WIDTH: usize = 120;

/// Prints one record: date stamp, stems, branches, separator.
pub fn record(time: &SolarTime, chart: &EightChar) {
    let [stamp, stems, branches] = plain_lines(time, chart);
    println!("{}", stamp.yellow().bold());
    println!("{}", stems.cyan().bold());
    println!("{}", branches.cyan().bold());
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

/// The three text lines of a record, before styling.
fn plain_lines(time: &SolarTime, chart: &EightChar) -> [String; 3] {
    [
        // The mixed-width parentheses in the label are part of the format.
        format!("输入日期(公历）: {time}"),
        join_glyphs(chart.stems().map(|s| s.glyph())),
        join_glyphs(chart.branches().map(|b| b.glyph())),
    ]
}

fn join_glyphs(glyphs: [&'static str; 4]) -> String {
    glyphs.join(" ")
}
