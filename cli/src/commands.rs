pub mod batch;
pub mod single;

use std::path::PathBuf;

use anyhow::Context;
use bazi_common::SolarTime;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bazi")]
#[command(about = "Casts the Eight Characters (八字) for Gregorian dates.")]
#[command(version)]
pub struct CommandLine {
    /// Read dates from a file, one `YYYY MM DD HH` record per line
    #[arg(
        short,
        long,
        value_name = "PATH",
        conflicts_with_all = ["year", "month", "day", "time"]
    )]
    pub file: Option<PathBuf>,

    /// Gregorian year
    #[arg(required_unless_present = "file")]
    pub year: Option<i32>,
    /// Month, 1-12
    #[arg(required_unless_present = "file")]
    pub month: Option<u32>,
    /// Day of month
    #[arg(required_unless_present = "file")]
    pub day: Option<u32>,
    /// Hour of day, 0-23
    #[arg(required_unless_present = "file")]
    pub time: Option<u32>,

    /// Abort the whole run on the first bad batch line
    #[arg(short, long)]
    pub strict: bool,
}

/// Exactly one way to run: one date from the arguments, or many from a file.
pub enum Mode {
    Single(SolarTime),
    Batch(PathBuf),
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves the parsed arguments into the run mode.
    pub fn mode(self) -> anyhow::Result<Mode> {
        if let Some(path) = self.file {
            return Ok(Mode::Batch(path));
        }
        match (self.year, self.month, self.day, self.time) {
            (Some(year), Some(month), Some(day), Some(hour)) => {
                let time = SolarTime::from_ymdh(year, month, day, hour)
                    .with_context(|| format!("invalid date {year} {month} {day} {hour}"))?;
                Ok(Mode::Single(time))
            }
            _ => anyhow::bail!("single date mode requires all of <YEAR> <MONTH> <DAY> <TIME>"),
        }
    }
}
