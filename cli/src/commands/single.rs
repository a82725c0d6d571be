use bazi_common::SolarTime;
use bazi_core::EightChar;

use crate::terminal::print;

pub fn run(time: &SolarTime) -> anyhow::Result<()> {
    let chart = EightChar::from_solar(time)?;
    print::record(time, &chart);
    Ok(())
}
