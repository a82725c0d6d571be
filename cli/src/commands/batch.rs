use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use bazi_common::SolarTime;
use bazi_common::config::Config;
use bazi_core::EightChar;
use tracing::{debug, error};

use crate::terminal::print;

/// Casts every record in the batch file, in input order.
///
/// Blank lines are skipped. Under the default policy a bad line is
/// reported and the remaining lines are still processed; the run then
/// fails at the end so the exit status reflects the bad input. With
/// `--strict` the first bad line aborts the run.
pub fn run(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    let file =
        File::open(path).with_context(|| format!("cannot open batch file {}", path.display()))?;
    process(BufReader::new(file), cfg)
}

fn process<R: BufRead>(reader: R, cfg: &Config) -> anyhow::Result<()> {
    let mut failed = 0usize;
    for (line_no, line) in (1usize..).zip(reader.lines()) {
        let line = line.with_context(|| format!("cannot read line {line_no}"))?;
        if line.trim().is_empty() {
            debug!(line_no, "blank line skipped");
            continue;
        }
        if let Err(e) = cast_line(&line) {
            let e = e.context(format!("line {line_no} ({line:?})"));
            if cfg.strict {
                return Err(e);
            }
            error!("{e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} batch line(s) could not be processed");
    }
    Ok(())
}

fn cast_line(line: &str) -> anyhow::Result<()> {
    let time: SolarTime = line.parse()?;
    let chart = EightChar::from_solar(&time)?;
    print::record(&time, &chart);
    Ok(())
}
