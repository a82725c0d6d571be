mod commands;
mod terminal;

use commands::{CommandLine, Mode, batch, single};
use bazi_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init();

    let cfg = Config {
        strict: commands.strict,
    };

    match commands.mode()? {
        Mode::Single(time) => single::run(&time),
        Mode::Batch(path) => batch::run(&path, &cfg),
    }
}
