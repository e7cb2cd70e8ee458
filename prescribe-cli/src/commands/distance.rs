//! Distance command - print the optimal cost and prescription

use crate::config::Config;
use crate::error::CliResult;
use crate::input::check_word;
use prescribe_core::align_str;
use std::io::{self, Write};

pub fn execute(config: &Config, original: String, target: String) -> CliResult<()> {
    let stdout = io::stdout();
    run(config, &mut stdout.lock(), &original, &target)
}

fn run<W: Write>(config: &Config, writer: &mut W, original: &str, target: &str) -> CliResult<()> {
    check_word(original)?;
    check_word(target)?;

    let alignment = align_str(original, target, &config.costs)?;
    writeln!(writer, "{}\t{}", alignment.distance, alignment.prescription)?;

    Ok(())
}
