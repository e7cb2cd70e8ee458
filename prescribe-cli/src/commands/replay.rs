//! Replay command - apply a hand-written prescription and show each step

use crate::config::Config;
use crate::error::CliResult;
use crate::input::check_word;
use crate::render::{collect_rows, render_table};
use prescribe_core::{apply, build_matrix, Prescription};
use std::io::{self, Write};

pub fn execute(
    config: &Config,
    original: String,
    target: String,
    prescription: String,
    no_highlight: bool,
) -> CliResult<()> {
    let stdout = io::stdout();
    run(
        config,
        &mut stdout.lock(),
        &original,
        &target,
        &prescription,
        !no_highlight && config.display.highlight,
    )
}

fn run<W: Write>(
    config: &Config,
    writer: &mut W,
    original: &str,
    target: &str,
    prescription: &str,
    highlight: bool,
) -> CliResult<()> {
    check_word(original)?;
    check_word(target)?;

    let prescription: Prescription = prescription.parse()?;
    let original: Vec<char> = original.chars().collect();
    let target: Vec<char> = target.chars().collect();

    let rows = collect_rows(apply(&prescription, &original, &target, &config.costs)?);
    write!(writer, "{}", render_table(&rows, highlight))?;

    if config.display.summary {
        let optimal = build_matrix(&original, &target, &config.costs)?.distance();
        let cost = prescription.total_cost(&config.costs)?;
        writeln!(writer, "Cost: {} (optimal: {})", cost, optimal)?;
        if cost > optimal {
            log::info!("Prescription {} is {} above the optimum", prescription, cost - optimal);
        }
    }

    Ok(())
}
