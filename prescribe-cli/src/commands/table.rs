//! Table command - align two words and print every intermediate state

use crate::config::Config;
use crate::error::CliResult;
use crate::input::read_pair;
use crate::render::{collect_rows, render_table, summary};
use prescribe_core::align_str;
use std::io::{self, BufRead, Write};

pub fn execute(
    config: &Config,
    original: Option<String>,
    target: Option<String>,
    no_highlight: bool,
) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        config,
        &mut stdin.lock(),
        &mut stdout.lock(),
        original,
        target,
        !no_highlight && config.display.highlight,
    )
}

fn run<R: BufRead, W: Write>(
    config: &Config,
    reader: &mut R,
    writer: &mut W,
    original: Option<String>,
    target: Option<String>,
    highlight: bool,
) -> CliResult<()> {
    let (original, target) = read_pair(reader, writer, original, target, &config.samples)?;
    log::info!("Aligning {:?} -> {:?}", original, target);

    let alignment = align_str(&original, &target, &config.costs)?;
    let rows = collect_rows(alignment.redaction()?);

    write!(writer, "{}", render_table(&rows, highlight))?;
    if config.display.summary {
        writeln!(
            writer,
            "{}",
            summary(
                alignment.distance,
                &alignment.prescription.counts(),
                &alignment.prescription.to_string()
            )
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompted_table() {
        let config = Config::default();
        let mut reader = Cursor::new("cat\ncats\n");
        let mut out = Vec::new();

        run(&config, &mut reader, &mut out, None, None, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Enter first word: Enter second word: +"));
        assert!(text.contains("| Insert         | cats     | 3    | 3     |"));
        assert!(text.ends_with("Prescription: MMMI\n"));
    }

    #[test]
    fn test_summary_can_be_disabled() {
        let mut config = Config::default();
        config.display.summary = false;
        let mut reader = Cursor::new("");
        let mut out = Vec::new();

        run(
            &config,
            &mut reader,
            &mut out,
            Some("ab".to_string()),
            Some("ba".to_string()),
            false,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("Distance"));
        assert!(text.contains("| Delete         | b        | 2    | 2     |"));
    }
}
