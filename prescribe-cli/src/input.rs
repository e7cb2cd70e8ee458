//! Reading the two words, either from flags or interactively.

use crate::config::SampleConfig;
use crate::error::{CliError, CliResult};
use std::io::{BufRead, Write};

pub const FIRST_PROMPT: &str = "Enter first word: ";
pub const SECOND_PROMPT: &str = "Enter second word: ";

/// Print `prompt` and read one line without its line ending. End of input
/// counts as an empty answer.
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> CliResult<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(|c| c == '\n' || c == '\r');

    check_word(trimmed)?;
    Ok(trimmed.to_string())
}

/// Reject words the table cannot show faithfully.
pub fn check_word(word: &str) -> CliResult<()> {
    if let Some(c) = word.chars().find(|c| c.is_control()) {
        return Err(CliError::input(format!(
            "word contains control character {:?}",
            c
        )));
    }
    Ok(())
}

/// Resolve both words. Flags are taken as given, even when empty; a word
/// that is prompted for falls back to the configured sample on an empty
/// answer.
pub fn read_pair<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    original: Option<String>,
    target: Option<String>,
    samples: &SampleConfig,
) -> CliResult<(String, String)> {
    let original = match original {
        Some(word) => {
            check_word(&word)?;
            word
        }
        None => prompt_or_sample(reader, writer, FIRST_PROMPT, &samples.original)?,
    };
    let target = match target {
        Some(word) => {
            check_word(&word)?;
            word
        }
        None => prompt_or_sample(reader, writer, SECOND_PROMPT, &samples.target)?,
    };

    Ok((original, target))
}

fn prompt_or_sample<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    sample: &str,
) -> CliResult<String> {
    let answer = prompt_line(reader, writer, prompt)?;
    if answer.is_empty() {
        log::debug!("Empty answer, using sample {:?}", sample);
        return Ok(sample.to_string());
    }
    Ok(answer)
}
