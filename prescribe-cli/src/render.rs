//! ASCII table rendering of a replay
//!
//! One row per trace step, preceded by the untouched original. The element a
//! step wrote or matched can be underlined; column widths are computed on the
//! plain text so the escape codes never skew the borders.

use crossterm::style::Stylize;
use prescribe_core::{Operation, OperationCounts, Redaction};
use unicode_width::UnicodeWidthStr;

const HEADER: [&str; 4] = ["Operation", "Sequence", "Cost", "Total"];
const INITIAL_LABEL: &str = "Initial string";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    pub label: String,
    pub sequence: Vec<char>,
    pub highlight: Option<usize>,
    pub cost: u32,
    pub total: u32,
}

impl TraceRow {
    fn cells(&self) -> [String; 4] {
        [
            self.label.clone(),
            self.sequence.iter().collect(),
            self.cost.to_string(),
            self.total.to_string(),
        ]
    }
}

/// Drain a replay into table rows, starting with the zero-cost initial row.
pub fn collect_rows(redaction: Redaction<'_, char>) -> Vec<TraceRow> {
    let mut rows = Vec::with_capacity(redaction.len() + 1);
    rows.push(TraceRow {
        label: INITIAL_LABEL.to_string(),
        sequence: redaction.original().to_vec(),
        highlight: None,
        cost: 0,
        total: 0,
    });

    for step in redaction {
        let highlight = match step.operation {
            Operation::Delete => None,
            _ => step.cursor.checked_sub(1),
        };
        rows.push(TraceRow {
            label: step.operation.name().to_string(),
            sequence: step.snapshot,
            highlight,
            cost: step.step_cost,
            total: step.total_cost,
        });
    }

    rows
}

pub fn render_table(rows: &[TraceRow], highlight: bool) -> String {
    let plain: Vec<[String; 4]> = rows.iter().map(TraceRow::cells).collect();

    let mut widths = HEADER.map(|header| header.width());
    for cells in &plain {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&row_line(&widths, &HEADER.map(String::from), None));
    out.push_str(&border);

    for (row, cells) in rows.iter().zip(&plain) {
        let styled = if highlight {
            row.highlight
                .filter(|&at| at < row.sequence.len())
                .map(|at| underline_at(&row.sequence, at))
        } else {
            None
        };
        out.push_str(&row_line(&widths, cells, styled));
    }

    out.push_str(&border);
    out
}

fn border_line(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

/// `styled_sequence` replaces the text of the sequence column while keeping
/// the padding of its plain form.
fn row_line(widths: &[usize; 4], cells: &[String; 4], styled_sequence: Option<String>) -> String {
    let mut line = String::from("|");
    for (column, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        let padding = " ".repeat(width - cell.width());
        let text = match (&styled_sequence, column) {
            (Some(styled), 1) => styled.as_str(),
            _ => cell.as_str(),
        };
        line.push(' ');
        line.push_str(text);
        line.push_str(&padding);
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn underline_at(sequence: &[char], at: usize) -> String {
    let before: String = sequence[..at].iter().collect();
    let after: String = sequence[at + 1..].iter().collect();
    format!("{}{}{}", before, sequence[at].to_string().underlined(), after)
}

pub fn summary(distance: u32, counts: &OperationCounts, prescription: &str) -> String {
    format!(
        "Distance: {} ({} match, {} replace, {} insert, {} delete)\nPrescription: {}",
        distance,
        counts.matches,
        counts.replacements,
        counts.insertions,
        counts.deletions,
        prescription
    )
}
