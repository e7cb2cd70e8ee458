//! Walk through the classic kitten -> sitting transformation step by step.
//!
//! Run with: cargo run -p prescribe-core --example kitten_sitting

use prescribe_core::{align_str, CostConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let costs = CostConfig::default();
    let alignment = align_str("kitten", "sitting", &costs)?;

    println!("Prescription: {}", alignment.prescription);
    println!("Distance:     {}", alignment.distance);
    println!();

    println!("{:<10} {:<10} {:>4} {:>6}", "Operation", "Sequence", "Cost", "Total");
    println!("{:<10} {:<10} {:>4} {:>6}", "Initial", "kitten", 0, 0);
    for step in alignment.redaction()? {
        let text: String = step.snapshot.iter().collect();
        println!(
            "{:<10} {:<10} {:>4} {:>6}",
            step.operation.name(),
            text,
            step.step_cost,
            step.total_cost
        );
    }

    let counts = alignment.prescription.counts();
    println!();
    println!(
        "{} matches, {} replacements, {} insertions, {} deletions",
        counts.matches, counts.replacements, counts.insertions, counts.deletions
    );

    Ok(())
}
