//! Labels command - list filter values

use anyhow::Result;
use lab_core::FilterLabels;

use crate::cli::OutputFormat;

pub fn handle(format: OutputFormat) -> Result<()> {
    let labels = FilterLabels::new();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&labels)?),
        OutputFormat::Text => {
            println!("Difficulty:");
            for option in &labels.difficulty {
                println!("  {:<8} {}", option.value, option.label);
            }
            println!("\nCategory:");
            for option in &labels.category {
                println!("  {:<8} {}", option.value, option.label);
            }
        }
    }

    Ok(())
}
