use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Input timeline CSV file.
    pub file: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let events = lifechart_csv::read_timeline(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let categories: BTreeSet<&str> = events.iter().map(|e| e.category.as_str()).collect();
    println!("events: {}", events.len());
    println!("categories: {}", categories.len());
    if let (Some(first), Some(last)) = (
        events.iter().map(|e| e.start_date).min(),
        events.iter().map(|e| e.end_date).max(),
    ) {
        println!("span: {first} to {last}");
    }

    Ok(())
}
