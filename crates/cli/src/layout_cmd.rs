use anyhow::{Context, Result};
use clap::Args;
use lifechart_core::{layout, wrap, PositionedEvent, DEFAULT_WRAP_WIDTH};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Input timeline CSV file.
    pub file: PathBuf,
    /// Maximum annotation line width in characters.
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    pub wrap_width: usize,
    /// Optional output file path (default stdout).
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// One event as handed to the rendering collaborator: the positioned
/// record plus its pre-wrapped annotation lines.
#[derive(Debug, Serialize)]
struct RenderEvent {
    #[serde(flatten)]
    event: PositionedEvent,
    #[serde(rename = "LabelLines")]
    label_lines: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RenderOutput {
    events: Vec<RenderEvent>,
    y_min: f64,
    y_max: f64,
}

pub fn run(args: LayoutArgs) -> Result<()> {
    let raw = lifechart_csv::read_timeline(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    let laid_out = layout(raw).context("timeline layout failed")?;

    let output = RenderOutput {
        y_min: laid_out.y_min,
        y_max: laid_out.y_max,
        events: laid_out
            .events
            .into_iter()
            .map(|event| {
                let label_lines = wrap(&event.event_name, args.wrap_width);
                RenderEvent { event, label_lines }
            })
            .collect(),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&output).context("serialize layout")?
    } else {
        serde_json::to_string(&output).context("serialize layout")?
    };

    match args.out {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
