mod check_cmd;
mod layout_cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lifechart",
    about = "lifechart CLI - lay out a personal timeline as renderer-ready JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a timeline CSV and print the fully positioned layout as JSON
    Layout(layout_cmd::LayoutArgs),

    /// Parse and validate a timeline CSV without producing a layout
    Check(check_cmd::CheckArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Layout(args) => layout_cmd::run(args),
        Commands::Check(args) => check_cmd::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
