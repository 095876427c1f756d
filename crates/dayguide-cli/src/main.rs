mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dayguide",
    version,
    about = "Extract a structured 28-day program guide from a PDF"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a guide PDF into one structured record per day
    Parse {
        /// Path to the guide PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the parsed guide to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Dump the concatenated extracted text (for debugging marker issues)
    Text {
        /// Path to the guide PDF
        input_file: PathBuf,
    },
    /// List the section-label vocabulary
    Labels,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Text { input_file } => commands::text::run(input_file),
        Commands::Labels => commands::labels::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
