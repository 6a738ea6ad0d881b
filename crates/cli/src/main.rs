mod cmd_sandhi;
mod cmd_tags;
mod cmd_vakya;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "anvaya", about = "Sanskrit sentence analysis toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a sentence into ranked dependency parses
    Vakya {
        /// Sentence in SLP1 transliteration
        text: String,

        /// Best split paths to consider
        #[arg(long, default_value_t = 10)]
        paths: usize,

        /// Parses to keep per split path
        #[arg(long, default_value_t = 10)]
        parses: usize,

        /// Render output in Devanagari
        #[arg(long)]
        devanagari: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Combine two word forms at a sandhi boundary
    Sandhi {
        /// First form (SLP1)
        first: String,

        /// Second form (SLP1)
        second: String,
    },

    /// Show candidate morphological readings of a form
    Tags {
        /// Word form in SLP1
        form: String,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Vakya {
            text,
            paths,
            parses,
            devanagari,
            format,
        } => cmd_vakya::run(&text, paths, parses, devanagari, format),
        Commands::Sandhi { first, second } => cmd_sandhi::run(&first, &second),
        Commands::Tags { form } => cmd_tags::run(&form),
    }
}
