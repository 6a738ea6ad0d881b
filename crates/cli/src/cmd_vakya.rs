use std::process::ExitCode;

use serde_json::json;

use anvaya_kosha::{UnigramScorer, kosha};
use anvaya_vishleshak::{Analysis, AnalyzeError, AnalyzeOptions, Vishleshak};

use crate::OutputFormat;

pub fn run(
    text: &str,
    paths: usize,
    parses: usize,
    devanagari: bool,
    format: OutputFormat,
) -> ExitCode {
    let scorer = UnigramScorer::new();
    let vishleshak = Vishleshak::new(kosha(), kosha(), &scorer);
    let options = AnalyzeOptions {
        max_paths: paths,
        max_parses: parses,
        devanagari,
        ..AnalyzeOptions::default()
    };

    match vishleshak.analyze(text, &options) {
        Ok(analysis) => {
            match format {
                OutputFormat::Text => print_text(&analysis),
                OutputFormat::Json => print_json(&analysis),
            }
            ExitCode::SUCCESS
        }
        Err(AnalyzeError::NoSplitAnalysis) => {
            eprintln!("no analysis: '{text}' has no known splitting");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("analysis failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_text(analysis: &Analysis) {
    if analysis.parses.is_empty() {
        println!("no valid parse");
        return;
    }
    for parse in &analysis.parses {
        println!(
            "#{} [cost {:.3}] {}",
            parse.rank,
            parse.cost,
            parse.split.join(" ")
        );
        for row in &parse.rows {
            let reading = format!("{} ({})", row.base, row.tags.join(" "));
            if row.label.is_empty() {
                println!("  {:<16} {}", row.surface, reading);
            } else {
                println!(
                    "  {:<16} {}  {} <- {}",
                    row.surface, reading, row.label, row.governor
                );
            }
        }
    }
}

fn print_json(analysis: &Analysis) {
    let parses: Vec<_> = analysis
        .parses
        .iter()
        .map(|p| {
            json!({
                "rank": p.rank,
                "cost": p.cost,
                "split": p.split,
                "rows": p.rows.iter().map(|r| r.to_tuple()).collect::<Vec<_>>(),
            })
        })
        .collect();
    let out = json!({ "sentence": analysis.sentence, "parses": parses });
    println!("{}", serde_json::to_string_pretty(&out).expect("valid json"));
}
