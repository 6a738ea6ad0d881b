use std::process::ExitCode;

use anvaya_kosha::{Kosha, kosha};

pub fn run(form: &str) -> ExitCode {
    match kosha().candidate_tags(form) {
        Ok(readings) if readings.is_empty() => {
            eprintln!("no readings for '{form}'");
            ExitCode::FAILURE
        }
        Ok(readings) => {
            for m in readings {
                println!("{form}: {m}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("lookup failed: {e}");
            ExitCode::FAILURE
        }
    }
}
