use std::process::ExitCode;

use anvaya_sandhi::join;

pub fn run(first: &str, second: &str) -> ExitCode {
    match join(first, second) {
        Ok(results) => {
            for r in results {
                println!("{first} + {second} = {r}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("sandhi failed: {e}");
            ExitCode::FAILURE
        }
    }
}
