// src/main.rs
// CLI scraper: flatten one HTML stats table into one CSV file.
//
//   league_scrape <input.html> <output.csv>
//
// Exit status 1 on any fatal condition; a marked message says which stage
// failed. Nothing is written unless extraction fully succeeds.

use std::process::exit;

use league_scrape::cli;
use league_scrape::extract::PromptSelector;
use league_scrape::runner;

fn main() {
    let params = match cli::parse_args() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", cli::USAGE);
            exit(1);
        }
    };

    match runner::run(&params, &mut PromptSelector) {
        Ok(s) => {
            println!(
                "✅ CSV file '{}' created successfully ({} columns, {} rows).",
                s.out.display(),
                s.columns,
                s.rows
            );
        }
        Err(e) => {
            league_scrape::loge!("Run failed: {}", e);
            eprintln!("❌ {}", e);
            exit(1);
        }
    }
}
