// src/extract/locate.rs
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

use super::extract_headers;

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());

/// All `<table>` elements in document order, materialized once.
pub fn find_tables(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&TABLE).collect()
}

/// What the selection step shows per candidate table.
pub struct TablePreview {
    /// Total column count of the candidate.
    pub columns: usize,
    /// First few header names.
    pub leading: Vec<String>,
}

const PREVIEW_HEADERS: usize = 5;

pub fn previews(tables: &[ElementRef<'_>]) -> Vec<TablePreview> {
    tables
        .iter()
        .map(|t| {
            let headers = extract_headers(*t);
            TablePreview {
                columns: headers.len(),
                leading: headers.into_iter().take(PREVIEW_HEADERS).collect(),
            }
        })
        .collect()
}

/// Where the chosen table index comes from when a document has several.
/// The core never reads stdin itself; frontends inject this.
pub trait SelectTable {
    /// Returns a 0-based index into `candidates`.
    fn select(&mut self, candidates: &[TablePreview]) -> usize;
}

/// Fixed choice, for tests, benches and non-interactive callers.
pub struct FixedSelect(pub usize);

impl SelectTable for FixedSelect {
    fn select(&mut self, _candidates: &[TablePreview]) -> usize {
        self.0
    }
}

/// Interactive stdin prompt. Blocks without timeout and re-asks until the
/// input is an in-range 1-based number. EOF falls back to the first table.
pub struct PromptSelector;

impl SelectTable for PromptSelector {
    fn select(&mut self, candidates: &[TablePreview]) -> usize {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            eprintln!("Multiple tables found:");
            for (i, p) in candidates.iter().enumerate() {
                eprintln!("  {}: {} columns [{}]", i + 1, p.columns, p.leading.join(", "));
            }
            eprint!("Select table [1-{}]: ", candidates.len());
            let _ = io::stderr().flush();

            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return 0,
                Ok(_) => {}
            }
            match parse_selection(&line, candidates.len()) {
                Ok(i) => return i,
                Err(e) => eprintln!("{}", e),
            }
        }
    }
}

/// Validate a 1-based selection against `count` candidates; returns the
/// 0-based index. Out-of-range and non-numeric input are rejected alike.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, ScrapeError> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Ok(n - 1),
        _ => Err(ScrapeError::AmbiguousTableSelection {
            input: trimmed.to_string(),
            count,
        }),
    }
}
