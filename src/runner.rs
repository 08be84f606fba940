// src/runner.rs
use std::fs;
use std::path::PathBuf;

use scraper::Html;

use crate::cli::Params;
use crate::error::ScrapeError;
use crate::extract::{self, SelectTable};
use crate::file;

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out: PathBuf,
    pub columns: usize,
    pub rows: usize,
}

/// Top-level runner: read, parse, extract, write. Extraction must fully
/// succeed before the output path is touched, so a failing run leaves no
/// file behind.
pub fn run(params: &Params, selector: &mut dyn SelectTable) -> Result<RunSummary, ScrapeError> {
    logd!("Run: reading {}", params.input.display());
    let text = fs::read_to_string(&params.input)?;
    logd!("Run: parsing {} bytes", text.len());
    let doc = Html::parse_document(&text);

    let data = extract::extract_document(&doc, selector)?;

    file::write_dataset(&params.out, &data)?;
    logf!(
        "Run: wrote {} ({} columns, {} rows)",
        params.out.display(),
        data.headers.len(),
        data.rows.len()
    );

    Ok(RunSummary {
        out: params.out.clone(),
        columns: data.headers.len(),
        rows: data.rows.len(),
    })
}
