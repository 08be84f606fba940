// src/error.rs
use std::io;
use thiserror::Error;

/// Fatal conditions for one extraction run. None are retried automatically;
/// the interactive selection prompt re-asks on `AmbiguousTableSelection`,
/// everything else terminates the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no tables found in the document")]
    NoTableFound,

    #[error("invalid table selection {input:?}: expected a number in 1..={count}")]
    AmbiguousTableSelection { input: String, count: usize },

    #[error("no header cells found in the selected table")]
    NoHeadersFound,

    #[error("no data rows found in the selected table")]
    NoDataRows,

    #[error(transparent)]
    Io(#[from] io::Error),
}
