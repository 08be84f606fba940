// src/extract/mod.rs
// The table engine: locate candidate tables, reconcile header/body
// structure, expand merged cells, flatten decorated cell markup.

mod cell;
mod headers;
mod locate;
mod rows;

pub use cell::{CellValue, Polarity, RosterEntry, classify_cell, resolve_cell};
pub use headers::{dedup_headers, extract_headers};
pub use locate::{
    FixedSelect, PromptSelector, SelectTable, TablePreview, find_tables, parse_selection, previews,
};
pub use rows::extract_rows;

use scraper::{ElementRef, Html};

use crate::error::ScrapeError;

/// One extracted table: unique headers plus length-reconciled records.
/// Every row holds exactly `headers.len()` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Concatenated descendant text, trimmed, embedded newlines flattened to
/// single spaces. Shared by header and plain-cell extraction.
pub(crate) fn flat_text(el: ElementRef) -> String {
    let joined: String = el.text().collect();
    joined.trim().replace("\r\n", " ").replace('\n', " ")
}

/// The composed pipeline: locate → select → headers → rows.
/// Pure with respect to the filesystem; the caller owns file writing, so a
/// failing run never leaves a partial output behind.
pub fn extract_document(
    doc: &Html,
    selector: &mut dyn SelectTable,
) -> Result<DataSet, ScrapeError> {
    let tables = find_tables(doc);
    logd!("Extract: {} candidate table(s)", tables.len());
    if tables.is_empty() {
        return Err(ScrapeError::NoTableFound);
    }

    let index = if tables.len() == 1 {
        0
    } else {
        let views = previews(&tables);
        selector.select(&views)
    };
    // An injected selector may hand back garbage; treat it like bad input.
    let table = *tables
        .get(index)
        .ok_or_else(|| ScrapeError::AmbiguousTableSelection {
            input: index.to_string(),
            count: tables.len(),
        })?;

    let headers = extract_headers(table);
    if headers.is_empty() {
        return Err(ScrapeError::NoHeadersFound);
    }

    let rows = extract_rows(table, headers.len());
    if rows.is_empty() {
        return Err(ScrapeError::NoDataRows);
    }

    logd!(
        "Extract: table {} -> {} columns x {} rows",
        index + 1,
        headers.len(),
        rows.len()
    );
    Ok(DataSet { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str, pick: usize) -> Result<DataSet, ScrapeError> {
        let doc = Html::parse_document(html);
        extract_document(&doc, &mut FixedSelect(pick))
    }

    #[test]
    fn selector_picks_among_multiple_tables() {
        let html = r#"
            <table><thead><tr><th>First</th></tr></thead>
                   <tbody><tr><td>1</td></tr></tbody></table>
            <table><thead><tr><th>Second</th></tr></thead>
                   <tbody><tr><td>2</td></tr></tbody></table>
        "#;
        let data = extract(html, 1).unwrap();
        assert_eq!(data.headers, vec!["Second"]);
        assert_eq!(data.rows, vec![vec![s!("2")]]);
    }

    #[test]
    fn out_of_range_selector_is_ambiguous() {
        let html = r#"
            <table><tr><th>A</th></tr><tr><td>1</td></tr></table>
            <table><tr><th>B</th></tr><tr><td>2</td></tr></table>
        "#;
        let err = extract(html, 5).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::AmbiguousTableSelection { count: 2, .. }
        ));
    }

    #[test]
    fn empty_document_has_no_tables() {
        let err = extract("<html><body><p>hi</p></body></html>", 0).unwrap_err();
        assert!(matches!(err, ScrapeError::NoTableFound));
    }

    #[test]
    fn table_without_cells_has_no_headers() {
        let err = extract("<table></table>", 0).unwrap_err();
        assert!(matches!(err, ScrapeError::NoHeadersFound));
    }

    #[test]
    fn header_only_table_has_no_data_rows() {
        let html = "<table><thead><tr><th>Team</th></tr></thead></table>";
        let err = extract(html, 0).unwrap_err();
        assert!(matches!(err, ScrapeError::NoDataRows));
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = r#"
            <table>
              <thead><tr><th>Team</th><th>Pts</th><th>Pts</th></tr></thead>
              <tbody>
                <tr><td>Eagles</td><td colspan="2">10</td></tr>
                <tr><td>Hawks</td><td>8</td></tr>
              </tbody>
            </table>
        "#;
        let doc = Html::parse_document(html);
        let a = extract_document(&doc, &mut FixedSelect(0)).unwrap();
        let b = extract_document(&doc, &mut FixedSelect(0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.headers, vec!["Team", "Pts_2", "Pts_1"]);
        assert_eq!(a.rows[0], vec!["Eagles", "10", "10"]);
        assert_eq!(a.rows[1], vec!["Hawks", "8", ""]);
    }
}
