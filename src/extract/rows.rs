// src/extract/rows.rs
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::resolve_cell;

static THEAD_TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("thead tr").unwrap());
static TBODY_TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody tr").unwrap());
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
// Some bodies misuse <th> for emphasis; accept both cell tags.
static CELLS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

/// Body rows flattened to records of exactly `header_count` values each.
pub fn extract_rows(table: ElementRef<'_>, header_count: usize) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    for tr in body_rows(table) {
        let mut values: Vec<String> = Vec::with_capacity(header_count);
        for cell in tr.select(&CELLS) {
            let span = colspan(cell);
            let text = resolve_cell(cell);
            for _ in 0..span {
                values.push(text.clone());
            }
        }
        reconcile(&mut values, header_count);
        out.push(values);
    }
    out
}

/// With a `<thead>`, the body section's rows are the data rows. Without
/// one, the first row has already been consumed as the header, so the body
/// is every row after it. The HTML5 tree builder wraps stray rows in an
/// implicit `<tbody>`, so tbody presence alone says nothing about whether
/// the source distinguished header from body.
fn body_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    if table.select(&THEAD_TR).next().is_some() {
        let body: Vec<_> = table.select(&TBODY_TR).collect();
        if !body.is_empty() {
            return body;
        }
        return table.select(&TR).filter(|tr| !in_thead(*tr)).collect();
    }
    table.select(&TR).skip(1).collect()
}

fn in_thead(tr: ElementRef<'_>) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().name() == "thead")
}

/// colspan attribute: default 1, clamped to at least 1; junk counts as 1.
fn colspan(cell: ElementRef<'_>) -> usize {
    cell.value()
        .attr("colspan")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .map(|n| n.max(1))
        .unwrap_or(1)
}

/// Pad short rows with empty strings, truncate long ones. Malformed rows
/// lose or blank trailing fields instead of aborting the extraction.
fn reconcile(values: &mut Vec<String>, header_count: usize) {
    if values.len() < header_count {
        values.resize(header_count, s!());
    } else {
        values.truncate(header_count);
    }
}
