// src/extract/headers.rs
use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::flat_text;

static THEAD_TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("thead tr").unwrap());
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Ordered, unique column names from a table's header row.
/// Empty result means the table had no usable header cells; the pipeline
/// treats that as fatal.
pub fn extract_headers(table: ElementRef<'_>) -> Vec<String> {
    let Some(row) = header_row(table) else {
        return Vec::new();
    };

    // Some source years mark header text with plain <td>.
    let mut cells: Vec<ElementRef> = row.select(&TH).collect();
    if cells.is_empty() {
        cells = row.select(&TD).collect();
    }

    let raw: Vec<String> = cells.into_iter().map(flat_text).collect();
    dedup_headers(raw)
}

/// First row of the header section, else the table's first row overall
/// (header and body are not structurally distinguished in some inputs).
fn header_row(table: ElementRef<'_>) -> Option<ElementRef<'_>> {
    table
        .select(&THEAD_TR)
        .next()
        .or_else(|| table.select(&TR).next())
}

/// Suffix duplicate labels counting *down* from their multiplicity:
/// `[A, A, A]` becomes `[A_3, A_2, A_1]`. Downstream consumers key off the
/// exact header text, so the unusual direction is kept as-is.
pub fn dedup_headers(raw: Vec<String>) -> Vec<String> {
    let mut remaining: HashMap<String, usize> = HashMap::new();
    for h in &raw {
        *remaining.entry(h.clone()).or_insert(0) += 1;
    }
    let totals = remaining.clone();

    let mut out = Vec::with_capacity(raw.len());
    for h in raw {
        let total = totals.get(&h).copied().unwrap_or(1);
        if total > 1 {
            let left = remaining.entry(h.clone()).or_insert(1);
            out.push(format!("{}_{}", h, left));
            *left = left.saturating_sub(1);
        } else {
            out.push(h);
        }
    }
    out
}
