// src/extract/cell.rs
// Cell flattening. Most cells are plain text; roster-change cells hide the
// player name behind a colored badge and a stack of layout elements.

use scraper::ElementRef;

use super::flat_text;

/// Badge class marking roster additions.
pub const ADDED_CLASS: &str = "icon-add";
/// Badge class marking roster drops.
pub const REMOVED_CLASS: &str = "icon-drop";
/// Class of the row container a badge lives under; the player name sits in
/// the element sibling right after the badge's branch.
pub const ROW_CONTAINER_CLASS: &str = "player-row";

const ENTRY_SEP: &str = " · ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Added,
    Removed,
    Neutral,
}

/// One roster-change entry pulled out of a badge cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub polarity: Polarity,
    pub name: String,
}

impl RosterEntry {
    pub fn render(&self) -> String {
        match self.polarity {
            Polarity::Added => format!("(+){}", self.name),
            Polarity::Removed => format!("(-){}", self.name),
            Polarity::Neutral => self.name.clone(),
        }
    }
}

/// What a cell's subtree turned out to be.
pub enum CellValue {
    Roster(Vec<RosterEntry>),
    Plain(String),
}

/// Pure classification: roster mode iff the cell has badge-marked
/// descendants, plain text otherwise. No cross-cell state.
pub fn classify_cell(cell: ElementRef<'_>) -> CellValue {
    let mut entries = Vec::new();
    for node in cell.descendants() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        let polarity = if has_class(el, ADDED_CLASS) {
            Polarity::Added
        } else if has_class(el, REMOVED_CLASS) {
            Polarity::Removed
        } else {
            continue;
        };
        entries.push(RosterEntry {
            polarity,
            name: badge_name(el),
        });
    }

    if entries.is_empty() {
        CellValue::Plain(flat_text(cell))
    } else {
        CellValue::Roster(entries)
    }
}

/// Flatten a cell to its CSV value.
pub fn resolve_cell(cell: ElementRef<'_>) -> String {
    match classify_cell(cell) {
        CellValue::Plain(text) => text,
        CellValue::Roster(entries) => entries
            .iter()
            .map(RosterEntry::render)
            .collect::<Vec<_>>()
            .join(ENTRY_SEP),
    }
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Resolve the player name for one badge: climb to the nearest row
/// container, then read the element sibling following the branch the badge
/// sits in. Misses degrade to an empty name, never an error.
fn badge_name(marker: ElementRef<'_>) -> String {
    let mut branch_id = marker.id();
    let mut container = None;
    for node in marker.ancestors() {
        if let Some(el) = ElementRef::wrap(node) {
            if has_class(el, ROW_CONTAINER_CLASS) {
                container = Some(el);
                break;
            }
        }
        branch_id = node.id();
    }
    let Some(container) = container else {
        return s!();
    };

    let mut past_branch = false;
    for child in container.children() {
        if past_branch {
            if let Some(el) = ElementRef::wrap(child) {
                return innermost_text(el);
            }
            continue;
        }
        if child.id() == branch_id {
            past_branch = true;
        }
    }
    s!()
}

/// Text of the innermost first-child element chain, so decorated names like
/// `<div><span>Smith</span></div>` come out as just the name.
fn innermost_text(el: ElementRef<'_>) -> String {
    let mut cur = el;
    while let Some(next) = cur.children().find_map(ElementRef::wrap) {
        cur = next;
    }
    cur.text().collect::<String>().trim().to_string()
}
