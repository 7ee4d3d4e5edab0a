//! Table location and row segmentation, shared by both datasets.
//!
//! The target dataset lives in one of several tables on the page; the
//! heuristic is simply "most rows". Header detection is keyword-based
//! and parameterized per dataset through [`TableShape`].

use dom_query::{Document, Selection};

use crate::text;

/// Per-dataset table parameters.
#[derive(Debug, Clone, Copy)]
pub struct TableShape {
    /// Minimum cell count for a row to be considered at all.
    pub min_cells: usize,

    /// A row containing any of these (and enough cells) is the header.
    pub header_keywords: &'static [&'static str],
}

/// Select the table with the strictly largest row count.
///
/// Ties keep the first table found. Returns `None` when the document
/// has no tables, or only tables without rows.
#[must_use]
pub fn largest_table(doc: &Document) -> Option<Selection<'_>> {
    let mut best: Option<Selection> = None;
    let mut max_rows = 0;

    for node in doc.select("table").nodes() {
        let table = Selection::from(*node);
        let row_count = table.select("tr").length();
        if row_count > max_rows {
            max_rows = row_count;
            best = Some(table);
        }
    }

    best
}

/// All rows of a table, in document order.
#[must_use]
pub fn rows<'a>(table: &Selection<'a>) -> Vec<Selection<'a>> {
    table
        .select("tr")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// All cells of a row (`td` and `th`), in document order.
#[must_use]
pub fn row_cells<'a>(row: &Selection<'a>) -> Vec<Selection<'a>> {
    row.select("td, th")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Find the header row: the first row with at least `min_cells` cells
/// where some cell's normalized text contains a header keyword.
///
/// `None` means no header was found; callers then treat every row,
/// including row 0, as data. That fallback is deliberate, not a failure.
#[must_use]
pub fn header_index(rows: &[Selection<'_>], shape: &TableShape) -> Option<usize> {
    for (index, row) in rows.iter().enumerate() {
        let cells = row_cells(row);
        if cells.len() < shape.min_cells {
            continue;
        }
        let is_header = cells.iter().any(|cell| {
            let cell_text = text::normalize(&cell.text());
            shape.header_keywords.iter().any(|kw| cell_text.contains(kw))
        });
        if is_header {
            return Some(index);
        }
    }
    None
}
