//! Item extraction from the wiki's Items page.
//!
//! Column layout: name, rarity, effects, base price, limit,
//! unlocked-by, tags (optional).

use dom_query::{Document, Selection};

use crate::cells;
use crate::icons;
use crate::records::{Extraction, Item};
use crate::table::{self, TableShape};
use crate::text;

/// Page the items table lives on.
pub const ITEMS_URL: &str = "https://brotato.wiki.spellsandguns.com/Items";

/// Output filename, written into the current working directory.
pub const OUTPUT_FILE: &str = "brotato_items.json";

const SHAPE: TableShape = TableShape {
    min_cells: 6,
    header_keywords: &["Name", "Rarity"],
};

/// Extract every item record from a parsed wiki page.
///
/// Structural problems and per-row skips are reported through
/// [`Extraction::warnings`]; this function itself never fails.
#[must_use]
pub fn extract(doc: &Document) -> Extraction<Item> {
    let mut out = Extraction::default();
    out.tables_seen = doc.select("table").length();

    let Some(table) = table::largest_table(doc) else {
        out.warnings.push("could not find an items table".to_string());
        return out;
    };

    let rows = table::rows(&table);
    out.rows_scanned = rows.len();

    out.header_row = table::header_index(&rows, &SHAPE);
    let start = out.header_row.map_or(0, |i| i + 1);
    for (index, row) in rows.iter().enumerate().skip(start) {
        let cells = table::row_cells(row);
        if cells.len() < SHAPE.min_cells {
            continue;
        }
        match assemble_row(&cells) {
            Ok(item) => out.records.push(item),
            Err(reason) => out.warnings.push(format!("skipping row {index}: {reason}")),
        }
    }

    out
}

/// Build one item from a data row's cells, by fixed cell index.
fn assemble_row(cells: &[Selection<'_>]) -> Result<Item, String> {
    let raw_name = text::normalize(&cells[0].text());
    if raw_name.chars().count() < 2 {
        return Err(format!("invalid item name {raw_name:?}"));
    }

    // DLC status lives in the suffix, so detect before stripping.
    let is_dlc = text::is_dlc(&raw_name);
    let name = text::strip_dlc_suffix(&raw_name);

    Ok(Item {
        name,
        rarity: cells::rarity(&cells[1].text()),
        effects: cells::text_with_icon_labels(&cells[2], icons::ITEM_STATS),
        base_price: text::first_number(&cells[3].text()),
        limit: text::first_number(&cells[4].text()),
        unlocked_by: text::normalize(&cells[5].text()),
        tags: cells.get(6).map(cells::link_tags).unwrap_or_default(),
        is_dlc,
    })
}
