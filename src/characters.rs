//! Character extraction from the wiki's Characters page.
//!
//! Column layout: name, stats, unlocked-by, unlocks, tags (optional).

use dom_query::{Document, Selection};

use crate::cells;
use crate::icons;
use crate::records::{Character, Extraction};
use crate::table::{self, TableShape};
use crate::text;

/// Page the characters table lives on.
pub const CHARACTERS_URL: &str = "https://brotato.wiki.spellsandguns.com/Characters";

/// Output filename, written into the current working directory.
pub const OUTPUT_FILE: &str = "brotato_characters.json";

const SHAPE: TableShape = TableShape {
    min_cells: 4,
    header_keywords: &["Name", "Stats"],
};

/// Extract every character record from a parsed wiki page.
///
/// Structural problems and per-row skips are reported through
/// [`Extraction::warnings`]; this function itself never fails.
#[must_use]
pub fn extract(doc: &Document) -> Extraction<Character> {
    let mut out = Extraction::default();
    out.tables_seen = doc.select("table").length();

    let Some(table) = table::largest_table(doc) else {
        out.warnings.push("could not find a characters table".to_string());
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
            Ok(character) => out.records.push(character),
            Err(reason) => out.warnings.push(format!("skipping row {index}: {reason}")),
        }
    }

    out
}

/// Build one character from a data row's cells, by fixed cell index.
///
/// The only per-row failure is an unusable name; everything else
/// softens to a default.
fn assemble_row(cells: &[Selection<'_>]) -> Result<Character, String> {
    let raw_name = text::normalize(&cells[0].text());
    if raw_name.chars().count() < 2 {
        return Err(format!("invalid character name {raw_name:?}"));
    }

    // DLC status lives in the suffix, so detect before stripping.
    let is_dlc = text::is_dlc(&raw_name);
    let name = text::strip_dlc_suffix(&raw_name);

    Ok(Character {
        name,
        stats: cells::text_with_icon_labels(&cells[1], icons::CHARACTER_STATS),
        unlocked_by: text::normalize(&cells[2].text()),
        unlocks: cells::unlock_descriptors(&cells[3]),
        tags: cells.get(4).map(cells::link_tags).unwrap_or_default(),
        is_dlc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_characters_from_a_wiki_style_table() {
        let doc = Document::from(
            r#"<table>
                <tr><th>Name</th><th>Stats</th><th>Unlocked By</th><th>Unlocks</th><th>Tags</th></tr>
                <tr>
                    <td>Well Rounded</td>
                    <td><img src="/images/Max_HP.png"> +5 Max HP</td>
                    <td>Available from the start</td>
                    <td><a href="/Potato">Potato</a></td>
                    <td><a href="/t">Starter</a></td>
                </tr>
                <tr>
                    <td>Doctor (DLC)</td>
                    <td><img alt="Harvesting"> +10</td>
                    <td>Win with Mutant</td>
                    <td><a href="/Scalpel">Scalpel</a></td>
                    <td></td>
                </tr>
            </table>"#,
        );

        let extraction = extract(&doc);
        assert!(extraction.warnings.is_empty());
        assert_eq!(extraction.records.len(), 2);

        let first = &extraction.records[0];
        assert_eq!(first.name, "Well Rounded");
        assert_eq!(first.stats, "[Max HP] +5 Max HP");
        assert_eq!(first.unlocked_by, "Available from the start");
        assert_eq!(first.unlocks.len(), 1);
        assert_eq!(first.unlocks[0].name, "Potato");
        assert_eq!(first.tags, vec!["Starter"]);
        assert!(!first.is_dlc);

        let second = &extraction.records[1];
        assert_eq!(second.name, "Doctor");
        assert!(second.is_dlc);
        assert_eq!(second.stats, "[Harvesting] +10");
    }

    #[test]
    fn rows_without_header_are_all_data() {
        let doc = Document::from(
            "<table><tr>\
             <td>Soldier</td><td>+1</td><td>start</td><td></td>\
             </tr></table>",
        );
        let extraction = extract(&doc);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].name, "Soldier");
    }

    #[test]
    fn single_letter_names_are_skipped_with_a_diagnostic() {
        let doc = Document::from(
            "<table>\
             <tr><th>Name</th><th>Stats</th><th>Unlocked By</th><th>Unlocks</th></tr>\
             <tr><td>X</td><td>s</td><td>u</td><td></td></tr>\
             <tr><td>Mutant</td><td>s</td><td>u</td><td></td></tr>\
             </table>",
        );
        let extraction = extract(&doc);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].name, "Mutant");
        assert_eq!(extraction.warnings.len(), 1);
        assert!(extraction.warnings[0].contains("row 1"));
    }
}
