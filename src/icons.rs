//! Inline stat-icon resolution.
//!
//! Wiki cells embed small `<img>` icons for stats. Resolution order:
//! the `alt` attribute, then `title`, then a substring match of the
//! image source path against a fixed, ordered keyword table, and
//! finally the literal [`UNKNOWN_STAT`] label. The function never
//! fails; a malformed icon always resolves to some string.
//!
//! The keyword tables are kept as plain data, separate from extraction
//! control flow, since they are tied to the current wiki markup and
//! will need updating when the pages change.

use dom_query::Selection;

/// Fallback label for icons nothing else can name.
pub const UNKNOWN_STAT: &str = "Unknown Stat";

/// Source-path keywords recognized in item effect cells.
///
/// Order is load-bearing: `Ranged_Damage` must be tested before `Range`.
pub const ITEM_STATS: &[(&str, &str)] = &[
    ("Melee_Damage", "Melee Damage"),
    ("Ranged_Damage", "Ranged Damage"),
    ("Elemental_Damage", "Elemental Damage"),
    ("Max_HP", "Max HP"),
    ("Engineering", "Engineering"),
    ("Range", "Range"),
    ("Luck", "Luck"),
    ("Armor", "Armor"),
];

/// Source-path keywords recognized in character stat cells.
///
/// Same table as [`ITEM_STATS`] plus `Attack_Speed`, which only the
/// Characters page uses.
pub const CHARACTER_STATS: &[(&str, &str)] = &[
    ("Melee_Damage", "Melee Damage"),
    ("Ranged_Damage", "Ranged Damage"),
    ("Elemental_Damage", "Elemental Damage"),
    ("Max_HP", "Max HP"),
    ("Engineering", "Engineering"),
    ("Range", "Range"),
    ("Luck", "Luck"),
    ("Armor", "Armor"),
    ("Attack_Speed", "Attack Speed"),
];

/// Resolve an icon element to a human-readable stat label.
///
/// An empty `alt` or `title` attribute counts as absent and falls
/// through to the next step.
#[must_use]
pub fn stat_label(icon: &Selection, keywords: &[(&str, &str)]) -> String {
    for attr in ["alt", "title"] {
        if let Some(value) = icon.attr(attr) {
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }

    let src = icon.attr("src").map(|s| s.to_string()).unwrap_or_default();
    keywords
        .iter()
        .find(|(needle, _)| src.contains(needle))
        .map_or_else(|| UNKNOWN_STAT.to_string(), |(_, label)| (*label).to_string())
}
