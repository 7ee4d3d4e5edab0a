//! Record types for extracted game data.
//!
//! Field order in the structs matches the published JSON shape. Records
//! are assembled once per data row and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Unlock descriptors are always typed "item". The wiki gives no way to
/// tell weapons apart, so no classification is attempted.
pub const UNLOCK_TYPE_ITEM: &str = "item";

/// One entry of a character's unlock list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlock {
    /// Name of the unlocked entity.
    pub name: String,

    /// Always [`UNLOCK_TYPE_ITEM`].
    #[serde(rename = "type")]
    pub kind: String,
}

/// One row of the Characters table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name with any "(DLC)" suffix stripped.
    pub name: String,

    /// Normalized stats text with icons inlined as bracketed labels.
    pub stats: String,

    /// Free-text unlock requirement.
    pub unlocked_by: String,

    /// What this character unlocks, in first-seen order.
    pub unlocks: Vec<Unlock>,

    /// Unique tag strings, in first-seen order.
    pub tags: Vec<String>,

    /// Whether the raw name carried a "(DLC)" marker.
    pub is_dlc: bool,
}

/// One row of the Items table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name with any "(DLC)" suffix stripped.
    pub name: String,

    /// "Tier 1".."Tier 4", the cleaned cell text when no tier keyword
    /// matches, or "Unknown" when the cell is empty.
    pub rarity: String,

    /// Normalized effects text with icons inlined as bracketed labels.
    pub effects: String,

    /// First number found in the price cell; 0 when unparsable.
    pub base_price: u32,

    /// First number found in the limit cell. 0 is overloaded: it means
    /// both "unlimited" and "unparsable/absent"; the wiki itself does
    /// not distinguish the two.
    pub limit: u32,

    /// Free-text unlock requirement.
    pub unlocked_by: String,

    /// Unique tag strings, in first-seen order.
    pub tags: Vec<String>,

    /// Whether the raw name carried a "(DLC)" marker.
    pub is_dlc: bool,
}

/// JSON document written by the characters pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharactersDoc {
    pub total_characters: usize,
    pub characters: Vec<Character>,
}

/// JSON document written by the items pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsDoc {
    pub total_items: usize,
    pub items: Vec<Item>,
}

/// Result of one extraction pass over a parsed document.
///
/// Warnings are non-fatal: structural problems ("no tables found") and
/// per-row skips land here while extraction carries on. A document with
/// zero tables yields an empty record set, not an error.
#[derive(Debug, Clone)]
pub struct Extraction<T> {
    /// Assembled records, in source row order.
    pub records: Vec<T>,

    /// Diagnostics for skipped rows and structural oddities.
    pub warnings: Vec<String>,

    /// Index of the detected header row within the selected table.
    /// `None` means no header was found and every row, including row 0,
    /// was treated as data.
    pub header_row: Option<usize>,

    /// Number of `<table>` elements seen in the document.
    pub tables_seen: usize,

    /// Row count of the selected table (0 when none was selected).
    pub rows_scanned: usize,
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            warnings: Vec::new(),
            header_row: None,
            tables_seen: 0,
            rows_scanned: 0,
        }
    }
}
