//! # brotato-scrape
//!
//! Extracts structured character and item records from the Brotato
//! wiki's HTML tables and serializes them to JSON.
//!
//! The library owns everything between a parsed document and the
//! assembled record set: locating the right table among several
//! candidates (most rows wins), segmenting header from data rows by
//! keyword, and mapping heterogeneous cell content (plain text, anchor
//! links, inline stat icons) into typed fields. Fetching pages and
//! writing files live in the two binaries under `src/bin/`.
//!
//! ## Quick start
//!
//! ```rust
//! use brotato_scrape::{characters, Document};
//!
//! let html = r#"<table>
//!     <tr><th>Name</th><th>Stats</th><th>Unlocked By</th><th>Unlocks</th></tr>
//!     <tr><td>Well Rounded</td><td>+5 Max HP</td>
//!         <td>Available from the start</td><td></td></tr>
//! </table>"#;
//!
//! let extraction = characters::extract(&Document::from(html));
//! assert_eq!(extraction.records[0].name, "Well Rounded");
//! ```
//!
//! ## Failure containment
//!
//! One malformed row never aborts the batch: rows that fail extraction
//! are skipped with a diagnostic in [`records::Extraction::warnings`].
//! Unparsable fields soften to documented defaults (0, verbatim text,
//! "Unknown"/"Unknown Stat"). Only fetch failures escape as [`Error`].

mod error;

/// Text normalization, DLC markers, and number parsing.
pub mod text;

/// Inline stat-icon resolution with per-dataset keyword tables.
pub mod icons;

/// Per-cell extractors (icon-inlined text, tags, unlocks, rarity).
pub mod cells;

/// Table location and header/data row segmentation.
pub mod table;

/// Record types and JSON document shapes.
pub mod records;

/// Character extraction (Characters page).
pub mod characters;

/// Item extraction (Items page).
pub mod items;

/// Synchronous page fetching.
pub mod fetch;

// Public API - re-exports
pub use dom_query::Document;
pub use error::{Error, Result};
pub use records::{Character, CharactersDoc, Extraction, Item, ItemsDoc, Unlock};
