//! Scrapes the Brotato wiki Items page into `brotato_items.json`.
//!
//! Runs with no arguments. Progress and a final summary go to stdout; a
//! zero-result run still exits normally, without writing output.

use std::fs;
use std::process;

use brotato_scrape::{fetch, items, Document, ItemsDoc, Result};

fn run() -> Result<()> {
    println!("Fetching data from {}...", items::ITEMS_URL);
    let html = fetch::fetch_html(items::ITEMS_URL)?;
    let doc = Document::from(html);

    let extraction = items::extract(&doc);
    println!("Found {} tables on the page", extraction.tables_seen);
    println!("Processing {} rows...", extraction.rows_scanned);
    if extraction.rows_scanned > 0 {
        match extraction.header_row {
            Some(index) => println!("Found header row at index {index}"),
            None => println!("No header found, starting from row 0"),
        }
    }
    for warning in &extraction.warnings {
        println!("{warning}");
    }

    if extraction.records.is_empty() {
        println!("No items found. The scraping might have failed.");
        return Ok(());
    }

    let output = ItemsDoc {
        total_items: extraction.records.len(),
        items: extraction.records,
    };

    // Serialize the full set first so a failure can't leave a partial file.
    let json = serde_json::to_string_pretty(&output)?;
    fs::write(items::OUTPUT_FILE, json)?;

    println!("\nSuccessfully scraped {} items!", output.total_items);
    println!("Data saved to {}", items::OUTPUT_FILE);

    println!("\nSample items:");
    for item in output.items.iter().take(3) {
        let preview: String = item.effects.chars().take(100).collect();
        println!("- {} ({}): {preview}...", item.name, item.rarity);
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
