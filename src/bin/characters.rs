//! Scrapes the Brotato wiki Characters page into `brotato_characters.json`.
//!
//! Runs with no arguments. Progress and a final summary go to stdout; a
//! zero-result run still exits normally, without writing output.

use std::fs;
use std::process;

use brotato_scrape::{characters, fetch, CharactersDoc, Document, Result};

fn run() -> Result<()> {
    println!("Fetching data from {}...", characters::CHARACTERS_URL);
    let html = fetch::fetch_html(characters::CHARACTERS_URL)?;
    let doc = Document::from(html);

    let extraction = characters::extract(&doc);
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
        println!("No characters found. The scraping might have failed.");
        return Ok(());
    }

    let output = CharactersDoc {
        total_characters: extraction.records.len(),
        characters: extraction.records,
    };

    // Serialize the full set first so a failure can't leave a partial file.
    let json = serde_json::to_string_pretty(&output)?;
    fs::write(characters::OUTPUT_FILE, json)?;

    println!("\nSuccessfully scraped {} characters!", output.total_characters);
    println!("Data saved to {}", characters::OUTPUT_FILE);

    println!("\nSample characters:");
    for character in output.characters.iter().take(3) {
        let preview: String = character.stats.chars().take(100).collect();
        println!("- {} (DLC: {}): {preview}...", character.name, character.is_dlc);
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
