use brotato_scrape::{characters, items, Document};

#[test]
fn zero_tables_yields_empty_result_without_raising() {
    let doc = Document::from("<html><body><p>maintenance page</p></body></html>");

    let chars = characters::extract(&doc);
    assert!(chars.records.is_empty());
    assert_eq!(chars.tables_seen, 0);
    assert!(!chars.warnings.is_empty());

    let items = items::extract(&doc);
    assert!(items.records.is_empty());
    assert!(!items.warnings.is_empty());
}

#[test]
fn table_without_usable_rows_yields_empty_result() {
    let doc = Document::from(
        "<table><tr><th>Name</th><th>Stats</th><th>Unlocked By</th><th>Unlocks</th></tr></table>",
    );
    let extraction = characters::extract(&doc);
    assert!(extraction.records.is_empty());
    assert_eq!(extraction.rows_scanned, 1);
}

#[test]
fn missing_header_treats_all_rows_as_data() {
    let doc = Document::from(
        "<table>\
         <tr><td>Soldier</td><td>+1</td><td>start</td><td></td></tr>\
         <tr><td>Mutant</td><td>+2</td><td>later</td><td></td></tr>\
         </table>",
    );
    let extraction = characters::extract(&doc);
    assert_eq!(extraction.header_row, None);
    assert_eq!(extraction.records.len(), 2);
    assert_eq!(extraction.records[0].name, "Soldier");
}

#[test]
fn malformed_markup_does_not_panic() {
    let doc = Document::from(
        "<table><tr><td>Broken<td>cells<tr><td>Name less <b>row</table>",
    );
    let _ = characters::extract(&doc);
    let _ = items::extract(&doc);
}

#[test]
fn bad_rows_do_not_affect_their_neighbors() {
    let doc = Document::from(
        "<table>\
         <tr><th>Name</th><th>Rarity</th><th>Effects</th><th>Price</th><th>Limit</th><th>Unlocked</th></tr>\
         <tr><td> </td><td>Tier 1</td><td>x</td><td>1</td><td>1</td><td>y</td></tr>\
         <tr><td>Alien Tongue</td><td>Tier 4</td><td>+25% pickup</td><td>110</td><td>1</td><td></td></tr>\
         </table>",
    );
    let extraction = items::extract(&doc);

    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].name, "Alien Tongue");

    // The skipped row names its index in the diagnostic.
    assert_eq!(extraction.warnings.len(), 1);
    assert!(extraction.warnings[0].contains("row 1"));
}
