use crate::catalog::{CatalogClient, CatalogEntry, CatalogSource, DATABASE_FOLDER, EntryKind};
use crate::logger::Logger;
use anyhow::Result;
use comfy_table::Table;

/// Case-insensitive substring filter over catalog entries, preserving the
/// hosting API's listing order.
pub fn matches<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}

/// Searches the catalog root by name and prints the matches as a table.
/// An empty result is a normal outcome, reported as such; only the listing
/// call itself can fail.
pub async fn search(client: &CatalogClient, query: &str) -> Result<()> {
    Logger::info(format!(
        "Searching the catalog for {}...",
        Logger::highlight(query)
    ));

    let entries = client.list(DATABASE_FOLDER).await?;
    let found = matches(&entries, query);

    if found.is_empty() {
        Logger::error(format!("No matches found for {query}"));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Kind"]);
    for entry in found {
        let kind = match entry.kind {
            EntryKind::Dir => "app",
            _ => "file",
        };
        table.add_row(vec![entry.name.as_str(), kind]);
    }
    println!("\n{table}");

    Ok(())
}
