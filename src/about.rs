use crate::catalog::{CatalogEntry, CatalogSource, EntryKind};
use crate::logger::Logger;
use crate::{downloader, panel};
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Fixed descriptor filename every catalog entry may carry.
pub const DESCRIPTOR_FILE: &str = "about.json";

/// Parsed `about.json`. Anything the publisher left out renders as
/// "Unknown", except the description which just goes blank.
#[derive(Debug, Deserialize)]
pub struct Descriptor {
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default = "unknown")]
    pub id: String,
    #[serde(default = "unknown")]
    pub publisher: String,
    #[serde(default)]
    pub description: String,
}

fn unknown() -> String {
    "Unknown".to_string()
}

/// Fetches and renders the descriptor for one catalog folder.
///
/// The descriptor is downloaded to a fixed temp path, parsed, rendered,
/// and the temp file is removed no matter how parsing or rendering went.
/// A folder without a descriptor reports not-found and renders nothing.
pub async fn present<S: CatalogSource>(
    source: &S,
    http: &reqwest::Client,
    folder: &str,
) -> Result<()> {
    let entries = source.list(folder).await?;

    let Some(descriptor) = find_descriptor(&entries) else {
        Logger::error(format!("{DESCRIPTOR_FILE} not found in {folder}"));
        return Ok(());
    };

    let url = descriptor
        .download_url
        .as_deref()
        .ok_or_else(|| anyhow!("no download URL for {}", descriptor.path))?;

    let tmp = std::env::temp_dir().join("wharf-about.json");
    downloader::download(http, url, &tmp).await?;

    println!("\n{}\n", consume_descriptor_file(&tmp)?);
    Ok(())
}

fn find_descriptor(entries: &[CatalogEntry]) -> Option<&CatalogEntry> {
    entries
        .iter()
        .find(|entry| entry.kind == EntryKind::File && entry.name == DESCRIPTOR_FILE)
}

/// Renders a downloaded descriptor and removes it. Render first, delete
/// second: the temp file must not survive even when the descriptor turns
/// out to be garbage.
fn consume_descriptor_file(path: &Path) -> Result<String> {
    let rendered = render_descriptor_file(path);
    if let Err(err) = fs::remove_file(path) {
        log::warn!("could not remove temp descriptor {}: {err}", path.display());
    }
    rendered
}

fn render_descriptor_file(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let descriptor: Descriptor =
        serde_json::from_str(&raw).context("malformed descriptor")?;

    Ok(panel::render(
        &descriptor.name,
        &descriptor.id,
        &format!("by {}", descriptor.publisher),
        &descriptor.description,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeCatalog {
        folders: HashMap<String, Vec<CatalogEntry>>,
    }

    impl CatalogSource for FakeCatalog {
        async fn list(&self, path: &str) -> Result<Vec<CatalogEntry>> {
            self.folders
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow!("`{path}` does not exist in the catalog"))
        }
    }

    fn entry(name: &str, kind: EntryKind) -> CatalogEntry {
        CatalogEntry {
            name: name.into(),
            path: format!("database/app/{name}"),
            kind,
            download_url: None,
            size: 0,
        }
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let descriptor: Descriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(descriptor.name, "Unknown");
        assert_eq!(descriptor.id, "Unknown");
        assert_eq!(descriptor.publisher, "Unknown");
        assert_eq!(descriptor.description, "");
    }

    #[tokio::test]
    async fn folder_without_descriptor_reports_not_found_and_downloads_nothing() {
        let catalog = FakeCatalog {
            folders: HashMap::from([(
                "database/app".to_string(),
                vec![
                    entry("readme.txt", EntryKind::File),
                    // A folder *named* about.json is not a descriptor.
                    entry("about.json", EntryKind::Dir),
                ],
            )]),
        };

        // The download URL of every entry is None, so reaching the fetch
        // phase would error; Ok(()) means the not-found branch was taken.
        let http = reqwest::Client::new();
        present(&catalog, &http, "database/app").await.unwrap();
    }

    #[test]
    fn descriptor_picker_ignores_everything_else() {
        let entries = vec![
            entry("about.json", EntryKind::Dir),
            entry("setup.exe", EntryKind::File),
        ];
        assert!(find_descriptor(&entries).is_none());

        let entries = vec![entry("about.json", EntryKind::File)];
        assert_eq!(find_descriptor(&entries).unwrap().name, "about.json");
    }

    #[test]
    fn consume_renders_and_removes_the_temp_descriptor() {
        colored::control::set_override(false);
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("about.json");
        fs::write(
            &path,
            r#"{"name": "Demo", "id": "demo.app", "publisher": "Acme", "description": "L1\nL2"}"#,
        )
        .unwrap();

        let panel = consume_descriptor_file(&path).unwrap();
        assert!(!path.exists());

        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[3].contains("by Acme"));
        assert!(lines[5].contains("L1"));
        assert!(lines[6].contains("L2"));
    }

    #[test]
    fn malformed_descriptor_errors_but_is_still_removed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("about.json");
        fs::write(&path, "not json").unwrap();

        assert!(consume_descriptor_file(&path).is_err());
        assert!(!path.exists());
    }
}
