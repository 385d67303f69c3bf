use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Top-level catalog folder holding one subfolder per app entry.
pub const DATABASE_FOLDER: &str = "database";
/// Local folder the downloaded installers are mirrored into.
pub const SETUPS_FOLDER: &str = "setups";

/// GitHub wants a User-Agent on every API call, so everything that talks
/// to it goes through this one.
pub const USER_AGENT: &str = concat!("wharf/", env!("CARGO_PKG_VERSION"));

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_REPO: &str = "wharf-apps/catalog";

/// One entry from a contents listing. Comes straight off the wire and is
/// never persisted anywhere.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Path relative to the repository root, e.g. `database/foo/setup.exe`.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Raw-content URL; the API only fills this in for files.
    pub download_url: Option<String>,
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
    /// Symlinks, submodules—anything we don't install from.
    #[serde(other)]
    Other,
}

/// Anything that can list a catalog folder. The live client implements
/// this against the GitHub contents API; tests swap in an in-memory tree.
/// Only ever used as a generic bound, so the future's auto traits don't
/// need spelling out.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn list(&self, path: &str) -> Result<Vec<CatalogEntry>>;
}

/// Read-only client for the hosted catalog repository.
///
/// Constructed once in main and passed into every operation that needs
/// it. Repository and API endpoint can be repointed via WHARF_CATALOG_REPO
/// and WHARF_API_URL (or the --api-url flag).
pub struct CatalogClient {
    http: reqwest::Client,
    api_url: String,
    repo: String,
}

impl CatalogClient {
    pub fn new(api_url_override: Option<&str>) -> Self {
        let api_url = api_url_override
            .map(str::to_string)
            .or_else(|| std::env::var("WHARF_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let repo =
            std::env::var("WHARF_CATALOG_REPO").unwrap_or_else(|_| DEFAULT_REPO.to_string());

        Self {
            http: reqwest::Client::new(),
            api_url,
            repo,
        }
    }

    /// The underlying HTTP client, for raw-content downloads that bypass
    /// the contents API.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

impl CatalogSource for CatalogClient {
    async fn list(&self, path: &str) -> Result<Vec<CatalogEntry>> {
        let url = format!("{}/repos/{}/contents/{}", self.api_url, self.repo, path);
        log::debug!("listing catalog path {path}");

        let response = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(anyhow!("`{}` does not exist in the {} catalog", path, self.repo));
        }

        let entries: Vec<CatalogEntry> = response
            .error_for_status()
            .with_context(|| format!("could not list {path}"))?
            .json()
            .await
            .with_context(|| format!("unexpected contents payload for {path}"))?;

        log::debug!("{} entries under {path}", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_contents_listing() {
        let payload = r#"[
            {"name": "apps", "path": "database/apps", "type": "dir", "download_url": null, "size": 0},
            {"name": "setup.exe", "path": "database/setup.exe", "type": "file",
             "download_url": "https://raw.example/database/setup.exe", "size": 1024}
        ]"#;

        let entries: Vec<CatalogEntry> = serde_json::from_str(payload).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::Dir);
        assert!(entries[0].download_url.is_none());
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(entries[1].size, 1024);
        assert_eq!(
            entries[1].download_url.as_deref(),
            Some("https://raw.example/database/setup.exe")
        );
    }

    #[test]
    fn unknown_entry_types_fold_into_other() {
        let payload = r#"{"name": "l", "path": "database/l", "type": "symlink", "download_url": null}"#;
        let entry: CatalogEntry = serde_json::from_str(payload).unwrap();
        assert_eq!(entry.kind, EntryKind::Other);
        assert_eq!(entry.size, 0);
    }
}
