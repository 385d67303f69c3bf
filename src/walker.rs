use crate::catalog::{CatalogSource, EntryKind};
use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

/// Only files with this extension are treated as installers; everything
/// else in a catalog folder is skipped, not an error.
pub const INSTALLER_EXT: &str = ".exe";

/// A selected installer: where it lives in the catalog, where its bytes
/// come from, and where the walker decided it lands locally.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub remote_path: String,
    pub download_url: String,
    pub local_path: PathBuf,
}

/// Outcome of a traversal. Skipped names are carried back so the caller
/// can report them once the spinner is out of the way.
#[derive(Debug, Default)]
pub struct Walk {
    pub artifacts: Vec<Artifact>,
    pub skipped: Vec<String>,
}

/// Depth-first traversal of `remote_root`, mirroring its folder structure
/// under `local_root` and selecting installable artifacts in listing order.
///
/// Enumeration only: nothing is downloaded or executed here. A listing
/// failure anywhere aborts the whole walk, since traversal is strictly
/// sequential. Recursion depth is bounded by the catalog itself; the
/// hosting API won't hand us a cyclic folder tree.
pub async fn collect<S: CatalogSource>(
    source: &S,
    remote_root: &str,
    local_root: &Path,
) -> Result<Walk> {
    let mut walk = Walk::default();
    fs::create_dir_all(local_root)?;
    descend(source, remote_root, local_root, &mut walk).await?;
    Ok(walk)
}

async fn descend<S: CatalogSource>(
    source: &S,
    remote: &str,
    local: &Path,
    walk: &mut Walk,
) -> Result<()> {
    for entry in source.list(remote).await? {
        match entry.kind {
            EntryKind::Dir => {
                let sub = local.join(&entry.name);
                fs::create_dir_all(&sub)?;
                Box::pin(descend(source, &entry.path, &sub, walk)).await?;
            }
            EntryKind::File if entry.name.ends_with(INSTALLER_EXT) => {
                let download_url = entry
                    .download_url
                    .ok_or_else(|| anyhow!("no download URL for {}", entry.path))?;
                walk.artifacts.push(Artifact {
                    local_path: local.join(&entry.name),
                    name: entry.name,
                    remote_path: entry.path,
                    download_url,
                });
            }
            _ => walk.skipped.push(entry.name),
        }
    }
    Ok(())
}
