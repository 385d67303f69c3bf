use crate::catalog::{CatalogClient, DATABASE_FOLDER, SETUPS_FOLDER};
use crate::logger::Logger;
use crate::{downloader, runner, walker};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Confirm;
use std::fs;
use std::path::Path;

/// Installs one app entry: enumerate its catalog folder, then download and
/// execute every installer in the order the walk found them.
///
/// Two phases on purpose. The walk finishes before the first byte is
/// downloaded, so a traversal error never leaves half an artifact behind.
/// A failed download still aborts the rest of the run; a failed *installer*
/// only costs that one artifact.
pub async fn install(client: &CatalogClient, name: &str) -> Result<()> {
    let remote_root = format!("{DATABASE_FOLDER}/{name}");
    let local_root = Path::new(SETUPS_FOLDER).join(name);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Resolving {}", Logger::highlight(name)));
    pb.enable_steady_tick(std::time::Duration::from_millis(120));

    let walk = walker::collect(client, &remote_root, &local_root).await;
    pb.finish_and_clear();
    let walk = walk?;

    for skipped in &walk.skipped {
        Logger::info(format!(
            "Skipping non-installer file {}",
            Logger::highlight(skipped)
        ));
    }

    if walk.artifacts.is_empty() {
        Logger::info(format!("Nothing installable under {remote_root}."));
        return Ok(());
    }

    let total = walk.artifacts.len();
    let mut installed = 0usize;

    for artifact in &walk.artifacts {
        Logger::command("install", format!("Downloading {}", artifact.remote_path));
        downloader::download(client.http(), &artifact.download_url, &artifact.local_path).await?;

        Logger::info(format!(
            "Executing {}",
            Logger::highlight(artifact.local_path.display())
        ));
        match runner::run(&artifact.local_path).await {
            Ok(()) => {
                installed += 1;
                Logger::success(format!("Executed {}", Logger::highlight(&artifact.name)));
            }
            Err(err) => Logger::error(format!("{err:#}")),
        }
    }

    Logger::success(format!(
        "Installed {installed} of {total} artifact(s) into {}",
        Logger::highlight(local_root.display())
    ));
    Ok(())
}

/// Wipes every downloaded setup after an interactive confirmation.
/// Declining is a silent no-op.
pub fn clear_setups() -> Result<()> {
    let confirmed = Confirm::new("Delete all downloaded setup files?")
        .with_default(false)
        .prompt()?;
    if !confirmed {
        return Ok(());
    }

    reset_setups(Path::new(SETUPS_FOLDER))?;
    Logger::success("Setups folder cleared.");
    Ok(())
}

/// Removes the setups root and recreates it empty. A missing root is fine;
/// we just end up with a fresh empty one.
fn reset_setups(root: &Path) -> Result<()> {
    if root.exists() {
        fs::remove_dir_all(root)
            .with_context(|| format!("could not remove {}", root.display()))?;
    }
    fs::create_dir_all(root)
        .with_context(|| format!("could not recreate {}", root.display()))?;
    Ok(())
}
