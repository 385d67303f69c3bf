use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tokio::process::Command;

/// Runs a downloaded installer and waits for it to exit.
///
/// No arguments, no environment tweaks, no timeout: the installer gets the
/// machine until it finishes. Non-zero exit comes back as an error value so
/// the install loop can report it and move on to the next artifact.
pub async fn run(artifact: &Path) -> Result<()> {
    let status = Command::new(artifact)
        .status()
        .await
        .with_context(|| format!("could not launch {}", artifact.display()))?;

    if !status.success() {
        return Err(anyhow!("{} exited with {}", artifact.display(), status));
    }
    Ok(())
}
