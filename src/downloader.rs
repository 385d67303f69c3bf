use crate::catalog::USER_AGENT;
use crate::logger::Logger;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Streams `url` to `dest` in chunks.
///
/// The status check happens before the destination file is even created,
/// so a rejected request leaves zero bytes on disk. A failure mid-stream
/// can still leave a partial file behind; callers accept that. Parent
/// directories must already exist—the walker mirrors them.
pub async fn download(http: &reqwest::Client, url: &str, dest: &Path) -> Result<()> {
    let mut response = http
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()
        .with_context(|| format!("download rejected for {url}"))?;

    let mut file = tokio::fs::File::create(dest)
        .await
        .with_context(|| format!("could not create {}", dest.display()))?;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    let base = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Logger::success(format!("Downloaded {}", Logger::highlight(base)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    /// One-shot HTTP server: answers the first connection with `response`
    /// and returns the address to aim the client at.
    async fn serve_once(response: &'static [u8]) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response).await;
        });
        addr
    }

    #[tokio::test]
    async fn rejected_download_writes_zero_bytes() {
        let addr =
            serve_once(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n").await;
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("setup.exe");

        let http = reqwest::Client::new();
        let err = download(&http, &format!("http://{addr}/setup.exe"), &dest)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("rejected"), "err: {err:#}");
        assert!(!dest.exists(), "a rejected request must not touch the disk");
    }

    #[tokio::test]
    async fn accepted_download_streams_the_body_to_disk() {
        let addr = serve_once(b"HTTP/1.1 200 OK\r\ncontent-length: 5\r\n\r\nhello").await;
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("setup.exe");

        let http = reqwest::Client::new();
        download(&http, &format!("http://{addr}/setup.exe"), &dest)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"hello");
    }
}

