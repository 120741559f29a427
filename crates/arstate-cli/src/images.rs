//! Writing generated images from data URLs to disk.

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Split a `data:image/...;base64,` URL into its extension and payload.
fn parse_data_url(data_url: &str) -> Result<(&str, &str)> {
    let rest = data_url
        .strip_prefix("data:image/")
        .ok_or_else(|| anyhow!("not an image data URL"))?;
    let (extension, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| anyhow!("data URL is not base64-encoded"))?;
    Ok((extension, payload))
}

/// Decode the data URL and write it under `dir` as `<id>.<ext>`.
pub async fn write_data_url(dir: &Path, id: &str, data_url: &str) -> Result<PathBuf> {
    let (extension, payload) = parse_data_url(data_url)?;
    let bytes = STANDARD
        .decode(payload)
        .context("invalid base64 image payload")?;

    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating image directory {}", dir.display()))?;
    let path = dir.join(format!("{}.{}", id, extension));
    fs::write(&path, bytes)
        .await
        .with_context(|| format!("writing image to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_jpeg_data_url() {
        let (ext, payload) = parse_data_url("data:image/jpeg;base64,ZmFrZQ==").unwrap();
        assert_eq!(ext, "jpeg");
        assert_eq!(payload, "ZmFrZQ==");
    }

    #[test]
    fn rejects_non_image_urls() {
        assert!(parse_data_url("https://example.com/cat.jpg").is_err());
        assert!(parse_data_url("data:text/plain;base64,aGk=").is_err());
        assert!(parse_data_url("data:image/jpeg,raw").is_err());
    }

    #[tokio::test]
    async fn writes_decoded_bytes() {
        let dir = std::env::temp_dir().join(format!("arstate-test-{}", std::process::id()));
        let path = write_data_url(&dir, "123-abc", "data:image/jpeg;base64,ZmFrZQ==")
            .await
            .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, b"fake");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
