use anyhow::Result;
use bytes::Bytes;
use reqwest::{header, StatusCode};

use super::Client;

impl Client {
    /// Fetch one still frame from the snapshot camera.
    ///
    /// Succeeds only when the device answers `200 OK` with an image content
    /// type; some firmware answers 200 with an HTML error page when the
    /// camera is detached, which must not pass for a frame.
    pub async fn snapshot(&self) -> Result<Bytes> {
        tracing::debug!(base = self.url_base, "requesting camera snapshot");
        let resp = self
            .http
            .get(format!("{}/cameras/snap", self.url_base))
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            anyhow::bail!("snapshot returned {}", resp.status());
        }

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        if !content_type.starts_with("image/") {
            anyhow::bail!("snapshot returned non-image content type {content_type:?}");
        }

        Ok(resp.bytes().await?)
    }
}
