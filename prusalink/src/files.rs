use anyhow::Result;
use reqwest::{header, StatusCode};

use super::{expect_no_content, Client};

/// Storage namespace uploads land in. PrusaLink exposes the USB stick as
/// the only writable storage.
const STORAGE: &str = "usb";

/// Storage path of an uploaded file, as the device addresses it.
pub fn remote_path(filename: &str) -> String {
    format!("/{STORAGE}/{filename}")
}

impl Client {
    /// Upload raw gcode bytes under `filename` on the USB storage and
    /// return the storage path of the uploaded file.
    pub async fn upload(&self, filename: &str, body: Vec<u8>) -> Result<String> {
        tracing::debug!(base = self.url_base, filename, bytes = body.len(), "uploading file");
        let resp = self
            .http
            .put(format!("{}/files/{STORAGE}/{filename}", self.url_base))
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .header(header::CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await?;

        if resp.status() != StatusCode::CREATED {
            anyhow::bail!("upload returned {}", resp.status());
        }
        Ok(remote_path(filename))
    }

    /// Ask the device to print a stored file. Posting to a stored file's
    /// resource starts the print; the request body is ignored.
    pub async fn start(&self, filename: &str) -> Result<()> {
        tracing::debug!(base = self.url_base, filename, "starting print");
        let resp = self
            .http
            .post(format!("{}/files/{STORAGE}/{filename}", self.url_base))
            .send()
            .await?;
        expect_no_content(&resp, "print start")
    }

    /// Delete a stored file by the path [Client::upload] returned.
    pub async fn delete(&self, path: &str) -> Result<()> {
        tracing::debug!(base = self.url_base, path, "deleting file");
        let resp = self
            .http
            .delete(format!("{}/files{path}", self.url_base))
            .send()
            .await?;
        expect_no_content(&resp, "file delete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_path() {
        assert_eq!(remote_path("benchy.gcode"), "/usb/benchy.gcode");
    }
}
