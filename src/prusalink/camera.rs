use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::DynamicImage;

use super::PrusaLink;
use crate::{Camera as CameraTrait, Error};

/// Decode a transport-safe frame back into an in-memory image.
///
/// An empty frame is the adapter's "no frame available" marker and fails
/// explicitly; there is no neutral image to hand back instead.
fn decode_frame(frame: &str) -> Result<DynamicImage, Error> {
    if frame.is_empty() {
        return Err(Error::NoFrame);
    }

    let bytes = STANDARD.decode(frame)?;
    Ok(image::load_from_memory(&bytes)?)
}

impl CameraTrait for PrusaLink {
    async fn camera_start(&self) -> bool {
        // Nothing to start: the device serves stills on demand. True when
        // it is serving them now.
        self.snapshot_reachable().await
    }

    async fn camera_stop(&self) {}

    async fn camera_client_alive(&self) -> bool {
        self.snapshot_reachable().await
    }

    async fn get_camera_frame(&self) -> String {
        match self.client.snapshot().await {
            Ok(bytes) => STANDARD.encode(&bytes),
            Err(err) => {
                tracing::warn!(error = %err, "camera snapshot unavailable");
                String::new()
            }
        }
    }

    async fn get_camera_image(&self) -> Result<DynamicImage, Error> {
        let frame = self.get_camera_frame().await;
        decode_frame(&frame)
    }
}

impl PrusaLink {
    async fn snapshot_reachable(&self) -> bool {
        self.client.snapshot().await.is_ok()
    }
}
