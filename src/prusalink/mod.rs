//! This module contains support for controlling PrusaLink 3d printers.
//!
//! PrusaLink exposes snapshot style status/job/info resources plus file,
//! job and camera actions over local HTTP. The richer parts of the
//! contract (material hub, telemetry stream, live camera loop) have no
//! equivalent there and degrade to their neutral values; the mapping for
//! each operation is documented where it is implemented.

mod camera;
mod control;
mod telemetry;
mod tuning;

use anyhow::Result;
use prusalink::Client as PrusaLinkClient;
use serde::{Deserialize, Serialize};

/// Configuration information for a PrusaLink endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Host name or address of the printer on the local network.
    pub host: String,

    /// Port the web api listens on.
    pub port: u16,

    /// Static api key expected in every request. PrusaLink calls this the
    /// "password" or access code.
    pub api_key: String,

    /// Device serial number. Carried for bookkeeping; the remote api never
    /// asks for it.
    pub serial: String,
}

/// PrusaLink is a connection to one PrusaLink device, satisfying the
/// printer contract by mapping it onto the device's web api.
#[derive(Clone)]
pub struct PrusaLink {
    client: PrusaLinkClient,
    config: Config,
}

impl PrusaLink {
    /// Create a new adapter from connection details. No request is made
    /// until the first operation.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: PrusaLinkClient::new(&config.host, config.port, &config.api_key)?,
            config: config.clone(),
        })
    }

    /// Return the underlying [PrusaLinkClient].
    pub fn get_client(&self) -> &PrusaLinkClient {
        &self.client
    }

    /// Serial number this adapter was configured with.
    pub fn serial(&self) -> &str {
        &self.config.serial
    }

    /// Fetch the status snapshot, absorbing failure into `None`.
    pub(crate) async fn poll_status(&self) -> Option<prusalink::Status> {
        match self.client.status().await {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::warn!(error = %err, "status resource unavailable");
                None
            }
        }
    }

    /// Poll the job resource, absorbing failure into `None`.
    pub(crate) async fn poll_job(&self) -> Option<prusalink::JobPoll> {
        match self.client.job().await {
            Ok(poll) => Some(poll),
            Err(err) => {
                tracing::warn!(error = %err, "job resource unavailable");
                None
            }
        }
    }

    /// Fetch the device description, absorbing failure into `None`.
    pub(crate) async fn poll_info(&self) -> Option<prusalink::Info> {
        match self.client.info().await {
            Ok(info) => Some(info),
            Err(err) => {
                tracing::warn!(error = %err, "info resource unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> Config {
        Config {
            host: "prusa-mk4.local".to_owned(),
            port: 80,
            api_key: "s3cret".to_owned(),
            serial: "CZPX4521X004XC12345".to_owned(),
        }
    }

    #[test]
    fn test_deserialize_config() {
        let payload = r#"{
            "host": "prusa-mk4.local",
            "port": 80,
            "api_key": "s3cret",
            "serial": "CZPX4521X004XC12345"
        }"#;

        let config: Config = serde_json::from_str(payload).unwrap();
        assert_eq!(config.host, "prusa-mk4.local");
        assert_eq!(config.port, 80);
    }

    #[test]
    fn test_new_carries_serial() {
        let printer = PrusaLink::new(&config()).unwrap();
        assert_eq!(printer.serial(), "CZPX4521X004XC12345");
        assert_eq!(printer.get_client().url_base(), "http://prusa-mk4.local:80/api/v1");
    }
}
