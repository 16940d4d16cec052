use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::Client;

/// Device description from the `/info` resource.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Info {
    /// Diameter of the installed nozzle in millimeters.
    pub nozzle_diameter: Option<f64>,

    /// Device serial number.
    pub serial: Option<String>,

    /// Network hostname.
    pub hostname: Option<String>,

    /// Whether a multi material unit is attached.
    pub mmu: Option<bool>,

    /// Lowest nozzle temperature extrusion is allowed at.
    pub min_extrusion_temp: Option<i64>,
}

impl Client {
    /// Fetch the device description.
    pub async fn info(&self) -> Result<Info> {
        tracing::debug!(base = self.url_base, "requesting info");
        let resp = self.http.get(format!("{}/info", self.url_base)).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!("info fetch returned {}", resp.status());
        }

        let info: Info = resp.json().await?;
        self.remember_info(info.clone()).await;
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_info() {
        let payload = r#"{
            "nozzle_diameter": 0.4,
            "serial": "CZPX4521X004XC12345",
            "hostname": "prusa-mk4",
            "mmu": false,
            "min_extrusion_temp": 170
        }"#;

        let info: Info = serde_json::from_str(payload).unwrap();
        assert_eq!(info.nozzle_diameter, Some(0.4));
        assert_eq!(info.hostname.as_deref(), Some("prusa-mk4"));
        assert_eq!(info.mmu, Some(false));
    }

    #[test]
    fn test_deserialize_info_sparse() {
        let info: Info = serde_json::from_str("{}").unwrap();
        assert_eq!(info.nozzle_diameter, None);
        assert_eq!(info.serial, None);
    }
}
