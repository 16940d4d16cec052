use anyhow::Result;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use super::Client;

/// State word reported by the device.
///
/// The set is fixed by the firmware, but newer firmware may add words this
/// client has never seen; those land in [DeviceState::Unknown] instead of
/// failing the parse. Matching is case sensitive, as the wire format is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "UPPERCASE", from = "String")]
#[display(style = "UPPERCASE")]
pub enum DeviceState {
    /// Powered on with nothing queued.
    Idle,
    /// Occupied with a non-print task, such as a move or preheat.
    Busy,
    /// Actively printing.
    Printing,
    /// Print paused.
    Paused,
    /// Last job ran to completion.
    Finished,
    /// Last job was stopped before completion.
    Stopped,
    /// Firmware error state.
    Error,
    /// Waiting for user interaction.
    Attention,
    /// Ready to accept a job.
    Ready,
    /// Any state word this client does not know.
    #[default]
    Unknown,
}

impl From<String> for DeviceState {
    fn from(word: String) -> Self {
        word.parse().unwrap_or_default()
    }
}

/// Job summary embedded in the status snapshot while a job exists.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct StatusJob {
    /// Identifier of the running job.
    pub id: i64,

    /// Completion percentage, `0.0` to `100.0`.
    pub progress: Option<f64>,

    /// Estimated seconds left.
    pub time_remaining: Option<i64>,

    /// Seconds spent printing so far.
    pub time_printing: Option<i64>,
}

/// Printer telemetry embedded in the status snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct StatusPrinter {
    /// Current state word.
    #[serde(default)]
    pub state: DeviceState,

    /// Heatbed temperature in degrees Celsius.
    pub temp_bed: Option<f64>,

    /// Heatbed target temperature.
    pub target_bed: Option<f64>,

    /// Nozzle temperature in degrees Celsius.
    pub temp_nozzle: Option<f64>,

    /// Nozzle target temperature.
    pub target_nozzle: Option<f64>,

    /// Z axis height in millimeters.
    pub axis_z: Option<f64>,

    /// Flow factor percentage.
    pub flow: Option<i64>,

    /// Speed factor percentage.
    pub speed: Option<i64>,

    /// Hotend fan speed in rpm.
    pub fan_hotend: Option<i64>,

    /// Print fan speed in rpm.
    pub fan_print: Option<i64>,
}

/// One `/status` telemetry snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Status {
    /// Job summary, absent when no job is active.
    pub job: Option<StatusJob>,

    /// Printer telemetry.
    pub printer: Option<StatusPrinter>,
}

impl Client {
    /// Fetch the current telemetry snapshot.
    pub async fn status(&self) -> Result<Status> {
        tracing::debug!(base = self.url_base, "requesting status");
        let resp = self.http.get(format!("{}/status", self.url_base)).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!("status fetch returned {}", resp.status());
        }

        let status: Status = resp.json().await?;
        self.remember_status(status).await;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_status_printing() {
        let payload = r#"{
            "job": {
                "id": 129,
                "progress": 47.8,
                "time_remaining": 2220,
                "time_printing": 2969
            },
            "printer": {
                "state": "PRINTING",
                "temp_bed": 60.2,
                "target_bed": 60.0,
                "temp_nozzle": 214.9,
                "target_nozzle": 215.0,
                "axis_z": 1.8,
                "flow": 100,
                "speed": 100,
                "fan_hotend": 5000,
                "fan_print": 2500
            }
        }"#;

        let status: Status = serde_json::from_str(payload).unwrap();
        let job = status.job.unwrap();
        let printer = status.printer.unwrap();
        assert_eq!(job.id, 129);
        assert_eq!(job.progress, Some(47.8));
        assert_eq!(job.time_remaining, Some(2220));
        assert_eq!(printer.state, DeviceState::Printing);
        assert_eq!(printer.temp_bed, Some(60.2));
        assert_eq!(printer.speed, Some(100));
    }

    #[test]
    fn test_deserialize_status_idle() {
        let payload = r#"{ "printer": { "state": "IDLE", "temp_bed": 23.1, "temp_nozzle": 24.0 } }"#;

        let status: Status = serde_json::from_str(payload).unwrap();
        assert!(status.job.is_none());
        let printer = status.printer.unwrap();
        assert_eq!(printer.state, DeviceState::Idle);
        assert_eq!(printer.target_bed, None);
        assert_eq!(printer.fan_print, None);
    }

    #[test]
    fn test_deserialize_unknown_state_word() {
        let payload = r#"{ "printer": { "state": "DEFROSTING" } }"#;

        let status: Status = serde_json::from_str(payload).unwrap();
        assert_eq!(status.printer.unwrap().state, DeviceState::Unknown);
    }

    #[test]
    fn test_deserialize_missing_state_word() {
        let payload = r#"{ "printer": { "temp_bed": 23.1 } }"#;

        let status: Status = serde_json::from_str(payload).unwrap();
        assert_eq!(status.printer.unwrap().state, DeviceState::Unknown);
    }

    #[test]
    fn test_state_word_case_sensitive() {
        // Lower case words are not the wire format and must not match.
        let payload = r#"{ "printer": { "state": "printing" } }"#;

        let status: Status = serde_json::from_str(payload).unwrap();
        assert_eq!(status.printer.unwrap().state, DeviceState::Unknown);
    }

    #[test]
    fn test_state_word_display() {
        assert_eq!(DeviceState::Printing.to_string(), "PRINTING");
        assert_eq!(DeviceState::Attention.to_string(), "ATTENTION");
        assert_eq!("FINISHED".parse::<DeviceState>().unwrap(), DeviceState::Finished);
    }
}
