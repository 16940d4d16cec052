use prusalink::{DeviceState, JobPoll, Status};

use super::PrusaLink;
use crate::{GcodeState, NozzleType, PrintState, Telemetry as TelemetryTrait};

/// Descriptive-string neutral value for telemetry the device cannot report.
const UNKNOWN: &str = "Unknown";

impl From<DeviceState> for GcodeState {
    fn from(state: DeviceState) -> Self {
        match state {
            DeviceState::Printing => GcodeState::Running,
            DeviceState::Paused => GcodeState::Pause,
            DeviceState::Finished => GcodeState::Finish,
            DeviceState::Stopped | DeviceState::Error => GcodeState::Failed,
            DeviceState::Idle => GcodeState::Idle,
            DeviceState::Ready | DeviceState::Busy | DeviceState::Attention => GcodeState::Prepare,
            DeviceState::Unknown => GcodeState::Unknown,
        }
    }
}

impl From<DeviceState> for PrintState {
    fn from(state: DeviceState) -> Self {
        match state {
            DeviceState::Printing => PrintState::Printing,
            DeviceState::Paused => PrintState::PausedUser,
            DeviceState::Finished | DeviceState::Stopped | DeviceState::Idle | DeviceState::Ready => PrintState::Idle,
            DeviceState::Error | DeviceState::Busy | DeviceState::Attention | DeviceState::Unknown => {
                PrintState::Unknown
            }
        }
    }
}

/// State word of a snapshot, [DeviceState::Unknown] when the printer
/// object is missing.
fn device_state(status: &Status) -> DeviceState {
    status.printer.map(|printer| printer.state).unwrap_or_default()
}

/// Completion percentage of a snapshot, truncated (never rounded) to a
/// whole number.
fn percentage(status: &Status) -> Option<i64> {
    status.job.and_then(|job| job.progress).map(|progress| progress.trunc() as i64)
}

/// Name of the file a job poll is printing. Prefers the human readable
/// name, falls back to the storage name, empty when idle.
fn polled_file_name(poll: &JobPoll) -> String {
    let JobPoll::Active(job) = poll else {
        return String::new();
    };
    let Some(file) = &job.file else {
        return String::new();
    };
    file.display_name
        .clone()
        .or_else(|| file.name.clone())
        .unwrap_or_default()
}

/// Storage name of the gcode file a job poll is printing, empty when idle.
fn polled_gcode_file(poll: &JobPoll) -> String {
    let JobPoll::Active(job) = poll else {
        return String::new();
    };
    job.file
        .as_ref()
        .and_then(|file| file.name.clone())
        .unwrap_or_default()
}

impl TelemetryTrait for PrusaLink {
    async fn get_state(&self) -> GcodeState {
        match self.poll_status().await {
            Some(status) => device_state(&status).into(),
            None => GcodeState::Unknown,
        }
    }

    async fn get_current_state(&self) -> PrintState {
        match self.poll_status().await {
            Some(status) => device_state(&status).into(),
            None => PrintState::Unknown,
        }
    }

    async fn get_percentage(&self) -> Option<i64> {
        self.poll_status().await.and_then(|status| percentage(&status))
    }

    async fn get_time(&self) -> Option<i64> {
        self.poll_status()
            .await
            .and_then(|status| status.job)
            .and_then(|job| job.time_remaining)
    }

    async fn get_bed_temperature(&self) -> Option<f64> {
        self.poll_status()
            .await
            .and_then(|status| status.printer)
            .and_then(|printer| printer.temp_bed)
    }

    async fn get_nozzle_temperature(&self) -> Option<f64> {
        self.poll_status()
            .await
            .and_then(|status| status.printer)
            .and_then(|printer| printer.temp_nozzle)
    }

    async fn get_chamber_temperature(&self) -> Option<f64> {
        // No chamber sensor on this machine.
        tracing::debug!("chamber temperature has no equivalent on this machine");
        None
    }

    async fn get_print_speed(&self) -> i64 {
        self.poll_status()
            .await
            .and_then(|status| status.printer)
            .and_then(|printer| printer.speed)
            .unwrap_or(0)
    }

    async fn get_file_name(&self) -> String {
        match self.poll_job().await {
            Some(poll) => polled_file_name(&poll),
            None => String::new(),
        }
    }

    async fn subtask_name(&self) -> String {
        // The nearest equivalent of a print subtask is the job's display
        // name.
        self.get_file_name().await
    }

    async fn gcode_file(&self) -> String {
        match self.poll_job().await {
            Some(poll) => polled_gcode_file(&poll),
            None => String::new(),
        }
    }

    async fn current_layer_num(&self) -> i64 {
        tracing::debug!("layer progress has no equivalent on this machine");
        0
    }

    async fn total_layer_num(&self) -> i64 {
        tracing::debug!("layer progress has no equivalent on this machine");
        0
    }

    async fn nozzle_diameter(&self) -> f64 {
        self.poll_info()
            .await
            .and_then(|info| info.nozzle_diameter)
            .unwrap_or(0.0)
    }

    async fn nozzle_type(&self) -> NozzleType {
        tracing::debug!("nozzle hardware is not reported by this machine");
        NozzleType::Unknown
    }

    async fn print_error_code(&self) -> i64 {
        tracing::debug!("print error codes have no equivalent on this machine");
        0
    }

    async fn print_type(&self) -> String {
        tracing::debug!("print origin is not reported by this machine");
        UNKNOWN.to_owned()
    }

    async fn wifi_signal(&self) -> String {
        tracing::debug!("wifi signal is not reported by this machine");
        UNKNOWN.to_owned()
    }

    async fn get_light_state(&self) -> String {
        tracing::debug!("light state has no equivalent on this machine");
        UNKNOWN.to_owned()
    }

    async fn mqtt_dump(&self) -> serde_json::Value {
        let mut dump = serde_json::Map::new();
        let client = self.get_client();
        if let Some(status) = client.last_status().await {
            if let Ok(value) = serde_json::to_value(status) {
                dump.insert("status".to_owned(), value);
            }
        }
        if let Some(job) = client.last_job().await {
            if let Ok(value) = serde_json::to_value(job) {
                dump.insert("job".to_owned(), value);
            }
        }
        if let Some(info) = client.last_info().await {
            if let Ok(value) = serde_json::to_value(info) {
                dump.insert("info".to_owned(), value);
            }
        }
        serde_json::Value::Object(dump)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn status(payload: &str) -> Status {
        serde_json::from_str(payload).unwrap()
    }

    #[test]
    fn test_gcode_state_mapping() {
        let table = [
            (DeviceState::Printing, GcodeState::Running),
            (DeviceState::Paused, GcodeState::Pause),
            (DeviceState::Finished, GcodeState::Finish),
            (DeviceState::Stopped, GcodeState::Failed),
            (DeviceState::Error, GcodeState::Failed),
            (DeviceState::Idle, GcodeState::Idle),
            (DeviceState::Ready, GcodeState::Prepare),
            (DeviceState::Busy, GcodeState::Prepare),
            (DeviceState::Attention, GcodeState::Prepare),
            (DeviceState::Unknown, GcodeState::Unknown),
        ];
        for (device, expected) in table {
            assert_eq!(GcodeState::from(device), expected, "{device}");
        }
    }

    #[test]
    fn test_print_state_mapping() {
        let table = [
            (DeviceState::Printing, PrintState::Printing),
            (DeviceState::Paused, PrintState::PausedUser),
            (DeviceState::Finished, PrintState::Idle),
            (DeviceState::Stopped, PrintState::Idle),
            (DeviceState::Error, PrintState::Unknown),
            (DeviceState::Idle, PrintState::Idle),
            (DeviceState::Ready, PrintState::Idle),
            (DeviceState::Busy, PrintState::Unknown),
            (DeviceState::Attention, PrintState::Unknown),
            (DeviceState::Unknown, PrintState::Unknown),
        ];
        for (device, expected) in table {
            assert_eq!(PrintState::from(device), expected, "{device}");
        }
    }

    #[test]
    fn test_unlisted_state_word_maps_to_unknown() {
        let snapshot = status(r#"{ "printer": { "state": "DEFROSTING" } }"#);
        assert_eq!(GcodeState::from(device_state(&snapshot)), GcodeState::Unknown);
        assert_eq!(PrintState::from(device_state(&snapshot)), PrintState::Unknown);
    }

    #[test]
    fn test_missing_printer_object_maps_to_unknown() {
        let snapshot = status("{}");
        assert_eq!(device_state(&snapshot), DeviceState::Unknown);
    }

    #[test]
    fn test_percentage_truncates() {
        let snapshot = status(r#"{ "job": { "id": 1, "progress": 47.8 } }"#);
        assert_eq!(percentage(&snapshot), Some(47));
    }

    #[test]
    fn test_percentage_absent() {
        assert_eq!(percentage(&status(r#"{ "job": { "id": 1 } }"#)), None);
        assert_eq!(percentage(&status("{}")), None);
    }

    #[test]
    fn test_percentage_is_deterministic() {
        let snapshot = status(r#"{ "job": { "id": 1, "progress": 99.99 } }"#);
        assert_eq!(percentage(&snapshot), Some(99));
        assert_eq!(percentage(&snapshot), Some(99));
    }

    #[test]
    fn test_polled_file_name_prefers_display_name() {
        let job = serde_json::from_str(
            r#"{ "id": 1, "file": { "name": "benchy.gcode", "display_name": "3DBenchy" } }"#,
        )
        .unwrap();
        let poll = JobPoll::Active(job);
        assert_eq!(polled_file_name(&poll), "3DBenchy");
        assert_eq!(polled_gcode_file(&poll), "benchy.gcode");
    }

    #[test]
    fn test_polled_file_name_idle() {
        assert_eq!(polled_file_name(&JobPoll::Idle), "");
        assert_eq!(polled_gcode_file(&JobPoll::Idle), "");
    }
}
