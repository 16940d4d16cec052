//! The abstract printer contract: the capability surface every adapter in
//! this crate exposes, whatever the device underneath can actually do.
//!
//! The surface was designed around a feature-rich printer platform with a
//! material hub, a telemetry stream and a live camera loop. Simpler devices
//! still satisfy the whole contract: an operation a machine cannot perform
//! returns its neutral value (`false`, `0`, an empty string or list, an
//! `Unknown` variant) instead of failing. The only operations allowed to
//! fail are the ones with no honest neutral value, and those return
//! [crate::Error].

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{AmsHub, Error, FilamentSettings, FilamentTray, GcodeState, NozzleType, PrintState};

/// Parameters accepted by [Control::start_print].
///
/// These mirror the richer platform the contract was designed for. Devices
/// without plates or a material hub accept them and ignore them, so call
/// sites written against the full contract behave identically everywhere.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrintOptions {
    /// Draw filament from the material hub rather than the external spool.
    pub use_ams: bool,

    /// Mapping of hub trays to plate slots.
    pub ams_mapping: Vec<i64>,

    /// Object ids excluded from the print before it starts.
    pub skip_objects: Option<Vec<i64>>,

    /// Run automatic flow calibration before printing.
    pub flow_calibration: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            use_ams: true,
            ams_mapping: vec![0],
            skip_objects: None,
            flow_calibration: true,
        }
    }
}

/// Calibration passes selected by [Tuning::calibrate_printer].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Calibration {
    /// Re-level the bed.
    pub bed_level: bool,

    /// Calibrate motor noise cancellation.
    pub motor_noise: bool,

    /// Calibrate vibration compensation.
    pub vibration_compensation: bool,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            bed_level: true,
            motor_noise: true,
            vibration_compensation: true,
        }
    }
}

/// Telemetry getters.
///
/// Getters never fail: when the device cannot answer, each returns its
/// neutral value and the adapter logs the cause. Repeated calls against an
/// unchanged device return identical results.
pub trait Telemetry {
    /// State of the gcode interpreter.
    fn get_state(&self) -> impl Future<Output = GcodeState>;

    /// Coarse print activity of the machine.
    fn get_current_state(&self) -> impl Future<Output = PrintState>;

    /// Completed percentage of the running job, truncated to a whole
    /// number. `None` when no job is running or the device cannot say.
    fn get_percentage(&self) -> impl Future<Output = Option<i64>>;

    /// Estimated seconds left on the running job.
    fn get_time(&self) -> impl Future<Output = Option<i64>>;

    /// Heatbed temperature in degrees Celsius.
    fn get_bed_temperature(&self) -> impl Future<Output = Option<f64>>;

    /// Nozzle temperature in degrees Celsius.
    fn get_nozzle_temperature(&self) -> impl Future<Output = Option<f64>>;

    /// Chamber temperature in degrees Celsius.
    fn get_chamber_temperature(&self) -> impl Future<Output = Option<f64>>;

    /// Speed factor percentage, `0` when unavailable.
    fn get_print_speed(&self) -> impl Future<Output = i64>;

    /// Display name of the file being printed, empty when idle.
    fn get_file_name(&self) -> impl Future<Output = String>;

    /// Name of the current print task, empty when idle.
    fn subtask_name(&self) -> impl Future<Output = String>;

    /// Gcode file backing the current print, empty when idle.
    fn gcode_file(&self) -> impl Future<Output = String>;

    /// Layer the print head is on, `0` when the device does not count
    /// layers.
    fn current_layer_num(&self) -> impl Future<Output = i64>;

    /// Total layers of the running job, `0` when the device does not count
    /// layers.
    fn total_layer_num(&self) -> impl Future<Output = i64>;

    /// Diameter of the installed nozzle in millimeters, `0.0` when
    /// unavailable.
    fn nozzle_diameter(&self) -> impl Future<Output = f64>;

    /// Nozzle hardware registered with the printer.
    fn nozzle_type(&self) -> impl Future<Output = NozzleType>;

    /// Error code of the current print, `0` when normal.
    fn print_error_code(&self) -> impl Future<Output = i64>;

    /// Origin of the current print (cloud, local), `Unknown` when the
    /// device does not distinguish.
    fn print_type(&self) -> impl Future<Output = String>;

    /// Wifi signal in dBm, `Unknown` when the device does not report it.
    fn wifi_signal(&self) -> impl Future<Output = String>;

    /// State of the printer light, `Unknown` when the device has no
    /// controllable light.
    fn get_light_state(&self) -> impl Future<Output = String>;

    /// Everything the adapter has recorded from the printer, as one JSON
    /// object. Empty when nothing has been recorded.
    fn mqtt_dump(&self) -> impl Future<Output = serde_json::Value>;
}

/// Connection management and the print-job lifecycle.
pub trait Control {
    /// Connect to the printer.
    fn connect(&self) -> impl Future<Output = ()>;

    /// Disconnect from the printer.
    fn disconnect(&self) -> impl Future<Output = ()>;

    /// Start the telemetry channel. True when the channel is usable.
    fn mqtt_start(&self) -> impl Future<Output = bool>;

    /// Stop the telemetry channel.
    fn mqtt_stop(&self) -> impl Future<Output = ()>;

    /// Whether the telemetry channel is connected to the printer.
    fn mqtt_client_connected(&self) -> impl Future<Output = bool>;

    /// Whether the telemetry channel is ready to carry commands.
    fn mqtt_client_ready(&self) -> impl Future<Output = bool>;

    /// Start printing a previously uploaded file.
    ///
    /// `plate_number` and the [PrintOptions] companions are accepted for
    /// every machine and ignored by those without plates or a material
    /// hub.
    fn start_print(
        &self,
        filename: &str,
        plate_number: i64,
        options: PrintOptions,
    ) -> impl Future<Output = bool>;

    /// Stop the running print. False when there is nothing to stop.
    fn stop_print(&self) -> impl Future<Output = bool>;

    /// Pause the running print. False when there is nothing to pause.
    fn pause_print(&self) -> impl Future<Output = bool>;

    /// Resume the paused print. False when there is nothing to resume.
    fn resume_print(&self) -> impl Future<Output = bool>;
}

/// Managing files on the printer's storage.
pub trait FileManagement {
    /// Upload raw file bytes under `filename` and return the remote path
    /// of the stored file. An empty string means the upload failed; it is
    /// never a valid path.
    fn upload_file(&self, data: &[u8], filename: &str) -> impl Future<Output = String>;

    /// Delete a stored file by the path [FileManagement::upload_file]
    /// returned. Returns the path on success, an empty string otherwise.
    fn delete_file(&self, file_path: &str) -> impl Future<Output = String>;
}

/// Material hub and filament handling.
pub trait FilamentHub {
    /// Filament information for the external spool tray.
    fn vt_tray(&self) -> impl Future<Output = Result<FilamentTray, Error>>;

    /// Every material hub attached to the printer.
    fn ams_hub(&self) -> impl Future<Output = Result<AmsHub, Error>>;

    /// Register filament settings with a hub tray. The defaults of the
    /// richer platform are `ams_id = 255` and `tray_id = 254`, the
    /// external spool.
    fn set_filament_printer(
        &self,
        color: &str,
        filament: &FilamentSettings,
        ams_id: i64,
        tray_id: i64,
    ) -> impl Future<Output = bool>;

    /// Load the filament spool into the extruder.
    fn load_filament_spool(&self) -> impl Future<Output = bool>;

    /// Unload the filament spool from the extruder.
    fn unload_filament_spool(&self) -> impl Future<Output = bool>;

    /// Retry the last filament action.
    fn retry_filament_action(&self) -> impl Future<Output = bool>;
}

/// Lights, fans, motion, temperatures and other machine tuning.
///
/// Everything here returns `false` (or the empty list) on machines without
/// the capability; none of these operations fail.
pub trait Tuning {
    /// Turn the printer light on.
    fn turn_light_on(&self) -> impl Future<Output = bool>;

    /// Turn the printer light off.
    fn turn_light_off(&self) -> impl Future<Output = bool>;

    /// Send gcode lines to the printer, optionally validating them first.
    fn gcode(&self, lines: &[String], check: bool) -> impl Future<Output = bool>;

    /// Set the heatbed temperature.
    fn set_bed_temperature(&self, temperature: i64) -> impl Future<Output = bool>;

    /// Set the nozzle temperature.
    fn set_nozzle_temperature(&self, temperature: i64) -> impl Future<Output = bool>;

    /// Set the speed level, `0` (slowest) to `3` (fastest).
    fn set_print_speed(&self, speed_lvl: i64) -> impl Future<Output = bool>;

    /// Home the printer.
    fn home_printer(&self) -> impl Future<Output = bool>;

    /// Move the Z axis to `height` millimeters.
    fn move_z_axis(&self, height: i64) -> impl Future<Output = bool>;

    /// Run the selected calibration passes.
    fn calibrate_printer(&self, passes: Calibration) -> impl Future<Output = bool>;

    /// Skip objects of the running print.
    fn skip_objects(&self, objects: &[i64]) -> impl Future<Output = bool>;

    /// Object ids currently being skipped.
    fn get_skipped_objects(&self) -> impl Future<Output = Vec<i64>>;

    /// Set the part cooling fan speed.
    fn set_part_fan_speed(&self, speed: f64) -> impl Future<Output = bool>;

    /// Set the auxiliary fan speed.
    fn set_aux_fan_speed(&self, speed: f64) -> impl Future<Output = bool>;

    /// Set the chamber fan speed.
    fn set_chamber_fan_speed(&self, speed: f64) -> impl Future<Output = bool>;

    /// Enable or disable automatic step recovery.
    fn set_auto_step_recovery(&self, enabled: bool) -> impl Future<Output = bool>;
}

/// Camera access.
pub trait Camera {
    /// Start the camera. True when the camera is delivering frames.
    fn camera_start(&self) -> impl Future<Output = bool>;

    /// Stop the camera.
    fn camera_stop(&self) -> impl Future<Output = ()>;

    /// Whether the camera is currently delivering frames.
    fn camera_client_alive(&self) -> impl Future<Output = bool>;

    /// One still frame, base64 encoded. An empty string means no frame is
    /// available; it is never a valid frame.
    fn get_camera_frame(&self) -> impl Future<Output = String>;

    /// One still frame decoded into an in-memory image.
    ///
    /// This is the one telemetry path that fails rather than degrades:
    /// there is no neutral image to return, so an unavailable frame is
    /// [Error::NoFrame].
    fn get_camera_image(&self) -> impl Future<Output = Result<image::DynamicImage, Error>>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_print_options_defaults() {
        let options = PrintOptions::default();
        assert!(options.use_ams);
        assert_eq!(options.ams_mapping, vec![0]);
        assert_eq!(options.skip_objects, None);
        assert!(options.flow_calibration);
    }

    #[test]
    fn test_calibration_defaults() {
        let passes = Calibration::default();
        assert!(passes.bed_level);
        assert!(passes.motor_noise);
        assert!(passes.vibration_compensation);
    }
}
