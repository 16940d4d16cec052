//! Capability gaps: tuning and material-hub operations the device has no
//! equivalent for.
//!
//! Every stub returns the contract's neutral value deterministically,
//! whatever the arguments. The two structured material-hub accessors are
//! the exception the contract carves out; they fail with
//! [Error::Unsupported] because fabricating a tray that does not exist
//! would be worse than refusing.

use super::PrusaLink;
use crate::{
    AmsHub, Calibration, Error, FilamentHub as FilamentHubTrait, FilamentSettings, FilamentTray,
    Tuning as TuningTrait,
};

/// Log a capability gap and return the neutral boolean.
fn unsupported(op: &'static str) -> bool {
    tracing::debug!(op, "operation has no equivalent on this machine");
    false
}

impl TuningTrait for PrusaLink {
    async fn turn_light_on(&self) -> bool {
        unsupported("turn_light_on")
    }

    async fn turn_light_off(&self) -> bool {
        unsupported("turn_light_off")
    }

    async fn gcode(&self, _lines: &[String], _check: bool) -> bool {
        unsupported("gcode")
    }

    async fn set_bed_temperature(&self, _temperature: i64) -> bool {
        unsupported("set_bed_temperature")
    }

    async fn set_nozzle_temperature(&self, _temperature: i64) -> bool {
        unsupported("set_nozzle_temperature")
    }

    async fn set_print_speed(&self, _speed_lvl: i64) -> bool {
        unsupported("set_print_speed")
    }

    async fn home_printer(&self) -> bool {
        unsupported("home_printer")
    }

    async fn move_z_axis(&self, _height: i64) -> bool {
        unsupported("move_z_axis")
    }

    async fn calibrate_printer(&self, _passes: Calibration) -> bool {
        unsupported("calibrate_printer")
    }

    async fn skip_objects(&self, _objects: &[i64]) -> bool {
        unsupported("skip_objects")
    }

    async fn get_skipped_objects(&self) -> Vec<i64> {
        tracing::debug!("object skipping has no equivalent on this machine");
        Vec::new()
    }

    async fn set_part_fan_speed(&self, _speed: f64) -> bool {
        unsupported("set_part_fan_speed")
    }

    async fn set_aux_fan_speed(&self, _speed: f64) -> bool {
        unsupported("set_aux_fan_speed")
    }

    async fn set_chamber_fan_speed(&self, _speed: f64) -> bool {
        unsupported("set_chamber_fan_speed")
    }

    async fn set_auto_step_recovery(&self, _enabled: bool) -> bool {
        unsupported("set_auto_step_recovery")
    }
}

impl FilamentHubTrait for PrusaLink {
    async fn vt_tray(&self) -> Result<FilamentTray, Error> {
        Err(Error::Unsupported("vt_tray"))
    }

    async fn ams_hub(&self) -> Result<AmsHub, Error> {
        Err(Error::Unsupported("ams_hub"))
    }

    async fn set_filament_printer(
        &self,
        _color: &str,
        _filament: &FilamentSettings,
        _ams_id: i64,
        _tray_id: i64,
    ) -> bool {
        unsupported("set_filament_printer")
    }

    async fn load_filament_spool(&self) -> bool {
        unsupported("load_filament_spool")
    }

    async fn unload_filament_spool(&self) -> bool {
        unsupported("unload_filament_spool")
    }

    async fn retry_filament_action(&self) -> bool {
        unsupported("retry_filament_action")
    }
}
