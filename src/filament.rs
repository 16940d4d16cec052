//! Filament, nozzle and material-hub types of the abstract printer
//! contract.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

/// Nozzle hardware registered with the printer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum NozzleType {
    /// Hardened steel nozzle.
    HardenedSteel,
    /// Stainless steel nozzle.
    StainlessSteel,
    /// The machine does not report its nozzle hardware.
    #[default]
    Unknown,
}

/// Filament settings pushed to a tray when loading material.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilamentSettings {
    /// Vendor preset identifier.
    pub tray_info_idx: String,

    /// Material name, e.g. `PLA`.
    pub filament_type: String,

    /// Lowest nozzle temperature the material tolerates.
    pub nozzle_temp_min: i64,

    /// Highest nozzle temperature the material tolerates.
    pub nozzle_temp_max: i64,
}

/// A filament tray as reported by a material hub.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilamentTray {
    /// Vendor preset identifier.
    pub tray_info_idx: String,

    /// Material name.
    pub tray_type: String,

    /// Material sub brand.
    pub tray_sub_brands: String,

    /// Loaded filament color as a six character hex code.
    pub tray_color: String,

    /// Lowest nozzle temperature the material tolerates.
    pub nozzle_temp_min: i64,

    /// Highest nozzle temperature the material tolerates.
    pub nozzle_temp_max: i64,
}

/// One material hub unit.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AmsUnit {
    /// Index of the unit.
    pub id: i64,

    /// Hub humidity percentage.
    pub humidity: Option<i64>,

    /// Hub temperature in degrees Celsius.
    pub temperature: Option<f64>,

    /// Trays loaded in this unit.
    pub trays: Vec<FilamentTray>,
}

/// Every material hub attached to the printer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AmsHub {
    /// Attached units, in slot order.
    pub units: Vec<AmsUnit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nozzle_type_wire_text() {
        assert_eq!(NozzleType::HardenedSteel.to_string(), "hardened_steel");
        assert_eq!(
            "stainless_steel".parse::<NozzleType>().unwrap(),
            NozzleType::StainlessSteel
        );
        assert_eq!(NozzleType::default(), NozzleType::Unknown);
    }
}
