#![allow(refining_impl_trait)]
#![deny(missing_docs)]
#![deny(missing_copy_implementations)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unused_import_braces)]
#![deny(unused_qualifications)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

//! This crate implements a vendor-neutral control surface for consumer 3d
//! printers, and adapters that satisfy it over whatever interface a
//! device actually has.
//!
//! The contract in [Telemetry], [Control], [FileManagement], [FilamentHub],
//! [Tuning] and [Camera] was shaped by a feature-rich printer platform.
//! Adapters for simpler devices keep the whole surface anyway and degrade
//! gracefully: an operation the device cannot perform returns a
//! deterministic neutral value rather than failing, so callers never need
//! to know which machine they are talking to. The one adapter here,
//! [prusalink::PrusaLink], maps the contract onto the snapshot-style
//! PrusaLink web api.

mod error;
mod filament;
pub mod prusalink;
mod state;
mod traits;

pub use error::Error;
pub use filament::{AmsHub, AmsUnit, FilamentSettings, FilamentTray, NozzleType};
pub use state::{GcodeState, PrintState};
pub use traits::{
    Calibration, Camera, Control, FileManagement, FilamentHub, PrintOptions, Telemetry, Tuning,
};
