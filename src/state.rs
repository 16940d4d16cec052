//! State enumerations of the abstract printer contract.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

/// State of the gcode interpreter.
///
/// Every concrete device state maps to exactly one of these; device states
/// an adapter cannot classify map to [GcodeState::Unknown], never to an
/// error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "UPPERCASE")]
#[display(style = "UPPERCASE")]
pub enum GcodeState {
    /// No job loaded.
    Idle,
    /// Getting ready to execute a job.
    Prepare,
    /// Executing gcode.
    Running,
    /// Execution paused mid-job.
    Pause,
    /// Job ran to completion.
    Finish,
    /// Job ended abnormally.
    Failed,
    /// State cannot be determined.
    #[default]
    Unknown,
}

/// Coarse print activity of the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[display(style = "SNAKE_CASE")]
pub enum PrintState {
    /// A print is in progress.
    Printing,
    /// A print is paused by the user.
    PausedUser,
    /// Nothing is printing.
    Idle,
    /// Activity cannot be determined.
    #[default]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_text() {
        assert_eq!(GcodeState::Running.to_string(), "RUNNING");
        assert_eq!(PrintState::PausedUser.to_string(), "PAUSED_USER");
        assert_eq!("FAILED".parse::<GcodeState>().unwrap(), GcodeState::Failed);
        assert_eq!("PRINTING".parse::<PrintState>().unwrap(), PrintState::Printing);
    }

    #[test]
    fn test_defaults_are_unknown() {
        assert_eq!(GcodeState::default(), GcodeState::Unknown);
        assert_eq!(PrintState::default(), PrintState::Unknown);
    }
}
