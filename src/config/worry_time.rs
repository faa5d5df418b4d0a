//! Default worry-time slot, used until the user saves their own.

use serde::Deserialize;

use crate::domain::triage::WorryTimeSettings;

use super::error::ValidationError;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WorryTimeConfig {
    #[serde(default = "default_hour")]
    pub hour: u32,

    #[serde(default)]
    pub minute: u32,

    /// Minutes
    #[serde(default = "default_duration")]
    pub duration: u32,
}

impl WorryTimeConfig {
    /// Converts into domain settings, checking ranges.
    pub fn settings(&self) -> Result<WorryTimeSettings, ValidationError> {
        WorryTimeSettings::new(self.hour, self.minute, self.duration)
            .map_err(|e| ValidationError::InvalidWorryTime(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.settings().map(|_| ())
    }
}

impl Default for WorryTimeConfig {
    fn default() -> Self {
        Self {
            hour: default_hour(),
            minute: 0,
            duration: default_duration(),
        }
    }
}

fn default_hour() -> u32 {
    18
}

fn default_duration() -> u32 {
    15
}
