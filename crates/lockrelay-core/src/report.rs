//! Status reports sent back by the lock bridge.
//!
//! After each lock state change, or when the request is `status`, the bridge
//! posts a comma-separated `key=value` line such as
//! `lock=1,in_unlock=0,pos=12,volt=5.83,volt_crit=0`. The first key is
//! spelled `lock` by the bridge; `in_lock` is accepted too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lock state as observed by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub in_lock: bool,
    pub in_unlock: bool,
    /// Knob position as reported by the lock.
    pub position: i32,
    /// Battery voltage.
    pub voltage: f32,
    pub voltage_critical: bool,
}

impl DeviceReport {
    /// One-line human summary for the admin page.
    pub fn summary(&self) -> String {
        let state = match (self.in_lock, self.in_unlock) {
            (true, false) => "locked",
            (false, true) => "unlocked",
            (false, false) => "moving",
            (true, true) => "inconsistent",
        };
        let battery = if self.voltage_critical { " (battery critical)" } else { "" };
        format!(
            "{}, position {}, {:.2} V{}",
            state, self.position, self.voltage, battery
        )
    }
}

/// Prints the wire form the bridge sends.
impl fmt::Display for DeviceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lock={},in_unlock={},pos={},volt={:.2},volt_crit={}",
            u8::from(self.in_lock),
            u8::from(self.in_unlock),
            self.position,
            self.voltage,
            u8::from(self.voltage_critical)
        )
    }
}

impl FromStr for DeviceReport {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| CoreError::InvalidReport {
            value: s.to_string(),
            reason,
        };

        let mut in_lock = None;
        let mut in_unlock = None;
        let mut position = None;
        let mut voltage = None;
        let mut voltage_critical = None;

        for field in s.trim().split(',').filter(|f| !f.trim().is_empty()) {
            let (key, value) = field
                .split_once('=')
                .ok_or_else(|| invalid(format!("field '{}' has no '='", field.trim())))?;
            let value = value.trim();
            match key.trim() {
                "lock" | "in_lock" => in_lock = Some(parse_flag(value).map_err(invalid)?),
                "in_unlock" => in_unlock = Some(parse_flag(value).map_err(invalid)?),
                "pos" => {
                    position = Some(
                        value
                            .parse()
                            .map_err(|_| invalid(format!("pos '{}' is not an integer", value)))?,
                    )
                }
                "volt" => {
                    voltage = Some(
                        value
                            .parse()
                            .map_err(|_| invalid(format!("volt '{}' is not a number", value)))?,
                    )
                }
                "volt_crit" => voltage_critical = Some(parse_flag(value).map_err(invalid)?),
                // Newer firmware may add fields.
                _ => {}
            }
        }

        let missing = |key: &str| invalid(format!("missing field '{}'", key));
        Ok(DeviceReport {
            in_lock: in_lock.ok_or_else(|| missing("lock"))?,
            in_unlock: in_unlock.ok_or_else(|| missing("in_unlock"))?,
            position: position.ok_or_else(|| missing("pos"))?,
            voltage: voltage.ok_or_else(|| missing("volt"))?,
            voltage_critical: voltage_critical.ok_or_else(|| missing("volt_crit"))?,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(format!("flag '{}' is not 0 or 1", other)),
    }
}
