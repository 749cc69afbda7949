// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Z-Way device type discriminator.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// The `deviceType` string of a Z-Way virtual device.
///
/// Z-Way knows many more device types than the library models; every
/// string it does not recognise is kept verbatim in [`DeviceType::Other`].
///
/// # Examples
///
/// ```
/// use zway_lib::types::DeviceType;
///
/// let switch: DeviceType = "switchBinary".parse().unwrap();
/// assert_eq!(switch, DeviceType::SwitchBinary);
///
/// let lock: DeviceType = "doorlock".parse().unwrap();
/// assert_eq!(lock, DeviceType::Other("doorlock".to_string()));
/// assert_eq!(lock.as_str(), "doorlock");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// On/off switch (`switchBinary`).
    SwitchBinary,
    /// Dimmer or blind (`switchMultilevel`).
    SwitchMultilevel,
    /// Door, motion or flood sensor (`sensorBinary`).
    SensorBinary,
    /// Temperature, luminance or energy sensor (`sensorMultilevel`).
    SensorMultilevel,
    /// Battery level reporter (`battery`).
    Battery,
    /// Any other device type reported by the controller.
    Other(String),
}

impl DeviceType {
    /// Returns the wire representation used by the Z-Way API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SwitchBinary => "switchBinary",
            Self::SwitchMultilevel => "switchMultilevel",
            Self::SensorBinary => "sensorBinary",
            Self::SensorMultilevel => "sensorMultilevel",
            Self::Battery => "battery",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "switchBinary" => Self::SwitchBinary,
            "switchMultilevel" => Self::SwitchMultilevel,
            "sensorBinary" => Self::SensorBinary,
            "sensorMultilevel" => Self::SensorMultilevel,
            "battery" => Self::Battery,
            other => Self::Other(other.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for DeviceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let Ok(device_type) = raw.parse::<Self>();
        Ok(device_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_types() {
        let cases = [
            ("switchBinary", DeviceType::SwitchBinary),
            ("switchMultilevel", DeviceType::SwitchMultilevel),
            ("sensorBinary", DeviceType::SensorBinary),
            ("sensorMultilevel", DeviceType::SensorMultilevel),
            ("battery", DeviceType::Battery),
        ];
        for (raw, expected) in cases {
            let parsed: DeviceType = raw.parse().unwrap();
            assert_eq!(parsed, expected);
            assert_eq!(parsed.as_str(), raw);
        }
    }

    #[test]
    fn unknown_type_is_kept_verbatim() {
        let parsed: DeviceType = "toggleButton".parse().unwrap();
        assert_eq!(parsed, DeviceType::Other("toggleButton".to_string()));
        assert_eq!(parsed.to_string(), "toggleButton");
    }

    #[test]
    fn parse_is_case_sensitive() {
        let parsed: DeviceType = "SwitchBinary".parse().unwrap();
        assert!(matches!(parsed, DeviceType::Other(_)));
    }

    #[test]
    fn deserialize_from_json_string() {
        let parsed: DeviceType = serde_json::from_str(r#""battery""#).unwrap();
        assert_eq!(parsed, DeviceType::Battery);
    }

    #[test]
    fn deserialize_rejects_non_string() {
        assert!(serde_json::from_str::<DeviceType>("42").is_err());
    }
}
