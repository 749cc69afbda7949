// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device variants and their per-variant payloads.

use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::types::{BinaryState, DeviceType, Level};

/// The variant a device is modelled as.
///
/// Chosen once by the factory from the record's `deviceType` and kept for
/// the lifetime of the [`Device`](crate::Device).
///
/// # Examples
///
/// ```
/// use zway_lib::DeviceClass;
/// use zway_lib::types::DeviceType;
///
/// assert_eq!(DeviceClass::for_type(&DeviceType::Battery), DeviceClass::SensorMultilevel);
/// assert_eq!(
///     DeviceClass::for_type(&DeviceType::Other("thermostat".into())),
///     DeviceClass::Generic
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Read-only access to the common attributes.
    Generic,
    /// Binary switch that can be turned on and off.
    SwitchBinary,
    /// Read-only binary sensor.
    SensorBinary,
    /// Multilevel switch that can be set to a level.
    SwitchMultilevel,
    /// Read-only multilevel sensor with a unit.
    SensorMultilevel,
}

impl DeviceClass {
    /// Maps a device type to its variant. Unknown types fall back to
    /// [`DeviceClass::Generic`].
    #[must_use]
    pub fn for_type(device_type: &DeviceType) -> Self {
        match device_type {
            DeviceType::SwitchBinary => Self::SwitchBinary,
            DeviceType::SwitchMultilevel => Self::SwitchMultilevel,
            DeviceType::SensorBinary => Self::SensorBinary,
            DeviceType::SensorMultilevel | DeviceType::Battery => Self::SensorMultilevel,
            DeviceType::Other(_) => Self::Generic,
        }
    }

}

/// Variant-specific data of a device snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceKind {
    /// No variant-specific data.
    Generic,
    /// Binary switch state.
    SwitchBinary {
        /// Reported on/off state.
        state: BinaryState,
    },
    /// Binary sensor state.
    SensorBinary {
        /// Reported on/off state.
        state: BinaryState,
    },
    /// Multilevel switch level.
    SwitchMultilevel {
        /// Reported level.
        level: Level,
    },
    /// Multilevel sensor reading.
    SensorMultilevel {
        /// Reported level.
        level: Level,
        /// Raw `metrics.scaleTitle`, usually a string such as `°C`.
        unit: Value,
    },
}

impl DeviceKind {
    /// Extracts the payload of `class` from a record's metrics.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if a multilevel variant has no
    /// `metrics.level`, or a sensor has no `metrics.scaleTitle`. Values are
    /// kept as sent.
    pub fn parse(class: DeviceClass, metrics: &Map<String, Value>) -> Result<Self, ParseError> {
        Ok(match class {
            DeviceClass::Generic => Self::Generic,
            DeviceClass::SwitchBinary => Self::SwitchBinary {
                state: BinaryState::from_level(metrics.get("level")),
            },
            DeviceClass::SensorBinary => Self::SensorBinary {
                state: BinaryState::from_level(metrics.get("level")),
            },
            DeviceClass::SwitchMultilevel => Self::SwitchMultilevel {
                level: required_level(metrics)?,
            },
            DeviceClass::SensorMultilevel => Self::SensorMultilevel {
                level: required_level(metrics)?,
                unit: required_unit(metrics)?,
            },
        })
    }

    /// Returns the variant this payload belongs to.
    #[must_use]
    pub const fn class(&self) -> DeviceClass {
        match self {
            Self::Generic => DeviceClass::Generic,
            Self::SwitchBinary { .. } => DeviceClass::SwitchBinary,
            Self::SensorBinary { .. } => DeviceClass::SensorBinary,
            Self::SwitchMultilevel { .. } => DeviceClass::SwitchMultilevel,
            Self::SensorMultilevel { .. } => DeviceClass::SensorMultilevel,
        }
    }

    /// Returns the on/off state of binary variants.
    #[must_use]
    pub const fn binary_state(&self) -> Option<BinaryState> {
        match self {
            Self::SwitchBinary { state } | Self::SensorBinary { state } => Some(*state),
            _ => None,
        }
    }

    /// Returns the level of multilevel variants.
    #[must_use]
    pub const fn level(&self) -> Option<&Level> {
        match self {
            Self::SwitchMultilevel { level } | Self::SensorMultilevel { level, .. } => Some(level),
            _ => None,
        }
    }

    /// Returns the unit of multilevel sensors when it is a string.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::SensorMultilevel { unit, .. } => unit.as_str(),
            _ => None,
        }
    }
}

fn required_level(metrics: &Map<String, Value>) -> Result<Level, ParseError> {
    metrics
        .get("level")
        .cloned()
        .map(Level::new)
        .ok_or_else(|| ParseError::MissingField("metrics.level".to_string()))
}

fn required_unit(metrics: &Map<String, Value>) -> Result<Value, ParseError> {
    metrics
        .get("scaleTitle")
        .cloned()
        .ok_or_else(|| ParseError::MissingField("metrics.scaleTitle".to_string()))
}
