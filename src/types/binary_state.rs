// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tri-state on/off value of binary devices.

use std::fmt;

use serde_json::Value;

/// The on/off state reported by a binary switch or sensor.
///
/// Z-Way reports binary devices through `metrics.level` as the string
/// `"on"` or `"off"`. Anything else, including a missing level, is
/// [`BinaryState::Unknown`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use zway_lib::types::BinaryState;
///
/// assert_eq!(BinaryState::from_level(Some(&json!("on"))), BinaryState::On);
/// assert_eq!(BinaryState::from_level(Some(&json!(1))), BinaryState::Unknown);
/// assert_eq!(BinaryState::from_level(None).as_bool(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BinaryState {
    /// The device reports `"on"`.
    On,
    /// The device reports `"off"`.
    Off,
    /// The device reports something else, or nothing.
    #[default]
    Unknown,
}

impl BinaryState {
    /// Derives the state from a raw `metrics.level` value.
    #[must_use]
    pub fn from_level(level: Option<&Value>) -> Self {
        match level.and_then(Value::as_str) {
            Some("on") => Self::On,
            Some("off") => Self::Off,
            _ => Self::Unknown,
        }
    }

    /// Returns `Some(true)` for on, `Some(false)` for off, `None` when unknown.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::On => Some(true),
            Self::Off => Some(false),
            Self::Unknown => None,
        }
    }

    /// Returns the string Z-Way uses for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BinaryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn on_and_off_strings() {
        assert_eq!(BinaryState::from_level(Some(&json!("on"))), BinaryState::On);
        assert_eq!(
            BinaryState::from_level(Some(&json!("off"))),
            BinaryState::Off
        );
    }

    #[test]
    fn anything_else_is_unknown() {
        for value in [json!("ON"), json!(""), json!(0), json!(true), json!(null)] {
            assert_eq!(
                BinaryState::from_level(Some(&value)),
                BinaryState::Unknown,
                "{value}"
            );
        }
        assert_eq!(BinaryState::from_level(None), BinaryState::Unknown);
    }

    #[test]
    fn as_bool_is_tri_state() {
        assert_eq!(BinaryState::On.as_bool(), Some(true));
        assert_eq!(BinaryState::Off.as_bool(), Some(false));
        assert_eq!(BinaryState::Unknown.as_bool(), None);
    }
}
