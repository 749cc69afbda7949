// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Level reported by multilevel devices.

use std::fmt;

use serde_json::Value;

/// The `metrics.level` value of a multilevel switch or sensor.
///
/// The value is kept exactly as the controller sent it. Dimmers usually
/// report integers in `0..=99`, sensors report floats such as `21.5`, and
/// the library does not coerce or range-check either.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use zway_lib::types::Level;
///
/// let dimmer = Level::new(json!(42));
/// assert_eq!(dimmer.as_i64(), Some(42));
///
/// let temperature = Level::new(json!(21.5));
/// assert_eq!(temperature.as_i64(), None);
/// assert_eq!(temperature.as_f64(), Some(21.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Level(Value);

impl Level {
    /// Wraps a raw JSON level.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the level as an integer, if it is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// Returns the level as a float, if it is numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    /// Returns `Some(level > 0)` for numeric levels, `None` otherwise.
    #[must_use]
    pub fn is_positive(&self) -> Option<bool> {
        self.as_f64().map(|value| value > 0.0)
    }

    /// Returns the raw JSON value.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Level {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_level() {
        let level = Level::new(json!(99));
        assert_eq!(level.as_i64(), Some(99));
        assert_eq!(level.as_f64(), Some(99.0));
        assert_eq!(level.is_positive(), Some(true));
    }

    #[test]
    fn zero_is_not_positive() {
        assert_eq!(Level::new(json!(0)).is_positive(), Some(false));
    }

    #[test]
    fn non_numeric_level_is_passed_through() {
        let level = Level::new(json!("n/a"));
        assert_eq!(level.as_i64(), None);
        assert_eq!(level.is_positive(), None);
        assert_eq!(level.raw(), &json!("n/a"));
        assert_eq!(level.to_string(), "n/a");
    }

    #[test]
    fn display_number() {
        assert_eq!(Level::new(json!(21.5)).to_string(), "21.5");
    }
}
