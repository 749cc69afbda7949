// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability views over a [`Device`].
//!
//! A view is only handed out when the device was built as the matching
//! variant, so holding one proves the capability exists. Reads come from
//! the snapshot the view was taken from; commands go straight to the
//! controller and do not change that snapshot.

use serde_json::Value;

use crate::command::DeviceCommand;
use crate::device::Device;
use crate::error::Error;
use crate::types::{BinaryState, Level};

/// Devices with an on/off state.
pub trait BinaryDevice {
    /// Reported state.
    fn state(&self) -> BinaryState;

    /// `Some(true)` when on, `Some(false)` when off, `None` when unknown.
    fn is_on(&self) -> Option<bool> {
        self.state().as_bool()
    }
}

/// Devices with a level.
pub trait MultilevelDevice {
    /// Reported level.
    fn level(&self) -> &Level;
}

/// A binary switch.
#[derive(Debug, Clone, Copy)]
pub struct SwitchBinary<'a> {
    device: &'a Device,
    state: BinaryState,
}

impl<'a> SwitchBinary<'a> {
    pub(crate) const fn new(device: &'a Device, state: BinaryState) -> Self {
        Self { device, state }
    }

    /// The underlying device.
    #[must_use]
    pub const fn device(&self) -> &'a Device {
        self.device
    }

    /// Switches the device on.
    ///
    /// # Errors
    ///
    /// Returns error if the command request fails.
    pub fn turn_on(&self) -> Result<(), Error> {
        self.device.send_command(&DeviceCommand::On)
    }

    /// Switches the device off.
    ///
    /// # Errors
    ///
    /// Returns error if the command request fails.
    pub fn turn_off(&self) -> Result<(), Error> {
        self.device.send_command(&DeviceCommand::Off)
    }
}

impl BinaryDevice for SwitchBinary<'_> {
    fn state(&self) -> BinaryState {
        self.state
    }
}

/// A read-only binary sensor.
#[derive(Debug, Clone, Copy)]
pub struct SensorBinary<'a> {
    device: &'a Device,
    state: BinaryState,
}

impl<'a> SensorBinary<'a> {
    pub(crate) const fn new(device: &'a Device, state: BinaryState) -> Self {
        Self { device, state }
    }

    /// The underlying device.
    #[must_use]
    pub const fn device(&self) -> &'a Device {
        self.device
    }
}

impl BinaryDevice for SensorBinary<'_> {
    fn state(&self) -> BinaryState {
        self.state
    }
}

/// A multilevel switch such as a dimmer or a blind motor.
#[derive(Debug, Clone, Copy)]
pub struct SwitchMultilevel<'a> {
    device: &'a Device,
    level: &'a Level,
}

impl<'a> SwitchMultilevel<'a> {
    pub(crate) const fn new(device: &'a Device, level: &'a Level) -> Self {
        Self { device, level }
    }

    /// The underlying device.
    #[must_use]
    pub const fn device(&self) -> &'a Device {
        self.device
    }

    /// `Some(level > 0)` for numeric levels, `None` otherwise.
    #[must_use]
    pub fn is_on(&self) -> Option<bool> {
        self.level.is_positive()
    }

    /// Asks the controller to move the device to `level`.
    ///
    /// Z-Way levels are 0 to 99, with 255 meaning "last on level", so `u8`
    /// covers every value the command endpoint accepts. The level is sent as
    /// is; the controller decides how to clamp it.
    ///
    /// # Errors
    ///
    /// Returns error if the command request fails.
    pub fn set_level(&self, level: u8) -> Result<(), Error> {
        self.device.send_command(&DeviceCommand::Exact(level))
    }

    /// Sets the level to 255.
    ///
    /// # Errors
    ///
    /// Returns error if the command request fails.
    pub fn turn_on(&self) -> Result<(), Error> {
        self.device.send_command(&DeviceCommand::turn_on_level())
    }

    /// Sets the level to 0.
    ///
    /// # Errors
    ///
    /// Returns error if the command request fails.
    pub fn turn_off(&self) -> Result<(), Error> {
        self.device.send_command(&DeviceCommand::turn_off_level())
    }
}

impl MultilevelDevice for SwitchMultilevel<'_> {
    fn level(&self) -> &Level {
        self.level
    }
}

/// A multilevel sensor, including battery reporters.
#[derive(Debug, Clone, Copy)]
pub struct SensorMultilevel<'a> {
    device: &'a Device,
    level: &'a Level,
    unit: &'a Value,
}

impl<'a> SensorMultilevel<'a> {
    pub(crate) const fn new(device: &'a Device, level: &'a Level, unit: &'a Value) -> Self {
        Self {
            device,
            level,
            unit,
        }
    }

    /// The underlying device.
    #[must_use]
    pub const fn device(&self) -> &'a Device {
        self.device
    }

    /// Unit of measure, e.g. `°C` or `%`. `None` when the controller sent
    /// something other than a string.
    #[must_use]
    pub fn unit(&self) -> Option<&'a str> {
        self.unit.as_str()
    }

    /// Raw `metrics.scaleTitle` as sent by the controller.
    #[must_use]
    pub const fn raw_unit(&self) -> &'a Value {
        self.unit
    }
}

impl MultilevelDevice for SensorMultilevel<'_> {
    fn level(&self) -> &Level {
        self.level
    }
}
