// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device model for Z-Way virtual devices.
//!
//! A [`Device`] couples the identifier of a remote device with the last
//! [`Snapshot`] fetched for it and the [`Session`] it came from. The
//! attributes every device has are read directly from it; variant-specific
//! capabilities are reached in one of two ways:
//!
//! - capability-checked views such as [`Device::as_switch_binary`], which
//!   return `None` unless the device was built as that variant
//! - explicit inspection of [`Device::kind`]
//!
//! ```no_run
//! use zway_lib::{BinaryDevice, Controller, MultilevelDevice};
//!
//! # fn example() -> zway_lib::Result<()> {
//! let controller = Controller::new("http://192.168.1.10:8083", Some("admin"), Some("secret"))?;
//!
//! for device in controller.devices() {
//!     if let Some(switch) = device.as_switch_binary() {
//!         println!("{} is on: {:?}", device.id(), switch.is_on());
//!         switch.turn_off()?;
//!     } else if let Some(sensor) = device.as_sensor_multilevel() {
//!         println!("{}: {} {}", device.id(), sensor.level(), sensor.unit().unwrap_or(""));
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Commands never change the local snapshot. Call [`Device::update`] (or
//! refresh the controller) to see the state the device settled in.

mod factory;
mod kind;
mod snapshot;
mod views;

pub use factory::create_device;
pub use kind::{DeviceClass, DeviceKind};
pub use snapshot::Snapshot;
pub use views::{
    BinaryDevice, MultilevelDevice, SensorBinary, SensorMultilevel, SwitchBinary, SwitchMultilevel,
};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::command::DeviceCommand;
use crate::error::{Error, ParseError};
use crate::protocol::Session;
use crate::response::DeviceRecord;
use crate::types::{BinaryState, DeviceType, Level};

/// One remote device and its last-known snapshot.
#[derive(Debug, Clone)]
pub struct Device {
    id: String,
    session: Session,
    snapshot: Snapshot,
}

impl Device {
    /// Creates a device modelled as `class` from a fetched record.
    pub(crate) fn new(
        record: DeviceRecord,
        class: DeviceClass,
        session: Session,
    ) -> Result<Self, ParseError> {
        let id = record.id.clone();
        let snapshot = Snapshot::from_record(record, class)?;
        Ok(Self {
            id,
            session,
            snapshot,
        })
    }

    /// Re-fetches the device and replaces its snapshot.
    ///
    /// The device keeps its variant and identifier. If the request or the
    /// parse fails, the previous snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the record is malformed.
    pub fn update(&mut self) -> Result<(), Error> {
        let record = self.session.fetch_device(&self.id)?;
        if record.id != self.id {
            tracing::warn!(
                device_id = %self.id,
                returned_id = %record.id,
                "Controller returned a different device id"
            );
        }
        self.snapshot = Snapshot::from_record(record, self.class())?;
        Ok(())
    }

    pub(crate) fn send_command(&self, command: &DeviceCommand) -> Result<(), Error> {
        self.session.send_command(&self.id, command)
    }

    // ========== Common attributes ==========

    /// Device identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display title (`metrics.title`).
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.snapshot.title()
    }

    /// Whether the device is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.snapshot.is_visible()
    }

    /// Declared device type.
    #[must_use]
    pub const fn device_type(&self) -> &DeviceType {
        self.snapshot.device_type()
    }

    /// Probe type, possibly empty.
    #[must_use]
    pub fn probe_type(&self) -> &str {
        self.snapshot.probe_type()
    }

    /// All metrics.
    #[must_use]
    pub const fn metrics(&self) -> &Map<String, Value> {
        self.snapshot.metrics()
    }

    /// A single raw metric.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&Value> {
        self.snapshot.metrics().get(name)
    }

    /// Tags, empty when the device has none.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.snapshot.tags()
    }

    /// Returns `true` if `tag` is one of the device's tags, or if `tag` is
    /// `None`.
    #[must_use]
    pub fn is_tagged(&self, tag: Option<&str>) -> bool {
        self.snapshot.is_tagged(tag)
    }

    /// Creation time, when reported.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.created_at()
    }

    /// Last update time, when reported.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.updated_at()
    }

    /// The whole snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    // ========== Variant access ==========

    /// Variant this device was built as.
    #[must_use]
    pub const fn class(&self) -> DeviceClass {
        self.snapshot.kind().class()
    }

    /// Variant-specific data.
    #[must_use]
    pub const fn kind(&self) -> &DeviceKind {
        self.snapshot.kind()
    }

    /// On/off state of binary switches and sensors.
    #[must_use]
    pub const fn binary_state(&self) -> Option<BinaryState> {
        self.snapshot.kind().binary_state()
    }

    /// Level of multilevel switches and sensors.
    #[must_use]
    pub const fn level(&self) -> Option<&Level> {
        self.snapshot.kind().level()
    }

    /// Binary switch capabilities.
    #[must_use]
    pub fn as_switch_binary(&self) -> Option<SwitchBinary<'_>> {
        match self.kind() {
            DeviceKind::SwitchBinary { state } => Some(SwitchBinary::new(self, *state)),
            _ => None,
        }
    }

    /// Binary sensor capabilities.
    #[must_use]
    pub fn as_sensor_binary(&self) -> Option<SensorBinary<'_>> {
        match self.kind() {
            DeviceKind::SensorBinary { state } => Some(SensorBinary::new(self, *state)),
            _ => None,
        }
    }

    /// Multilevel switch capabilities.
    #[must_use]
    pub fn as_switch_multilevel(&self) -> Option<SwitchMultilevel<'_>> {
        match self.kind() {
            DeviceKind::SwitchMultilevel { level } => Some(SwitchMultilevel::new(self, level)),
            _ => None,
        }
    }

    /// Multilevel sensor capabilities.
    #[must_use]
    pub fn as_sensor_multilevel(&self) -> Option<SensorMultilevel<'_>> {
        match self.kind() {
            DeviceKind::SensorMultilevel { level, unit } => {
                Some(SensorMultilevel::new(self, level, unit))
            }
            _ => None,
        }
    }
}
