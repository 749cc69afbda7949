// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device construction by type.

use crate::device::{Device, DeviceClass};
use crate::error::Error;
use crate::protocol::Session;
use crate::response::DeviceRecord;

/// Builds the device variant matching the record's `deviceType`.
///
/// | `deviceType` | Variant |
/// |--------------|---------|
/// | `switchBinary` | [`DeviceClass::SwitchBinary`] |
/// | `switchMultilevel` | [`DeviceClass::SwitchMultilevel`] |
/// | `sensorBinary` | [`DeviceClass::SensorBinary`] |
/// | `sensorMultilevel`, `battery` | [`DeviceClass::SensorMultilevel`] |
/// | anything else | [`DeviceClass::Generic`] |
///
/// # Errors
///
/// Returns `ParseError` if the record lacks a field its variant requires.
pub fn create_device(record: DeviceRecord, session: Session) -> Result<Device, Error> {
    let class = DeviceClass::for_type(&record.device_type);
    Ok(Device::new(record, class, session)?)
}
