// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device record parsing.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::types::DeviceType;

/// Payload of `GET /devices`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceList {
    /// Device records in server order.
    pub devices: Vec<DeviceRecord>,
}

/// One virtual device as reported by the controller.
///
/// Z-Way sends records like:
///
/// ```json
/// {
///   "id": "ZWayVDev_zway_2-0-37",
///   "deviceType": "switchBinary",
///   "visibility": true,
///   "permanently_hidden": false,
///   "probeType": "",
///   "tags": ["kitchen"],
///   "metrics": {"title": "Kettle", "level": "off", "icon": "switch"},
///   "creationTime": 1500000000,
///   "updateTime": 1500000042
/// }
/// ```
///
/// `id`, `deviceType`, `visibility`, `probeType` and `metrics` are required.
///
/// # Examples
///
/// ```
/// use zway_lib::response::DeviceRecord;
/// use zway_lib::types::DeviceType;
///
/// let json = r#"{
///     "id": "ZWayVDev_zway_2-0-37",
///     "deviceType": "switchBinary",
///     "visibility": true,
///     "probeType": "",
///     "metrics": {"title": "Kettle", "level": "off"}
/// }"#;
/// let record: DeviceRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.device_type, DeviceType::SwitchBinary);
/// assert!(record.tags.is_none());
///
/// // Missing required fields fail immediately
/// assert!(serde_json::from_str::<DeviceRecord>(r#"{"id": "x"}"#).is_err());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Device identifier, unique within a controller.
    pub id: String,
    /// Device type discriminator.
    pub device_type: DeviceType,
    /// Whether the device is shown in the UI.
    pub visibility: bool,
    /// Whether the device was removed by the user. Only the list endpoint
    /// is guaranteed to send it.
    ///
    /// `None` when the key is absent, `Some(None)` when it is `null`.
    #[allow(clippy::option_option)]
    #[serde(rename = "permanently_hidden", default, deserialize_with = "present")]
    pub permanently_hidden: Option<Option<bool>>,
    /// Probe type, e.g. `temperature` or `energy`. Often empty.
    pub probe_type: String,
    /// User-assigned tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Telemetry and display fields; shape depends on the device type.
    pub metrics: Map<String, Value>,
    /// Creation time in seconds since the Unix epoch.
    #[serde(default)]
    pub creation_time: Option<Value>,
    /// Last update time in seconds since the Unix epoch.
    #[serde(default)]
    pub update_time: Option<Value>,
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
