// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for the Z-Way Automation API.
//!
//! Every API response wraps its payload in an envelope whose `data` field
//! holds the interesting part. The models here are consumed as-is: required
//! fields that are missing or have the wrong JSON type fail deserialization.

mod device;

pub use device::{DeviceList, DeviceRecord};

use serde::Deserialize;

/// The `{"data": ...}` envelope around every Z-Way API payload.
///
/// # Examples
///
/// ```
/// use zway_lib::response::{DeviceList, Envelope};
///
/// let json = r#"{"data": {"devices": []}, "code": 200, "message": "200 OK"}"#;
/// let envelope: Envelope<DeviceList> = serde_json::from_str(json).unwrap();
/// assert!(envelope.data.devices.is_empty());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub data: T,
}
