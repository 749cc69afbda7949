// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ZWay` Lib - A Rust library for the Z-Way Automation API.
//!
//! This library models the virtual devices a Z-Way home-automation
//! controller exposes over its REST API, and lets you read and command
//! them. All calls are blocking `GET` requests with basic authentication.
//!
//! # Supported Device Types
//!
//! | `deviceType` | Model | Capabilities |
//! |--------------|-------|--------------|
//! | `switchBinary` | [`SwitchBinary`] | on/off state, turn on/off |
//! | `sensorBinary` | [`SensorBinary`] | on/off state |
//! | `switchMultilevel` | [`SwitchMultilevel`] | level, set level, turn on/off |
//! | `sensorMultilevel`, `battery` | [`SensorMultilevel`] | level, unit |
//! | anything else | generic [`Device`] | common attributes only |
//!
//! # Quick Start
//!
//! ```no_run
//! use zway_lib::{BinaryDevice, Controller};
//!
//! fn main() -> zway_lib::Result<()> {
//!     // Connecting fetches every visible device
//!     let mut controller =
//!         Controller::new("http://192.168.1.10:8083", Some("admin"), Some("secret"))?;
//!
//!     if let Some(switch) = controller
//!         .device("ZWayVDev_zway_2-0-37")
//!         .and_then(|device| device.as_switch_binary())
//!     {
//!         if switch.is_on() == Some(false) {
//!             switch.turn_on()?;
//!         }
//!     }
//!
//!     // Commands do not change local state; refresh to observe it
//!     controller.update()?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom Transport
//!
//! The HTTP layer is a [`Transport`](protocol::Transport). Disable the
//! default `http` feature and pass your own implementation to
//! [`Controller::with_transport`] to use a different HTTP stack.

pub mod command;
mod controller;
pub mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::DeviceCommand;
pub use controller::Controller;
pub use device::{
    BinaryDevice, Device, DeviceClass, DeviceKind, MultilevelDevice, SensorBinary,
    SensorMultilevel, Snapshot, SwitchBinary, SwitchMultilevel, create_device,
};
pub use error::{Error, ParseError, ProtocolError, Result};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{Session, Transport};
pub use types::{BinaryState, DeviceType, Level};
