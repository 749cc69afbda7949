// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types read from Z-Way device records.
//!
//! # Types
//!
//! - [`DeviceType`] - The `deviceType` discriminator
//! - [`BinaryState`] - On/Off/Unknown state of binary devices
//! - [`Level`] - Untyped `metrics.level` of multilevel devices

mod binary_state;
mod device_type;
mod level;

pub use binary_state::BinaryState;
pub use device_type::DeviceType;
pub use level::Level;
