// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Z-Way device commands.
//!
//! Commands are sent as `GET {prefix}/devices/{id}/command/{path}` where the
//! path depends on the command:
//!
//! | Command | Path | Used by |
//! |---------|------|---------|
//! | [`DeviceCommand::On`] | `on` | binary switches |
//! | [`DeviceCommand::Off`] | `off` | binary switches |
//! | [`DeviceCommand::Exact`] | `exact?level={n}` | multilevel switches |
//!
//! # Examples
//!
//! ```
//! use zway_lib::command::DeviceCommand;
//!
//! assert_eq!(DeviceCommand::On.path(), "on");
//! assert_eq!(DeviceCommand::Exact(42).path(), "exact?level=42");
//! assert_eq!(DeviceCommand::turn_on_level(), DeviceCommand::Exact(255));
//! ```

use std::fmt;

/// A command understood by the Z-Way device command endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCommand {
    /// Switch a binary device on.
    On,
    /// Switch a binary device off.
    Off,
    /// Set a multilevel device to an exact level.
    Exact(u8),
}

impl DeviceCommand {
    /// Level Z-Way interprets as "on" for multilevel switches.
    pub const LEVEL_ON: u8 = 255;
    /// Level that switches a multilevel device off.
    pub const LEVEL_OFF: u8 = 0;

    /// Multilevel "on" command.
    #[must_use]
    pub const fn turn_on_level() -> Self {
        Self::Exact(Self::LEVEL_ON)
    }

    /// Multilevel "off" command.
    #[must_use]
    pub const fn turn_off_level() -> Self {
        Self::Exact(Self::LEVEL_OFF)
    }

    /// Returns the path appended to `/devices/{id}/command/`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::On => "on".to_string(),
            Self::Off => "off".to_string(),
            Self::Exact(level) => format!("exact?level={level}"),
        }
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
