// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller handle for one Z-Way hub.

use crate::device::{Device, create_device};
use crate::error::{Error, ParseError};
use crate::protocol::{Session, Transport};

#[cfg(feature = "http")]
use crate::protocol::HttpConfig;

/// One Z-Way controller and the devices fetched from it.
///
/// The device collection is the result of the most recent successful full
/// fetch. It is only ever replaced as a whole, never synced incrementally.
///
/// # Examples
///
/// ```no_run
/// use zway_lib::Controller;
///
/// # fn example() -> zway_lib::Result<()> {
/// let mut controller = Controller::new("http://192.168.1.10:8083", Some("admin"), Some("secret"))?;
///
/// for device in controller.tagged(Some("kitchen")) {
///     println!("{}: {:?}", device.id(), device.title());
/// }
///
/// controller.update()?;
/// if let Some(device) = controller.device("ZWayVDev_zway_2-0-37") {
///     println!("{:?}", device.binary_state());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Controller {
    session: Session,
    devices: Vec<Device>,
}

impl Controller {
    /// Connects to the controller at `base_url` with optional basic
    /// authentication and fetches all devices.
    ///
    /// Basic authentication is only sent when `username` is set. A
    /// `password` without a `username` is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created or the initial
    /// fetch fails.
    #[cfg(feature = "http")]
    pub fn new(
        base_url: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, Error> {
        let mut config = HttpConfig::new(base_url);
        if let Some(username) = username {
            config = config.with_credentials(username, password);
        }
        Self::connect(config)
    }

    /// Connects using a full [`HttpConfig`] and fetches all devices.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created or the initial
    /// fetch fails.
    #[cfg(feature = "http")]
    pub fn connect(config: HttpConfig) -> Result<Self, Error> {
        let base_url = config.base_url().to_string();
        let client = config.into_client()?;
        Self::with_transport(client, &base_url)
    }

    /// Connects through a custom transport and fetches all devices.
    ///
    /// # Errors
    ///
    /// Returns error if the initial fetch fails.
    pub fn with_transport(transport: impl Transport + 'static, base_url: &str) -> Result<Self, Error> {
        Self::from_session(Session::new(transport, base_url))
    }

    /// Wraps an existing session and fetches all devices.
    ///
    /// # Errors
    ///
    /// Returns error if the initial fetch fails.
    pub fn from_session(session: Session) -> Result<Self, Error> {
        let mut controller = Self {
            session,
            devices: Vec::new(),
        };
        controller.update()?;
        Ok(controller)
    }

    /// Re-fetches all devices and replaces the collection.
    ///
    /// On error the previous collection is kept.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch fails.
    pub fn update(&mut self) -> Result<(), Error> {
        self.devices = self.get_all_devices()?;
        tracing::debug!(count = self.devices.len(), "Device collection refreshed");
        Ok(())
    }

    /// Session used for every request.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Devices from the last fetch, in server order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Looks up a device from the last fetch. Never touches the network.
    #[must_use]
    pub fn device(&self, device_id: &str) -> Option<&Device> {
        self.devices.iter().find(|device| device.id() == device_id)
    }

    /// Mutable lookup, e.g. to [`update`](Device::update) a single device.
    #[must_use]
    pub fn device_mut(&mut self, device_id: &str) -> Option<&mut Device> {
        self.devices.iter_mut().find(|device| device.id() == device_id)
    }

    /// Devices from the last fetch carrying `tag`; all of them for `None`.
    pub fn tagged<'a>(&'a self, tag: Option<&'a str>) -> impl Iterator<Item = &'a Device> + 'a {
        self.devices.iter().filter(move |device| device.is_tagged(tag))
    }

    /// Fetches all devices that are neither permanently hidden nor
    /// invisible, in server order.
    ///
    /// Does not modify the stored collection.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the response is malformed, a
    /// record has no `permanently_hidden` key, or a record lacks a field its
    /// variant requires.
    pub fn get_all_devices(&self) -> Result<Vec<Device>, Error> {
        let mut devices = Vec::new();
        for record in self.session.fetch_devices()? {
            // null counts as not hidden; only an absent key is rejected
            let hidden = record
                .permanently_hidden
                .ok_or_else(|| ParseError::MissingField("permanently_hidden".to_string()))?
                .unwrap_or(false);
            if hidden || !record.visibility {
                tracing::debug!(
                    device_id = %record.id,
                    hidden,
                    visible = record.visibility,
                    "Skipping device"
                );
                continue;
            }
            devices.push(create_device(record, self.session.clone())?);
        }
        Ok(devices)
    }

    /// Fetches one device, whether hidden or not.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the record is malformed.
    pub fn get_device(&self, device_id: &str) -> Result<Device, Error> {
        let record = self.session.fetch_device(device_id)?;
        create_device(record, self.session.clone())
    }
}
