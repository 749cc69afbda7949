// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authenticated session bound to one controller's API prefix.

use std::sync::Arc;

use crate::command::DeviceCommand;
use crate::error::Error;
use crate::protocol::Transport;
use crate::response::{DeviceList, DeviceRecord, Envelope};

/// A transport plus the API prefix of one controller.
///
/// Cloning a session is cheap; every [`Device`](crate::Device) created by
/// a controller holds a clone so it can refresh itself and send commands.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "http")]
/// # fn main() -> zway_lib::Result<()> {
/// use zway_lib::protocol::{HttpClient, Session};
///
/// let session = Session::new(HttpClient::new()?, "http://zway.local:8083");
/// assert_eq!(session.prefix(), "http://zway.local:8083/ZAutomation/api/v1");
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "http"))]
/// # fn main() {}
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    transport: Arc<dyn Transport>,
    prefix: String,
}

impl Session {
    /// Path of the Automation API below the controller's base URL.
    pub const API_PATH: &'static str = "/ZAutomation/api/v1";

    /// Creates a session for the controller at `base_url`.
    pub fn new(transport: impl Transport + 'static, base_url: &str) -> Self {
        Self::from_shared(Arc::new(transport), base_url)
    }

    /// Creates a session from an already shared transport.
    pub fn from_shared(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        let prefix = format!("{}{}", base_url.trim_end_matches('/'), Self::API_PATH);
        Self { transport, prefix }
    }

    /// Returns the API prefix all endpoint URLs are built from.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// URL of the device collection.
    #[must_use]
    pub fn devices_url(&self) -> String {
        format!("{}/devices", self.prefix)
    }

    /// URL of a single device.
    #[must_use]
    pub fn device_url(&self, device_id: &str) -> String {
        format!("{}/devices/{}", self.prefix, urlencoding::encode(device_id))
    }

    /// URL of a device command.
    #[must_use]
    pub fn command_url(&self, device_id: &str, command: &DeviceCommand) -> String {
        format!("{}/command/{}", self.device_url(device_id), command.path())
    }

    /// Fetches every device record, in server order and unfiltered.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is malformed.
    pub fn fetch_devices(&self) -> Result<Vec<DeviceRecord>, Error> {
        let response = self.transport.get(&self.devices_url())?;
        let envelope: Envelope<DeviceList> = response.parse()?;
        Ok(envelope.data.devices)
    }

    /// Fetches one device record.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response is malformed.
    pub fn fetch_device(&self, device_id: &str) -> Result<DeviceRecord, Error> {
        let response = self.transport.get(&self.device_url(device_id))?;
        let envelope: Envelope<DeviceRecord> = response.parse()?;
        Ok(envelope.data)
    }

    /// Sends a command to a device. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn send_command(&self, device_id: &str, command: &DeviceCommand) -> Result<(), Error> {
        tracing::debug!(device_id, command = %command, "Sending device command");
        self.transport.get(&self.command_url(device_id, command))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, ProtocolError};
    use crate::protocol::mock::MockTransport;
    use serde_json::json;

    const BASE: &str = "http://zway.local:8083";
    const PREFIX: &str = "http://zway.local:8083/ZAutomation/api/v1";

    #[test]
    fn prefix_is_appended_to_base_url() {
        let session = Session::new(MockTransport::new(), BASE);
        assert_eq!(session.prefix(), PREFIX);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let session = Session::new(MockTransport::new(), "http://zway.local:8083/");
        assert_eq!(session.prefix(), PREFIX);
    }

    #[test]
    fn endpoint_urls() {
        let session = Session::new(MockTransport::new(), BASE);
        assert_eq!(session.devices_url(), format!("{PREFIX}/devices"));
        assert_eq!(
            session.device_url("ZWayVDev_zway_2-0-37"),
            format!("{PREFIX}/devices/ZWayVDev_zway_2-0-37")
        );
        assert_eq!(
            session.command_url("ZWayVDev_zway_2-0-37", &DeviceCommand::Off),
            format!("{PREFIX}/devices/ZWayVDev_zway_2-0-37/command/off")
        );
        assert_eq!(
            session.command_url("ZWayVDev_zway_3-0-38", &DeviceCommand::Exact(50)),
            format!("{PREFIX}/devices/ZWayVDev_zway_3-0-38/command/exact?level=50")
        );
    }

    #[test]
    fn device_id_is_percent_encoded() {
        let session = Session::new(MockTransport::new(), BASE);
        assert_eq!(
            session.device_url("Remote 1/a"),
            format!("{PREFIX}/devices/Remote%201%2Fa")
        );
    }

    #[test]
    fn fetch_device_unwraps_envelope() {
        let transport = MockTransport::new();
        transport.route(
            &format!("{PREFIX}/devices/dev1"),
            json!({"data": {
                "id": "dev1", "deviceType": "sensorBinary", "visibility": true,
                "probeType": "door", "metrics": {"level": "on"}
            }}),
        );
        let session = Session::new(transport, BASE);

        let record = session.fetch_device("dev1").unwrap();
        assert_eq!(record.id, "dev1");
        assert_eq!(record.probe_type, "door");
    }

    #[test]
    fn fetch_devices_without_devices_key_fails() {
        let transport = MockTransport::new();
        transport.route(&format!("{PREFIX}/devices"), json!({"data": {}}));
        let session = Session::new(transport, BASE);

        let err = session.fetch_devices().unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }

    #[test]
    fn send_command_hits_command_endpoint() {
        let transport = MockTransport::new();
        transport.route(
            &format!("{PREFIX}/devices/dev1/command/on"),
            json!({"data": null, "code": 200}),
        );
        let session = Session::new(transport.clone(), BASE);

        session.send_command("dev1", &DeviceCommand::On).unwrap();
        assert_eq!(
            transport.requests(),
            [format!("{PREFIX}/devices/dev1/command/on")]
        );
    }

    #[test]
    fn transport_errors_propagate() {
        let session = Session::new(MockTransport::new(), BASE);
        let err = session.send_command("missing", &DeviceCommand::Off).unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::ConnectionFailed(_))
        ));
    }
}
