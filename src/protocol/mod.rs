// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to a Z-Way controller.
//!
//! The library only ever issues blocking `GET` requests. The HTTP
//! machinery sits behind the [`Transport`] trait so that the session and
//! authentication mechanism can be swapped out:
//!
//! - [`HttpClient`]: reqwest-based transport with basic authentication
//!   (feature `http`, enabled by default)
//! - any custom [`Transport`] implementation
//!
//! A [`Session`] pairs a transport with the API prefix and knows the
//! endpoint layout of the Z-Way Automation API.

#[cfg(feature = "http")]
mod http;
mod session;

#[cfg(feature = "http")]
pub use http::{Credentials, HttpClient, HttpConfig};
pub use session::Session;

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{ParseError, ProtocolError};

/// Response body returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The raw JSON response body.
    body: String,
}

impl ApiResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// A blocking HTTP capability able to issue authenticated `GET` requests.
///
/// Implementations attach whatever credentials they hold to every request
/// and map non-success statuses to errors.
pub trait Transport: fmt::Debug + Send + Sync {
    /// Sends a `GET` request to `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the controller
    /// answers with a non-success status.
    fn get(&self, url: &str) -> Result<ApiResponse, ProtocolError>;
}
