// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable device snapshot.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::device::{DeviceClass, DeviceKind};
use crate::error::ParseError;
use crate::response::DeviceRecord;
use crate::types::DeviceType;

/// Everything known about a device as of its most recent fetch.
///
/// A snapshot is built in one go from a [`DeviceRecord`] and never
/// modified afterwards; refreshing a device replaces the whole snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    title: Option<String>,
    visible: bool,
    device_type: DeviceType,
    probe_type: String,
    tags: Option<Vec<String>>,
    metrics: Map<String, Value>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    kind: DeviceKind,
}

impl Snapshot {
    /// Builds a snapshot of `record` modelled as `class`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the metrics lack a field `class` requires.
    pub fn from_record(record: DeviceRecord, class: DeviceClass) -> Result<Self, ParseError> {
        let kind = DeviceKind::parse(class, &record.metrics)?;
        let title = record
            .metrics
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            title,
            visible: record.visibility,
            device_type: record.device_type,
            probe_type: record.probe_type,
            tags: record.tags,
            created_at: timestamp(record.creation_time.as_ref()),
            updated_at: timestamp(record.update_time.as_ref()),
            metrics: record.metrics,
            kind,
        })
    }

    /// Display title (`metrics.title`).
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether the device is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Declared device type.
    #[must_use]
    pub const fn device_type(&self) -> &DeviceType {
        &self.device_type
    }

    /// Probe type, possibly empty.
    #[must_use]
    pub fn probe_type(&self) -> &str {
        &self.probe_type
    }

    /// Tags, or an empty slice when the record had none.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Returns `true` if `tag` is one of the device's tags. With no tag,
    /// every device matches.
    #[must_use]
    pub fn is_tagged(&self, tag: Option<&str>) -> bool {
        tag.is_none_or(|tag| self.tags().iter().any(|t| t == tag))
    }

    /// All metrics as sent by the controller.
    #[must_use]
    pub const fn metrics(&self) -> &Map<String, Value> {
        &self.metrics
    }

    /// Creation time, when the controller reports one.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Last update time, when the controller reports one.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Variant-specific data.
    #[must_use]
    pub const fn kind(&self) -> &DeviceKind {
        &self.kind
    }
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value
        .and_then(Value::as_i64)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
