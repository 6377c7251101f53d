// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON:API error objects.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type name reported for error objects.
pub const ERROR_TYPE_NAME: &str = "error";

/// One entry of a document's `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Identifier of this occurrence; filled with a UUID on encode when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Links for this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ErrorLinks>,
    /// HTTP status code, as a string
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// Application-specific error code
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Short summary
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Explanation specific to this occurrence
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
    /// Reference to the offending part of the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    /// Free-form metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// Links attached to an error object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLinks {
    /// URL with further details about this occurrence
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub about: String,
}

/// Source reference of an error object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON Pointer into the request document
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pointer: String,
    /// Query parameter that caused the error
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parameter: String,
}

impl ErrorObject {
    /// Create an error object with a status and title.
    pub fn new(status: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// The identifier, or a freshly generated one when none is set.
    ///
    /// A generated value is not stored; each call returns a new one.
    pub fn resource_id(&self) -> Cow<'_, str> {
        if self.id.is_empty() {
            Cow::Owned(Uuid::new_v4().to_string())
        } else {
            Cow::Borrowed(&self.id)
        }
    }

    /// Type name of error objects.
    pub fn resource_type(&self) -> &'static str {
        ERROR_TYPE_NAME
    }

    /// Store a generated identifier if none is set.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }
}
