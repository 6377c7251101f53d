// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON:API document model.
//!
//! The types in this module mirror the wire format one to one:
//! - [`Document`] - top-level object (`links`, `data`, `included`, `errors`, `meta`)
//! - [`Data`] - one resource record with deferred (raw) attributes
//! - [`Relationship`] / [`RelationshipData`] - identity references between records
//! - [`Container`] - object-or-array union used by both `data` positions
//! - [`ErrorObject`] - flat error records

pub mod container;
pub mod error_object;

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::core::{JsonApiError, Result};
use crate::encoding::Encoder;

pub use container::{Container, ContainerElement};
pub use error_object::{ErrorLinks, ErrorObject, ErrorSource};

/// Link objects, passed through untouched.
pub type Links = serde_json::Map<String, serde_json::Value>;

/// Free-form metadata, passed through untouched.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// Primary data union.
pub type DataContainer = Container<Data>;

/// Relationship data union.
pub type RelationshipDataContainer = Container<RelationshipData>;

/// Top-level JSON:API document.
///
/// `data` and `errors` may both be present; the codec does not enforce their
/// mutual exclusion.
///
/// Decoding captures `data` members and attributes as raw spans, so only
/// `serde_json` deserializers are supported. Reading text or bytes
/// ([`Document::from_slice`], `serde_json::from_str`) keeps attributes
/// verbatim. `serde_json::from_value` re-serializes each span from the
/// `Value`, so numbers outside the `i64`/`u64`/`f64` range arrive already
/// rounded. Other serde formats fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Top-level links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Primary data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataContainer>,
    /// Side-loaded records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Data>,
    /// Error objects
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorObject>,
    /// Top-level metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Document {
    /// Create a document carrying primary data.
    pub fn with_data(data: impl Into<DataContainer>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }

    /// Create a document carrying errors only.
    pub fn with_errors(errors: Vec<ErrorObject>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// Parse a document from raw bytes.
    ///
    /// The whole payload is syntax-checked before any member is inspected,
    /// so truncated or malformed JSON always yields
    /// [`JsonApiError::Parse`] with the parser's own message.
    pub fn from_slice(payload: &[u8]) -> Result<Self> {
        serde_json::from_slice::<IgnoredAny>(payload)
            .map_err(|e| JsonApiError::parse(e.to_string()))?;

        serde_json::from_slice(payload).map_err(document_error)
    }

    /// Serialize with the default encoder settings.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Encoder::new().encode_document(self)
    }

    /// Iterate over every record in primary data and `included`.
    pub fn records(&self) -> impl Iterator<Item = &Data> {
        self.data
            .iter()
            .flat_map(|data| data.iter())
            .chain(self.included.iter())
    }
}

impl std::str::FromStr for Document {
    type Err = JsonApiError;

    fn from_str(payload: &str) -> Result<Self> {
        Self::from_slice(payload.as_bytes())
    }
}

/// Classify a `serde_json` error raised while reading a syntactically valid
/// document. Shape failures come through serde as custom data errors naming
/// their container; everything else is passed through as a parse error.
fn document_error(err: serde_json::Error) -> JsonApiError {
    let message = err.to_string();
    if err.is_data() {
        for context in [Data::CONTEXT, RelationshipData::CONTEXT] {
            if message.starts_with(&container::shape_message(context)) {
                return JsonApiError::shape(context);
            }
        }
    }
    JsonApiError::parse(message)
}

/// One resource record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Data {
    /// Type name, used to dispatch to a concrete resource type
    #[serde(rename = "type", default)]
    pub type_name: String,
    /// Record identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Undecoded attributes, handed to the target as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Box<RawValue>>,
    /// Named relationships
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
    /// Record links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Data {
    /// Create a record without attributes.
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// The attributes payload to decode, if any.
    ///
    /// An absent member and an explicit `null` are both treated as no
    /// attributes.
    pub fn attributes_payload(&self) -> Option<&RawValue> {
        self.attributes
            .as_deref()
            .filter(|raw| raw.get().trim() != "null")
    }
}

impl ContainerElement for Data {
    const CONTEXT: &'static str = "data";
}

/// A named reference from one record to others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Relationship links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Referenced identities, `None` when absent or `null`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipDataContainer>,
    /// Relationship metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Relationship {
    /// Identifiers referenced by this relationship, in document order.
    pub fn ids(&self) -> Vec<&str> {
        self.data
            .iter()
            .flat_map(|data| data.iter())
            .map(|reference| reference.id.as_str())
            .collect()
    }
}

/// Identity reference inside a relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipData {
    /// Referenced type name
    #[serde(rename = "type", default)]
    pub type_name: String,
    /// Referenced identifier
    #[serde(default)]
    pub id: String,
}

impl RelationshipData {
    /// Create a reference.
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }
}

impl ContainerElement for RelationshipData {
    const CONTEXT: &'static str = "relationship data";
}
