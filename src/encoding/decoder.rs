// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # JSON:API Decoder
//!
//! Projects a JSON:API document onto caller-owned resource values.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsonapi_codec::attributes::{self, Patch};
//! use jsonapi_codec::{unmarshal, Resource, Result};
//! use serde::Deserialize;
//! use serde_json::value::RawValue;
//!
//! #[derive(Debug, Default, Clone)]
//! struct Tag {
//!     id: String,
//!     label: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct TagAttributes {
//!     label: Option<String>,
//! }
//!
//! impl Patch<Tag> for TagAttributes {
//!     fn apply_to(self, tag: &mut Tag) {
//!         if let Some(label) = self.label {
//!             tag.label = label;
//!         }
//!     }
//! }
//!
//! impl Resource for Tag {
//!     fn resource_type(&self) -> Option<&str> {
//!         Some("tags")
//!     }
//!
//!     fn set_resource_id(&mut self, id: &str) -> Result<()> {
//!         self.id = id.to_string();
//!         Ok(())
//!     }
//!
//!     fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
//!         attributes::patch::<TagAttributes, _>(self, raw)
//!     }
//! }
//!
//! let mut tag = Tag::default();
//! unmarshal(br#"{"data":{"type":"tags","id":"7","attributes":{"label":"rust"}}}"#, &mut tag)?;
//! assert_eq!(tag.id, "7");
//! assert_eq!(tag.label, "rust");
//! # Ok(())
//! # }
//! ```

use std::any::type_name;

use tracing::debug;

use super::reconcile::reconcile;
use crate::core::{
    JsonApiError, Resource, Result, SET_IDENTITY_CAPABILITY, TYPE_NAME_CAPABILITY,
};
use crate::document::{Container, Data, DataContainer, Document};

/// Decode a single-record document into `target`.
///
/// Fails with [`JsonApiError::CollectionTypeMismatch`] when the document's
/// primary data is an array; use [`unmarshal_collection`] for those.
pub fn unmarshal<R: Resource>(payload: &[u8], target: &mut R) -> Result<()> {
    match primary_data(payload)? {
        Container::One(Some(record)) => decode_record(&record, target),
        Container::One(None) => Err(JsonApiError::EmptyDocument),
        Container::Many(_) => Err(JsonApiError::collection_mismatch(type_name::<R>())),
    }
}

/// Decode a collection document into `target`, reconciling by identifier.
///
/// Records whose `id` matches an element already in `target` update that
/// element in place; the rest are appended in document order. `target` is
/// only replaced once every record decoded successfully.
///
/// A single-object document cannot be decoded into a collection and fails
/// with [`JsonApiError::MissingInterface`].
pub fn unmarshal_collection<R>(payload: &[u8], target: &mut Vec<R>) -> Result<()>
where
    R: Resource + Default + Clone,
{
    match primary_data(payload)? {
        Container::Many(records) => reconcile(&records, target),
        Container::One(Some(_)) => Err(JsonApiError::missing_interface(
            SET_IDENTITY_CAPABILITY,
            type_name::<Vec<R>>(),
        )),
        Container::One(None) => Err(JsonApiError::EmptyDocument),
    }
}

/// Decode one record into one target.
///
/// Checks the record's type against the target's declared type, decodes the
/// attributes (absent or `null` attributes are skipped) and then assigns the
/// envelope identifier, so an `id` smuggled into the attributes never wins
/// over the envelope.
pub fn decode_record<R: Resource + ?Sized>(record: &Data, target: &mut R) -> Result<()> {
    if record.type_name.is_empty() {
        return Err(JsonApiError::MissingType);
    }

    let expected = target
        .resource_type()
        .ok_or_else(|| JsonApiError::missing_interface(TYPE_NAME_CAPABILITY, type_name::<R>()))?;
    if record.type_name != expected {
        return Err(JsonApiError::type_mismatch(&record.type_name, expected));
    }

    if let Some(attributes) = record.attributes_payload() {
        target.decode_attributes(attributes)?;
    }

    target.set_resource_id(&record.id)
}

/// Parse the payload and take its primary data.
fn primary_data(payload: &[u8]) -> Result<DataContainer> {
    let document = Document::from_slice(payload)?;
    let data = document.data.ok_or(JsonApiError::EmptyDocument)?;
    debug!(
        records = data.len(),
        collection = data.is_many(),
        "Parsed JSON:API document"
    );
    Ok(data)
}
