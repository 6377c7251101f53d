// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # JSON:API Encoder
//!
//! Serializes documents and builds them from resource values.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsonapi_codec::{Document, Encoder, ErrorObject};
//!
//! let encoder = Encoder::new().pretty(false).generate_error_ids(false);
//! let document = Document::with_errors(vec![ErrorObject::new("404", "Not Found")]);
//! let encoded = encoder.encode_document(&document)?;
//! assert_eq!(encoded, br#"{"errors":[{"status":"404","title":"Not Found"}]}"#);
//! # Ok(())
//! # }
//! ```

use std::any::type_name;
use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use crate::core::{JsonApiError, Resource, Result, IDENTITY_CAPABILITY, TYPE_NAME_CAPABILITY};
use crate::document::{Container, Data, Document};

/// Configuration for encoding documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Pretty-print the output
    pub pretty: bool,
    /// Fill empty error object ids with generated identifiers
    pub generate_error_ids: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            generate_error_ids: true,
        }
    }
}

/// JSON:API document encoder.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder from an explicit configuration.
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Set pretty printing.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Set whether empty error ids are generated.
    pub fn generate_error_ids(mut self, generate: bool) -> Self {
        self.config.generate_error_ids = generate;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Serialize a document.
    ///
    /// The sequence variant of a container is always written as an array,
    /// so an empty collection stays `[]` instead of becoming `null`.
    pub fn encode_document(&self, document: &Document) -> Result<Vec<u8>> {
        let document = self.with_error_ids(document);

        let encoded = if self.config.pretty {
            serde_json::to_vec_pretty(document.as_ref())
        } else {
            serde_json::to_vec(document.as_ref())
        }
        .map_err(|e| JsonApiError::encode(e.to_string()))?;

        debug!(
            records = document.data.as_ref().map_or(0, |data| data.len()),
            errors = document.errors.len(),
            bytes = encoded.len(),
            "Encoded JSON:API document"
        );
        Ok(encoded)
    }

    /// Encode one resource as primary data.
    pub fn marshal<R: Resource + Serialize>(&self, resource: &R) -> Result<Vec<u8>> {
        let record = to_record(resource)?;
        self.encode_document(&Document::with_data(Container::one(record)))
    }

    /// Encode resources as an array of primary data, even when empty.
    pub fn marshal_collection<R: Resource + Serialize>(&self, resources: &[R]) -> Result<Vec<u8>> {
        let records = resources.iter().map(to_record).collect::<Result<Vec<_>>>()?;
        self.encode_document(&Document::with_data(Container::many(records)))
    }

    fn with_error_ids<'a>(&self, document: &'a Document) -> Cow<'a, Document> {
        if !self.config.generate_error_ids || document.errors.iter().all(|e| !e.id.is_empty()) {
            return Cow::Borrowed(document);
        }

        let mut filled = document.clone();
        for error in &mut filled.errors {
            error.ensure_id();
        }
        Cow::Owned(filled)
    }
}

/// Build a record from a resource.
///
/// The resource's serde representation becomes the `attributes` member, so
/// identifier fields should be excluded with `#[serde(skip)]`.
pub fn to_record<R: Resource + Serialize>(resource: &R) -> Result<Data> {
    let type_name_value = resource
        .resource_type()
        .ok_or_else(|| JsonApiError::missing_interface(TYPE_NAME_CAPABILITY, type_name::<R>()))?;
    let id = resource
        .resource_id()
        .ok_or_else(|| JsonApiError::missing_interface(IDENTITY_CAPABILITY, type_name::<R>()))?;
    let attributes =
        serde_json::value::to_raw_value(resource).map_err(|e| JsonApiError::encode(e.to_string()))?;

    Ok(Data {
        attributes: Some(attributes),
        ..Data::new(type_name_value, id)
    })
}

/// Encode one resource with default settings.
pub fn marshal<R: Resource + Serialize>(resource: &R) -> Result<Vec<u8>> {
    Encoder::new().marshal(resource)
}

/// Encode a resource collection with default settings.
pub fn marshal_collection<R: Resource + Serialize>(resources: &[R]) -> Result<Vec<u8>> {
    Encoder::new().marshal_collection(resources)
}
