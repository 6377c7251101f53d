// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # jsonapi-codec
//!
//! Codec between JSON:API documents and caller-defined resource types.
//!
//! JSON:API `data` members (top-level and inside relationships) may be a
//! single object or an array of objects. This library models that union
//! explicitly and decodes documents onto types implementing [`Resource`]:
//! - **Document model** in [`document`] - [`Document`], [`Data`], [`Container`]
//! - **Decoding** in [`encoding::decoder`] - type-checked decode into one target
//!   or merge-by-identity into a collection
//! - **Encoding** in [`encoding::encoder`] - [`Encoder`] and [`marshal`]
//!
//! ## Example: Reconciling a collection
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jsonapi_codec::attributes::{self, Patch};
//! use jsonapi_codec::{unmarshal_collection, Resource, Result};
//! use serde::Deserialize;
//! use serde_json::value::RawValue;
//!
//! #[derive(Debug, Default, Clone)]
//! struct Task {
//!     id: String,
//!     done: bool,
//! }
//!
//! #[derive(Deserialize)]
//! struct TaskAttributes {
//!     done: Option<bool>,
//! }
//!
//! impl Patch<Task> for TaskAttributes {
//!     fn apply_to(self, task: &mut Task) {
//!         if let Some(done) = self.done {
//!             task.done = done;
//!         }
//!     }
//! }
//!
//! impl Resource for Task {
//!     fn resource_type(&self) -> Option<&str> {
//!         Some("tasks")
//!     }
//!
//!     fn resource_id(&self) -> Option<&str> {
//!         Some(&self.id)
//!     }
//!
//!     fn set_resource_id(&mut self, id: &str) -> Result<()> {
//!         self.id = id.to_string();
//!         Ok(())
//!     }
//!
//!     fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
//!         attributes::patch::<TaskAttributes, _>(self, raw)
//!     }
//! }
//!
//! let mut tasks = vec![Task { id: "1".into(), done: false }];
//! let payload = br#"{"data":[
//!     {"type":"tasks","id":"1","attributes":{"done":true}},
//!     {"type":"tasks","id":"2","attributes":{}}
//! ]}"#;
//! unmarshal_collection(payload, &mut tasks)?;
//! assert_eq!(tasks.len(), 2);
//! assert!(tasks[0].done);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use crate::core::{JsonApiError, Resource, Result};

// Wire model
pub mod document;

pub use document::{
    Container, ContainerElement, Data, DataContainer, Document, ErrorLinks, ErrorObject,
    ErrorSource, Links, Meta, Relationship, RelationshipData, RelationshipDataContainer,
};

// Encoding/decoding
pub mod encoding;

pub use encoding::attributes;
pub use encoding::{
    decode_record, marshal, marshal_collection, to_record, unmarshal, unmarshal_collection,
    Encoder, EncoderConfig,
};
