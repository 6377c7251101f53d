// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON:API encoding and decoding.
//!
//! - [`decoder`] - document-to-resource decoding and type checks
//! - `reconcile` - merge-by-identity for collection targets
//! - [`attributes`] - attribute decoders for serde types
//! - [`encoder`] - document serialization and resource-to-record building

pub mod attributes;
pub mod decoder;
pub mod encoder;
mod reconcile;

pub use decoder::{decode_record, unmarshal, unmarshal_collection};
pub use encoder::{marshal, marshal_collection, to_record, Encoder, EncoderConfig};
