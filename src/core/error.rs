// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for jsonapi-codec.
//!
//! Every failure of a decode or encode call is reported as a [`JsonApiError`]
//! value. Nothing is retried or logged by the codec itself.

use thiserror::Error;

/// Message of every shape error, whatever member it was found in.
pub const SHAPE_MESSAGE: &str = "invalid data: neither object nor array";

/// Errors that can occur while decoding or encoding JSON:API documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonApiError {
    /// A data or relationship-data member starts with something other than `{` or `[`
    #[error("invalid data: neither object nor array")]
    Shape {
        /// Where the bad member was found ("data", "relationship data", ...)
        context: String,
    },

    /// Invalid JSON; the message comes straight from the parser
    #[error("{message}")]
    Parse {
        /// Parser message
        message: String,
    },

    /// The document has no primary data at all
    #[error("Document JSON did not satisfy the required shape: no primary data present")]
    EmptyDocument,

    /// The target does not expose a capability the decoder needs
    #[error("target {target} does not expose the {capability} capability")]
    MissingInterface {
        /// Name of the missing capability
        capability: String,
        /// Rust type name of the target
        target: String,
    },

    /// An incoming record has an empty type name
    #[error("invalid record, no type was specified")]
    MissingType,

    /// The record type disagrees with the target's declared type
    #[error("type {incoming} in JSON does not match target type {expected}")]
    TypeMismatch {
        /// Type name carried by the payload
        incoming: String,
        /// Type name declared by the target
        expected: String,
    },

    /// The document carries an array but the target is not a collection
    #[error("cannot decode array into non-collection target {target}")]
    CollectionTypeMismatch {
        /// Rust type name of the target
        target: String,
    },

    /// The target's own attribute decoding failed
    #[error("{message}")]
    AttributeDecode {
        /// Type name of the record being decoded
        type_name: String,
        /// Message from the target's decoder
        message: String,
    },

    /// The target rejected the identifier assigned to it
    #[error("{message}")]
    IdentitySet {
        /// Identifier that was rejected
        id: String,
        /// Message from the target
        message: String,
    },

    /// Serializing a document failed
    #[error("encode error: {message}")]
    Encode {
        /// Serializer message
        message: String,
    },
}

impl JsonApiError {
    /// Create a shape error.
    pub fn shape(context: impl Into<String>) -> Self {
        JsonApiError::Shape {
            context: context.into(),
        }
    }

    /// Create a parse error from a parser message.
    pub fn parse(message: impl Into<String>) -> Self {
        JsonApiError::Parse {
            message: message.into(),
        }
    }

    /// Create a missing capability error.
    pub fn missing_interface(capability: impl Into<String>, target: impl Into<String>) -> Self {
        JsonApiError::MissingInterface {
            capability: capability.into(),
            target: target.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(incoming: impl Into<String>, expected: impl Into<String>) -> Self {
        JsonApiError::TypeMismatch {
            incoming: incoming.into(),
            expected: expected.into(),
        }
    }

    /// Create a collection mismatch error.
    pub fn collection_mismatch(target: impl Into<String>) -> Self {
        JsonApiError::CollectionTypeMismatch {
            target: target.into(),
        }
    }

    /// Create an attribute decode error.
    pub fn attributes(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        JsonApiError::AttributeDecode {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create an identity assignment error.
    ///
    /// Intended for [`Resource::set_resource_id`](crate::Resource::set_resource_id)
    /// implementations that validate identifiers.
    pub fn identity(id: impl Into<String>, message: impl Into<String>) -> Self {
        JsonApiError::IdentitySet {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(message: impl Into<String>) -> Self {
        JsonApiError::Encode {
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            JsonApiError::Shape { context } => vec![("context", context.clone())],
            JsonApiError::Parse { message } => vec![("message", message.clone())],
            JsonApiError::EmptyDocument => Vec::new(),
            JsonApiError::MissingInterface { capability, target } => vec![
                ("capability", capability.clone()),
                ("target", target.clone()),
            ],
            JsonApiError::MissingType => Vec::new(),
            JsonApiError::TypeMismatch { incoming, expected } => vec![
                ("incoming", incoming.clone()),
                ("expected", expected.clone()),
            ],
            JsonApiError::CollectionTypeMismatch { target } => vec![("target", target.clone())],
            JsonApiError::AttributeDecode { type_name, message } => {
                vec![("type", type_name.clone()), ("message", message.clone())]
            }
            JsonApiError::IdentitySet { id, message } => {
                vec![("id", id.clone()), ("message", message.clone())]
            }
            JsonApiError::Encode { message } => vec![("message", message.clone())],
        }
    }
}

/// Result type for jsonapi-codec operations.
pub type Result<T> = std::result::Result<T, JsonApiError>;
