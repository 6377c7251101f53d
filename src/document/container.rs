// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Object-or-array union used for `data` members.
//!
//! JSON:API lets primary data and relationship data be either a single object
//! or an array of objects, with nothing but the bracket to tell them apart.
//! [`Container`] makes that choice explicit: decoding peeks at the first
//! significant byte and dispatches on it, encoding writes back whichever
//! variant is held.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::core::{JsonApiError, Result, SHAPE_MESSAGE};

/// Record types that can sit inside a [`Container`].
pub trait ContainerElement: DeserializeOwned {
    /// Where containers of this element appear, reported by shape errors.
    const CONTEXT: &'static str;
}

/// Serde message carried by a shape failure in `context`.
pub(crate) fn shape_message(context: &str) -> String {
    format!("{SHAPE_MESSAGE} in {context}")
}

/// Failure while decoding a captured span.
enum SpanError {
    Shape,
    Json(serde_json::Error),
}

/// Either a single record or a sequence of records.
#[derive(Debug, Clone, PartialEq)]
pub enum Container<T> {
    /// Single record. `None` encodes as JSON `null`.
    One(Option<T>),
    /// Sequence of records, possibly empty. Always encodes as an array.
    Many(Vec<T>),
}

impl<T> Container<T> {
    /// Wrap a single record.
    pub fn one(value: T) -> Self {
        Container::One(Some(value))
    }

    /// Wrap a sequence of records.
    pub fn many(values: Vec<T>) -> Self {
        Container::Many(values)
    }

    /// Explicit "no data" (encodes as `null`).
    pub fn none() -> Self {
        Container::One(None)
    }

    /// Check if this holds the sequence variant.
    pub fn is_many(&self) -> bool {
        matches!(self, Container::Many(_))
    }

    /// The single record, if this holds one.
    pub fn as_one(&self) -> Option<&T> {
        match self {
            Container::One(value) => value.as_ref(),
            Container::Many(_) => None,
        }
    }

    /// The record sequence, if this holds one.
    pub fn as_many(&self) -> Option<&[T]> {
        match self {
            Container::One(_) => None,
            Container::Many(values) => Some(values),
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        match self {
            Container::One(value) => usize::from(value.is_some()),
            Container::Many(values) => values.len(),
        }
    }

    /// Check if no record is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over held records regardless of shape.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Container::One(value) => value.as_slice().iter(),
            Container::Many(values) => values.iter(),
        }
    }

    /// Consume into a vector regardless of shape.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Container::One(value) => value.into_iter().collect(),
            Container::Many(values) => values,
        }
    }
}

impl<T: ContainerElement> Container<T> {
    /// Decode a raw JSON value by its first significant byte.
    ///
    /// `{` selects [`Container::One`], `[` selects [`Container::Many`].
    /// Anything else, including empty input, is a shape error naming
    /// [`ContainerElement::CONTEXT`].
    pub fn from_raw_json(json: &str) -> Result<Self> {
        Self::dispatch(json).map_err(|e| match e {
            SpanError::Shape => JsonApiError::shape(T::CONTEXT),
            SpanError::Json(e) => JsonApiError::parse(e.to_string()),
        })
    }

    fn dispatch(json: &str) -> std::result::Result<Self, SpanError> {
        match json.trim_start().as_bytes().first() {
            Some(b'{') => serde_json::from_str(json)
                .map(Container::one)
                .map_err(SpanError::Json),
            Some(b'[') => serde_json::from_str(json)
                .map(Container::Many)
                .map_err(SpanError::Json),
            _ => Err(SpanError::Shape),
        }
    }
}

/// Message of an error raised inside a captured span, without the span's
/// own position. The enclosing deserializer attaches the outer one.
fn without_position(err: &serde_json::Error) -> String {
    let message = err.to_string();
    let position = format!(" at line {} column {}", err.line(), err.column());
    match message.strip_suffix(&position) {
        Some(stripped) => stripped.to_string(),
        None => message,
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Container::One(None)
    }
}

impl<T> From<T> for Container<T> {
    fn from(value: T) -> Self {
        Container::one(value)
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(values: Vec<T>) -> Self {
        Container::Many(values)
    }
}

impl<T: Serialize> Serialize for Container<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // An empty sequence must stay `[]`, never collapse to `null`.
        match self {
            Container::Many(values) => values.serialize(serializer),
            Container::One(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: ContainerElement> Deserialize<'de> for Container<T> {
    /// The member is first captured as a raw span, so only `serde_json`
    /// deserializers are supported; see [`Document`](crate::Document).
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Container::dispatch(raw.get()).map_err(|e| match e {
            SpanError::Shape => de::Error::custom(shape_message(T::CONTEXT)),
            SpanError::Json(e) => de::Error::custom(without_position(&e)),
        })
    }
}
