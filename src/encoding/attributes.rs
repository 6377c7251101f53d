// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Ready-made attribute decoders for serde types.
//!
//! [`Resource::decode_attributes`](crate::Resource::decode_attributes) is the
//! target's own business; these helpers cover the two common cases. Both hand
//! the raw span straight to a typed deserializer, so field types control
//! number precision and formats.

use std::any::type_name;

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::core::{JsonApiError, Result};

/// A partial set of attributes that can be applied onto a resource.
///
/// Typically a struct of `Option` fields mirroring the resource's
/// attributes; `apply_to` writes only the members the payload carried.
pub trait Patch<T: ?Sized> {
    /// Write the carried members into `target`.
    fn apply_to(self, target: &mut T);
}

/// Decode `attributes` as a patch `P` and apply it to `target`.
///
/// Fields of `target` the patch does not touch keep their values, including
/// fields that are not attributes at all.
pub fn patch<P, T>(target: &mut T, attributes: &RawValue) -> Result<()>
where
    P: DeserializeOwned + Patch<T>,
    T: ?Sized,
{
    let patch: P = serde_json::from_str(attributes.get())
        .map_err(|e| JsonApiError::attributes(type_name::<T>(), e.to_string()))?;
    patch.apply_to(target);
    Ok(())
}

/// Decode `attributes` as a complete replacement of `target`.
///
/// Fields missing from the payload follow `T`'s serde rules (error or
/// default).
pub fn replace<T: DeserializeOwned>(target: &mut T, attributes: &RawValue) -> Result<()> {
    *target = serde_json::from_str(attributes.get())
        .map_err(|e| JsonApiError::attributes(type_name::<T>(), e.to_string()))?;
    Ok(())
}
