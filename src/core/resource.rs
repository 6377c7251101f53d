// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The resource contract decode targets implement.
//!
//! A target type describes itself to the codec through [`Resource`]: which
//! type name it accepts, what its identifier is, how to store an identifier
//! and how to decode its attributes. The type-name and identity getters are
//! optional capabilities; returning `None` means the type does not expose
//! them and the codec fails with
//! [`JsonApiError::MissingInterface`](crate::JsonApiError::MissingInterface)
//! at the point where it needs them.

use serde_json::value::RawValue;

use super::error::Result;

/// Capability name reported when `resource_type` is not exposed.
pub const TYPE_NAME_CAPABILITY: &str = "resource type name";

/// Capability name reported when `resource_id` is not exposed.
pub const IDENTITY_CAPABILITY: &str = "resource identifier";

/// Capability name reported when a target cannot receive an identifier.
pub const SET_IDENTITY_CAPABILITY: &str = "resource identifier setter";

/// A resource type that JSON:API records can be decoded into.
///
/// # Example
///
/// ```
/// use jsonapi_codec::{attributes, Resource, Result};
/// use serde::Deserialize;
/// use serde_json::value::RawValue;
///
/// #[derive(Debug, Default, Clone)]
/// struct Article {
///     id: String,
///     title: String,
/// }
///
/// #[derive(Deserialize)]
/// struct ArticleAttributes {
///     title: Option<String>,
/// }
///
/// impl attributes::Patch<Article> for ArticleAttributes {
///     fn apply_to(self, article: &mut Article) {
///         if let Some(title) = self.title {
///             article.title = title;
///         }
///     }
/// }
///
/// impl Resource for Article {
///     fn resource_type(&self) -> Option<&str> {
///         Some("articles")
///     }
///
///     fn resource_id(&self) -> Option<&str> {
///         Some(&self.id)
///     }
///
///     fn set_resource_id(&mut self, id: &str) -> Result<()> {
///         self.id = id.to_string();
///         Ok(())
///     }
///
///     fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
///         attributes::patch::<ArticleAttributes, _>(self, raw)
///     }
/// }
/// ```
pub trait Resource {
    /// The JSON:API type name this resource accepts.
    ///
    /// Records whose `type` differs are rejected instead of being decoded
    /// into the wrong Rust type.
    fn resource_type(&self) -> Option<&str> {
        None
    }

    /// The identifier of this resource, used to match records against
    /// existing collection elements.
    fn resource_id(&self) -> Option<&str> {
        None
    }

    /// Store the identifier carried by the record envelope.
    fn set_resource_id(&mut self, id: &str) -> Result<()>;

    /// Decode a record's raw `attributes` object into `self`.
    ///
    /// Called only when the record carries attributes. Errors are returned
    /// to the caller unchanged.
    fn decode_attributes(&mut self, attributes: &RawValue) -> Result<()>;
}
