// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout jsonapi-codec.
//!
//! This module provides the foundational types for the library:
//! - [`JsonApiError`] - Error taxonomy for decode and encode calls
//! - [`Resource`] - Contract implemented by decode targets

pub mod error;
pub mod resource;

pub use error::{JsonApiError, Result, SHAPE_MESSAGE};
pub use resource::{
    Resource, IDENTITY_CAPABILITY, SET_IDENTITY_CAPABILITY, TYPE_NAME_CAPABILITY,
};
