// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use jsonapi_codec::attributes::{self, Patch};
use jsonapi_codec::{JsonApiError, Resource, Result};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

// ============================================================================
// Resources
// ============================================================================

/// Plain resource with string and optional fields.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manbearpig {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub moo: String,
    #[serde(default)]
    pub zoo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foo_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoo_time: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct ManbearpigAttributes {
    moo: Option<String>,
    zoo: Option<String>,
    foo_time: Option<DateTime<Utc>>,
    zoo_time: Option<DateTime<Utc>>,
}

impl Patch<Manbearpig> for ManbearpigAttributes {
    fn apply_to(self, mbp: &mut Manbearpig) {
        if let Some(moo) = self.moo {
            mbp.moo = moo;
        }
        if let Some(zoo) = self.zoo {
            mbp.zoo = zoo;
        }
        if self.foo_time.is_some() {
            mbp.foo_time = self.foo_time;
        }
        if self.zoo_time.is_some() {
            mbp.zoo_time = self.zoo_time;
        }
    }
}

impl Manbearpig {
    pub fn new(id: &str, moo: &str, zoo: &str) -> Self {
        Self {
            id: id.to_string(),
            moo: moo.to_string(),
            zoo: zoo.to_string(),
            ..Self::default()
        }
    }
}

impl Resource for Manbearpig {
    fn resource_type(&self) -> Option<&str> {
        Some("manbearpigs")
    }

    fn resource_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn set_resource_id(&mut self, id: &str) -> Result<()> {
        self.id = id.to_string();
        Ok(())
    }

    fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
        attributes::patch::<ManbearpigAttributes, _>(self, raw)
    }
}

/// Resource whose attributes hold a nested array of other structs.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedManbearpigs {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub mbps: Vec<Manbearpig>,
}

impl Resource for NestedManbearpigs {
    fn resource_type(&self) -> Option<&str> {
        Some("nestedManbearpigs")
    }

    fn resource_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn set_resource_id(&mut self, id: &str) -> Result<()> {
        self.id = id.to_string();
        Ok(())
    }

    fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
        attributes::replace(self, raw)
    }
}

/// Declares no type name and no identifier.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FisherBoy {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub fish: String,
}

impl Resource for FisherBoy {
    fn set_resource_id(&mut self, id: &str) -> Result<()> {
        self.id = id.to_string();
        Ok(())
    }

    fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
        attributes::replace(self, raw)
    }
}

/// Minimal resource named `t` with one string attribute.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moo {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub moo: String,
}

#[derive(Deserialize)]
pub struct MooAttributes {
    moo: Option<String>,
}

impl Patch<Moo> for MooAttributes {
    fn apply_to(self, target: &mut Moo) {
        if let Some(moo) = self.moo {
            target.moo = moo;
        }
    }
}

impl Resource for Moo {
    fn resource_type(&self) -> Option<&str> {
        Some("t")
    }

    fn resource_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn set_resource_id(&mut self, id: &str) -> Result<()> {
        self.id = id.to_string();
        Ok(())
    }

    fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
        attributes::patch::<MooAttributes, _>(self, raw)
    }
}

/// Accepts only numeric identifiers.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(skip)]
    pub number: u64,
    #[serde(default)]
    pub subject: String,
}

#[derive(Deserialize)]
pub struct TicketAttributes {
    subject: Option<String>,
}

impl Patch<Ticket> for TicketAttributes {
    fn apply_to(self, ticket: &mut Ticket) {
        if let Some(subject) = self.subject {
            ticket.subject = subject;
        }
    }
}

impl Resource for Ticket {
    fn resource_type(&self) -> Option<&str> {
        Some("tickets")
    }

    fn set_resource_id(&mut self, id: &str) -> Result<()> {
        self.number = id
            .parse()
            .map_err(|e: std::num::ParseIntError| JsonApiError::identity(id, e.to_string()))?;
        Ok(())
    }

    fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
        attributes::patch::<TicketAttributes, _>(self, raw)
    }
}

/// Carries state that never travels on the wire, plus a counter wider
/// than `u64`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cached {
    #[serde(skip)]
    pub id: String,
    #[serde(skip)]
    pub local_note: String,
    #[serde(default)]
    pub moo: String,
    #[serde(default)]
    pub hits: u128,
}

#[derive(Deserialize)]
pub struct CachedAttributes {
    moo: Option<String>,
    hits: Option<u128>,
}

impl Patch<Cached> for CachedAttributes {
    fn apply_to(self, cached: &mut Cached) {
        if let Some(moo) = self.moo {
            cached.moo = moo;
        }
        if let Some(hits) = self.hits {
            cached.hits = hits;
        }
    }
}

impl Resource for Cached {
    fn resource_type(&self) -> Option<&str> {
        Some("cached")
    }

    fn resource_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn set_resource_id(&mut self, id: &str) -> Result<()> {
        self.id = id.to_string();
        Ok(())
    }

    fn decode_attributes(&mut self, raw: &RawValue) -> Result<()> {
        attributes::patch::<CachedAttributes, _>(self, raw)
    }
}

// ============================================================================
// Payloads
// ============================================================================

pub const SINGLE: &str = r#"
    {
        "data": {
            "id": "1",
            "type": "manbearpigs",
            "attributes": {
                "moo": "Manbearpig",
                "zoo": "Pigglywiggly",
                "foo_time": "2014-11-10T16:30:48.823Z"
            }
        }
    }
"#;

pub const COLLECTION: &str = r#"
    {
        "data": [
            {
                "id": "1",
                "type": "manbearpigs",
                "attributes": {
                    "moo": "Manbearpig",
                    "zoo": "Pigglywiggly",
                    "foo_time": "2014-11-10T16:30:48.823Z"
                }
            },
            {
                "id": "2",
                "type": "manbearpigs",
                "attributes": {
                    "moo": "Man bear pig",
                    "zoo": "Piggly wiggly",
                    "foo_time": "2014-11-10T16:30:48.823Z",
                    "zoo_time": "2014-11-10T16:30:48.823Z"
                }
            }
        ]
    }
"#;

pub fn timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2014-11-10T16:30:48.823Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn mbp1() -> Manbearpig {
    Manbearpig {
        foo_time: Some(timestamp()),
        ..Manbearpig::new("1", "Manbearpig", "Pigglywiggly")
    }
}

pub fn mbp2() -> Manbearpig {
    Manbearpig {
        foo_time: Some(timestamp()),
        zoo_time: Some(timestamp()),
        ..Manbearpig::new("2", "Man bear pig", "Piggly wiggly")
    }
}
