// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Merge-by-identity of incoming records into an existing collection.

use std::any::type_name;
use std::collections::HashSet;

use tracing::{debug, warn};

use super::decoder::decode_record;
use crate::core::{JsonApiError, Resource, Result, IDENTITY_CAPABILITY};
use crate::document::Data;

/// Reconcile `records` against `target`.
///
/// Works on a copy of `target` and swaps it in only after every record
/// decoded, so a failure leaves the caller's collection untouched.
pub(crate) fn reconcile<R>(records: &[Data], target: &mut Vec<R>) -> Result<()>
where
    R: Resource + Default + Clone,
{
    let mut working = target.clone();
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let mut updated = 0usize;
    let mut appended = 0usize;

    for record in records {
        if !seen.insert(record.id.as_str()) {
            warn!(
                id = %record.id,
                type_name = %record.type_name,
                "Duplicate identifier in collection payload, later record wins"
            );
        }

        match position_by_id(&working, &record.id)? {
            Some(index) => {
                decode_record(record, &mut working[index])?;
                updated += 1;
            }
            None => {
                let mut fresh = R::default();
                decode_record(record, &mut fresh)?;
                working.push(fresh);
                appended += 1;
            }
        }
    }

    debug!(
        records = records.len(),
        updated,
        appended,
        total = working.len(),
        "Reconciled collection"
    );

    *target = working;
    Ok(())
}

/// Index of the first element whose identifier equals `id`.
fn position_by_id<R: Resource>(elements: &[R], id: &str) -> Result<Option<usize>> {
    for (index, element) in elements.iter().enumerate() {
        let existing = element
            .resource_id()
            .ok_or_else(|| JsonApiError::missing_interface(IDENTITY_CAPABILITY, type_name::<R>()))?;
        if existing == id {
            return Ok(Some(index));
        }
    }
    Ok(None)
}
