//! Input checks shared by the catalog services.
//!
//! Every check runs before the service opens a write transaction.

use std::collections::{HashMap, HashSet};

use crate::{error::validation::ValidationError, model::kind::EntityKind};

/// Width of every bounded text column in the catalog & users tables.
pub(crate) const MAX_TEXT_LEN: usize = 120;

/// Requires a present, non-blank text field and returns it.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    reject_blank(field, Some(value))?;

    Ok(value.to_string())
}

/// Rejects a text field that is present but blank. Absent fields are accepted.
pub(crate) fn reject_blank(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ValidationError::BlankField(field)),
        _ => Ok(()),
    }
}

/// Rejects any present text field longer than [`MAX_TEXT_LEN`] characters.
pub(crate) fn limit_lengths(fields: &[(&'static str, Option<&str>)]) -> Result<(), ValidationError> {
    for &(field, value) in fields {
        if value.is_some_and(|value| value.chars().count() > MAX_TEXT_LEN) {
            return Err(ValidationError::TooLong {
                field,
                max: MAX_TEXT_LEN,
            });
        }
    }

    Ok(())
}

/// Drops repeated IDs, keeping the first occurrence of each.
pub(crate) fn unique_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(ids.len());

    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Fails with every requested ID missing from `found`.
pub(crate) fn ensure_resolved(
    field: &'static str,
    kind: EntityKind,
    requested: &[i32],
    found: &HashMap<i32, String>,
) -> Result<(), ValidationError> {
    let missing: Vec<i32> = requested
        .iter()
        .copied()
        .filter(|id| !found.contains_key(id))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnresolvedReferences {
            field,
            kind,
            ids: missing,
        })
    }
}

/// Looks up `ids` in a name map, skipping any that are absent.
pub(crate) fn names_of(ids: impl IntoIterator<Item = i32>, names: &HashMap<i32, String>) -> Vec<String> {
    ids.into_iter()
        .filter_map(|id| names.get(&id).cloned())
        .collect()
}
