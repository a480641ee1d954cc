//! Parent references inlined into league records.

use std::collections::HashMap;

/// Identity and display name of a parent record, e.g. the team a player belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub id: i32,
    pub name: String,
}

impl ParentRef {
    /// Splits an optional reference into the `(id, name)` pair carried by DTOs.
    pub fn into_parts(parent: Option<ParentRef>) -> (Option<i32>, Option<String>) {
        match parent {
            Some(parent) => (Some(parent.id), Some(parent.name)),
            None => (None, None),
        }
    }
}

/// Display names of every parent referenced by a batch of records.
///
/// Loaded eagerly by the repositories with one `IN` query per parent table, then consulted
/// while converting each entity into its domain model.
#[derive(Debug, Default)]
pub struct ParentNames {
    pub tournaments: HashMap<i32, String>,
    pub seasons: HashMap<i32, String>,
    pub teams: HashMap<i32, String>,
    pub players: HashMap<i32, String>,
}

impl ParentNames {
    pub fn tournament(&self, id: Option<i32>) -> Option<ParentRef> {
        lookup(&self.tournaments, id)
    }

    pub fn season(&self, id: Option<i32>) -> Option<ParentRef> {
        lookup(&self.seasons, id)
    }

    pub fn team(&self, id: Option<i32>) -> Option<ParentRef> {
        lookup(&self.teams, id)
    }

    pub fn player(&self, id: Option<i32>) -> Option<ParentRef> {
        lookup(&self.players, id)
    }
}

fn lookup(names: &HashMap<i32, String>, id: Option<i32>) -> Option<ParentRef> {
    let id = id?;
    names.get(&id).map(|name| ParentRef {
        id,
        name: name.clone(),
    })
}

/// Rejects blank names with a 400 error naming the offending field.
pub(crate) fn require_name(
    field: &str,
    value: String,
) -> Result<String, crate::server::error::AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::server::error::AppError::BadRequest(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(trimmed.to_string())
}
