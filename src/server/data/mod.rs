//! Database repository layer for all league records.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! record type. Repositories use SeaORM entity models internally and return domain models,
//! resolving parent display names for a whole result set with one `IN` query per parent
//! table (`names_by_ids`) instead of loading parents row by row.

pub mod event;
pub mod match_game;
pub mod player;
pub mod season;
pub mod team;
pub mod tournament;
pub mod user;

#[cfg(test)]
mod test;

use std::collections::BTreeSet;

/// Distinct non-null IDs from a column of optional foreign keys.
pub(crate) fn distinct_ids(ids: impl IntoIterator<Item = Option<i32>>) -> Vec<i32> {
    ids.into_iter()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
