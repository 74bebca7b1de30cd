//! Roster Query API Library
//!
//! Dynamic, type-checked player searches over a players/teams schema:
//! optional-field filters composed into predicates, left-joined projections,
//! and pagination with either a combined or a separately optimized count.

pub mod domain;
pub mod infrastructure;
