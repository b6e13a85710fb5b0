//! # Game Planner Core
//!
//! Core logic for planning board game sessions over a pre-loaded catalog.
//!
//! This crate provides a small textual query language for narrowing the
//! catalog on typed columns, a column-aware sort with deterministic
//! tie-breaking, and a curated game list that can be edited by index, name
//! or range and exported to a plain text file.

pub mod domain;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    column::{Column, FieldValue, ValueKind},
    filter::{Condition, Operator, Query, RejectedClause},
    game::BoardGame,
    game_list::{GameList, Selector},
    planner::{Planner, PlannerConfig},
    sorting::{sort_games, SortOrder},
};
pub use error::{PlannerError, Result};
pub use storage::Storage;
