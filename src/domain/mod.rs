pub mod column;
pub mod filter;
pub mod game;
pub mod game_list;
pub mod planner;
pub mod sorting;

pub use column::{Column, FieldValue, ValueKind};
pub use filter::{Condition, Operator, Query, RejectedClause};
pub use game::BoardGame;
pub use game_list::{GameList, Selector};
pub use planner::{Planner, PlannerConfig};
pub use sorting::{compare_games, sort_games, SortOrder};
