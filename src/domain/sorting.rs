use crate::domain::column::{Column, FieldValue};
use crate::domain::game::BoardGame;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Compares two strings ignoring case, without allocating
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compares two games on a column
///
/// The column comparison is followed by a case-insensitive name comparison,
/// and the direction is applied to that combined ordering. Games with equal
/// primary keys therefore appear in reverse name order when descending.
/// `id` is not a sort axis, so it orders by name alone.
pub fn compare_games(a: &BoardGame, b: &BoardGame, column: Column, order: SortOrder) -> Ordering {
    let combined = compare_column(a, b, column)
        .then_with(|| compare_ignore_case(a.name(), b.name()));
    order.apply(combined)
}

fn compare_column(a: &BoardGame, b: &BoardGame, column: Column) -> Ordering {
    if !column.is_queryable() {
        return Ordering::Equal;
    }

    match (column.value_of(a), column.value_of(b)) {
        (FieldValue::Text(x), FieldValue::Text(y)) => compare_ignore_case(x, y),
        (FieldValue::Integer(x), FieldValue::Integer(y)) => x.cmp(&y),
        (FieldValue::Float(x), FieldValue::Float(y)) => x.total_cmp(&y),
        // A column always yields one kind of value
        _ => Ordering::Equal,
    }
}

/// Main sorting function for games
///
/// Sorts a slice of games in-place based on the specified column and order.
///
/// # Examples
/// ```
/// use game_planner_core::domain::sorting::{sort_games, SortOrder};
/// use game_planner_core::{BoardGame, Column};
///
/// let mut games = vec![
///     BoardGame::new(1, "Go").with_players(2, 2),
///     BoardGame::new(2, "Monopoly").with_players(6, 10),
///     BoardGame::new(3, "Chess").with_players(2, 2),
/// ];
///
/// sort_games(&mut games, Column::MinPlayers, SortOrder::Ascending);
/// assert_eq!(games[0].name(), "Chess");
/// ```
pub fn sort_games(games: &mut [BoardGame], column: Column, order: SortOrder) {
    games.sort_by(|a, b| compare_games(a, b, column, order));
}
