//! Column registry for board game records.
//!
//! Every [`Column`] is registered once with its canonical name, the aliases
//! users may type for it, its [`ValueKind`] and an accessor that reads the
//! typed value out of a [`BoardGame`]. The filter language and the sort engine
//! both dispatch through this table instead of matching on columns themselves.

use crate::domain::game::BoardGame;
use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Columns of a board game record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    #[default]
    Name,
    MinPlayers,
    MaxPlayers,
    MinPlayTime,
    MaxPlayTime,
    Difficulty,
    Rank,
    Rating,
    YearPublished,
    Id,
}

/// The kind of value a column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Float,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field value borrowed from a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
}

struct ColumnSpec {
    column: Column,
    name: &'static str,
    /// Lowercase alternatives accepted by [`Column::resolve`].
    aliases: &'static [&'static str],
    kind: ValueKind,
    accessor: fn(&BoardGame) -> FieldValue<'_>,
}

// Entries follow the declaration order of `Column`.
static REGISTRY: [ColumnSpec; 10] = [
    ColumnSpec {
        column: Column::Name,
        name: "name",
        aliases: &["objectname"],
        kind: ValueKind::String,
        accessor: name_of,
    },
    ColumnSpec {
        column: Column::MinPlayers,
        name: "minPlayers",
        aliases: &["min_players"],
        kind: ValueKind::Integer,
        accessor: min_players_of,
    },
    ColumnSpec {
        column: Column::MaxPlayers,
        name: "maxPlayers",
        aliases: &["max_players"],
        kind: ValueKind::Integer,
        accessor: max_players_of,
    },
    ColumnSpec {
        column: Column::MinPlayTime,
        name: "minPlayTime",
        aliases: &["min_play_time", "min_time", "mintime"],
        kind: ValueKind::Integer,
        accessor: min_play_time_of,
    },
    ColumnSpec {
        column: Column::MaxPlayTime,
        name: "maxPlayTime",
        aliases: &["max_play_time", "max_time", "maxtime"],
        kind: ValueKind::Integer,
        accessor: max_play_time_of,
    },
    ColumnSpec {
        column: Column::Difficulty,
        name: "difficulty",
        aliases: &["avgweight", "weight"],
        kind: ValueKind::Float,
        accessor: difficulty_of,
    },
    ColumnSpec {
        column: Column::Rank,
        name: "rank",
        aliases: &[],
        kind: ValueKind::Integer,
        accessor: rank_of,
    },
    ColumnSpec {
        column: Column::Rating,
        name: "rating",
        aliases: &["average", "avgrating"],
        kind: ValueKind::Float,
        accessor: rating_of,
    },
    ColumnSpec {
        column: Column::YearPublished,
        name: "yearPublished",
        aliases: &["year_published", "year"],
        kind: ValueKind::Integer,
        accessor: year_published_of,
    },
    ColumnSpec {
        column: Column::Id,
        name: "id",
        aliases: &[],
        kind: ValueKind::Integer,
        accessor: id_of,
    },
];

fn name_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Text(game.name())
}

fn min_players_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Integer(i64::from(game.min_players()))
}

fn max_players_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Integer(i64::from(game.max_players()))
}

fn min_play_time_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Integer(i64::from(game.min_play_time()))
}

fn max_play_time_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Integer(i64::from(game.max_play_time()))
}

fn difficulty_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Float(game.difficulty())
}

fn rank_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Integer(i64::from(game.rank()))
}

fn rating_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Float(game.rating())
}

fn year_published_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Integer(i64::from(game.year_published()))
}

fn id_of(game: &BoardGame) -> FieldValue<'_> {
    FieldValue::Integer(i64::from(game.id()))
}

impl Column {
    /// All columns in canonical order
    pub const ALL: [Column; 10] = [
        Column::Name,
        Column::MinPlayers,
        Column::MaxPlayers,
        Column::MinPlayTime,
        Column::MaxPlayTime,
        Column::Difficulty,
        Column::Rank,
        Column::Rating,
        Column::YearPublished,
        Column::Id,
    ];

    fn spec(self) -> &'static ColumnSpec {
        &REGISTRY[self as usize]
    }

    /// Resolves a user supplied column name
    ///
    /// Matching ignores surrounding whitespace and case, and accepts the
    /// canonical name as well as any registered alias.
    pub fn resolve(name: &str) -> Result<Column> {
        let key = name.trim().to_lowercase();
        REGISTRY
            .iter()
            .find(|spec| spec.name.to_lowercase() == key || spec.aliases.contains(&key.as_str()))
            .map(|spec| spec.column)
            .ok_or_else(|| PlannerError::UnknownColumn(name.trim().to_string()))
    }

    /// Canonical name of the column
    pub fn as_str(self) -> &'static str {
        self.spec().name
    }

    pub fn aliases(self) -> &'static [&'static str] {
        self.spec().aliases
    }

    pub fn kind(self) -> ValueKind {
        self.spec().kind
    }

    /// Reads this column's value from a game
    pub fn value_of(self, game: &BoardGame) -> FieldValue<'_> {
        (self.spec().accessor)(game)
    }

    /// `id` identifies a record but carries no meaning for filtering or sorting
    pub fn is_queryable(self) -> bool {
        self != Column::Id
    }
}

impl FromStr for Column {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Column::resolve(s)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
