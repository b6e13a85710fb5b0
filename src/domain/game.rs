use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A board game record from the catalog
///
/// Records are immutable once built. Equality and hashing cover every field,
/// so two records with identical data are interchangeable inside a set.
/// Floating point fields are compared by bit pattern to keep `Eq` and `Hash`
/// consistent with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardGame {
    id: u32,
    name: String,
    min_players: u32,
    max_players: u32,
    min_play_time: u32,
    max_play_time: u32,
    difficulty: f64,
    rank: u32,
    rating: f64,
    year_published: i32,
}

impl BoardGame {
    /// Creates a record with the given ID and name and zeroed statistics
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            min_players: 0,
            max_players: 0,
            min_play_time: 0,
            max_play_time: 0,
            difficulty: 0.0,
            rank: 0,
            rating: 0.0,
            year_published: 0,
        }
    }

    pub fn with_players(mut self, min: u32, max: u32) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    pub fn with_play_time(mut self, min: u32, max: u32) -> Self {
        self.min_play_time = min;
        self.max_play_time = max;
        self
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the publication year. Negative years are BCE.
    pub fn with_year_published(mut self, year: i32) -> Self {
        self.year_published = year;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_players(&self) -> u32 {
        self.min_players
    }

    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    pub fn min_play_time(&self) -> u32 {
        self.min_play_time
    }

    pub fn max_play_time(&self) -> u32 {
        self.max_play_time
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn year_published(&self) -> i32 {
        self.year_published
    }
}

impl PartialEq for BoardGame {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.min_players == other.min_players
            && self.max_players == other.max_players
            && self.min_play_time == other.min_play_time
            && self.max_play_time == other.max_play_time
            && self.difficulty.to_bits() == other.difficulty.to_bits()
            && self.rank == other.rank
            && self.rating.to_bits() == other.rating.to_bits()
            && self.year_published == other.year_published
    }
}

impl Eq for BoardGame {}

impl Hash for BoardGame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.min_players.hash(state);
        self.max_players.hash(state);
        self.min_play_time.hash(state);
        self.max_play_time.hash(state);
        self.difficulty.to_bits().hash(state);
        self.rank.hash(state);
        self.rating.to_bits().hash(state);
        self.year_published.hash(state);
    }
}

impl fmt::Display for BoardGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
