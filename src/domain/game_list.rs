//! # Curated Game List
//!
//! Users build a list of games they want to play out of the games currently
//! shown to them. Commands address those games by:
//!
//! - `all`: every shown game
//! - a 1-based position: `3`
//! - an inclusive range of positions: `2-5`
//! - a name, matched case-insensitively: `go fish`
//!
//! Positions are 1-based because they are read off a numbered listing. They
//! are turned into 0-based offsets inside [`Selector::select`] and nowhere
//! else.
//!
//! Adding resolves positions against the candidate list the caller supplies,
//! normally the output of [`crate::Planner::filter`]. Removing resolves them
//! against the list's own members sorted by name, which is the order
//! [`GameList::names`] shows them in.

use crate::domain::game::BoardGame;
use crate::domain::sorting::compare_ignore_case;
use crate::error::{PlannerError, Result};
use crate::storage::{file_storage::FileStorage, Storage};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Keyword selecting every game
pub const ALL_KEYWORD: &str = "all";

/// A parsed add/remove command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    All,
    /// Inclusive 1-based positions
    Range(usize, usize),
    /// 1-based position
    Index(usize),
    /// Lowercased game name
    Name(String),
}

impl FromStr for Selector {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let command = s.trim().to_lowercase();

        if command.is_empty() {
            return Err(PlannerError::EmptyCommand);
        }
        if command == ALL_KEYWORD {
            return Ok(Selector::All);
        }
        if command.contains('-') {
            return parse_range(&command);
        }
        if let Ok(index) = command.parse() {
            return Ok(Selector::Index(index));
        }
        Ok(Selector::Name(command))
    }
}

fn parse_range(command: &str) -> Result<Selector> {
    let bounds: Vec<&str> = command.split('-').collect();
    if bounds.len() != 2 {
        return Err(PlannerError::InvalidRange(format!(
            "{} (expected start-end)",
            command
        )));
    }

    match (bounds[0].trim().parse(), bounds[1].trim().parse()) {
        (Ok(start), Ok(end)) => Ok(Selector::Range(start, end)),
        _ => Err(PlannerError::InvalidRange(format!(
            "{} (bounds must be positive integers)",
            command
        ))),
    }
}

impl Selector {
    /// Picks the games this selector refers to out of `games`
    pub fn select<'a>(&self, games: &'a [BoardGame]) -> Result<Vec<&'a BoardGame>> {
        match self {
            Selector::All => Ok(games.iter().collect()),
            Selector::Range(start, end) => {
                let len = games.len();
                if *start < 1 || *end < 1 || *start > len || *end > len {
                    return Err(PlannerError::InvalidRange(format!(
                        "{}-{} is out of bounds (1-{})",
                        start, end, len
                    )));
                }
                if start > end {
                    return Err(PlannerError::InvalidRange(format!(
                        "{}-{} (start > end)",
                        start, end
                    )));
                }
                Ok(games[start - 1..*end].iter().collect())
            }
            Selector::Index(index) => {
                if *index < 1 || *index > games.len() {
                    return Err(PlannerError::IndexOutOfRange {
                        index: *index,
                        len: games.len(),
                    });
                }
                Ok(vec![&games[index - 1]])
            }
            Selector::Name(name) => games
                .iter()
                .find(|game| game.name().to_lowercase() == *name)
                .map(|game| vec![game])
                .ok_or_else(|| PlannerError::GameNotFound(name.clone())),
        }
    }
}

/// A deduplicated, user curated set of games
#[derive(Debug, Clone, Default)]
pub struct GameList {
    games: HashSet<BoardGame>,
}

impl GameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Member names, case-insensitively ascending
    pub fn names(&self) -> Vec<String> {
        self.sorted_games()
            .into_iter()
            .map(|game| game.name().to_string())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Case-insensitive membership check by name
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.games.iter().any(|game| game.name().to_lowercase() == name)
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    /// Adds the games `command` selects from `candidates`
    ///
    /// `candidates` is expected in the order the user saw them, which for a
    /// default filter is by name ascending. Games already present are kept
    /// once.
    pub fn add(&mut self, command: &str, candidates: &[BoardGame]) -> Result<()> {
        let selector: Selector = command.parse()?;
        let selected = selector.select(candidates)?;
        self.games.extend(selected.into_iter().cloned());
        Ok(())
    }

    /// Removes the games `command` selects from this list
    ///
    /// Positions refer to the members sorted by name, as [`GameList::names`]
    /// lists them.
    pub fn remove(&mut self, command: &str) -> Result<()> {
        let selector: Selector = command.parse()?;
        if selector == Selector::All {
            self.clear();
            return Ok(());
        }

        let members: Vec<BoardGame> = self.sorted_games().into_iter().cloned().collect();
        for game in selector.select(&members)? {
            self.games.remove(game);
        }
        Ok(())
    }

    /// Writes the member names, one per line, replacing `destination`
    pub fn export(&self, destination: impl AsRef<Path>) -> Result<()> {
        self.export_to(&FileStorage::new(), destination)
    }

    pub fn export_to<S: Storage>(&self, storage: &S, destination: impl AsRef<Path>) -> Result<()> {
        storage.write_lines(destination.as_ref(), &self.names())
    }

    fn sorted_games(&self) -> Vec<&BoardGame> {
        let mut games: Vec<&BoardGame> = self.games.iter().collect();
        games.sort_by(|a, b| compare_ignore_case(a.name(), b.name()));
        games
    }
}
