use crate::domain::column::Column;
use crate::domain::filter::{Query, RejectedClause};
use crate::domain::game::BoardGame;
use crate::domain::sorting::{sort_games, SortOrder};
use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Column used when a caller does not name one
    pub default_sort: Column,
    pub default_order: SortOrder,
    /// Maximum difference at which two floats compare equal
    pub float_tolerance: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_sort: Column::Name,
            default_order: SortOrder::Ascending,
            float_tolerance: 0.001,
        }
    }
}

impl PlannerConfig {
    /// Loads a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.float_tolerance.is_finite() || self.float_tolerance <= 0.0 {
            return Err(PlannerError::ConfigError(format!(
                "float_tolerance must be a positive number, got {}",
                self.float_tolerance
            )));
        }
        Ok(())
    }
}

/// Progressive filter engine over a shared catalog
///
/// The planner keeps a working view between calls. Each call to
/// [`Planner::filter`] narrows the view left by the previous call, so a
/// refined query can be built up one step at a time. [`Planner::reset`]
/// restores the full catalog.
///
/// # Examples
/// ```
/// use game_planner_core::{BoardGame, Planner};
///
/// let mut planner = Planner::new(vec![
///     BoardGame::new(1, "Go").with_players(2, 2),
///     BoardGame::new(2, "Tucano").with_players(10, 20),
///     BoardGame::new(3, "Chess").with_players(2, 2),
/// ]);
///
/// let games = planner.filter("minPlayers<=4");
/// assert_eq!(games.len(), 2);
///
/// // Narrows the previous result further
/// let games = planner.filter("name~=ch");
/// assert_eq!(games[0].name(), "Chess");
/// ```
#[derive(Debug)]
pub struct Planner {
    catalog: Arc<[BoardGame]>,
    working: Vec<BoardGame>,
    rejected: Vec<RejectedClause>,
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner over a catalog
    ///
    /// Passing an `Arc<[BoardGame]>` lets several planners share one catalog.
    pub fn new(catalog: impl Into<Arc<[BoardGame]>>) -> Self {
        Self::with_config(catalog, PlannerConfig::default())
    }

    pub fn with_config(catalog: impl Into<Arc<[BoardGame]>>, config: PlannerConfig) -> Self {
        let mut planner = Self {
            catalog: catalog.into(),
            working: Vec::new(),
            rejected: Vec::new(),
            config,
        };
        planner.reset();
        planner
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<[BoardGame]> {
        &self.catalog
    }

    /// The games left by the previous filter call, in no particular order
    pub fn working_view(&self) -> &[BoardGame] {
        &self.working
    }

    /// Clauses dropped by the most recent filter call
    pub fn rejected_clauses(&self) -> &[RejectedClause] {
        &self.rejected
    }

    /// Discards all narrowing so the working view is the full catalog again
    pub fn reset(&mut self) {
        self.working = self.catalog.to_vec();
    }

    /// Filters with the configured default sort
    pub fn filter(&mut self, query: &str) -> Vec<BoardGame> {
        self.filter_by(query, self.config.default_sort, self.config.default_order)
    }

    /// Filters and sorts ascending on `column`
    pub fn filter_sorted(&mut self, query: &str, column: Column) -> Vec<BoardGame> {
        self.filter_by(query, column, SortOrder::Ascending)
    }

    /// Narrows the working view with `query` and returns it sorted
    ///
    /// An empty working view is reset to the full catalog first. An empty
    /// query keeps the view as is, which re-sorts the previous result. The
    /// narrowed, unsorted view is kept for the next call.
    pub fn filter_by(&mut self, query: &str, column: Column, order: SortOrder) -> Vec<BoardGame> {
        if self.working.is_empty() {
            self.reset();
        }

        let query = Query::parse(query);
        if !query.is_empty() {
            let current = std::mem::take(&mut self.working);
            self.working = query.apply(current, self.config.float_tolerance);
        }
        self.rejected = query.into_rejected();

        let mut result = self.working.clone();
        sort_games(&mut result, column, order);
        result
    }
}
