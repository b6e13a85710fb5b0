//! Filter query language.
//!
//! A query is a comma separated list of clauses, each of the form
//! `<column><op><value>`, for example `minPlayers >= 2, name ~= pandemic`.
//! Clauses are joined with AND. A clause that cannot be parsed is recorded in
//! [`Query::rejected`] and otherwise ignored, so it narrows nothing.

use crate::domain::column::{Column, FieldValue, ValueKind};
use crate::domain::game::BoardGame;
use crate::domain::sorting::compare_ignore_case;
use crate::error::{PlannerError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Comparison operator of a filter clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
}

impl Operator {
    /// Operators in match priority; two-character tokens come before their
    /// one-character prefixes.
    pub const ALL: [Operator; 7] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::Contains,
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::Greater,
        Operator::Less,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::Contains => "~=",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Greater => ">",
            Operator::Less => "<",
        }
    }

    /// Substring containment only makes sense for text
    pub fn is_valid_for(self, kind: ValueKind) -> bool {
        self != Operator::Contains || kind == ValueKind::String
    }

    /// Evaluates this operator given the ordering of field value to literal
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Operator::Equals => ordering == Ordering::Equal,
            Operator::NotEquals => ordering != Ordering::Equal,
            Operator::GreaterOrEqual => ordering != Ordering::Less,
            Operator::LessOrEqual => ordering != Ordering::Greater,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::Less => ordering == Ordering::Less,
            Operator::Contains => false,
        }
    }

    /// Locates the leftmost operator token in a clause
    ///
    /// Returns the byte offset of the token and the operator it denotes.
    pub fn find(clause: &str) -> Option<(usize, Operator)> {
        clause.char_indices().find_map(|(pos, _)| {
            let rest = &clause[pos..];
            Operator::ALL
                .iter()
                .find(|op| rest.starts_with(op.token()))
                .map(|op| (pos, *op))
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Literal parsed once according to the column's value kind
#[derive(Debug, Clone, PartialEq)]
enum Literal {
    /// Stored lowercased
    Text(String),
    Integer(i64),
    Float(f64),
}

/// A single parsed filter clause
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    column: Column,
    operator: Operator,
    value: String,
    literal: Literal,
}

impl Condition {
    /// Builds a condition, validating the operator and literal against the column
    pub fn new(column: Column, operator: Operator, value: &str) -> Result<Self> {
        if !column.is_queryable() {
            return Err(PlannerError::UnsupportedColumn(column.to_string()));
        }

        let kind = column.kind();
        if !operator.is_valid_for(kind) {
            return Err(PlannerError::InvalidOperator {
                op: operator.token(),
                kind: kind.as_str(),
            });
        }

        let value = value.trim();
        let invalid = || PlannerError::InvalidLiteral {
            column: column.to_string(),
            value: value.to_string(),
        };
        let literal = match kind {
            ValueKind::String => Literal::Text(value.to_lowercase()),
            ValueKind::Integer => Literal::Integer(value.parse().map_err(|_| invalid())?),
            ValueKind::Float => {
                let parsed: f64 = value.parse().map_err(|_| invalid())?;
                if !parsed.is_finite() {
                    return Err(invalid());
                }
                Literal::Float(parsed)
            }
        };

        Ok(Self {
            column,
            operator,
            value: value.to_string(),
            literal,
        })
    }

    /// Parses one clause such as `maxPlayTime <= 60`
    pub fn parse(clause: &str) -> Result<Self> {
        let clause = clause.trim();
        let malformed = || PlannerError::MalformedClause(clause.to_string());

        let (pos, operator) = Operator::find(clause).ok_or_else(malformed)?;
        let column_name = clause[..pos].trim();
        let value = clause[pos + operator.token().len()..].trim();
        if column_name.is_empty() || value.is_empty() {
            return Err(malformed());
        }

        Condition::new(Column::resolve(column_name)?, operator, value)
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The literal as written, trimmed
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Checks a game against this condition
    ///
    /// Float equality holds when the values differ by less than `tolerance`.
    pub fn matches(&self, game: &BoardGame, tolerance: f64) -> bool {
        match (self.column.value_of(game), &self.literal) {
            (FieldValue::Text(text), Literal::Text(pattern)) => match self.operator {
                Operator::Contains => text.to_lowercase().contains(pattern.as_str()),
                op => op.eval_ordering(compare_ignore_case(text, pattern)),
            },
            (FieldValue::Integer(number), Literal::Integer(literal)) => {
                self.operator.eval_ordering(number.cmp(literal))
            }
            (FieldValue::Float(number), Literal::Float(literal)) => match self.operator {
                Operator::Equals => (number - literal).abs() < tolerance,
                Operator::NotEquals => (number - literal).abs() >= tolerance,
                op => number
                    .partial_cmp(literal)
                    .is_some_and(|ordering| op.eval_ordering(ordering)),
            },
            _ => false,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.operator, self.value)
    }
}

/// A clause that was dropped from a query, with the reason
#[derive(Debug)]
pub struct RejectedClause {
    pub clause: String,
    pub error: PlannerError,
}

/// A parsed filter query
#[derive(Debug, Default)]
pub struct Query {
    conditions: Vec<Condition>,
    rejected: Vec<RejectedClause>,
}

impl Query {
    /// Parses a comma separated query, keeping every clause that parses
    pub fn parse(text: &str) -> Self {
        let mut query = Query::default();

        for clause in text.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            match Condition::parse(clause) {
                Ok(condition) => query.conditions.push(condition),
                Err(error) => query.rejected.push(RejectedClause {
                    clause: clause.to_string(),
                    error,
                }),
            }
        }

        query
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn rejected(&self) -> &[RejectedClause] {
        &self.rejected
    }

    pub fn into_rejected(self) -> Vec<RejectedClause> {
        self.rejected
    }

    /// True when no clause survived parsing
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, game: &BoardGame, tolerance: f64) -> bool {
        self.conditions.iter().all(|c| c.matches(game, tolerance))
    }

    /// Narrows `games` clause by clause, stopping once nothing is left
    pub fn apply(&self, mut games: Vec<BoardGame>, tolerance: f64) -> Vec<BoardGame> {
        for condition in &self.conditions {
            if games.is_empty() {
                break;
            }
            games.retain(|game| condition.matches(game, tolerance));
        }
        games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.001;

    fn go() -> BoardGame {
        BoardGame::new(1, "Go")
            .with_players(2, 5)
            .with_play_time(30, 30)
            .with_difficulty(8.0)
            .with_rating(7.5)
            .with_year_published(2000)
    }

    #[test]
    fn test_find_prefers_two_character_tokens() {
        assert_eq!(Operator::find("minPlayers>=2"), Some((10, Operator::GreaterOrEqual)));
        assert_eq!(Operator::find("minPlayers>2"), Some((10, Operator::Greater)));
        assert_eq!(Operator::find("rank<=5"), Some((4, Operator::LessOrEqual)));
        assert_eq!(Operator::find("name~=go"), Some((4, Operator::Contains)));
        assert_eq!(Operator::find("name!=go"), Some((4, Operator::NotEquals)));
        assert_eq!(Operator::find("name=go"), None);
    }

    #[test]
    fn test_find_takes_leftmost_token() {
        assert_eq!(Operator::find("name==a>b"), Some((4, Operator::Equals)));
    }

    #[test]
    fn test_parse_ignores_whitespace_around_operator() {
        let condition = Condition::parse("  minPlayers  >  4 ").unwrap();

        assert_eq!(condition.column(), Column::MinPlayers);
        assert_eq!(condition.operator(), Operator::Greater);
        assert_eq!(condition.value(), "4");
    }

    #[test]
    fn test_parse_preserves_inner_value_whitespace() {
        let condition = Condition::parse("name == Go Fish ").unwrap();

        assert_eq!(condition.value(), "Go Fish");
        assert_eq!(condition.to_string(), "name==Go Fish");
    }

    #[test]
    fn test_parse_rejections() {
        assert!(matches!(
            Condition::parse("publisher==x"),
            Err(PlannerError::UnknownColumn(_))
        ));
        assert!(matches!(
            Condition::parse("minPlayers>abc"),
            Err(PlannerError::InvalidLiteral { .. })
        ));
        assert!(matches!(
            Condition::parse("minPlayers~=2"),
            Err(PlannerError::InvalidOperator { op: "~=", .. })
        ));
        assert!(matches!(
            Condition::parse("id==3"),
            Err(PlannerError::UnsupportedColumn(_))
        ));
        assert!(matches!(
            Condition::parse("minPlayers"),
            Err(PlannerError::MalformedClause(_))
        ));
        assert!(matches!(
            Condition::parse("name=="),
            Err(PlannerError::MalformedClause(_))
        ));
        assert!(matches!(
            Condition::parse("rating>NaN"),
            Err(PlannerError::InvalidLiteral { .. })
        ));
    }

    #[test]
    fn test_string_operators_ignore_case() {
        let game = go();
        let check = |clause: &str| Condition::parse(clause).unwrap().matches(&game, TOLERANCE);

        assert!(check("name==GO"));
        assert!(!check("name!=go"));
        assert!(check("name~=o"));
        assert!(check("name>FISH"));
        assert!(check("name<h"));
        assert!(check("name>=go"));
        assert!(check("name<=Go"));
        assert!(!check("name~=chess"));
    }

    #[test]
    fn test_integer_operators() {
        let game = go();
        let check = |clause: &str| Condition::parse(clause).unwrap().matches(&game, TOLERANCE);

        assert!(check("minPlayers==2"));
        assert!(check("maxPlayers!=4"));
        assert!(check("maxPlayers>4"));
        assert!(!check("maxPlayers>5"));
        assert!(check("maxPlayers>=5"));
        assert!(check("minPlayTime<31"));
        assert!(check("yearPublished<=2000"));
    }

    #[test]
    fn test_float_equality_uses_tolerance() {
        let game = go();
        let check = |clause: &str| Condition::parse(clause).unwrap().matches(&game, TOLERANCE);

        assert!(check("rating==7.5"));
        assert!(check("rating==7.5004"));
        assert!(!check("rating==7.51"));
        assert!(check("rating!=7.51"));
        assert!(check("difficulty>7.9"));
        assert!(check("difficulty<=8"));
    }

    #[test]
    fn test_query_parse_drops_bad_clauses() {
        let query = Query::parse("minPlayers>=2, ,bogus>1,maxPlayers<abc,name~=go");

        assert_eq!(query.conditions().len(), 2);
        assert_eq!(query.rejected().len(), 2);
        assert_eq!(query.rejected()[0].clause, "bogus>1");
        assert!(matches!(
            query.rejected()[1].error,
            PlannerError::InvalidLiteral { .. }
        ));
    }

    #[test]
    fn test_query_apply_is_conjunctive() {
        let games = vec![
            go(),
            BoardGame::new(2, "Go Fish").with_players(2, 10),
            BoardGame::new(3, "Chess").with_players(2, 2),
        ];

        let query = Query::parse("minPlayers>=2,maxPlayers<=5");
        let result = query.apply(games, TOLERANCE);

        let names: Vec<&str> = result.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["Go", "Chess"]);
    }

    #[test]
    fn test_query_same_column_twice_is_a_range() {
        let games = vec![
            BoardGame::new(1, "Four").with_players(4, 4),
            BoardGame::new(2, "Five").with_players(5, 5),
            BoardGame::new(3, "Six").with_players(6, 6),
        ];

        let result = Query::parse("minPlayers>4,minPlayers<6").apply(games, TOLERANCE);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), "Five");
    }

    #[test]
    fn test_empty_query_narrows_nothing() {
        let query = Query::parse("  ,  ");

        assert!(query.is_empty());
        assert_eq!(query.apply(vec![go()], TOLERANCE).len(), 1);
    }
}
