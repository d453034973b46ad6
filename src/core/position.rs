//! # Position
//!
//! A coordinate on the shelf. The fundamental primitive.
//!
//! Slots are addressed by three axes: `row`, `column`, `order`
//! (depth within a cell). Occupied slots are 1-indexed on every
//! axis; `0` means "not placed anywhere yet".
//!
//! The position IS the slot. Two items can never share one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A slot coordinate: `(row, column, order)`
///
/// Ordering is lexicographic, which is exactly the order the
/// first-fit allocation scan walks the shelf in.
///
/// # Example
/// ```
/// use shelfspace::Position;
/// let p = Position::new(1, 2, 3);
/// assert!(p < Position::new(2, 1, 1));
/// assert_eq!(p.to_string(), "(1,2,3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub column: u32,
    pub order: u32,
}

impl Position {
    /// The position of an item that has never been placed
    pub const UNPLACED: Position = Position {
        row: 0,
        column: 0,
        order: 0,
    };

    /// Create a position from its three axes
    pub fn new(row: u32, column: u32, order: u32) -> Self {
        Self { row, column, order }
    }

    /// Whether this position refers to an actual slot (all axes 1-indexed)
    pub fn is_placed(&self) -> bool {
        self.row >= 1 && self.column >= 1 && self.order >= 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::UNPLACED
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.row, self.column, self.order)
    }
}

/// Errors from parsing a `Position` out of `"row,column,order"` text
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("expected `row,column,order`, got {0} field(s)")]
    WrongFieldCount(usize),

    #[error("invalid axis value: {0}")]
    InvalidAxis(#[from] std::num::ParseIntError),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parse `"row,column,order"`, e.g. from a CLI flag
    ///
    /// # Example
    /// ```
    /// use shelfspace::Position;
    /// let p: Position = "2,1,4".parse().unwrap();
    /// assert_eq!(p, Position::new(2, 1, 4));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(ParsePositionError::WrongFieldCount(fields.len()));
        }
        Ok(Self {
            row: fields[0].parse()?,
            column: fields[1].parse()?,
            order: fields[2].parse()?,
        })
    }
}

/// One of the three shelf axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
    Order,
}

impl Axis {
    /// Lowercase axis name, as used in failure reasons
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::Order => "order",
        }
    }
}

/// Capacity limits of a shelf, per axis
///
/// Defaults to 5 rows x 3 columns x 10 per cell (150 slots).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub max_row: u32,
    pub max_column: u32,
    pub max_order: u32,
}

impl Bounds {
    /// Create bounds with explicit limits on every axis
    pub fn new(max_row: u32, max_column: u32, max_order: u32) -> Self {
        Self {
            max_row,
            max_column,
            max_order,
        }
    }

    /// Total number of addressable slots
    ///
    /// # Example
    /// ```
    /// use shelfspace::Bounds;
    /// assert_eq!(Bounds::default().capacity(), 150);
    /// ```
    pub fn capacity(&self) -> usize {
        self.max_row as usize * self.max_column as usize * self.max_order as usize
    }

    /// First axis a position violates, checked row, then column, then order
    ///
    /// An axis violates when it is below 1 or above its limit.
    /// Returns `None` when the position is a valid occupied slot.
    pub fn first_violation(&self, position: Position) -> Option<Axis> {
        if position.row < 1 || position.row > self.max_row {
            Some(Axis::Row)
        } else if position.column < 1 || position.column > self.max_column {
            Some(Axis::Column)
        } else if position.order < 1 || position.order > self.max_order {
            Some(Axis::Order)
        } else {
            None
        }
    }
}

impl Default for Bounds {
    /// Max 5 rows, max 3 columns, max 10 items per cell
    fn default() -> Self {
        Self::new(5, 3, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unplaced_default() {
        let p = Position::default();
        assert_eq!(p, Position::UNPLACED);
        assert!(!p.is_placed());
        assert!(Position::new(1, 1, 1).is_placed());
    }

    #[test]
    fn test_lexicographic_order() {
        let mut positions = vec![
            Position::new(2, 1, 1),
            Position::new(1, 3, 10),
            Position::new(1, 1, 2),
            Position::new(1, 1, 1),
        ];
        positions.sort();
        assert_eq!(positions[0], Position::new(1, 1, 1));
        assert_eq!(positions[1], Position::new(1, 1, 2));
        assert_eq!(positions[2], Position::new(1, 3, 10));
        assert_eq!(positions[3], Position::new(2, 1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 2, 7).to_string(), "(4,2,7)");
    }

    #[test]
    fn test_parse() {
        let p: Position = "1,2,3".parse().unwrap();
        assert_eq!(p, Position::new(1, 2, 3));

        let spaced: Position = " 5 , 3 , 10 ".parse().unwrap();
        assert_eq!(spaced, Position::new(5, 3, 10));
    }

    #[test]
    fn test_parse_errors() {
        let err = "1,2".parse::<Position>().unwrap_err();
        assert_eq!(err, ParsePositionError::WrongFieldCount(2));

        assert!(matches!(
            "1,x,3".parse::<Position>(),
            Err(ParsePositionError::InvalidAxis(_))
        ));
    }

    #[test]
    fn test_default_bounds() {
        let bounds = Bounds::default();
        assert_eq!(bounds.max_row, 5);
        assert_eq!(bounds.max_column, 3);
        assert_eq!(bounds.max_order, 10);
        assert_eq!(bounds.capacity(), 150);
    }

    #[test]
    fn test_first_violation_axis_order() {
        let bounds = Bounds::default();
        assert_eq!(bounds.first_violation(Position::new(1, 1, 1)), None);
        assert_eq!(bounds.first_violation(Position::new(5, 3, 10)), None);

        // row is reported before column, column before order
        assert_eq!(
            bounds.first_violation(Position::new(6, 4, 11)),
            Some(Axis::Row)
        );
        assert_eq!(
            bounds.first_violation(Position::new(1, 4, 11)),
            Some(Axis::Column)
        );
        assert_eq!(
            bounds.first_violation(Position::new(1, 1, 11)),
            Some(Axis::Order)
        );
    }

    #[test]
    fn test_first_violation_rejects_zero() {
        let bounds = Bounds::default();
        assert_eq!(
            bounds.first_violation(Position::UNPLACED),
            Some(Axis::Row)
        );
        assert_eq!(
            bounds.first_violation(Position::new(1, 0, 1)),
            Some(Axis::Column)
        );
    }

    #[test]
    fn test_axis_names() {
        assert_eq!(Axis::Row.name(), "row");
        assert_eq!(Axis::Column.name(), "column");
        assert_eq!(Axis::Order.name(), "order");
    }
}
