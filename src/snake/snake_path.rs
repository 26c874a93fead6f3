use super::point::Point;
use std::fmt;

/// Number of cells in a complete snake.
pub const SNAKE_LEN: usize = 7;

/// A snake under construction, or a complete one once it holds `SNAKE_LEN` cells.
///
/// Points are kept in growth order. Every point was accepted by
/// [`SnakePath::try_extend`], so no two points repeat and the only orthogonal
/// neighbor a point has inside the path, besides its successor, is its
/// predecessor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnakePath {
    points: Vec<Point>,
    sum: u32,
}

impl SnakePath {
    /// Creates an empty snake.
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(SNAKE_LEN),
            sum: 0,
        }
    }

    /// Tries to grow the snake by `point`, whose grid value is `value`.
    ///
    /// `predecessor` is the cell the snake reached `point` from, or `None`
    /// when `point` is the first cell. It is the only existing cell allowed
    /// to touch `point`.
    ///
    /// Returns `false` and leaves the snake untouched when the snake is
    /// already complete, already contains `point`, or `point` would touch
    /// some cell other than its predecessor.
    pub fn try_extend(&mut self, point: Point, predecessor: Option<Point>, value: u16) -> bool {
        if self.is_complete() || self.contains(point) {
            return false;
        }

        let neighbors = point.neighbors();
        let touches_non_predecessor = self
            .points
            .iter()
            .filter(|existing| Some(**existing) != predecessor)
            .any(|existing| neighbors.contains(existing));
        if touches_non_predecessor {
            return false;
        }

        self.points.push(point);
        self.sum += u32::from(value);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() == SNAKE_LEN
    }

    /// Returns true if both snakes occupy at least one common cell.
    ///
    /// Only meaningful for complete snakes.
    pub fn overlaps(&self, other: &SnakePath) -> bool {
        debug_assert!(self.is_complete(), "overlaps() called on incomplete snake {}", self);
        debug_assert!(other.is_complete(), "overlaps() called on incomplete snake {}", other);
        self.points.iter().any(|p| other.contains(*p))
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Cells in the order they were added.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn sum(&self) -> u32 {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for SnakePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Snake sum={} points=[", self.sum)?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "]}}")
    }
}
