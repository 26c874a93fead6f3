use std::fmt;

/// A cell coordinate on the grid: `x` is the column, `y` is the row.
///
/// Coordinates are signed so that neighbors of edge cells can be built
/// before they are bounds-checked against the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    pub const fn top(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    pub const fn bottom(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// The four orthogonal neighbors in left, right, top, bottom order.
    pub const fn neighbors(self) -> [Point; 4] {
        [self.left(), self.right(), self.top(), self.bottom()]
    }

    /// Returns true if `other` shares an edge with this point.
    pub fn is_adjacent_to(self, other: Point) -> bool {
        self.neighbors().contains(&other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
