/// A board cell, addressed by zero-based row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses a position from two decimal tokens, e.g. from a "place 2 3" command.
pub fn parse_pos(row: &str, col: &str) -> Option<Pos> {
    let row: usize = row.parse().ok()?;
    let col: usize = col.parse().ok()?;
    Some(Pos::new(row, col))
}
