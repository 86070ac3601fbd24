use strum_macros::EnumIter;

pub const BLOCK_SIZE: usize = 3;

/// Position of a block inside a maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pos(pub i32, pub i32);

/// One of the nine cells of a block, named after the compass.
///
/// Declaration order is row-major, so iterating yields the grid top-left to
/// bottom-right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

pub const GRID: [[Direction; BLOCK_SIZE]; BLOCK_SIZE] = [
    [Direction::NorthWest, Direction::North, Direction::NorthEast],
    [Direction::West, Direction::Center, Direction::East],
    [Direction::SouthWest, Direction::South, Direction::SouthEast],
];

/// Returns `(row, col)` of the cell a direction refers to.
pub fn side_to_index(direction: Direction) -> (usize, usize) {
    match direction {
        Direction::NorthWest => (0, 0),
        Direction::North => (0, 1),
        Direction::NorthEast => (0, 2),
        Direction::West => (1, 0),
        Direction::Center => (1, 1),
        Direction::East => (1, 2),
        Direction::SouthWest => (2, 0),
        Direction::South => (2, 1),
        Direction::SouthEast => (2, 2),
    }
}

pub fn index_to_side(row: usize, col: usize) -> Option<Direction> {
    GRID.get(row)?.get(col).copied()
}

impl Direction {
    pub fn is_center(&self) -> bool {
        matches!(self, Direction::Center)
    }
}
