use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// The six cardinal directions of the block grid.
///
/// Declaration order is significant: [`Direction::all`] yields directions in
/// this order, and scans expand neighbours in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All six directions in declaration order.
    pub fn all() -> [Direction; 6] {
        [
            Direction::Down,
            Direction::Up,
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ]
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Unit offset `(dx, dy, dz)` for this direction.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    /// Stable numeric encoding, matching declaration order.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Decode a numeric index. Out-of-range values fall back to `Down`.
    pub fn from_index(index: u8) -> Self {
        Self::all()
            .get(index as usize)
            .copied()
            .unwrap_or(Direction::Down)
    }
}

// ---------------------------------------------------------------------------
// BlockPos
// ---------------------------------------------------------------------------

/// A cell in the 3D block grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighbouring cell one step in `dir`. Coordinates wrap at the
    /// `i32` bounds, so the grid is a torus at its outer edge.
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy, dz) = dir.offset();
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }

    /// All six face neighbours, paired with the direction leading to them.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, BlockPos)> {
        Direction::all()
            .into_iter()
            .map(move |dir| (dir, self.offset(dir)))
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(&self, other: &BlockPos) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
            .saturating_add(self.z.abs_diff(other.z))
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}
