use serde::{Deserialize, Serialize};

/// Side length of one tile in screen pixels.
pub const TILE_SIZE: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub row: i32,
    pub col: i32,
}

impl TilePos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    pub fn below(self) -> Self {
        self.offset(Direction::Down)
    }

    /// Top-left pixel of this tile, as `(x, y)`.
    pub fn to_pixel(self) -> (i32, i32) {
        (self.col * TILE_SIZE, self.row * TILE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` step for one tile in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let p = TilePos::new(4, 4);
        assert_eq!(p.offset(Direction::Up), TilePos::new(3, 4));
        assert_eq!(p.offset(Direction::Down), TilePos::new(5, 4));
        assert_eq!(p.offset(Direction::Left), TilePos::new(4, 3));
        assert_eq!(p.offset(Direction::Right), TilePos::new(4, 5));
        assert_eq!(p.below(), TilePos::new(5, 4));
    }

    #[test]
    fn pixel_position_is_tile_aligned() {
        assert_eq!(TilePos::new(1, 8).to_pixel(), (400, 50));
        assert_eq!(TilePos::new(11, 15).to_pixel(), (750, 550));
    }
}
