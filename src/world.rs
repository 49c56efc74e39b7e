use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::coords::TilePos;
use crate::error::GameError;
use crate::tile::Tile;

pub const GRID_ROWS: i32 = 12;
pub const GRID_COLS: i32 = 16;

/// Rows that are always open sky.
pub const SKY_ROWS: std::ops::Range<i32> = 0..2;
pub const GRASS_ROW: i32 = 2;

/// Inclusive area that receives the random special tiles.
pub const SCATTER_ROWS: std::ops::RangeInclusive<i32> = 3..=9;
pub const SCATTER_COLS: std::ops::RangeInclusive<i32> = 2..=13;

/// Placement order for the random special tiles. Each entry gets its own
/// sampled cell; a later entry overwrites an earlier one on the same cell.
pub const SCATTER_ORDER: [Tile; 18] = [
    Tile::Lava,
    Tile::Lava,
    Tile::Lava,
    Tile::Lava,
    Tile::SoftObstacle,
    Tile::SoftObstacle,
    Tile::SoftObstacle,
    Tile::SoftObstacle,
    Tile::Diamond,
    Tile::Diamond,
    Tile::Emerald,
    Tile::Emerald,
    Tile::Ruby,
    Tile::Diamond,
    Tile::Emerald,
    Tile::Ruby,
    Tile::Lava,
    Tile::SoftObstacle,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    tiles: Vec<Tile>,
}

impl GridWorld {
    pub fn new(fill: Tile) -> Self {
        Self {
            tiles: vec![fill; (GRID_ROWS * GRID_COLS) as usize],
        }
    }

    /// Terrain without the random scatter: walls, sky and grass bands, dirt.
    pub fn bare() -> Self {
        let mut world = Self::new(Tile::Dirt);
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let kind = if SKY_ROWS.contains(&row) {
                    Tile::Sky
                } else if row == GRASS_ROW {
                    Tile::Grass
                } else if row == GRID_ROWS - 1 || col == 0 || col == GRID_COLS - 1 {
                    Tile::HardObstacle
                } else {
                    Tile::Dirt
                };
                world.tiles[(row * GRID_COLS + col) as usize] = kind;
            }
        }
        world
    }

    pub fn generate(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate_with_rng(&mut rng)
    }

    pub fn generate_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut world = Self::bare();
        for kind in SCATTER_ORDER {
            let row = rng.gen_range(SCATTER_ROWS);
            let col = rng.gen_range(SCATTER_COLS);
            world.tiles[(row * GRID_COLS + col) as usize] = kind;
        }
        trace!("generated grid:\n{}", world.to_ascii());
        world
    }

    pub fn rows(&self) -> i32 {
        GRID_ROWS
    }
    pub fn cols(&self) -> i32 {
        GRID_COLS
    }

    fn index(&self, p: TilePos) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row >= GRID_ROWS || p.col >= GRID_COLS {
            return None;
        }
        Some((p.row * GRID_COLS + p.col) as usize)
    }

    pub fn get(&self, p: TilePos) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    pub fn tile_at(&self, p: TilePos) -> Result<Tile, GameError> {
        self.get(p).ok_or(GameError::OutOfBounds {
            row: p.row,
            col: p.col,
        })
    }

    pub fn set_tile(&mut self, p: TilePos, tile: Tile) -> Result<(), GameError> {
        let i = self.index(p).ok_or(GameError::OutOfBounds {
            row: p.row,
            col: p.col,
        })?;
        self.tiles[i] = tile;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TilePos, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(i, t)| {
            let i = i as i32;
            (TilePos::new(i / GRID_COLS, i % GRID_COLS), *t)
        })
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((GRID_COLS + 1) * GRID_ROWS) as usize);
        for row in self.tiles.chunks(GRID_COLS as usize) {
            out.extend(row.iter().map(|t| t.glyph()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_bounds() {
        let w = GridWorld::new(Tile::Dirt);
        assert!(w.index(TilePos::new(0, 0)).is_some());
        assert!(w.index(TilePos::new(11, 15)).is_some());
        assert!(w.index(TilePos::new(-1, 0)).is_none());
        assert!(w.index(TilePos::new(12, 0)).is_none());
        assert!(w.index(TilePos::new(0, 16)).is_none());
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut w = GridWorld::bare();
        assert!(matches!(
            w.tile_at(TilePos::new(12, 3)),
            Err(GameError::OutOfBounds { row: 12, col: 3 })
        ));
        assert!(w.set_tile(TilePos::new(0, -1), Tile::Dug).is_err());
        assert!(w.set_tile(TilePos::new(5, 5), Tile::Dug).is_ok());
        assert_eq!(w.tile_at(TilePos::new(5, 5)).unwrap(), Tile::Dug);
    }

    #[test]
    fn bare_layout() {
        let w = GridWorld::bare();
        for col in 0..GRID_COLS {
            assert_eq!(w.get(TilePos::new(0, col)), Some(Tile::Sky));
            assert_eq!(w.get(TilePos::new(1, col)), Some(Tile::Sky));
            assert_eq!(w.get(TilePos::new(2, col)), Some(Tile::Grass));
            assert_eq!(w.get(TilePos::new(11, col)), Some(Tile::HardObstacle));
        }
        for row in 3..GRID_ROWS {
            assert_eq!(w.get(TilePos::new(row, 0)), Some(Tile::HardObstacle));
            assert_eq!(w.get(TilePos::new(row, 15)), Some(Tile::HardObstacle));
        }
        assert_eq!(w.get(TilePos::new(10, 7)), Some(Tile::Dirt));
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = GridWorld::generate(Some(7));
        let b = GridWorld::generate(Some(7));
        assert_eq!(a, b);
    }

    #[test]
    fn scatter_stays_inside_the_scatter_area() {
        let bare = GridWorld::bare();
        for seed in 0..32 {
            let w = GridWorld::generate(Some(seed));
            for (p, t) in w.iter() {
                if bare.get(p) != Some(t) {
                    assert!(SCATTER_ROWS.contains(&p.row), "{p:?}");
                    assert!(SCATTER_COLS.contains(&p.col), "{p:?}");
                }
            }
            let special = w
                .iter()
                .filter(|(_, t)| !matches!(t, Tile::Sky | Tile::Grass | Tile::Dirt | Tile::HardObstacle))
                .count();
            assert!(special <= SCATTER_ORDER.len());
            assert!(w.count(Tile::Diamond) <= 3);
            assert!(w.count(Tile::Ruby) <= 2);
            assert_eq!(w.count(Tile::Sky), 2 * GRID_COLS as usize);
        }
    }

    #[test]
    fn ascii_dump_has_one_line_per_row() {
        let w = GridWorld::bare();
        let dump = w.to_ascii();
        assert_eq!(dump.lines().count(), GRID_ROWS as usize);
        assert!(dump.lines().all(|l| l.chars().count() == GRID_COLS as usize));
        assert!(dump.lines().last().unwrap().chars().all(|c| c == '#'));
    }
}
