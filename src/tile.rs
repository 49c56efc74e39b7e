#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Tile {
	Sky,
	Dug,
	Grass,
	#[default]
	Dirt,
	SoftObstacle,
	HardObstacle,
	Lava,
	Diamond,
	Emerald,
	Ruby,
}

impl Tile {
	/// Obstacles stop the drill; every other tile can be entered.
	pub fn is_obstacle(self) -> bool {
		matches!(self, Tile::SoftObstacle | Tile::HardObstacle)
	}

	pub fn is_mineral(self) -> bool {
		self.mined_yield().is_some()
	}

	pub fn mined_yield(self) -> Option<MineralYield> {
		match self {
			Tile::Diamond => Some(MineralYield { haul: 100, money: 10_000_000 }),
			Tile::Emerald => Some(MineralYield { haul: 60, money: 300_000 }),
			Tile::Ruby => Some(MineralYield { haul: 80, money: 1_600_000 }),
			_ => None,
		}
	}

	pub fn glyph(self) -> char {
		match self {
			Tile::Sky => ' ',
			Tile::Dug => '.',
			Tile::Grass => '"',
			Tile::Dirt => ':',
			Tile::SoftObstacle => 'o',
			Tile::HardObstacle => '#',
			Tile::Lava => '~',
			Tile::Diamond => 'D',
			Tile::Emerald => 'E',
			Tile::Ruby => 'R',
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MineralYield {
	pub haul: u32,
	pub money: u64,
}
