use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::coords::{Direction, TilePos};
use crate::error::GameError;
use crate::resources::Earnings;
use crate::tile::{MineralYield, Tile};
use crate::world::GridWorld;

/// Where the drill appears when a game starts (pixel 400, 50).
pub const DRILL_START: TilePos = TilePos { row: 1, col: 8 };

/// Animation indicator; selects the sprite frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
	Idle,
	Up,
	Down,
	Left,
	Right,
}

impl Facing {
	pub const ALL: [Facing; 5] = [Facing::Idle, Facing::Up, Facing::Down, Facing::Left, Facing::Right];

	pub fn from_frame_index(index: usize) -> Option<Facing> {
		Facing::ALL.into_iter().find(|f| f.frame_index() == index)
	}

	pub fn frame_index(self) -> usize {
		match self {
			Facing::Idle => 0,
			Facing::Up => 50,
			Facing::Down => 44,
			Facing::Left => 3,
			Facing::Right => 56,
		}
	}
}

impl From<Direction> for Facing {
	fn from(d: Direction) -> Self {
		match d {
			Direction::Up => Facing::Up,
			Direction::Down => Facing::Down,
			Direction::Left => Facing::Left,
			Direction::Right => Facing::Right,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigOutcome {
	/// Plain ground; nothing scored.
	Cleared(Tile),
	Mineral(Tile, MineralYield),
	Lava,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
	pub direction: Direction,
	pub moved: bool,
	pub position: TilePos,
	pub dig: Option<DigOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drill {
	pub position: TilePos,
	pub fuel: i32,
	pub earnings: Earnings,
	pub facing: Facing,
	crashed: bool,
	last_auto_move: Duration,
}

impl Drill {
	pub fn new(position: TilePos, fuel: i32) -> Self {
		Self {
			position,
			fuel,
			earnings: Earnings::new(),
			facing: Facing::Idle,
			crashed: false,
			last_auto_move: Duration::ZERO,
		}
	}

	pub fn crashed(&self) -> bool {
		self.crashed
	}

	pub fn out_of_fuel(&self) -> bool {
		self.fuel <= 0
	}

	pub fn haul(&self) -> u32 {
		self.earnings.haul
	}

	pub fn money(&self) -> u64 {
		self.earnings.money
	}

	pub fn pixel_position(&self) -> (i32, i32) {
		self.position.to_pixel()
	}

	pub fn last_auto_move(&self) -> Duration {
		self.last_auto_move
	}

	// Fuel is charged before anything else, so blocked and out-of-grid moves
	// still cost `fuel_cost`.
	pub fn handle_input(
		&mut self,
		direction: Direction,
		grid: &mut GridWorld,
		fuel_cost: i32,
	) -> Result<MoveReport, GameError> {
		self.facing = direction.into();
		self.fuel = self.fuel.saturating_sub(fuel_cost);

		let target = self.position.offset(direction);
		let dest = match grid.tile_at(target) {
			Ok(t) => t,
			Err(e) => {
				warn!("drill at {:?} refused to leave the grid going {:?}", self.position, direction);
				return Err(e);
			}
		};

		let (moved, dig) = match direction {
			// Climbing needs open space: a dug passage or the sky band.
			Direction::Up => {
				let moved = matches!(dest, Tile::Dug | Tile::Sky);
				if moved {
					self.position = target;
				}
				(moved, None)
			}
			Direction::Down | Direction::Left | Direction::Right => {
				let moved = !dest.is_obstacle();
				if moved {
					self.position = target;
				}
				(moved, Some(self.dig(grid)?))
			}
		};
		debug!(
			"{:?}: moved={} now at {:?}, fuel {}",
			direction, moved, self.position, self.fuel
		);
		Ok(MoveReport { direction, moved, position: self.position, dig })
	}

	/// Mines the tile under the drill and leaves it dug.
	pub fn dig(&mut self, grid: &mut GridWorld) -> Result<DigOutcome, GameError> {
		let here = grid.tile_at(self.position)?;
		let outcome = match here {
			Tile::Lava => {
				self.crashed = true;
				DigOutcome::Lava
			}
			t => match t.mined_yield() {
				Some(y) => {
					self.earnings.add(y);
					DigOutcome::Mineral(t, y)
				}
				None => DigOutcome::Cleared(t),
			},
		};
		grid.set_tile(self.position, Tile::Dug)?;
		if !matches!(outcome, DigOutcome::Cleared(_)) {
			debug!("dug {:?} at {:?}", here, self.position);
		}
		Ok(outcome)
	}

	/// Drops the drill one row when it hangs over open sky and at least
	/// `interval` has passed since the last drop. Returns whether it fell.
	pub fn check_for_automatic_movement(&mut self, now: Duration, interval: Duration, grid: &GridWorld) -> bool {
		if now.saturating_sub(self.last_auto_move) < interval {
			return false;
		}
		let below = self.position.below();
		if grid.get(below) == Some(Tile::Sky) {
			self.position = below;
			self.last_auto_move = now;
			debug!("drill fell to {:?}", below);
			return true;
		}
		false
	}
}
