use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::coords::Direction;
use crate::drill::{DRILL_START, Drill, MoveReport};
use crate::error::GameError;
use crate::hud::{
	GAME_OVER_POS, GAME_OVER_TEXT, GROUND_TOP, WINDOW_HEIGHT, WINDOW_WIDTH, HUD_FONT_SIZE, HUD_LINE_Y, HUD_X, SUMMARY_POS, TITLE_FONT_SIZE,
	format_collected_money, format_hud,
};
use crate::render::{Color, Renderer};
use crate::world::GridWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
	Running,
	OutOfFuel,
	Crashed,
}

impl GameStatus {
	pub fn is_terminal(self) -> bool {
		self != GameStatus::Running
	}
}

/// Everything one game owns. Input and ticks both go through here.
#[derive(Debug, Clone)]
pub struct Game {
	pub grid: GridWorld,
	pub drill: Drill,
	config: GameConfig,
	clock: Duration,
}

impl Game {
	pub fn new(config: GameConfig) -> Self {
		let grid = GridWorld::generate(config.seed);
		Self::with_grid(grid, config)
	}

	pub fn with_grid(grid: GridWorld, config: GameConfig) -> Self {
		let drill = Drill::new(DRILL_START, config.starting_fuel);
		info!("new game, seed {:?}, fuel {}", config.seed, config.starting_fuel);
		Self { grid, drill, config, clock: Duration::ZERO }
	}

	pub fn config(&self) -> &GameConfig {
		&self.config
	}

	/// Simulated time since the game started.
	pub fn clock(&self) -> Duration {
		self.clock
	}

	// An empty tank wins over a crash when both hold.
	pub fn status(&self) -> GameStatus {
		if self.drill.out_of_fuel() {
			GameStatus::OutOfFuel
		} else if self.drill.crashed() {
			GameStatus::Crashed
		} else {
			GameStatus::Running
		}
	}

	/// Applies one directional input. Returns `Ok(None)` once the game is
	/// over; terminal games ignore input entirely.
	pub fn handle_input(&mut self, direction: Direction) -> Result<Option<MoveReport>, GameError> {
		if self.status().is_terminal() {
			return Ok(None);
		}
		let report = self
			.drill
			.handle_input(direction, &mut self.grid, self.config.move_fuel_cost);
		// The fuel charge sticks even when the move is refused.
		self.log_if_finished();
		Ok(Some(report?))
	}

	/// Advances the clock by `dt` and applies the per-tick effects: fuel
	/// drain, then the auto-fall check.
	pub fn tick(&mut self, dt: Duration) -> GameStatus {
		self.clock += dt;
		if self.status().is_terminal() {
			return self.status();
		}
		self.drill.fuel = self.drill.fuel.saturating_sub(self.config.fuel_drain_per_tick);
		self.drill
			.check_for_automatic_movement(self.clock, self.config.auto_fall_interval(), &self.grid);
		self.log_if_finished();
		self.status()
	}

	fn log_if_finished(&self) {
		match self.status() {
			GameStatus::Running => {}
			GameStatus::OutOfFuel => info!("out of fuel, collected {}", self.drill.money()),
			GameStatus::Crashed => info!("drill hit lava at {:?}", self.drill.position),
		}
	}

	pub fn render<R: Renderer>(&self, out: &mut R) {
		match self.status() {
			GameStatus::OutOfFuel => {
				out.fill_background(Color::Green);
				out.draw_text(GAME_OVER_TEXT, GAME_OVER_POS.0, GAME_OVER_POS.1, TITLE_FONT_SIZE, Color::Black);
				out.draw_text(
					&format_collected_money(self.drill.money()),
					SUMMARY_POS.0,
					SUMMARY_POS.1,
					HUD_FONT_SIZE,
					Color::Black,
				);
			}
			GameStatus::Crashed => {
				out.fill_background(Color::Red);
				out.draw_text(GAME_OVER_TEXT, GAME_OVER_POS.0, GAME_OVER_POS.1, TITLE_FONT_SIZE, Color::White);
			}
			GameStatus::Running => {
				out.fill_background(Color::SkyBlue);
				out.fill_rect(Color::Brown, 0, GROUND_TOP, WINDOW_WIDTH, WINDOW_HEIGHT - GROUND_TOP);
				for (pos, tile) in self.grid.iter() {
					let (x, y) = pos.to_pixel();
					out.draw_tile(tile, x, y);
				}
				let (x, y) = self.drill.pixel_position();
				out.draw_sprite(self.drill.facing.frame_index(), x, y);
				for (line, y) in format_hud(&self.drill).iter().zip(HUD_LINE_Y) {
					out.draw_text(line, HUD_X, y, HUD_FONT_SIZE, Color::Black);
				}
			}
		}
	}
}

/// Fixed-cadence driver: turns wall time into whole ticks and redraws after
/// each one.
#[derive(Debug, Clone)]
pub struct GameLoop {
	pub game: Game,
	interval: Duration,
	pending: Duration,
}

impl GameLoop {
	pub fn new(game: Game) -> Self {
		let interval = game.config().tick_interval();
		Self { game, interval, pending: Duration::ZERO }
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Runs every tick that `elapsed` makes due and returns how many ran.
	/// Leftover time carries over to the next call.
	pub fn advance<R: Renderer>(&mut self, elapsed: Duration, out: &mut R) -> usize {
		if self.interval.is_zero() {
			return 0;
		}
		self.pending += elapsed;
		let mut ticks = 0;
		while self.pending >= self.interval {
			self.pending -= self.interval;
			self.game.tick(self.interval);
			self.game.render(out);
			ticks += 1;
		}
		ticks
	}

	/// Forwards input and redraws straight away.
	pub fn handle_input<R: Renderer>(
		&mut self,
		direction: Direction,
		out: &mut R,
	) -> Result<Option<MoveReport>, GameError> {
		let report = self.game.handle_input(direction);
		self.game.render(out);
		report
	}
}
