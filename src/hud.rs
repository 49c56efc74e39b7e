use crate::drill::Drill;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

pub const HUD_FONT_SIZE: f32 = 25.0;
pub const TITLE_FONT_SIZE: f32 = 48.0;
pub const HUD_X: i32 = 10;
/// Baselines of the Fuel, Money and Haul lines.
pub const HUD_LINE_Y: [i32; 3] = [20, 50, 80];

/// Top of the brown ground band painted under the tiles.
pub const GROUND_TOP: i32 = 100;

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const GAME_OVER_POS: (i32, i32) = (WINDOW_WIDTH / 2 - 150, WINDOW_HEIGHT / 2 - 50);
pub const SUMMARY_POS: (i32, i32) = (WINDOW_WIDTH / 2 - 150, WINDOW_HEIGHT / 2 + 30);

pub fn format_hud(drill: &Drill) -> [String; 3] {
	[
		format!("Fuel: {}", drill.fuel),
		format!("Money: {}", drill.money()),
		format!("Haul: {}", drill.haul()),
	]
}

pub fn format_collected_money(money: u64) -> String {
	format!("Collected Money: {}", money)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::drill::DRILL_START;
	use crate::tile::Tile;
	use crate::world::GridWorld;

	#[test]
	fn hud_format() {
		let mut grid = GridWorld::bare();
		let mut d = Drill::new(DRILL_START, 9_999);
		grid.set_tile(DRILL_START, Tile::Ruby).unwrap();
		d.dig(&mut grid).unwrap();
		let [fuel, money, haul] = format_hud(&d);
		assert_eq!(fuel, "Fuel: 9999");
		assert_eq!(money, "Money: 1600000");
		assert_eq!(haul, "Haul: 80");
	}

	#[test]
	fn end_screen_positions() {
		assert_eq!(GAME_OVER_POS, (250, 250));
		assert_eq!(SUMMARY_POS, (250, 330));
		assert_eq!(format_collected_money(42), "Collected Money: 42");
	}
}
