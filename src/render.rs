//! Drawing interface between the game state and whatever puts pixels on
//! screen.
//!
//! [`Frame`] records calls instead of drawing them, which is what the tests
//! and the GUI use.

use serde::{Deserialize, Serialize};

use crate::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
	SkyBlue,
	Brown,
	Green,
	Red,
	Black,
	White,
}

/// Sink for one redraw. Coordinates are window pixels, top-left origin;
/// text `y` is the baseline.
pub trait Renderer {
	fn fill_background(&mut self, color: Color);
	fn fill_rect(&mut self, color: Color, x: i32, y: i32, width: i32, height: i32);
	fn draw_tile(&mut self, tile: Tile, x: i32, y: i32);
	fn draw_sprite(&mut self, frame_index: usize, x: i32, y: i32);
	fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: f32, color: Color);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
	Background { color: Color },
	Rect { color: Color, x: i32, y: i32, width: i32, height: i32 },
	Tile { tile: Tile, x: i32, y: i32 },
	Sprite { frame_index: usize, x: i32, y: i32 },
	Text { text: String, x: i32, y: i32, font_size: f32, color: Color },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
	pub commands: Vec<DrawCommand>,
}

impl Frame {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn background(&self) -> Option<Color> {
		self.commands.iter().rev().find_map(|c| match c {
			DrawCommand::Background { color } => Some(*color),
			_ => None,
		})
	}

	pub fn texts(&self) -> impl Iterator<Item = &str> {
		self.commands.iter().filter_map(|c| match c {
			DrawCommand::Text { text, .. } => Some(text.as_str()),
			_ => None,
		})
	}

	pub fn tile_count(&self) -> usize {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::Tile { .. }))
			.count()
	}

	/// Replays the recorded commands into another renderer.
	pub fn replay<R: Renderer>(&self, out: &mut R) {
		for c in &self.commands {
			match c {
				DrawCommand::Background { color } => out.fill_background(*color),
				DrawCommand::Rect { color, x, y, width, height } => {
					out.fill_rect(*color, *x, *y, *width, *height)
				}
				DrawCommand::Tile { tile, x, y } => out.draw_tile(*tile, *x, *y),
				DrawCommand::Sprite { frame_index, x, y } => out.draw_sprite(*frame_index, *x, *y),
				DrawCommand::Text { text, x, y, font_size, color } => {
					out.draw_text(text, *x, *y, *font_size, *color)
				}
			}
		}
	}
}

impl Renderer for Frame {
	// A background fill hides everything drawn before it.
	fn fill_background(&mut self, color: Color) {
		self.commands.clear();
		self.commands.push(DrawCommand::Background { color });
	}

	fn fill_rect(&mut self, color: Color, x: i32, y: i32, width: i32, height: i32) {
		self.commands.push(DrawCommand::Rect { color, x, y, width, height });
	}

	fn draw_tile(&mut self, tile: Tile, x: i32, y: i32) {
		self.commands.push(DrawCommand::Tile { tile, x, y });
	}

	fn draw_sprite(&mut self, frame_index: usize, x: i32, y: i32) {
		self.commands.push(DrawCommand::Sprite { frame_index, x, y });
	}

	fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: f32, color: Color) {
		self.commands.push(DrawCommand::Text {
			text: text.to_string(),
			x,
			y,
			font_size,
			color,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn background_resets_frame() {
		let mut f = Frame::new();
		f.draw_tile(Tile::Dirt, 0, 0);
		f.fill_background(Color::Red);
		assert_eq!(f.commands.len(), 1);
		assert_eq!(f.background(), Some(Color::Red));
	}

	#[test]
	fn replay_copies_commands() {
		let mut f = Frame::new();
		f.fill_background(Color::SkyBlue);
		f.fill_rect(Color::Brown, 0, 100, 800, 500);
		f.draw_tile(Tile::Grass, 50, 100);
		f.draw_sprite(44, 400, 50);
		f.draw_text("Fuel: 1", 10, 20, 25.0, Color::Black);
		let mut copy = Frame::new();
		f.replay(&mut copy);
		assert_eq!(copy, f);
		assert_eq!(copy.texts().collect::<Vec<_>>(), vec!["Fuel: 1"]);
	}

	#[test]
	fn commands_serialize_with_op_tag() {
		let mut f = Frame::new();
		f.draw_sprite(3, 0, 0);
		let v = serde_json::to_value(&f).unwrap();
		assert_eq!(v["commands"][0]["op"], "Sprite");
		assert_eq!(v["commands"][0]["frame_index"], 3);
	}
}
