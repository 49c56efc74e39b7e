use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use hu_load::Color as GameColor;
use hu_load::config::CONFIG_ENV_VAR;
use hu_load::hud::{WINDOW_HEIGHT, WINDOW_WIDTH};
use hu_load::{Direction, Facing, Frame, Game, GameConfig, GameLoop, Renderer, TILE_SIZE, Tile};
use log::{error, info, warn};

// ---------- Constants ----------
const KEY_BINDINGS: [(KeyCode, Direction); 4] = [
	(KeyCode::ArrowUp, Direction::Up),
	(KeyCode::ArrowDown, Direction::Down),
	(KeyCode::ArrowLeft, Direction::Left),
	(KeyCode::ArrowRight, Direction::Right),
];

// ---------- Resources ----------
#[derive(Resource)]
struct HuLoad {
	game_loop: GameLoop,
	/// Last redraw requested by the game; painted every display frame.
	frame: Frame,
}

impl HuLoad {
	fn new(game: Game) -> Self {
		let game_loop = GameLoop::new(game);
		let mut frame = Frame::new();
		game_loop.game.render(&mut frame);
		Self { game_loop, frame }
	}
}

// ---------- Entry ----------
fn main() {
	let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

	App::new()
		.add_plugins(DefaultPlugins.set(WindowPlugin {
			primary_window: Some(Window {
				title: "HU-Load Game".to_string(),
				resolution: (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32).into(),
				resizable: false,
				..Default::default()
			}),
			..Default::default()
		}))
		.add_plugins(EguiPlugin::default())
		.insert_resource(HuLoad::new(Game::new(load_config())))
		.add_systems(Startup, setup_camera)
		.add_systems(Update, (handle_drill_input, tick_game).chain())
		.add_systems(EguiPrimaryContextPass, draw_frame)
		.run();
}

fn load_config() -> GameConfig {
	let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
		return GameConfig::default();
	};
	match GameConfig::load(&path) {
		Ok(config) => {
			info!("loaded config from {}", path);
			config
		}
		Err(e) => {
			error!("{}: {}, falling back to defaults", path, e);
			GameConfig::default()
		}
	}
}

// ---------- Setup ----------
fn setup_camera(mut commands: Commands) {
	commands.spawn(Camera2d);
}

// ---------- Systems ----------
fn handle_drill_input(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<HuLoad>) {
	let HuLoad { game_loop, frame } = &mut *state;
	for (key, direction) in KEY_BINDINGS {
		if keys.just_pressed(key) {
			if let Err(e) = game_loop.handle_input(direction, frame) {
				warn!("{}", e);
			}
		}
	}
}

fn tick_game(time: Res<Time>, mut state: ResMut<HuLoad>) {
	let HuLoad { game_loop, frame } = &mut *state;
	game_loop.advance(time.delta(), frame);
}

fn draw_frame(mut egui_ctx: EguiContexts, state: Res<HuLoad>) {
	if let Ok(ctx) = egui_ctx.ctx_mut() {
		egui::CentralPanel::default().frame(egui::Frame::none()).show(&*ctx, |ui| {
			let size = egui::vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
			let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
			let mut out = PainterRenderer { painter: &painter, origin: response.rect.min };
			state.frame.replay(&mut out);
		});
	}
}

// ---------- Painting ----------
// Flat colours stand in for the tile and drill images.
struct PainterRenderer<'a> {
	painter: &'a egui::Painter,
	origin: egui::Pos2,
}

impl PainterRenderer<'_> {
	fn at(&self, x: i32, y: i32) -> egui::Pos2 {
		self.origin + egui::vec2(x as f32, y as f32)
	}

	fn tile_rect(&self, x: i32, y: i32) -> egui::Rect {
		egui::Rect::from_min_size(self.at(x, y), egui::Vec2::splat(TILE_SIZE as f32))
	}
}

impl Renderer for PainterRenderer<'_> {
	fn fill_background(&mut self, color: GameColor) {
		let rect = egui::Rect::from_min_size(
			self.origin,
			egui::vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
		);
		self.painter.rect_filled(rect, 0.0, color32(color));
	}

	fn fill_rect(&mut self, color: GameColor, x: i32, y: i32, width: i32, height: i32) {
		let rect = egui::Rect::from_min_size(self.at(x, y), egui::vec2(width as f32, height as f32));
		self.painter.rect_filled(rect, 0.0, color32(color));
	}

	fn draw_tile(&mut self, tile: Tile, x: i32, y: i32) {
		let rect = self.tile_rect(x, y);
		self.painter.rect_filled(rect, 0.0, tile_color(tile));
		if tile.is_mineral() || tile == Tile::Lava {
			self.painter.text(
				rect.center(),
				egui::Align2::CENTER_CENTER,
				tile.glyph(),
				egui::FontId::monospace(22.0),
				egui::Color32::WHITE,
			);
		}
	}

	fn draw_sprite(&mut self, frame_index: usize, x: i32, y: i32) {
		let rect = self.tile_rect(x, y).shrink(6.0);
		self.painter.rect_filled(rect, 6.0, egui::Color32::from_rgb(0xe0, 0xa0, 0x20));
		let arrow = match Facing::from_frame_index(frame_index) {
			Some(Facing::Up) => "^",
			Some(Facing::Down) => "v",
			Some(Facing::Left) => "<",
			Some(Facing::Right) => ">",
			_ => "o",
		};
		self.painter.text(
			rect.center(),
			egui::Align2::CENTER_CENTER,
			arrow,
			egui::FontId::monospace(24.0),
			egui::Color32::BLACK,
		);
	}

	fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: f32, color: GameColor) {
		self.painter.text(
			self.at(x, y),
			egui::Align2::LEFT_BOTTOM,
			text,
			egui::FontId::proportional(font_size),
			color32(color),
		);
	}
}

fn color32(c: GameColor) -> egui::Color32 {
	match c {
		GameColor::SkyBlue => egui::Color32::from_rgb(0x87, 0xce, 0xeb),
		GameColor::Brown => egui::Color32::from_rgb(0xa5, 0x2a, 0x2a),
		GameColor::Green => egui::Color32::from_rgb(0x00, 0x80, 0x00),
		GameColor::Red => egui::Color32::from_rgb(0xff, 0x00, 0x00),
		GameColor::Black => egui::Color32::BLACK,
		GameColor::White => egui::Color32::WHITE,
	}
}

fn tile_color(t: Tile) -> egui::Color32 {
	match t {
		Tile::Sky => egui::Color32::from_rgb(0x87, 0xce, 0xeb),
		Tile::Dug => egui::Color32::from_rgb(0x3b, 0x2a, 0x1e),
		Tile::Grass => egui::Color32::from_rgb(0x4c, 0xa3, 0x3b),
		Tile::Dirt => egui::Color32::from_rgb(0x8b, 0x5a, 0x2b),
		Tile::SoftObstacle => egui::Color32::from_rgb(0x80, 0x80, 0x80),
		Tile::HardObstacle => egui::Color32::from_rgb(0x40, 0x40, 0x48),
		Tile::Lava => egui::Color32::from_rgb(0xe2, 0x4a, 0x10),
		Tile::Diamond => egui::Color32::from_rgb(0x5b, 0xc8, 0xe8),
		Tile::Emerald => egui::Color32::from_rgb(0x1f, 0xa0, 0x5a),
		Tile::Ruby => egui::Color32::from_rgb(0xb0, 0x10, 0x30),
	}
}
