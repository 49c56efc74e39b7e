pub mod config;
pub mod coords;
pub mod drill;
pub mod engine;
pub mod error;
pub mod hud;
pub mod render;
pub mod resources;
pub mod tile;
pub mod world;

// Re-exports for convenience in tests and integration users.
pub use config::GameConfig;
pub use coords::{Direction, TILE_SIZE, TilePos};
pub use drill::{DigOutcome, Drill, Facing, MoveReport};
pub use engine::{Game, GameLoop, GameStatus};
pub use error::GameError;
pub use hud::{format_collected_money, format_hud};
pub use render::{Color, DrawCommand, Frame, Renderer};
pub use resources::Earnings;
pub use tile::{MineralYield, Tile};
pub use world::GridWorld;
