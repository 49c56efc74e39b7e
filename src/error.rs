use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
	#[error("Tile ({row}, {col}) is outside the grid")]
	OutOfBounds { row: i32, col: i32 },
	#[error("Cannot read config: {0}")]
	ConfigIo(#[from] std::io::Error),
	#[error("Invalid config: {0}")]
	ConfigParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn out_of_bounds_message_names_the_tile() {
		let e = GameError::OutOfBounds { row: -1, col: 16 };
		assert_eq!(e.to_string(), "Tile (-1, 16) is outside the grid");
	}
}
