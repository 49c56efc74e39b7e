use hu_load::hud::*;
use hu_load::*;

#[test]
fn hud_lines_sit_top_left() {
    let game = Game::with_grid(GridWorld::bare(), GameConfig::default());
    let mut frame = Frame::new();
    game.render(&mut frame);

    let hud: Vec<_> = frame
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, x, y, font_size, .. } => Some((text.clone(), *x, *y, *font_size)),
            _ => None,
        })
        .collect();
    assert_eq!(
        hud,
        vec![
            ("Fuel: 10000".to_string(), 10, 20, 25.0),
            ("Money: 0".to_string(), 10, 50, 25.0),
            ("Haul: 0".to_string(), 10, 80, 25.0),
        ]
    );
}

#[test]
fn grid_fills_the_window() {
    assert_eq!(GridWorld::bare().cols() * TILE_SIZE, WINDOW_WIDTH);
    assert_eq!(GridWorld::bare().rows() * TILE_SIZE, WINDOW_HEIGHT);
}

#[test]
fn game_over_title() {
    assert_eq!(GAME_OVER_TEXT, "GAME OVER");
    assert_eq!(TITLE_FONT_SIZE, 48.0);
    assert_eq!(GAME_OVER_POS, (250, 250));
}

#[test]
fn frames_serialize_to_json() {
    let game = Game::with_grid(GridWorld::bare(), GameConfig::default());
    let mut frame = Frame::new();
    game.render(&mut frame);
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["commands"][0]["op"], "Background");
    assert_eq!(json["commands"][0]["color"], "SkyBlue");
    assert_eq!(json["commands"][1]["op"], "Rect");
    assert_eq!(json["commands"][1]["color"], "Brown");
    assert_eq!(json["commands"][2]["tile"], "Sky");
}
