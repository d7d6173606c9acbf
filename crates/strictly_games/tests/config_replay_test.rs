//! Tests for config files and history replay.

use std::io::Write;
use tempfile::NamedTempFile;

use strictly_games::{GameConfig, ReplayError, load_history, replay};
use strictly_tictactoe::{Game, Outcome, Symbol};

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Write failed");
    file
}

#[test]
fn test_config_from_file() {
    let file = temp_file("rows = 4\ncolumns = 5\nrun_length = 4\nplayer_x = \"Alice\"\n");
    let config = GameConfig::from_file(file.path()).expect("Load failed");

    let game = config.new_game().expect("Valid config");
    assert_eq!(game.rules().dimensions().rows(), 4);
    assert_eq!(game.rules().dimensions().columns(), 5);
    assert_eq!(game.players().name(Symbol::X), "Alice");
    assert_eq!(game.players().name(Symbol::O), "Player 2");
}

#[test]
fn test_config_parse_error() {
    let file = temp_file("rows = \"three\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_config_file() {
    let err = GameConfig::from_file("/nonexistent/strictly_games.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_replay_matches_interactive_play() {
    let coords = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 0)];
    let json = serde_json::to_string(
        &coords
            .iter()
            .map(|(row, column)| serde_json::json!({ "row": row, "column": column }))
            .collect::<Vec<_>>(),
    )
    .expect("Serializable");
    let file = temp_file(&json);

    let mut replayed = Game::classic();
    let snapshot = replay(&mut replayed, &load_history(file.path()).expect("Load failed"))
        .expect("Replay failed");

    let mut interactive = Game::classic();
    for (row, column) in coords {
        interactive.submit_move(row, column).expect("Valid move");
    }

    assert_eq!(snapshot, interactive.snapshot().expect("Consistent log"));
    assert_eq!(replayed, interactive);
}

#[test]
fn test_replay_after_game_over_reports_index() {
    let file = temp_file(
        r#"[{"row":0,"column":0},{"row":1,"column":1},{"row":0,"column":1},
            {"row":1,"column":0},{"row":0,"column":2},{"row":2,"column":2}]"#,
    );
    let mut game = Game::classic();
    let err = replay(&mut game, &load_history(file.path()).expect("Load failed")).unwrap_err();
    assert!(matches!(err, ReplayError::Rejected { index: 5, .. }));
    assert_eq!(game.outcome(), Ok(Outcome::Win(Symbol::X)));
}
