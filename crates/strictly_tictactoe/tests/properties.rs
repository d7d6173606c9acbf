//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use strictly_tictactoe::{
    MoveLog, Outcome, Rules, Symbol, active_player, derive_board, derive_outcome, submit_move,
};

/// Feeds every coordinate through the engine, keeping only accepted moves.
fn play_all(rules: &Rules, coords: &[(usize, usize)]) -> MoveLog {
    coords.iter().fold(MoveLog::new(), |log, (row, column)| {
        submit_move(&log, rules, *row, *column).unwrap_or(log)
    })
}

fn coords() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..4, 0usize..4), 0..30)
}

proptest! {
    #[test]
    fn prop_players_alternate_from_x(coords in coords()) {
        let rules = Rules::classic();
        let log = play_all(&rules, &coords);

        for (index, action) in log.iter().enumerate() {
            let expected = if index % 2 == 0 { Symbol::X } else { Symbol::O };
            prop_assert_eq!(action.player(), expected);
        }
        let expected_next = if log.len() % 2 == 0 { Symbol::X } else { Symbol::O };
        prop_assert_eq!(active_player(&log), expected_next);
    }

    #[test]
    fn prop_board_derivation_is_deterministic(coords in coords()) {
        let rules = Rules::classic();
        let log = play_all(&rules, &coords);
        let first = derive_board(&log, rules.dimensions()).unwrap();
        let second = derive_board(&log.clone(), rules.dimensions()).unwrap();
        prop_assert_eq!(first.occupied_count(), log.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_rejection_never_mutates(coords in coords(), row in 0usize..4, column in 0usize..4) {
        let rules = Rules::classic();
        let log = play_all(&rules, &coords);
        let before = log.clone();
        if submit_move(&log, &rules, row, column).is_err() {
            prop_assert_eq!(&log, &before);
        }
    }

    #[test]
    fn prop_only_the_final_move_can_end_the_game(coords in coords()) {
        let rules = Rules::classic();
        let log = play_all(&rules, &coords);

        for length in 0..log.len() {
            let prefix = MoveLog::from_moves(log.moves()[..length].to_vec());
            let board = derive_board(&prefix, rules.dimensions()).unwrap();
            prop_assert_eq!(
                derive_outcome(&board, rules.patterns(), rules.total_cells()),
                Outcome::InProgress
            );
        }
    }
}
