//! End-to-end properties of the exhaustive search

use oxo::{
    Action, Board, Error, Outcome, Player,
    solver::{best_moves, evaluate_moves, game_value, optimal_action},
    tictactoe::reachable_boards,
};

mod optimal_play {
    use super::*;

    fn play_out_optimally(mut board: Board) -> Board {
        while !board.is_terminal() {
            let action = optimal_action(&board).expect("non-terminal board must have a move");
            board = board.make_move(action).expect("optimal move must be legal");
        }
        board
    }

    #[test]
    fn perfect_play_from_the_empty_board_draws() {
        let terminal = play_out_optimally(Board::new());
        assert_eq!(terminal.utility(), 0);
        assert_eq!(Outcome::of(&terminal), Some(Outcome::Draw));
    }

    #[test]
    fn perfect_play_from_every_opening_draws() {
        for opening in Board::new().legal_moves() {
            let board = Board::new().make_move(opening).unwrap();
            assert_eq!(
                game_value(&board).unwrap(),
                0,
                "opening {opening:?} should be draw-valued"
            );

            let terminal = play_out_optimally(board);
            assert_eq!(
                Outcome::of(&terminal),
                Some(Outcome::Draw),
                "opening {opening:?} should play out to a draw"
            );
        }
    }

    #[test]
    fn turns_alternate_during_play() {
        let mut board = Board::new();
        let mut expected = Player::X;
        while !board.is_terminal() {
            assert_eq!(board.to_move(), expected);
            board = board.make_move(optimal_action(&board).unwrap()).unwrap();
            expected = expected.opponent();
        }
    }

    #[test]
    fn immediate_win_is_taken() {
        // X holds the top-left corner and top edge; (0, 2) wins on the spot.
        let board = Board::from_string("XX.OO....").unwrap();
        let action = optimal_action(&board).unwrap();
        assert_eq!(action, Action::new(0, 2));
        assert_eq!(board.make_move(action).unwrap().utility(), 1);
    }

    #[test]
    fn forced_block_is_taken() {
        // O threatens the left column; X's only non-losing reply is (2, 0).
        let board = Board::from_string("OX.O.X...").unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(optimal_action(&board).unwrap(), Action::new(2, 0));
    }

    #[test]
    fn terminal_positions_are_rejected() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert!(matches!(
            optimal_action(&board),
            Err(Error::TerminalPosition { .. })
        ));
    }
}

mod move_evaluation {
    use super::*;

    #[test]
    fn best_moves_are_legal_and_consistent_with_game_value() {
        // Sweep the cheap tail of the position space: everything with at
        // least six pieces already on the board.
        for board in reachable_boards() {
            if board.is_terminal() || board.occupied_count() < 6 {
                continue;
            }

            let value = game_value(&board).unwrap();
            let legal = board.legal_moves();
            let best = best_moves(&board).unwrap();
            assert!(!best.is_empty());

            for (action, move_value) in evaluate_moves(&board).unwrap() {
                assert!(legal.contains(&action));
                let is_best = best.contains(&action);
                assert_eq!(
                    is_best,
                    move_value == value,
                    "move {action:?} on '{}' valued {move_value}, position valued {value}",
                    board.encode()
                );
            }
        }
    }

    #[test]
    fn evaluations_cover_every_legal_move() {
        let board = Board::from_string("X...O....").unwrap();
        let values = evaluate_moves(&board).unwrap();
        assert_eq!(values.len(), board.legal_moves().len());
    }
}

mod against_weaker_opponents {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn optimal_player_never_loses_to_random() {
        let mut rng = StdRng::seed_from_u64(7);

        for game in 0..25 {
            let mut board = Board::new();
            while !board.is_terminal() {
                let action = match board.to_move() {
                    Player::X => optimal_action(&board).unwrap(),
                    Player::O => {
                        let moves = board.legal_moves();
                        moves[rng.random_range(0..moves.len())]
                    }
                };
                board = board.make_move(action).unwrap();
            }

            assert!(
                board.utility() >= 0,
                "game {game}: optimal X lost on '{}'",
                board.encode()
            );
        }
    }
}
