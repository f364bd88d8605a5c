//! Tests for the session state machine and its error taxonomy.

use tictactoe_core::{
    start_game, Board, GameConfig, GamePhase, MoveError, Outcome, Player, Position, Square,
    StrategyKind,
};

fn minimax_config() -> GameConfig {
    GameConfig {
        human_mark: Player::X,
        strategy: StrategyKind::Minimax,
        seed: None,
    }
}

/// Plays the human side with minimax through the public API until terminal.
fn play_minimax_vs_minimax() -> tictactoe_core::GameSession {
    let mut session = start_game(minimax_config());
    while session.outcome() == Outcome::InProgress {
        let mut scratch = session.board().clone();
        let pos = tictactoe_core::best_move(&mut scratch, session.human_mark())
            .expect("open board has a legal move");
        session
            .submit_human_move(pos.row(), pos.col())
            .expect("selected move is legal");
    }
    session
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut session = start_game(minimax_config());
    let report = session.submit_human_move(0, 0).expect("legal opening");
    let reply = report.automated.expect("game still open");

    let board_before = session.board().clone();
    let count_before = session.board().move_count();

    // Re-submitting the human's own square and the automated reply's square
    // must both bounce.
    assert_eq!(
        session.submit_human_move(0, 0),
        Err(MoveError::CellOccupied(report.human.position))
    );
    assert_eq!(
        session.submit_human_move(reply.position.row(), reply.position.col()),
        Err(MoveError::CellOccupied(reply.position))
    );

    assert_eq!(session.board(), &board_before);
    assert_eq!(session.board().move_count(), count_before);
    assert_eq!(session.phase(), GamePhase::AwaitingHuman);
}

#[test]
fn test_out_of_bounds_rejected_without_mutation() {
    let mut session = start_game(minimax_config());
    assert_eq!(
        session.submit_human_move(5, 5),
        Err(MoveError::OutOfBounds { row: 5, col: 5 })
    );
    assert_eq!(session.board().move_count(), 0);
}

#[test]
fn test_terminal_session_rejects_further_moves() {
    let mut session = play_minimax_vs_minimax();
    assert!(session.outcome().is_terminal());
    assert!(matches!(session.phase(), GamePhase::Terminal(_)));
    assert!(session.legal_moves().is_empty());
    assert_eq!(
        session.submit_human_move(0, 0),
        Err(MoveError::GameAlreadyOver)
    );
}

#[test]
fn test_outcome_stable_under_repeated_queries() {
    let mut session = start_game(minimax_config());
    session.submit_human_move(1, 1).expect("legal opening");
    let first = session.outcome();
    for _ in 0..10 {
        assert_eq!(session.outcome(), first);
    }
}

#[test]
fn test_legal_moves_match_board_vacancies() {
    let mut session = start_game(minimax_config());
    session.submit_human_move(0, 0).expect("legal opening");

    let legal = session.legal_moves();
    assert_eq!(legal.len(), 7);
    for pos in Position::ALL {
        let expected_legal = session.board().is_empty(pos);
        assert_eq!(legal.contains(&pos), expected_legal);
    }
}

#[test]
fn test_nine_moves_without_winner_is_draw_not_in_progress() {
    // Rules-level property: a full board with no line is exactly Draw.
    // X O X / X O O / O X X has no three-in-a-row.
    let mut board = Board::new();
    let layout = [
        (0, 0, Player::X),
        (0, 1, Player::O),
        (0, 2, Player::X),
        (1, 0, Player::X),
        (1, 1, Player::O),
        (1, 2, Player::O),
        (2, 0, Player::O),
        (2, 1, Player::X),
        (2, 2, Player::X),
    ];
    for (row, col, player) in layout {
        let pos = Position::new(row, col).expect("in bounds");
        assert_eq!(tictactoe_core::outcome(&board), Outcome::InProgress);
        board.set(pos, Square::Occupied(player));
    }
    assert_eq!(tictactoe_core::outcome(&board), Outcome::Draw);
}

#[test]
fn test_random_opponent_plays_only_legal_moves() {
    let mut session = start_game(GameConfig {
        human_mark: Player::X,
        strategy: StrategyKind::Random,
        seed: Some(3),
    });

    // Drive the game with a fixed human scan; every automated reply must
    // land on a square that was empty before the reply.
    while session.outcome() == Outcome::InProgress {
        let pos = session.legal_moves()[0];
        let before = session.board().clone();
        let report = session
            .submit_human_move(pos.row(), pos.col())
            .expect("first legal move is legal");
        if let Some(reply) = report.automated {
            assert_ne!(reply.position, report.human.position);
            assert!(before.is_empty(reply.position));
            assert_eq!(
                session.board().get(reply.position),
                Square::Occupied(Player::O)
            );
        }
    }
}

#[test]
fn test_session_serializes_turn_report() {
    let mut session = start_game(minimax_config());
    let report = session.submit_human_move(0, 0).expect("legal opening");
    let json = serde_json::to_string(&report).expect("report serializes");
    assert!(json.contains("\"outcome\""));
}
