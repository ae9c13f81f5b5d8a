//! Tests for session commands: moves, restarts and mode changes.

use noughts_core::{
    Board, Cell, GameResult, GameState, Mode, Move, MoveError, Player, ScoreBoard,
};

/// Plays alternating moves starting from whoever is due, panicking on rejection.
fn play(game: &mut GameState, indices: &[usize]) {
    for &index in indices {
        let player = game.to_move();
        game.make_move(index, player).expect("Valid move");
    }
}

#[test]
fn test_pvp_draw_counts_once() {
    let mut game = GameState::with_seed(1);
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.status().result, GameResult::Draw);
    assert_eq!(snapshot.board().to_compact(), "XOXXOOOXX");
    assert_eq!(*snapshot.scores().draws(), 1);
    assert_eq!(*snapshot.scores().x_wins(), 0);
    assert_eq!(*snapshot.scores().o_wins(), 0);
}

#[test]
fn test_set_mode_zeroes_scores() {
    let mut game = GameState::with_seed(1);
    play(&mut game, &[0, 3, 1, 4, 2]);
    // O opens the second game and takes the top row.
    game.restart();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(*game.scores().x_wins(), 1);
    assert_eq!(*game.scores().o_wins(), 1);

    let update = game.set_mode(Mode::AiMedium);
    assert_eq!(*update.scores(), ScoreBoard::new());
    assert!(update.board().is_blank());
    assert_eq!(update.status().result, GameResult::InProgress);
    assert_eq!(game.mode(), Mode::AiMedium);
}

#[test]
fn test_restart_keeps_scores() {
    let mut game = GameState::with_seed(1);
    play(&mut game, &[0, 3, 1, 4, 2]);
    let update = game.restart();
    assert!(update.board().is_blank());
    assert_eq!(*game.scores().x_wins(), 1);
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = GameState::with_seed(1);
    play(&mut game, &[0, 3, 1, 4, 2]);
    let board = *game.board();

    for index in [5, 6, 7, 8] {
        for player in [Player::X, Player::O] {
            assert_eq!(game.make_move(index, player), Err(MoveError::GameOver));
        }
    }
    assert_eq!(*game.board(), board);
}

#[test]
fn test_opener_alternates_in_pvp_mode_change() {
    let mut game = GameState::with_seed(1);
    game.restart();
    assert_eq!(game.opener(), Player::O);
    // Staying in player-vs-player still flips the opener.
    game.set_mode(Mode::PlayerVsPlayer);
    assert_eq!(game.opener(), Player::X);
}

#[test]
fn test_human_opens_after_entering_computer_mode() {
    let mut game = GameState::with_seed(1);
    game.restart();
    assert_eq!(game.opener(), Player::O);

    let update = game.set_mode(Mode::AiHard);
    assert_eq!(game.opener(), Player::X);
    assert!(update.board().is_blank());
    assert_eq!(update.status().turn, Player::X);
}

#[test]
fn test_computer_reply_follows_each_human_move() {
    let mut game = GameState::with_seed(9);
    game.set_mode(Mode::AiEasy);

    let update = game.make_move(4, Player::X).unwrap();
    let marks = update
        .board()
        .cells()
        .iter()
        .filter(|c| **c == Cell::Occupied(Player::O))
        .count();
    assert_eq!(marks, 1);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[0], Move::new(Player::X, 4));
    assert_eq!(game.history()[1].player, Player::O);
}

#[test]
fn test_human_cannot_move_for_computer() {
    let mut game = GameState::with_seed(9);
    game.set_mode(Mode::AiMedium);
    assert_eq!(
        game.make_move(0, Player::O),
        Err(MoveError::WrongPlayer {
            attempted: Player::O,
            expected: Player::X
        })
    );
    assert!(game.board().is_blank());
}

#[test]
fn test_no_reply_once_human_wins() {
    let mut game = GameState::with_seed(3);
    game.set_mode(Mode::AiEasy);

    // Keep offering the top row; easy may or may not block.
    let mut finished = None;
    for index in [0, 1, 2, 3, 4, 5, 6, 7, 8] {
        if !game.board().is_empty(index) {
            continue;
        }
        let update = game.make_move(index, Player::X).unwrap();
        if update.status().result.is_complete() {
            finished = Some(update);
            break;
        }
    }

    let update = finished.expect("Game should finish");
    if update.status().result == GameResult::Win(Player::X) {
        // The winning move is the last one; the computer did not answer it.
        assert_eq!(game.history().last().map(|m| m.player), Some(Player::X));
    }
    assert_eq!(game.make_move(0, Player::X), Err(MoveError::GameOver));
}

#[test]
fn test_snapshot_serializes_for_renderers() {
    let mut game = GameState::with_seed(1);
    game.set_mode(Mode::AiHard);
    game.make_move(0, Player::X).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(*snapshot.mode(), Mode::AiHard);
    assert_eq!(snapshot.board(), &"X___O____".parse::<Board>().unwrap());
}
