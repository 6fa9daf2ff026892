
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::BoardTestState;

    #[test]
    fn undo_with_empty_history_is_a_noop() {
        let level = r#"
#@ #
"#;
        let mut game = BoardTestState::new(level);
        assert_eq!(game.board.undo(), UndoOutcome::NothingToUndo);
        game.assert_matches(level);
        assert_eq!(game.board.move_count(), 0);
    }

    #[test]
    fn undo_reverses_a_player_move() {
        let level = r#"
#@ #
"#;
        let mut game = BoardTestState::new(level);
        game.assert_move(Right);
        assert_eq!(game.board.undo(), UndoOutcome::PlayerMove);
        game.assert_matches(level);
        assert_eq!(game.board.move_count(), 0);
    }

    #[test]
    fn undo_reverses_a_push() {
        let level = r#"
#@$ #
"#;
        let mut game = BoardTestState::new(level);
        let MoveOutcome::PlayerAndBoxMove(pushed) = game.assert_move(Right) else {
            panic!("expected a push");
        };
        assert_eq!(game.board.undo(), UndoOutcome::PlayerAndBoxMove(pushed));
        game.assert_matches(level);
        assert_eq!(game.board.move_count(), 0);
    }

    #[test]
    fn undo_restores_unresolved_counts() {
        let level = r#"
#@$.#
"#;
        let mut game = BoardTestState::new(level);
        game.assert_move(Right);
        assert_eq!(game.board.box_counts().unresolved_light, 0);

        game.board.undo();
        assert_eq!(game.board.box_counts().unresolved_light, 1);
    }

    #[test]
    fn undo_sequence_restores_the_initial_layout() {
        let level = r#"
######
#@$  #
# $  #
#  . #
######
"#;
        let mut game = BoardTestState::new(level);
        game.assert_moves(&[Right, Down, Left, Up]);
        assert_eq!(game.board.move_count(), 4);

        // Last two moves were plain walks, the first two were pushes.
        assert_eq!(game.board.undo(), UndoOutcome::PlayerMove);
        assert_eq!(game.board.undo(), UndoOutcome::PlayerMove);
        assert!(matches!(
            game.board.undo(),
            UndoOutcome::PlayerAndBoxMove(_)
        ));
        assert!(matches!(
            game.board.undo(),
            UndoOutcome::PlayerAndBoxMove(_)
        ));

        game.assert_matches(level);
        assert_eq!(game.board.move_count(), 0);
        assert_eq!(game.board.undo(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn undo_leaves_progress_untouched() {
        let level = r#"
#@ #
"#;
        let mut game = BoardTestState::new(level);
        game.assert_move(Right);
        let player = game.board.player();
        assert_eq!(game.board.entity(player).map(|e| e.progress), Some(0.0));

        game.board.undo();
        assert_eq!(game.board.entity(player).map(|e| e.progress), Some(0.0));
        game.assert_matches(level);
    }
}
