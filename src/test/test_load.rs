
mod test {
    use crate::core::*;
    use crate::test::test_util::BoardTestState;

    #[test]
    fn load_populates_grid_and_entities() {
        let level = "\
4 4 4 4 4
4 1 2 0 4
4 5 0 3 4
4 4 4 4 4";
        let board = Board::load(level).unwrap();

        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 4);
        assert_eq!(board.static_tile(Vec2 { i: 0, j: 0 }), Some(Tile::Wall));
        assert_eq!(board.static_tile(Vec2 { i: 2, j: 1 }), Some(Tile::Target));
        // Entity cells leave a floor tile behind.
        assert_eq!(board.static_tile(Vec2 { i: 1, j: 1 }), Some(Tile::Floor));
        assert_eq!(board.static_tile(Vec2 { i: 2, j: 3 }), Some(Tile::Floor));
        assert_eq!(board.static_tile(Vec2 { i: 4, j: 0 }), None);

        let (player_id, player) = board.entity_at(Vec2 { i: 1, j: 1 }).unwrap();
        assert_eq!(player.kind, EntityKind::Player);
        assert_eq!(player_id, board.player());

        let (_, light) = board.entity_at(Vec2 { i: 1, j: 2 }).unwrap();
        assert_eq!(light.kind, EntityKind::LightBox);
        let (_, heavy) = board.entity_at(Vec2 { i: 2, j: 3 }).unwrap();
        assert_eq!(heavy.kind, EntityKind::HeavyBox);
        assert!(board.entity_at(Vec2 { i: 1, j: 3 }).is_none());

        let counts = board.box_counts();
        assert_eq!(counts.light, 1);
        assert_eq!(counts.heavy, 1);
        assert_eq!(counts.unresolved_light, 1);
        assert_eq!(counts.unresolved_heavy, 1);
        assert_eq!(board.target_count(), 1);
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let level = "\n\n4 1 0 4\n\n";
        let board = Board::load(level).unwrap();
        assert_eq!(board.height(), 1);
        assert_eq!(board.width(), 4);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let level = "1 0 0\n0 0";
        assert!(matches!(
            Board::load(level),
            Err(LoadError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        ));
    }

    #[test]
    fn unrecognized_codes_are_rejected() {
        assert!(matches!(
            Board::load("1 7"),
            Err(LoadError::BadCode { row: 0, column: 1, .. })
        ));
        assert!(matches!(
            Board::load("1 x"),
            Err(LoadError::BadCode { row: 0, column: 1, .. })
        ));
    }

    #[test]
    fn missing_player_is_rejected() {
        assert!(matches!(
            Board::load("0 2 5"),
            Err(LoadError::MissingPlayer)
        ));
    }

    #[test]
    fn extra_player_is_rejected() {
        assert!(matches!(
            Board::load("1 0 1"),
            Err(LoadError::ExtraPlayer {
                at: Vec2 { i: 0, j: 2 }
            })
        ));
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(matches!(Board::load(""), Err(LoadError::EmptyLevel)));
        assert!(matches!(Board::load("\n  \n"), Err(LoadError::EmptyLevel)));
    }

    #[test]
    fn entities_start_settled() {
        let game = BoardTestState::new("#@$.#");
        for (_, entity) in game.board.entities() {
            assert!(entity.is_settled());
        }
        // Settled but not solved: the box is off its target.
        assert!(!game.board.is_finished());
    }

    #[test]
    fn board_without_boxes_is_finished_immediately() {
        let game = BoardTestState::new("#@ #");
        assert!(game.board.is_finished());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let path = std::env::temp_dir().join("soko_engine_load_test.sok");
        std::fs::write(&path, "4 1 2 5 4").unwrap();
        let board = Board::load_file(&path);
        std::fs::remove_file(&path).ok();

        let board = board.unwrap();
        assert_eq!(board.width(), 5);
        assert_eq!(board.box_counts().light, 1);
    }

    #[test]
    fn unreadable_file_surfaces_io_error() {
        let missing = std::env::temp_dir().join("soko_engine_no_such_level.sok");
        assert!(matches!(
            Board::load_file(&missing),
            Err(LoadError::Io(_))
        ));
    }
}
