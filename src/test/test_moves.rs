use Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

#[test]
fn when_move_right_observes_move_right() {
    let level = r#"
#@ #
"#;
    let mut game = GameTestState::new(level);
    let update = game.assert_step(UserAction::Move(Right));

    game.assert_matches(r#"
# @#
"#);
    assert_eq!(update, GameUpdate::Moved { moves: 1, change: GameChangeType::PlayerMove });
    assert_eq!(game.game_state.player, Vec2 { i: 0, j: 2 });
}

#[test]
fn when_push_pushes() {
    let level = r#"
#@$ #
"#;
    let mut game = GameTestState::new(level);
    let update = game.assert_move(Right);

    game.assert_matches(r#"
# @$#
"#);
    assert_eq!(update, GameUpdate::Moved { moves: 1, change: GameChangeType::PlayerAndCrateMove });
}

#[test]
fn walking_into_wall_changes_nothing() {
    let level = r#"
###
#@#
###
"#;
    let mut game = GameTestState::new(level);
    for direction in [Up, Down, Left, Right] {
        assert_eq!(game.assert_blocked(direction), GameUpdate::WallBlocked);
    }
    assert_eq!(game.game_state.moves, 0);
}

#[test]
fn when_block_pushed_into_block_remains_two_blocks() {
    let level = r#"
#@$$ #
"#;
    let mut game = GameTestState::new(level);
    assert_eq!(game.assert_blocked(Right), GameUpdate::PushBlocked);

    game.assert_matches(r#"
#@$$ #
"#);
}

#[test]
fn crate_cannot_be_pushed_into_wall_or_placed_crate() {
    let level = r#"
#####
#@$##
# $*#
#  .#
#####
"#;
    let mut game = GameTestState::new(level);
    assert_eq!(game.assert_blocked(Right), GameUpdate::PushBlocked);

    game.assert_move(Down);
    assert_eq!(game.assert_blocked(Right), GameUpdate::PushBlocked);
    assert_eq!(game.game_state.moves, 1);
}

#[test]
fn pushing_crate_off_the_board_is_blocked() {
    let level = r#"
 @$
"#;
    let mut game = GameTestState::new(level);
    assert_eq!(game.assert_blocked(Right), GameUpdate::PushBlocked);
}

#[test]
fn walking_off_the_board_is_blocked() {
    let level = r#"
@  
"#;
    let mut game = GameTestState::new(level);
    assert_eq!(game.assert_blocked(Left), GameUpdate::WallBlocked);
    assert_eq!(game.assert_blocked(Up), GameUpdate::WallBlocked);
    assert_eq!(game.assert_blocked(Down), GameUpdate::WallBlocked);
}

#[test]
fn crate_pushed_onto_target_is_placed() {
    let level = r#"
#@$.#
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);

    game.assert_matches(r#"
# @*#
"#);
}

#[test]
fn placed_crate_pushed_off_target_leaves_target_behind() {
    let level = r#"
#@*  #
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);

    game.assert_matches(r#"
# +$ #
"#);
}

#[test]
fn placed_crate_pushed_to_next_target_stays_placed() {
    let level = r#"
#@*.#
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);

    game.assert_matches(r#"
# +*#
"#);
}

#[test]
fn leaving_a_target_restores_it() {
    let level = r#"
#+  #
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);
    game.assert_matches(r#"
#.@ #
"#);

    game.assert_move(Left);
    game.assert_matches(r#"
#+  #
"#);
    assert_eq!(game.game_state.moves, 2);
}

#[test]
fn pushing_from_target_restores_it() {
    let level = r#"
#+$ #
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);

    game.assert_matches(r#"
#.@$#
"#);
}

#[test]
fn when_player_moves_back_game_is_equal() {
    let level = r#"
#@ $#
"#;
    let mut game = GameTestState::new(level);
    let original_board = game.game_state.board.clone();
    game.assert_move(Right);
    game.assert_move(Left);

    game.assert_matches(r#"
#@ $#
"#);
    assert_eq!(original_board, game.game_state.board);
    assert_eq!(game.game_state.moves, 2);
}

#[test]
fn when_blocks_swap_board_remains_equal() {
    let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
    let mut game = GameTestState::new(level);
    let original_board = game.game_state.board.clone();
    game.assert_moves(&[
        Right, Left,
        Down, Down,
        Right, Up,
        Right, Right, Up, Up,
        Left, Down, Right, Down, Left,]);
    game.assert_matches(r#"
#    #
# $  #
# $@ #
#    #
"#);
    game.assert_moves(&[
        Down, Left, Left, Up, Up,]);

    game.assert_matches(r#"
#    #
#@$  #
# $  #
#    #
"#);
    assert_eq!(original_board, game.game_state.board);
    assert_eq!(game.game_state.moves, 20);
}

#[test]
fn standard_level_push_then_wall() {
    let level = r#"
############
#@$.########
############
############
############
############
############
############
############
############
############
############
"#;
    let mut game = GameTestState::new(level);
    assert_eq!(game.game_state.board.size(), BoundsOriginRoot::default());
    assert!(!game.game_state.is_won());

    game.assert_move(Right);
    assert_eq!(game.game_state.moves, 1);
    assert_eq!(game.game_to_string().lines().nth(1), Some("# @*########"));
    assert!(game.game_state.is_won());

    assert_eq!(game.assert_blocked(Right), GameUpdate::PushBlocked);
    assert_eq!(game.game_state.moves, 1);
}

#[test]
fn won_when_no_bare_crate_remains() {
    let spare_target = GameTestState::new(r#"
#@*. #
"#);
    assert!(is_won(&spare_target.game_state.board));

    let no_targets_filled = GameTestState::new(r#"
#@$. #
"#);
    assert!(!is_won(&no_targets_filled.game_state.board));

    let all_targets_filled_but_extra_crate = GameTestState::new(r#"
#@*$ #
"#);
    assert!(!is_won(&all_targets_filled_but_extra_crate.game_state.board));
}

#[test]
fn locate_player_finds_player_on_target() {
    let game = GameTestState::new(r#"
#  #
# +#
"#);
    assert_eq!(locate_player(&game.game_state.board), Some(Vec2 { i: 1, j: 2 }));
}

#[test]
fn locate_player_prefers_last_in_scan_order() {
    let board = codec::parse_board("@ \n @", BoundsOriginRoot::new(2, 2)).unwrap();
    assert_eq!(locate_player(&board), Some(Vec2 { i: 1, j: 1 }));
}

#[test]
fn board_without_player_cannot_start() {
    let board = codec::parse_board("#$.#", BoundsOriginRoot::new(1, 4)).unwrap();
    assert!(locate_player(&board).is_none());
    assert!(matches!(GameState::new(board), Err(crate::error::BoardError::NoPlayer)));
}
