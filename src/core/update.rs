use tracing::debug;

use crate::core::{GameChangeType, GameState, GameUpdate, UserAction};

/// Applies one action to `game` in place.
///
/// Rejected moves (a wall ahead, or a crate that cannot be pushed) leave `game` untouched
/// and are reported as `WallBlocked`/`PushBlocked` rather than as errors. Leaving the grid
/// counts as hitting a wall, since level files do not guarantee a closed border.
pub fn step(game: &mut GameState, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d.delta(),
    };

    let source = game.player;
    let dest = source + dir;
    let Some(&dest_cell) = game.board.get(&dest) else {
        debug!(?dest, "move off the board");
        return GameUpdate::WallBlocked;
    };
    let source_cell = game.board[&source];

    let pushing = dest_cell.has_crate();
    if pushing {
        let beyond = dest + dir;
        let beyond_cell = match game.board.get(&beyond) {
            Some(&cell) if cell.is_floor() => cell,
            _ => {
                debug!(?dest, ?beyond, "push blocked");
                return GameUpdate::PushBlocked;
            }
        };

        game.board[&beyond] = beyond_cell.with_crate();
    } else if !dest_cell.is_floor() {
        debug!(?dest, ?dest_cell, "walked into a wall");
        return GameUpdate::WallBlocked;
    }

    // All three cells were read before the first write above.
    game.board[&source] = source_cell.vacated();
    game.board[&dest] = dest_cell.vacated().with_player();
    game.player = dest;
    game.moves += 1;

    GameUpdate::Moved {
        moves: game.moves,
        change: if pushing {
            GameChangeType::PlayerAndCrateMove
        } else {
            GameChangeType::PlayerMove
        },
    }
}
