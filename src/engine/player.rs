use log::info;

use crate::board::{
    Action, Board, Color, ConfigError, GameTree, HistoryDirection, SearchConfig, Square,
};

/// A computer player for one color.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    color: Color,
    tree: GameTree,
}

impl AiPlayer {
    /// Create a player for `color` with its own tree rooted at `board`.
    pub fn new(board: Board, color: Color, config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(AiPlayer {
            color,
            tree: GameTree::new(board, config)?,
        })
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.tree.current_board()
    }

    /// Whether the position in front of the player has it on move.
    #[must_use]
    pub fn on_move(&self) -> bool {
        self.board().turn() == self.color
    }

    /// Search for this player's best move without committing it.
    pub fn think(&mut self) -> Option<Action> {
        let best = self.tree.find_best_move(self.color == Color::White);
        if let Some(action) = &best {
            let stats = self.tree.last_stats();
            info!(
                "{} chooses {action} after {} nodes",
                self.color, stats.nodes
            );
        }
        best
    }

    /// Commit a move, this player's or the opponent's.
    pub fn play(&mut self, action: &Action) -> bool {
        self.tree.signal_move(action)
    }

    /// Think and commit in one step.
    pub fn think_and_play(&mut self) -> Option<Action> {
        let action = self.think()?;
        self.play(&action).then_some(action)
    }

    /// Forward a move given by squares, typically the opponent's.
    pub fn signal(&mut self, from: Square, to: Square) -> bool {
        self.tree.signal_squares(from, to)
    }

    /// Step the view of the game backwards or forwards along the played line.
    pub fn traverse_history(&mut self, direction: HistoryDirection) -> bool {
        self.tree.traverse_game_history(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LeafSign;

    fn player(color: Color) -> AiPlayer {
        let config = SearchConfig::with_depth(1).leaf_sign(LeafSign::SideToMove);
        AiPlayer::new(Board::new(), color, config).unwrap()
    }

    #[test]
    fn thinks_only_for_a_legal_move() {
        let mut white = player(Color::White);
        assert!(white.on_move());
        let action = white.think().unwrap();
        assert!(white.board().check_move(action.from, action.to).is_ok());
        assert!(white.play(&action));
        assert!(!white.on_move());
    }

    #[test]
    fn follows_opponent_moves() {
        let mut black = player(Color::Black);
        assert!(black.signal(Square(4, 1), Square(4, 3)));
        assert!(black.on_move());
        let reply = black.think_and_play().unwrap();
        assert_eq!(reply.piece.unwrap().color, Color::Black);
        assert_eq!(black.tree().move_history().len(), 2);
    }

    #[test]
    fn undo_restores_the_view() {
        let mut white = player(Color::White);
        assert!(white.signal(Square(6, 0), Square(5, 2)));
        assert!(white.traverse_history(HistoryDirection::Backward));
        assert_eq!(*white.board(), Board::new());
        assert!(white.traverse_history(HistoryDirection::Forward));
        assert!(white.board().piece_at(Square(5, 2)).is_some());
    }
}
