/*
 * 搜索模块 - 固定深度 minimax
 *
 * - 不剪枝、不排序走法、没有置换表，也没有迭代深化
 * - 每个节点都是克隆出来的独立局面，递归过程中不修改任何已展开的局面
 * - 耗时与内存随 分支因子^深度 指数增长
 * - 分值始终站在 PlayerOne 的角度：正数对 PlayerOne 有利
 */

use tracing::{debug, info};

use crate::board::{Board, Move};

#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Minimax value of the chosen successor, `None` when there was nothing to choose.
    pub value: Option<i32>,
    pub best_move: Option<Move>,
    pub best_state: Option<Board>,
}

impl Board {
    /// Plain minimax over cloned successors.
    ///
    /// Stops at depth 0 or a terminal position and returns [`Board::evaluate`].
    /// `maximizing` picks max or min over the children, which are searched with the flag flipped.
    pub fn minimax(&self, depth: u32, maximizing: bool) -> i32 {
        if depth == 0 || self.is_terminal() {
            return self.evaluate();
        }

        let values = self
            .generate_successors()
            .into_iter()
            .map(|child| child.minimax(depth - 1, !maximizing));
        let best = if maximizing { values.max() } else { values.min() };

        // 非终局必有后继，这里只是防止对空集合取极值
        best.unwrap_or_else(|| self.evaluate())
    }
}

// 对每个后继做 minimax(depth - 1, false)，取分值严格最大的一个，同分取先生成的
// 注意：无论谁在走，这里都取最大值
pub fn search(state: &Board, depth: u32) -> SearchResult {
    let mut result = SearchResult {
        value: None,
        best_move: None,
        best_state: None,
    };

    for m in state.generate_moves() {
        let successor = state.make_move(&m);
        let value = successor.minimax(depth.saturating_sub(1), false);
        debug!(
            "candidate {} value {}",
            m.to_notation(state.size()),
            value
        );
        if result.value.map_or(true, |best| value > best) {
            result.value = Some(value);
            result.best_move = Some(m);
            result.best_state = Some(successor);
        }
    }

    match (&result.best_move, result.value) {
        (Some(m), Some(value)) => info!(
            "depth {}: best move {} value {}",
            depth,
            m.to_notation(state.size()),
            value
        ),
        _ => info!("depth {}: no legal move for {:?}", depth, state.turn),
    }
    result
}

/// Best successor of `state` at the given depth, or `None` when the side to move has no legal move.
pub fn select_best_move(state: &Board, depth: u32) -> Option<Board> {
    search(state, depth).best_state
}

#[cfg(test)]
mod tests {
    use crate::board::*;
    use crate::constant::DEFAULT_SEARCH_DEPTH;
    use crate::search::*;

    fn corner_board() -> Board {
        Board::from_fen("1b2/4/4/w3 w").unwrap()
    }

    #[test]
    fn test_minimax_depth_zero() {
        let mut board = Board::init(8);
        board.set_chess(Position::new(0, 1), Cell::Empty);
        assert_eq!(board.minimax(0, true), 10);
        assert_eq!(board.minimax(0, false), 10);
    }

    #[test]
    fn test_minimax_terminal() {
        // PlayerTwo 无子，任何深度都直接返回评估值
        let board = Board::from_fen("4/4/1w2/w3 w").unwrap();
        assert!(board.is_terminal());
        for depth in 0..4 {
            assert_eq!(board.minimax(depth, true), 20);
            assert_eq!(board.minimax(depth, false), 20);
        }

        let stuck = Board::from_fen("3/1b1/w2 w").unwrap();
        assert!(stuck.is_terminal());
        assert_eq!(stuck.minimax(5, true), 0);
        assert_eq!(stuck.minimax(5, false), 0);
    }

    #[test]
    fn test_minimax_without_captures() {
        // 没有吃子，子力差不会变化
        let mut board = Board::init(8);
        board.set_chess(Position::new(0, 1), Cell::Empty);
        assert!(!board.is_terminal());
        assert_eq!(board.minimax(3, true), 10);
        assert_eq!(board.minimax(2, false), 10);
    }

    #[test]
    fn test_select_best_move_single_successor() {
        let board = corner_board();
        let best = select_best_move(&board, 1).unwrap();
        assert_eq!(best, board.generate_successors()[0]);
        assert_eq!(best.chess_at(Position::new(2, 1)), Cell::PlayerOne);
        assert_eq!(best.turn, Player::Two);
    }

    #[test]
    fn test_select_best_move_first_on_tie() {
        let board = Board::init(8);
        let result = search(&board, DEFAULT_SEARCH_DEPTH);
        assert_eq!(result.value, Some(0));
        assert_eq!(result.best_state, Some(board.generate_successors()[0].clone()));
        let m = result.best_move.unwrap();
        assert_eq!(m.from, Position::new(5, 0));
        assert_eq!(m.to, Position::new(4, 1));
        // 原局面没有被修改
        assert_eq!(board, Board::init(8));
    }

    #[test]
    fn test_select_best_move_for_player_two() {
        let mut board = Board::init(8);
        board.turn = Player::Two;
        let best = select_best_move(&board, 2).unwrap();
        assert_eq!(best.turn, Player::One);
        assert_eq!(best.chess_at(Position::new(2, 1)), Cell::Empty);
        assert_eq!(best.chess_at(Position::new(3, 0)), Cell::PlayerTwo);
    }

    #[test]
    fn test_select_best_move_no_move() {
        assert!(select_best_move(&Board::empty(8), 3).is_none());
        let stuck = Board::from_fen("3/1b1/w2 w").unwrap();
        let result = search(&stuck, 3);
        assert!(result.best_state.is_none());
        assert!(result.best_move.is_none());
        assert!(result.value.is_none());
    }

    #[test]
    fn test_select_best_move_depth_zero() {
        let board = corner_board();
        let best = select_best_move(&board, 0).unwrap();
        assert_eq!(best, board.generate_successors()[0]);
    }
}
