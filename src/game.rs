/*
 * 界面侧的对局控制：选子、走子、轮到 AI 时调用搜索
 *
 * 人类的走子直接在当前局面上修改；AI 的走子由搜索返回一个全新的局面，整体替换当前局面
 */
use std::cmp::Ordering;

use engine::board::{Board, Cell, Move, Player, Position};
use engine::search::search;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Selected(Position), // 选中了己方棋子
    Moved(Move),        // 走子成功，轮到对方
    Cleared,            // 目标不合法，取消选中
    Ignored,            // 点在空格或对方棋子上，或对局已结束
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    ToMove(Player),
    // 子力相同时没有赢家
    Over { winner: Option<Player> },
}

pub struct Game {
    pub board: Board,
    pub depth: u32,
    selected: Option<Position>, // 当前选中的棋子位置
}

impl Game {
    pub fn new(board: Board, depth: u32) -> Self {
        Game {
            board,
            depth,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn status(&self) -> Status {
        if !self.board.is_terminal() {
            return Status::ToMove(self.board.turn);
        }
        let ones = self.board.count(Cell::PlayerOne);
        let twos = self.board.count(Cell::PlayerTwo);
        let winner = match ones.cmp(&twos) {
            Ordering::Greater => Some(Player::One),
            Ordering::Less => Some(Player::Two),
            Ordering::Equal => None,
        };
        Status::Over { winner }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status(), Status::Over { .. })
    }

    pub fn click(&mut self, pos: Position) -> Click {
        if self.is_over() {
            return Click::Ignored;
        }
        match self.selected.take() {
            None => {
                if self.board.chess_at(pos).belong_to(self.board.turn) {
                    self.selected = Some(pos);
                    Click::Selected(pos)
                } else {
                    Click::Ignored
                }
            }
            Some(from) => {
                if !self.board.is_move_valid(from, pos) {
                    return Click::Cleared;
                }
                let m = Move {
                    player: self.board.turn,
                    from,
                    to: pos,
                };
                self.board.apply_move(&m);
                info!("human move {}", m.to_notation(self.board.size()));
                Click::Moved(m)
            }
        }
    }

    // AI 走子，没有合法走法时局面不变，返回 None
    pub fn ai_move(&mut self) -> Option<Move> {
        let result = search(&self.board, self.depth);
        let best = result.best_state?;
        self.board = best;
        self.selected = None;
        result.best_move
    }

    pub fn status_text(&self) -> String {
        match self.status() {
            Status::ToMove(Player::One) => "⚪ to move".to_owned(),
            Status::ToMove(Player::Two) => "⚫ to move".to_owned(),
            Status::Over { winner: Some(Player::One) } => "Game over: ⚪ wins".to_owned(),
            Status::Over { winner: Some(Player::Two) } => "Game over: ⚫ wins".to_owned(),
            Status::Over { winner: None } => "Game over: draw".to_owned(),
        }
    }
}
