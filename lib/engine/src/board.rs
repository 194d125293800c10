/*
 * 棋盘模块（Board 与棋子表示）
 *
 * 设计要点
 * - 棋盘为 N×N 方格，N 在构造时确定，之后不再改变（默认 8）
 * - 每个格子是 Cell：PlayerOne / PlayerTwo / Empty，棋子没有独立身份，也没有升变
 * - Player 表示当前轮到的玩家，PlayerOne 先走
 * - Position 用 (row, col) 表示坐标，row 从上往下，col 从左往右，均从 0 开始
 * - Move 记录一次走子：起点与终点，棋子只是搬家，没有吃子
 * - Board 即搜索树上的一个节点：棋盘 + 走棋方
 *
 * 主要功能
 * - 构造空棋盘、按标准布局摆子、从 FEN 风格字符串加载局面
 * - 走法生成：每个己方棋子向四个斜方向走一格，目标必须在棋盘内且为空
 * - 后继生成：对每个走法克隆局面并应用，克隆之间互不共享存储
 * - 评估函数：PlayerOne 每子 +10，PlayerTwo 每子 -10，与走棋方无关
 * - 终局判定：任一方无子，或当前走棋方无路可走
 */

use std::fmt;

use anyhow::{anyhow, bail, Context};

use crate::constant::{DIRECTIONS, FEN_MAP, MAX_BOARD_SIZE, PIECE_VALUE, SEED_ROWS};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn next(&self) -> Player {
        if self == &Player::One {
            Player::Two
        } else {
            Player::One
        }
    }
    pub fn piece(&self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
    pub fn fen_char(&self) -> char {
        match self {
            Player::One => 'w',
            Player::Two => 'b',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Heuristic contribution of this cell, positive for PlayerOne.
    pub fn value(&self) -> i32 {
        match self {
            Cell::PlayerOne => PIECE_VALUE,
            Cell::PlayerTwo => -PIECE_VALUE,
            Cell::Empty => 0,
        }
    }
    pub fn belong_to(&self, player: Player) -> bool {
        Some(player) == self.player()
    }
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
    pub fn glyph(&self) -> &'static str {
        match self {
            Cell::PlayerOne => "⚪",
            Cell::PlayerTwo => "⚫",
            Cell::Empty => "",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }
    pub fn offset(&self, (d_row, d_col): (i32, i32)) -> Self {
        Position::new(self.row + d_row, self.col + d_col)
    }
    pub fn is_diagonal_step(&self, other: Position) -> bool {
        (self.row - other.row).abs() == 1 && (self.col - other.col).abs() == 1
    }

    /// Square name such as `c2`: column letter, then rank counted from the bottom row (0).
    pub fn to_notation(&self, size: usize) -> String {
        let file = char::from_u32('a' as u32 + self.col as u32).unwrap_or('?');
        format!("{}{}", file, size as i32 - 1 - self.row)
    }

    pub fn from_notation(s: &str, size: usize) -> Option<Position> {
        let mut chars = s.chars();
        let file = chars.next()?;
        if !file.is_ascii_lowercase() {
            return None;
        }
        let rank: i32 = chars.as_str().parse().ok()?;
        let pos = Position::new(size as i32 - 1 - rank, (file as u8 - b'a') as i32);
        if pos.row < 0 || pos.row >= size as i32 || pos.col >= size as i32 {
            return None;
        }
        Some(pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player, // 走子方
    pub from: Position, // 起手位置
    pub to: Position,   // 落子位置
}

impl Move {
    pub fn to_notation(&self, size: usize) -> String {
        format!("{}{}", self.from.to_notation(size), self.to.to_notation(size))
    }

    /// Parses `c2d3`-style text. Only the squares are checked here, legality is up to the caller.
    pub fn from_notation(s: &str, player: Player, size: usize) -> Option<Move> {
        let split = s.get(1..)?.find(|c: char| c.is_ascii_lowercase())? + 1;
        let (from, to) = s.split_at(split);
        Some(Move {
            player,
            from: Position::from_notation(from, size)?,
            to: Position::from_notation(to, size)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    // N×N 棋盘，按行连续存放
    cells: Vec<Cell>,
    size: usize,
    pub turn: Player,
}

impl Board {
    /// All cells empty, PlayerOne to move.
    pub fn empty(size: usize) -> Self {
        Board {
            cells: vec![Cell::Empty; size * size],
            size,
            turn: Player::One,
        }
    }

    /// Standard opening layout: dark squares of the top rows for PlayerTwo, bottom rows for PlayerOne.
    pub fn init(size: usize) -> Self {
        let mut board = Board::empty(size);
        for i in 0..size {
            for j in 0..size {
                if (i + j) % 2 == 0 {
                    continue;
                }
                let pos = Position::new(i as i32, j as i32);
                if i < SEED_ROWS {
                    board.set_chess(pos, Cell::PlayerTwo);
                } else if i + SEED_ROWS >= size {
                    board.set_chess(pos, Cell::PlayerOne);
                }
            }
        }
        board
    }

    pub fn from_fen(fen: &str) -> anyhow::Result<Self> {
        let mut parts = fen.split_whitespace();
        let rows: Vec<&str> = parts
            .next()
            .ok_or_else(|| anyhow!("empty fen"))?
            .split('/')
            .collect();
        let size = rows.len();
        // 列名只有 a-z
        if size > MAX_BOARD_SIZE {
            bail!("board has {} rows, at most {} are supported", size, MAX_BOARD_SIZE);
        }
        let mut board = Board::empty(size);

        for (i, row) in rows.iter().enumerate() {
            let mut j = 0;
            let mut run = String::new();
            for c in row.chars() {
                if c.is_ascii_digit() {
                    run.push(c);
                    continue;
                }
                if !run.is_empty() {
                    j += run.parse::<usize>()?;
                    run.clear();
                }
                let cell = FEN_MAP
                    .get(&c)
                    .ok_or_else(|| anyhow!("unknown piece '{}' in row {}", c, i))?;
                if j >= size {
                    bail!("row {} is longer than {} cells", i, size);
                }
                board.set_chess(Position::new(i as i32, j as i32), *cell);
                j += 1;
            }
            if !run.is_empty() {
                j += run.parse::<usize>()?;
            }
            if j != size {
                bail!("row {} has {} cells, expected {}", i, j, size);
            }
        }

        board.turn = match parts.next().context("missing side to move")? {
            "w" => Player::One,
            "b" => Player::Two,
            other => bail!("unknown side to move '{}'", other),
        };
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let rows: Vec<String> = (0..self.size)
            .map(|i| {
                let mut row = String::new();
                let mut run = 0;
                for j in 0..self.size {
                    let cell = self.chess_at(Position::new(i as i32, j as i32));
                    match cell.player() {
                        None => run += 1,
                        Some(player) => {
                            if run > 0 {
                                row.push_str(&run.to_string());
                                run = 0;
                            }
                            row.push(player.fen_char());
                        }
                    }
                }
                if run > 0 {
                    row.push_str(&run.to_string());
                }
                row
            })
            .collect();
        format!("{} {}", rows.join("/"), self.turn.fen_char())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_board(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.size as i32 && pos.col >= 0 && pos.col < self.size as i32
    }

    pub fn chess_at(&self, pos: Position) -> Cell {
        if self.in_board(pos) {
            self.cells[pos.row as usize * self.size + pos.col as usize]
        } else {
            Cell::Empty
        }
    }

    // 越界直接 panic，不会写坏别的格子
    pub fn set_chess(&mut self, pos: Position, cell: Cell) {
        assert!(self.in_board(pos), "{:?} is outside a {}x{} board", pos, self.size, self.size);
        self.cells[pos.row as usize * self.size + pos.col as usize] = cell;
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    // 人类走子的校验：目标在棋盘内、为空、且是斜向一格
    pub fn is_move_valid(&self, from: Position, to: Position) -> bool {
        self.in_board(to) && self.chess_at(to).is_empty() && from.is_diagonal_step(to)
    }

    // 原地应用走子并交换走棋方（界面上的人类走子）
    pub fn apply_move(&mut self, m: &Move) {
        let chess = self.chess_at(m.from);
        self.set_chess(m.to, chess);
        self.set_chess(m.from, Cell::Empty);
        self.turn = self.turn.next();
    }

    // 克隆后应用走子，原局面不变
    pub fn make_move(&self, m: &Move) -> Board {
        let mut next = self.clone();
        next.set_chess(m.to, m.player.piece());
        next.set_chess(m.from, Cell::Empty);
        next.turn = m.player.next();
        next
    }

    fn valid_targets(&self, from: Position) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .map(|d| from.offset(*d))
            .filter(|to| self.in_board(*to) && self.chess_at(*to).is_empty())
            .collect()
    }

    // 生成当前走棋方的所有走法
    // 顺序：按行扫描起点，再按列，同一棋子按 左上、右上、左下、右下
    pub fn generate_moves(&self) -> Vec<Move> {
        let mut moves = vec![];
        for i in 0..self.size as i32 {
            for j in 0..self.size as i32 {
                let from = Position::new(i, j);
                if !self.chess_at(from).belong_to(self.turn) {
                    continue;
                }
                for to in self.valid_targets(from) {
                    moves.push(Move {
                        player: self.turn,
                        from,
                        to,
                    });
                }
            }
        }
        moves
    }

    /// One successor per legal move, in [`Board::generate_moves`] order. Empty when the side to move is stuck.
    pub fn generate_successors(&self) -> Vec<Board> {
        self.generate_moves()
            .iter()
            .map(|m| self.make_move(m))
            .collect()
    }

    // 静态评估：正数对 PlayerOne 有利，与走棋方无关
    pub fn evaluate(&self) -> i32 {
        self.cells.iter().map(Cell::value).sum()
    }

    // 任一方无子，或当前走棋方无路可走
    pub fn is_terminal(&self) -> bool {
        !self.cells.contains(&Cell::PlayerOne)
            || !self.cells.contains(&Cell::PlayerTwo)
            || self.generate_moves().is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            write!(f, "{:>2} ", self.size - 1 - i)?;
            for j in 0..self.size {
                let c = match self.chess_at(Position::new(i as i32, j as i32)) {
                    Cell::PlayerOne => 'w',
                    Cell::PlayerTwo => 'b',
                    Cell::Empty => '.',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for j in 0..self.size {
            write!(f, "{} ", char::from_u32('a' as u32 + j as u32).unwrap_or('?'))?;
        }
        writeln!(f)
    }
}
