use crate::board::Cell;
use std::{collections::HashMap, sync::LazyLock};

pub const DEFAULT_BOARD_SIZE: usize = 8;
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;
// 列名用 a-z 表示
pub const MAX_BOARD_SIZE: usize = 26;

// 每个棋子的分值
pub const PIECE_VALUE: i32 = 10;
// 开局时每方占据的行数
pub const SEED_ROWS: usize = 3;

// (row, col) 偏移：左上、右上、左下、右下，顺序决定后继顺序
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub static FEN_MAP: LazyLock<HashMap<char, Cell>> = LazyLock::new(|| {
    HashMap::from([
        ('w', Cell::PlayerOne),
        ('b', Cell::PlayerTwo),
    ])
});
