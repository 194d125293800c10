/* 引擎核心：对接棋盘与搜索，提供基于标准输入输出的文本协议 */
use std::io::{BufRead, Write};
use std::sync::LazyLock;

use anyhow::{anyhow, Context};
use regex::Regex;
use tracing::warn;

use crate::board::{Board, Move};
use crate::constant::{DEFAULT_BOARD_SIZE, DEFAULT_SEARCH_DEPTH};
use crate::search::search;

static POSITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:fen (?P<fen>[wb0-9/]+ [wb])|(?P<startpos>startpos))(?: moves (?P<moves>[a-z]\d+[a-z]\d+(?: [a-z]\d+[a-z]\d+)*))?$"#,
    )
    .expect("position regex is valid")
});

static GO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:depth (?P<depth>\d+))?$"#).expect("go regex is valid"));

pub struct Engine {
    pub board: Board,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            board: Board::init(DEFAULT_BOARD_SIZE),
        }
    }

    // 逐行读取命令，直到 quit 或输入结束
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;
            let cmd = line.trim();
            if cmd.is_empty() {
                continue;
            }
            if cmd == "quit" {
                writeln!(output, "bye")?;
                break;
            }
            let mut token = cmd.splitn(2, ' ');
            let name = token.next().unwrap_or_default();
            let param = token.next().unwrap_or_default().trim();
            let reply = match name {
                "info" => Ok(self.info()),
                "isready" => Ok(self.is_ready()),
                "position" => self.position(param),
                "go" => self.go(param),
                "successors" => Ok(self.successors()),
                "eval" => Ok(self.eval()),
                "d" => Ok(self.display()),
                _ => Ok(vec![format!("unknown command {}", name)]),
            };
            match reply {
                Ok(lines) => {
                    for l in lines {
                        writeln!(output, "{}", l)?;
                    }
                }
                Err(e) => writeln!(output, "error {:#}", e)?,
            }
            output.flush()?;
        }
        Ok(())
    }

    pub fn info(&self) -> Vec<String> {
        vec![
            format!("id name checkers-minimax {}", env!("CARGO_PKG_VERSION")),
            format!("option depth default {}", DEFAULT_SEARCH_DEPTH),
            "infook".to_owned(),
        ]
    }

    pub fn is_ready(&self) -> Vec<String> {
        vec!["readyok".to_owned()]
    }

    // position startpos [moves ...] 或 position fen <fen> [moves ...]
    // 非法走子会被跳过
    pub fn position(&mut self, param: &str) -> anyhow::Result<Vec<String>> {
        let captures = POSITION_REGEX
            .captures(param)
            .ok_or_else(|| anyhow!("malformed position '{}'", param))?;

        let mut board = match captures.name("fen") {
            Some(fen) => Board::from_fen(fen.as_str())?,
            None => Board::init(DEFAULT_BOARD_SIZE),
        };

        if let Some(moves) = captures.name("moves") {
            for m_str in moves.as_str().split(' ') {
                match Move::from_notation(m_str, board.turn, board.size()) {
                    Some(m)
                        if board.chess_at(m.from).belong_to(board.turn)
                            && board.is_move_valid(m.from, m.to) =>
                    {
                        board.apply_move(&m)
                    }
                    _ => warn!("skipping illegal move {}", m_str),
                }
            }
        }

        self.board = board;
        Ok(vec![])
    }

    // 执行搜索并输出最佳走子
    pub fn go(&mut self, param: &str) -> anyhow::Result<Vec<String>> {
        let captures = GO_REGEX
            .captures(param)
            .ok_or_else(|| anyhow!("malformed go '{}'", param))?;
        let depth = match captures.name("depth") {
            Some(d) => d.as_str().parse().context("depth out of range")?,
            None => DEFAULT_SEARCH_DEPTH,
        };

        let result = search(&self.board, depth);
        Ok(match (result.best_move, result.value) {
            (Some(m), Some(value)) => vec![format!(
                "bestmove {} value {}",
                m.to_notation(self.board.size()),
                value
            )],
            _ => vec!["nobestmove".to_owned()],
        })
    }

    pub fn successors(&self) -> Vec<String> {
        let moves = self.board.generate_moves();
        let mut lines = vec![format!("successors {}", moves.len())];
        lines.extend(moves.iter().map(|m| m.to_notation(self.board.size())));
        lines
    }

    pub fn eval(&self) -> Vec<String> {
        vec![format!(
            "value {} terminal {}",
            self.board.evaluate(),
            self.board.is_terminal()
        )]
    }

    pub fn display(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.board.to_string().lines().map(str::to_owned).collect();
        lines.push(format!("fen {}", self.board.to_fen()));
        lines
    }
}
