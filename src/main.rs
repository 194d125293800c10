use engine::board::Board;
use engine::constant::{DEFAULT_BOARD_SIZE, DEFAULT_SEARCH_DEPTH};
use tracing_subscriber::EnvFilter;

mod game;
mod ui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let game = game::Game::new(Board::init(DEFAULT_BOARD_SIZE), DEFAULT_SEARCH_DEPTH);
    ui::ui(game)?;
    Ok(())
}
