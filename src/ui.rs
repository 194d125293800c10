use std::{cell::RefCell, rc::Rc};

use engine::board::{Cell, Position};
use fltk::{app, button::Button, enums::*, frame::Frame, group::Group, prelude::*, window::*};
use tracing::{info, warn};

use crate::game::{Click, Game};

const CELL_SIZE: i32 = 64;
const STATUS_HEIGHT: i32 = 32;
// AI 走子前的停顿，模拟思考时间
const AI_DELAY_SECS: f64 = 0.5;

const LIGHT_SQUARE: (u8, u8, u8) = (240, 217, 181);
const DARK_SQUARE: (u8, u8, u8) = (181, 136, 99);

// 各个控件的句柄，克隆后指向同一组控件
#[derive(Clone)]
struct View {
    size: i32,
    grid: Group,
    cells: Vec<Button>,
    status: Frame,
}

impl View {
    fn redraw(&mut self, game: &Game) {
        let light = Color::from_rgb(LIGHT_SQUARE.0, LIGHT_SQUARE.1, LIGHT_SQUARE.2);
        let dark = Color::from_rgb(DARK_SQUARE.0, DARK_SQUARE.1, DARK_SQUARE.2);
        for (i, button) in self.cells.iter_mut().enumerate() {
            let pos = Position::new(i as i32 / self.size, i as i32 % self.size);
            let chess = game.board.chess_at(pos);
            button.set_label(chess.glyph());
            button.set_label_color(if chess == Cell::PlayerOne {
                Color::White
            } else {
                Color::Black
            });
            button.set_color(if game.selected() == Some(pos) {
                Color::Yellow
            } else if (pos.row + pos.col) % 2 == 0 {
                light
            } else {
                dark
            });
            button.redraw();
        }
        self.status.set_label(&game.status_text());
        self.status.redraw();
    }
}

pub fn ui(game: Game) -> anyhow::Result<()> {
    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let size = game.board.size() as i32;
    let mut top_window = Window::new(
        100,
        100,
        CELL_SIZE * size,
        CELL_SIZE * size + STATUS_HEIGHT,
        "Checkers Minimax",
    );

    let grid = Group::new(0, 0, CELL_SIZE * size, CELL_SIZE * size, "");
    let mut cells = vec![];
    for row in 0..size {
        for col in 0..size {
            let mut button = Button::new(col * CELL_SIZE, row * CELL_SIZE, CELL_SIZE, CELL_SIZE, "");
            button.set_frame(FrameType::FlatBox);
            button.set_label_size(CELL_SIZE * 6 / 10);
            button.clear_visible_focus();
            cells.push(button);
        }
    }
    grid.end();

    let status = Frame::new(0, CELL_SIZE * size, CELL_SIZE * size, STATUS_HEIGHT, "");
    top_window.end();

    let game = Rc::new(RefCell::new(game));
    let mut view = View {
        size,
        grid,
        cells,
        status,
    };
    view.redraw(&game.borrow());

    for (i, button) in view.cells.iter().enumerate() {
        let pos = Position::new(i as i32 / size, i as i32 % size);
        let game = game.clone();
        let mut view = view.clone();
        button.clone().set_callback(move |_| on_click(&game, &mut view, pos));
    }

    top_window.show();
    app.run()?;
    Ok(())
}

fn on_click(game: &Rc<RefCell<Game>>, view: &mut View, pos: Position) {
    let click = game.borrow_mut().click(pos);
    view.redraw(&game.borrow());

    if !matches!(click, Click::Moved(_)) || game.borrow().is_over() {
        return;
    }

    // 轮到 AI：停顿期间禁止点击
    view.grid.deactivate();
    view.status.set_label("AI thinking...");
    view.status.redraw();

    let game = game.clone();
    let mut view = view.clone();
    app::add_timeout3(AI_DELAY_SECS, move |_| {
        let m = game.borrow_mut().ai_move();
        let size = game.borrow().board.size();
        match m {
            Some(m) => info!("ai move {}", m.to_notation(size)),
            None => warn!("ai cannot move"),
        }
        view.grid.activate();
        view.redraw(&game.borrow());
    });
}
