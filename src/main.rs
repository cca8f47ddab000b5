use std::error::Error;

mod app;
mod config;
mod game;
mod ui;
pub use config::{
    CELL_STRIDE, CELL_W, GRID_H, GRID_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W,
};
pub use game::{Game, RoundStatus};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
