pub mod board;
pub mod catalog;
pub mod state;

pub use board::{Cell, Grid};
pub use catalog::{boards, Board};
pub use state::{Game, RoundStatus};
