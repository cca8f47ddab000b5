// Shared game UI/constants.
pub const GRID_W: usize = 5;
pub const GRID_H: usize = 5;
pub const CELL_W: usize = 6; // widest target word is six letters
pub const CELL_STRIDE: usize = CELL_W + 1; // cell plus one lattice column
pub const PLAY_W: usize = GRID_W * CELL_STRIDE + 1; // lattice width plus right wall
pub const PLAY_H: usize = GRID_H * 2 + 1; // row per rank plus lattice lines
pub const SIDEBAR_W: u16 = 24;
// Minimal pane width to fit the board lattice, sidebar and cabinet border.
pub const MIN_PANE_WIDTH: u16 = PLAY_W as u16 + SIDEBAR_W + 4;
