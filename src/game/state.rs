use std::collections::HashMap;

use rand::seq::IteratorRandom;
use rand::{thread_rng, Rng};

use crate::game::{boards, Board, Grid};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            RoundStatus::Playing => None,
            RoundStatus::Won => Some("You Win!"),
            RoundStatus::Lost => Some("No more moves! You Lose."),
        }
    }
}

pub struct Game {
    board: &'static Board,
    board_index: usize,
    pub grid: Grid,
    selection: Option<(usize, usize)>,
    word_done: Vec<bool>,
    status: RoundStatus,
}

impl Game {
    pub fn new() -> Self {
        let index = thread_rng().gen_range(0..boards().len());
        Self::with_board(index)
    }

    pub fn with_board(index: usize) -> Self {
        Self::from_board(&boards()[index], index)
    }

    fn from_board(board: &'static Board, index: usize) -> Self {
        Self {
            board,
            board_index: index,
            grid: Grid::from_board(board),
            selection: None,
            word_done: vec![false; board.words.len()],
            status: RoundStatus::Playing,
        }
    }

    pub fn board_index(&self) -> usize {
        self.board_index
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Target words paired with their completed flags, in catalog order.
    pub fn words(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.board
            .words
            .iter()
            .zip(&self.word_done)
            .map(|(word, done)| (*word, *done))
    }

    /// Sole mutation entry point for the caller: a click on cell (x, y).
    /// Clicking the selection toggles it off; a legal neighbor merges;
    /// anything else attempts to become the new selection. The equality
    /// check must stay ahead of `can_move`, which would otherwise accept
    /// the selected cell as its own merge target.
    pub fn on_click(&mut self, x: usize, y: usize) {
        if self.status != RoundStatus::Playing {
            return;
        }
        if self.selection == Some((x, y)) {
            self.unselect();
        } else if self.can_move(x, y) {
            self.merge_into(x, y);
        } else {
            self.select(x, y);
        }
    }

    pub fn select(&mut self, x: usize, y: usize) {
        let cell = self.grid.get(x, y);
        if !cell.content.is_empty() && !cell.completed {
            self.selection = Some((x, y));
        }
    }

    pub fn unselect(&mut self) {
        self.selection = None;
    }

    /// Whether the selection may merge onto (x, y): axis-adjacent, and the
    /// target still holds live text.
    pub fn can_move(&self, x: usize, y: usize) -> bool {
        let Some((sx, sy)) = self.selection else {
            return false;
        };
        let close = |a: usize, b: usize| a.abs_diff(b) <= 1;
        if !(close(sx, x) && sy == y || close(sy, y) && sx == x) {
            return false;
        }
        let target = self.grid.get(x, y);
        !target.content.is_empty() && !target.completed
    }

    fn merge_into(&mut self, x: usize, y: usize) {
        let Some((sx, sy)) = self.selection else {
            return;
        };
        let merged = format!(
            "{}{}",
            self.grid.get(sx, sy).content,
            self.grid.get(x, y).content
        );
        self.grid.set_content(x, y, merged);
        self.grid.set_content(sx, sy, String::new());
        self.selection = Some((x, y));
        self.recompute_completed();
        if !self.check_win() {
            self.check_lose();
        }
    }

    /// Re-derive every completed flag from the grid contents. If two cells
    /// hold identical text, the later one in row-major order is the one
    /// credited with the word.
    pub fn recompute_completed(&mut self) {
        let mut on_grid: HashMap<String, (usize, usize)> = HashMap::new();
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                self.grid.clear_completed(x, y);
                let content = &self.grid.get(x, y).content;
                if !content.is_empty() {
                    on_grid.insert(content.clone(), (x, y));
                }
            }
        }
        for (i, &word) in self.board.words.iter().enumerate() {
            match on_grid.get(word) {
                Some(&(x, y)) => {
                    self.grid.mark_completed(x, y);
                    self.word_done[i] = true;
                    // A freshly completed cell is inert; drop it as selection.
                    if self.selection == Some((x, y)) {
                        self.selection = None;
                    }
                }
                None => self.word_done[i] = false,
            }
        }
    }

    fn check_win(&mut self) -> bool {
        let mut on_grid: Vec<&str> = Vec::new();
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let content = &self.grid.get(x, y).content;
                if !content.is_empty() {
                    on_grid.push(content.as_str());
                }
            }
        }
        if on_grid.len() != self.board.words.len() {
            return false;
        }
        let mut targets = self.board.words.to_vec();
        on_grid.sort_unstable();
        targets.sort_unstable();
        if on_grid != targets {
            return false;
        }
        self.status = RoundStatus::Won;
        true
    }

    fn check_lose(&mut self) {
        if !self.any_moves_possible() {
            self.status = RoundStatus::Lost;
        }
    }

    /// A move exists if two edge-adjacent cells are both live (non-empty,
    /// not completed). Only right and down neighbors are checked so each
    /// pair is considered once.
    pub fn any_moves_possible(&self) -> bool {
        let live = |x: usize, y: usize| {
            let cell = self.grid.get(x, y);
            !cell.content.is_empty() && !cell.completed
        };
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                if !live(x, y) {
                    continue;
                }
                if x + 1 < self.grid.width && live(x + 1, y) {
                    return true;
                }
                if y + 1 < self.grid.height && live(x, y + 1) {
                    return true;
                }
            }
        }
        false
    }

    /// Restart the round on the same board.
    pub fn reset(&mut self) {
        *self = Self::from_board(self.board, self.board_index);
    }

    /// Start a fresh round on a different random board; with a single-entry
    /// catalog the same board is reused.
    pub fn play_again(&mut self) {
        let count = boards().len();
        let index = if count > 1 {
            (0..count)
                .filter(|&i| i != self.board_index)
                .choose(&mut thread_rng())
                .unwrap_or(self.board_index)
        } else {
            self.board_index
        };
        *self = Self::with_board(index);
    }
}
