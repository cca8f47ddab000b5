use crate::{GRID_H, GRID_W};

/// One puzzle: the starting letter layout and the words it merges into.
/// By construction the letters of `words` are exactly the letters of
/// `cells`; the catalog test below checks every entry.
pub struct Board {
    pub cells: [[&'static str; GRID_W]; GRID_H],
    pub words: &'static [&'static str],
}

static BOARDS: [Board; 3] = [
    Board {
        cells: [
            ["E", "L", "W", "Y", "C"],
            ["Y", "L", "O", "A", "N"],
            ["U", "B", "L", "E", "E"],
            ["E", "L", "P", "M", "V"],
            ["P", "U", "R", "A", "U"],
        ],
        words: &["CYAN", "YELLOW", "PURPLE", "MAUVE", "BLUE"],
    },
    Board {
        cells: [
            ["E", "K", "O", "A", "P"],
            ["A", "W", "L", "I", "R"],
            ["N", "S", "F", "A", "T"],
            ["L", "E", "E", "R", "A"],
            ["A", "G", "G", "U", "J"],
        ],
        words: &["TAPIR", "EAGLE", "JAGUAR", "SNAKE", "WOLF"],
    },
    Board {
        cells: [
            ["H", "C", "N", "A", "N"],
            ["Y", "R", "A", "A", "A"],
            ["R", "E", "A", "Y", "B"],
            ["F", "P", "P", "E", "R"],
            ["I", "G", "A", "P", "A"],
        ],
        words: &["CHERRY", "PAPAYA", "BANANA", "PEAR", "FIG"],
    },
];

pub fn boards() -> &'static [Board] {
    &BOARDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_letters_spell_word_set() {
        for board in boards() {
            let mut grid_letters: Vec<char> = board
                .cells
                .iter()
                .flatten()
                .flat_map(|s| s.chars())
                .collect();
            let mut word_letters: Vec<char> =
                board.words.iter().flat_map(|w| w.chars()).collect();
            grid_letters.sort_unstable();
            word_letters.sort_unstable();
            assert_eq!(grid_letters, word_letters);
        }
    }

    #[test]
    fn test_catalog_cells_are_single_letters() {
        for board in boards() {
            for cell in board.cells.iter().flatten() {
                assert_eq!(cell.chars().count(), 1);
            }
        }
    }
}
