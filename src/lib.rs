//! Fill an NxN grid so that every row and every column is a dictionary word, by backtracking
//! search over a dictionary bucketed by word length.
//!
//! ```no_run
//! use squarefill::{fill_square, DictionaryIndex, Preset};
//!
//! let dictionary = DictionaryIndex::load("words.txt").unwrap();
//! let presets: Vec<Preset> = vec!["0-a=crane".parse().unwrap()];
//!
//! let outcome = fill_square(&dictionary, 5, &presets, 10).unwrap();
//! for grid in &outcome.results {
//!     println!("{}\n", grid);
//! }
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use smallvec::SmallVec;

pub mod board;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod results;
pub mod search;

pub use board::{Board, Direction, Entry, Grid};
pub use dictionary::{DictionaryIndex, Word};
pub use error::{ConflictError, DictionaryError, EntryParseError};
pub use results::ResultSet;
pub use search::{find_fills, FillOutcome, Statistics};

/// The expected maximum length for a single entry. Longer entries still work, they just spill
/// onto the heap.
pub const MAX_SLOT_LENGTH: usize = 21;

/// The expected maximum number of entries in a grid (one across and one down per row). Like
/// `MAX_SLOT_LENGTH` this only sizes inline storage; bigger grids spill onto the heap.
pub const MAX_SLOT_COUNT: usize = 64;

/// The symbols along one entry, with `None` for empty cells.
pub type Straight = SmallVec<[Option<char>; MAX_SLOT_LENGTH]>;

/// A word to lock into an entry before filling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub entry: Entry,
    pub word: String,
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.entry, self.word)
    }
}

impl FromStr for Preset {
    type Err = EntryParseError;

    /// Parse `"<index>-<direction>=<word>"`, e.g. `"0-a=crane"`.
    fn from_str(s: &str) -> Result<Preset, EntryParseError> {
        let (entry, word) = s.split_once('=').ok_or_else(|| {
            EntryParseError::Malformed { input: s.to_string() }
        })?;
        let word = word.trim();
        if word.is_empty() {
            return Err(EntryParseError::Malformed { input: s.to_string() });
        }

        Ok(Preset { entry: entry.parse()?, word: word.to_string() })
    }
}

/// Build a board, lock in the presets in order, and search for up to `max_results` fills.
pub fn fill_square(
    dictionary: &DictionaryIndex,
    size: usize,
    presets: &[Preset],
    max_results: usize,
) -> Result<FillOutcome, ConflictError> {
    let mut board = Board::new(dictionary, size);

    for preset in presets {
        board.preset_entry(&preset.word, preset.entry)?;
    }

    Ok(find_fills(&mut board, max_results))
}
