use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use bit_set::BitSet;
use smallvec::SmallVec;

use crate::dictionary::{DictionaryIndex, Word};
use crate::error::{ConflictError, EntryParseError};
use crate::{Straight, MAX_SLOT_COUNT};

/// Direction that an entry is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    fn code(self) -> char {
        match self {
            Direction::Across => 'a',
            Direction::Down => 'd',
        }
    }
}

/// One fillable line of the grid: across entry `i` is row `i`, down entry `i` is column `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pub index: usize,
    pub direction: Direction,
}

impl Entry {
    pub fn new(index: usize, direction: Direction) -> Entry {
        Entry { index, direction }
    }

    pub fn across(index: usize) -> Entry {
        Entry::new(index, Direction::Across)
    }

    pub fn down(index: usize) -> Entry {
        Entry::new(index, Direction::Down)
    }

    /// Zero-indexed (row, col) of the `cell_idx`th cell of this entry.
    fn cell_coord(&self, cell_idx: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.index, cell_idx),
            Direction::Down => (cell_idx, self.index),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.index, self.direction.code())
    }
}

impl FromStr for Entry {
    type Err = EntryParseError;

    /// Parse the `"<index>-<direction>"` form, e.g. `"0-a"` or `"4-d"`.
    fn from_str(s: &str) -> Result<Entry, EntryParseError> {
        let (index, direction) = s.trim().split_once('-').ok_or_else(|| {
            EntryParseError::Malformed { input: s.to_string() }
        })?;

        let index: usize = index.parse().map_err(|_| EntryParseError::InvalidIndex {
            index: index.to_string(),
        })?;

        let direction = match direction {
            "a" => Direction::Across,
            "d" => Direction::Down,
            other => {
                return Err(EntryParseError::InvalidDirection { direction: other.to_string() })
            }
        };

        Ok(Entry { index, direction })
    }
}

/// A square matrix of cells, each empty or holding one symbol.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    pub fn empty(size: usize) -> Grid {
        Grid { size, cells: vec![None; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        assert!(row < self.size && col < self.size, "Cell ({row}, {col}) is outside a {0}x{0} grid", self.size);
        self.cells[row * self.size + col]
    }

    fn set_cell(&mut self, row: usize, col: usize, value: Option<char>) {
        self.cells[row * self.size + col] = value;
    }

    /// Copy out the symbols along the given entry.
    pub fn straight(&self, entry: Entry) -> Straight {
        (0..self.size).map(|cell_idx| {
            let (row, col) = entry.cell_coord(cell_idx);
            self.cells[row * self.size + col]
        }).collect()
    }

    /// Each row as a string, with `.` standing in for empty cells.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| row.iter().map(|cell| cell.unwrap_or('.')).collect())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().iter().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            let spaced: Vec<String> = row.chars().map(|c| c.to_string()).collect();
            write!(f, "[{}]", spaced.join(" "))?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Grid").field(&self.rows()).finish()
    }
}

/// All of the mutable state for a fill run: the cells, the order in which entries are decided,
/// which of those have been filled on the current search path, and the cursor.
#[derive(Clone)]
pub struct Board<'d> {
    dictionary: &'d DictionaryIndex,
    grid: Grid,
    entry_order: SmallVec<[Entry; MAX_SLOT_COUNT]>,

    /// Indexed by position in `entry_order`.
    entry_filled: BitSet,

    /// Position in `entry_order` of the next entry to decide. Equal to `entry_order.len()` once
    /// every entry is resolved.
    cursor: usize,

    /// Set once a search has run; presets are rejected from then on.
    searched: bool,
}

impl Debug for Board<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("entry_order", &self.entry_order)
            .field("entry_filled", &self.entry_filled)
            .field("cursor", &self.cursor)
            .field("searched", &self.searched)
            .finish()
    }
}

impl PartialEq for Board<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.entry_order == other.entry_order
            && self.entry_filled.iter().eq(other.entry_filled.iter())
            && self.cursor == other.cursor
    }
}

impl Eq for Board<'_> {}

impl<'d> Board<'d> {
    /// An empty `size`x`size` board that visits entries as 0-a, 0-d, 1-a, 1-d, ...
    pub fn new(dictionary: &'d DictionaryIndex, size: usize) -> Board<'d> {
        let entry_order: SmallVec<[Entry; MAX_SLOT_COUNT]> = (0..size)
            .flat_map(|idx| [Entry::across(idx), Entry::down(idx)])
            .collect();

        Board {
            dictionary,
            grid: Grid::empty(size),
            entry_filled: BitSet::with_capacity(entry_order.len()),
            entry_order,
            cursor: 0,
            searched: false,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size
    }

    pub fn dictionary(&self) -> &'d DictionaryIndex {
        self.dictionary
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entry_order(&self) -> &[Entry] {
        &self.entry_order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_filled(&self, position: usize) -> bool {
        self.entry_filled.contains(position)
    }

    /// Have all remaining entries been decided?
    pub fn is_resolved(&self) -> bool {
        self.cursor == self.entry_order.len()
    }

    /// The entry the search has to decide next.
    pub fn current_entry(&self) -> Entry {
        assert!(
            !self.is_resolved(),
            "No current entry: cursor {} is past the last of {} entries",
            self.cursor,
            self.entry_order.len()
        );
        self.entry_order[self.cursor]
    }

    fn check_entry(&self, entry: Entry) {
        assert!(
            entry.index < self.size(),
            "Entry {} is outside a {1}x{1} grid",
            entry,
            self.size()
        );
    }

    /// A copy of the symbols currently along `entry`. Holding on to it doesn't borrow the board.
    pub fn read_straight(&self, entry: Entry) -> Straight {
        self.check_entry(entry);
        self.grid.straight(entry)
    }

    /// Overwrite every cell along `entry`. No consistency checks happen here: search only writes
    /// pre-filtered candidates or previously read straights, and presets are validated first.
    pub fn write_straight<I>(&mut self, cells: I, entry: Entry)
        where
            I: IntoIterator<Item=Option<char>>,
            I::IntoIter: ExactSizeIterator,
    {
        self.check_entry(entry);
        let cells = cells.into_iter();
        if cells.len() != self.size() {
            panic!("Mismatched straight length: {} for a {1}x{1} grid", cells.len(), self.size());
        }

        for (cell_idx, value) in cells.enumerate() {
            let (row, col) = entry.cell_coord(cell_idx);
            self.grid.set_cell(row, col, value);
        }
    }

    /// Mark the current entry as filled and move the cursor to the next unfilled entry (or to the
    /// end if there are none).
    pub fn advance(&mut self) {
        assert!(!self.is_resolved(), "Can't advance a resolved board");

        self.entry_filled.insert(self.cursor);
        while self.cursor < self.entry_order.len() {
            self.cursor += 1;
            if self.cursor == self.entry_order.len() || !self.entry_filled.contains(self.cursor) {
                break;
            }
        }
    }

    /// Undo an `advance` made at `to_entry`: the cursor goes back to it, and neither it nor the
    /// entry the cursor had moved on to count as filled anymore.
    pub fn rewind(&mut self, to_entry: Entry) {
        let position = self.entry_order.iter().position(|&e| e == to_entry)
            .unwrap_or_else(|| panic!("Can't rewind to {}: it isn't a search entry", to_entry));

        if self.cursor < self.entry_order.len() {
            self.entry_filled.remove(self.cursor);
        }
        self.cursor = position;
        self.entry_filled.remove(position);
    }

    /// Dictionary words of the board's size that fit the given straight, in load order. The
    /// iterator borrows the dictionary and the straight, not the board.
    pub fn candidates<'s>(&self, straight: &'s [Option<char>]) -> impl Iterator<Item=&'d Word> + 's
        where
            'd: 's,
    {
        assert_eq!(straight.len(), self.size(), "Mismatched straight length");
        let dictionary: &'d DictionaryIndex = self.dictionary;
        dictionary.candidates_matching(straight)
    }

    /// Called by the search before it touches the board. Presets are only valid before this.
    pub(crate) fn begin_search(&mut self) {
        self.searched = true;
    }

    /// An independent copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Lock `word` into `entry` before searching, removing the entry from the search order. The
    /// word has to be a dictionary word of the board's size, and has to agree with any letters
    /// already placed by earlier presets.
    pub fn preset_entry(&mut self, word: &str, entry: Entry) -> Result<(), ConflictError> {
        assert!(
            !self.searched && self.cursor == 0 && self.entry_filled.is_empty(),
            "Presets must be applied before searching"
        );
        self.check_entry(entry);

        let word = Word::new(word);
        if word.len() != self.size() {
            return Err(ConflictError::LengthMismatch {
                word: word.as_str().to_string(),
                expected: self.size(),
            });
        }

        let position = self.entry_order.iter().position(|&e| e == entry)
            .ok_or(ConflictError::AlreadyPreset { entry })?;

        if !self.dictionary.candidates_of_length(self.size()).contains(&word) {
            return Err(ConflictError::NotInDictionary {
                entry,
                word: word.as_str().to_string(),
            });
        }

        let straight = self.grid.straight(entry);
        for (cell_idx, (cell, &symbol)) in straight.iter().zip(word.symbols()).enumerate() {
            if let Some(existing) = *cell {
                if existing != symbol {
                    return Err(ConflictError::ConflictingCell {
                        entry,
                        position: cell_idx,
                        existing,
                        proposed: symbol,
                    });
                }
            }
        }

        self.write_straight(word.cells(), entry);
        self.remove_from_order(position);
        log::debug!("Preset {} to \"{}\"", entry, word.as_str());

        Ok(())
    }

    /// Delete the entry at `position` from the order, shifting the filled flags of later entries
    /// down so they stay aligned.
    fn remove_from_order(&mut self, position: usize) {
        self.entry_order.remove(position);

        let mut entry_filled = BitSet::with_capacity(self.entry_order.len());
        for filled in &self.entry_filled {
            if filled < position {
                entry_filled.insert(filled);
            } else if filled > position {
                entry_filled.insert(filled - 1);
            }
        }
        self.entry_filled = entry_filled;
    }
}
