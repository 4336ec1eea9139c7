use std::collections::HashSet;

use crate::board::Grid;

/// The completed grids found by a fill run, in discovery order and never more than
/// `max_results` of them.
#[derive(Debug, Clone)]
pub struct ResultSet {
    max_results: usize,
    grids: Vec<Grid>,

    /// Mirrors `grids`, so that an identical snapshot (only possible with duplicate dictionary
    /// words) is kept once.
    seen: HashSet<Grid>,
}

impl ResultSet {
    pub fn new(max_results: usize) -> ResultSet {
        ResultSet {
            max_results,
            grids: Vec::with_capacity(max_results.min(1024)),
            seen: HashSet::new(),
        }
    }

    /// Store a snapshot, unless the set is full or already holds an identical grid. Returns
    /// whether the grid was stored.
    pub fn push(&mut self, grid: Grid) -> bool {
        if self.is_full() || self.seen.contains(&grid) {
            return false;
        }

        self.seen.insert(grid.clone());
        self.grids.push(grid);
        true
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.grids.len() >= self.max_results
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.grids.iter()
    }

    pub fn into_grids(self) -> Vec<Grid> {
        self.grids
    }
}

impl IntoIterator for ResultSet {
    type Item = Grid;
    type IntoIter = std::vec::IntoIter<Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.grids.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.grids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Entry};
    use crate::dictionary::{DictionaryIndex, Word};

    fn filled_grid(dictionary: &DictionaryIndex, rows: &[&str]) -> Grid {
        let mut board = Board::new(dictionary, rows.len());
        for (idx, row) in rows.iter().enumerate() {
            board.write_straight(Word::new(row).cells(), Entry::across(idx));
        }
        board.snapshot()
    }

    #[test]
    fn test_push_respects_cap() {
        let dictionary = DictionaryIndex::from_words(["a", "b", "c"]);
        let mut results = ResultSet::new(2);

        assert!(results.push(filled_grid(&dictionary, &["a"])));
        assert!(results.push(filled_grid(&dictionary, &["b"])));
        assert!(results.is_full());
        assert!(!results.push(filled_grid(&dictionary, &["c"])));

        assert_eq!(results.len(), 2);
        let rows: Vec<Vec<String>> = results.iter().map(|grid| grid.rows()).collect();
        assert_eq!(rows, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_zero_cap_accepts_nothing() {
        let dictionary = DictionaryIndex::from_words(["a"]);
        let mut results = ResultSet::new(0);

        assert!(results.is_full());
        assert!(!results.push(filled_grid(&dictionary, &["a"])));
        assert!(results.is_empty());
    }

    #[test]
    fn test_identical_grids_are_kept_once() {
        let dictionary = DictionaryIndex::from_words(["ab"]);
        let mut results = ResultSet::new(5);

        assert!(results.push(filled_grid(&dictionary, &["ab", "ba"])));
        assert!(!results.push(filled_grid(&dictionary, &["ab", "ba"])));

        assert_eq!(results.len(), 1);
        assert_eq!(results.into_grids()[0].rows(), vec!["ab", "ba"]);
    }
}
