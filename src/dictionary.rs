use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::Path;

use smallvec::SmallVec;

use crate::error::DictionaryError;
use crate::MAX_SLOT_LENGTH;

/// A dictionary entry. Symbols are compared structurally; nothing about the alphabet is assumed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Word {
    string: String,
    symbols: SmallVec<[char; MAX_SLOT_LENGTH]>,
}

impl Word {
    pub fn new(string: &str) -> Word {
        Word {
            string: string.to_string(),
            symbols: string.chars().collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Number of symbols (not bytes).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The word as a fully populated straight, for writing onto a board.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Option<char>> + '_ {
        self.symbols.iter().map(|&c| Some(c))
    }

    /// Is this word consistent with the given straight? Empty cells match anything, populated
    /// cells must match exactly.
    pub fn matches(&self, straight: &[Option<char>]) -> bool {
        self.symbols.len() == straight.len()
            && self.symbols.iter().zip(straight).all(|(&symbol, cell)| match cell {
                Some(existing) => *existing == symbol,
                None => true,
            })
    }
}

impl Debug for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({:?})", self.string)
    }
}

/// Words bucketed by length, in load order. Immutable once built.
pub struct DictionaryIndex {
    /// Indexed by word length; bucket `k` only ever holds words of length `k`.
    words: Vec<Vec<Word>>,
    word_count: usize,
}

impl Debug for DictionaryIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryIndex")
            .field("lengths", &self.lengths().collect::<Vec<_>>())
            .field("words", &(["(", &self.word_count.to_string(), " entries)"].join("")))
            .finish()
    }
}

impl DictionaryIndex {
    /// Build an index from a word list, one word per item. Surrounding whitespace is trimmed and
    /// blank lines are skipped.
    pub fn from_words<I, S>(word_list: I) -> DictionaryIndex
        where
            I: IntoIterator<Item=S>,
            S: AsRef<str>,
    {
        let mut words: Vec<Vec<Word>> = vec![];
        let mut word_count = 0;

        for line in word_list {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }

            let word = Word::new(trimmed);
            let len = word.len();
            if words.len() <= len {
                words.resize_with(len + 1, Vec::new);
            }
            words[len].push(word);
            word_count += 1;
        }

        DictionaryIndex { words, word_count }
    }

    /// Load a dictionary file with one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DictionaryIndex, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = DictionaryIndex::from_words(content.lines());
        log::debug!(
            "Loaded {} words from {} ({} distinct lengths)",
            dictionary.word_count,
            path.display(),
            dictionary.lengths().count()
        );

        Ok(dictionary)
    }

    /// Every word of exactly length `n`, in load order.
    pub fn candidates_of_length(&self, n: usize) -> &[Word] {
        self.words.get(n).map(|bucket| bucket.as_slice()).unwrap_or(&[])
    }

    /// Words of the straight's length that are consistent with its populated cells.
    pub fn candidates_matching<'a, 's>(
        &'a self,
        straight: &'s [Option<char>],
    ) -> impl Iterator<Item=&'a Word> + 's
        where
            'a: 's,
    {
        self.candidates_of_length(straight.len())
            .iter()
            .filter(move |word| word.matches(straight))
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The lengths that have at least one word, ascending.
    pub fn lengths(&self) -> impl Iterator<Item=usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(len, _)| len)
    }
}
