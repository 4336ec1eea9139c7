//! Error types for the data-level failures a fill run can hit.
//!
//! Caller misuse (out-of-range entries, wrong straight lengths, touching a resolved cursor) is not
//! represented here: those are bugs in the caller and panic at the point of detection.

use std::io;
use std::path::PathBuf;

use crate::board::Entry;

/// Failure to build a `DictionaryIndex` from its source.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary \"{}\": {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A preset that can't be placed on the board as it currently stands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("preset \"{word}\" has the wrong length for a {expected}x{expected} grid")]
    LengthMismatch { word: String, expected: usize },

    #[error("preset for {entry} puts '{proposed}' at position {position}, but '{existing}' is already there")]
    ConflictingCell {
        entry: Entry,
        position: usize,
        existing: char,
        proposed: char,
    },

    #[error("preset \"{word}\" for {entry} is not in the dictionary")]
    NotInDictionary { entry: Entry, word: String },

    #[error("entry {entry} has already been preset")]
    AlreadyPreset { entry: Entry },
}

/// Failure to parse an entry identifier (`"3-a"`) or a preset spec (`"3-a=crane"`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryParseError {
    #[error("malformed entry \"{input}\" (expected <index>-<a|d>, or <index>-<a|d>=<word> for presets)")]
    Malformed { input: String },

    #[error("invalid entry index \"{index}\"")]
    InvalidIndex { index: String },

    #[error("invalid direction \"{direction}\" (must be 'a' or 'd')")]
    InvalidDirection { direction: String },
}
