//! End-to-end fills against the fixture word list.

use std::collections::HashSet;

use squarefill::{fill_square, find_fills, Board, ConflictError, DictionaryIndex, Entry, Grid, Preset};

fn load_fixture_dictionary() -> DictionaryIndex {
    DictionaryIndex::load("tests/fixtures/words.txt").expect("Failed to read fixture dictionary")
}

/// Every row and every column of `grid` is a dictionary word of the grid's size.
fn assert_valid_fill(dictionary: &DictionaryIndex, grid: &Grid) {
    let words: HashSet<&str> = dictionary
        .candidates_of_length(grid.size())
        .iter()
        .map(|word| word.as_str())
        .collect();

    for idx in 0..grid.size() {
        for entry in [Entry::across(idx), Entry::down(idx)] {
            let straight: String = grid
                .straight(entry)
                .iter()
                .map(|cell| cell.expect("Completed grid has an empty cell"))
                .collect();
            assert!(words.contains(straight.as_str()), "{} = \"{}\" is not a word", entry, straight);
        }
    }
}

#[test]
fn test_find_fills_for_3x3_square() {
    let dictionary = load_fixture_dictionary();

    let outcome = fill_square(&dictionary, 3, &[], 1000).unwrap();

    assert!(!outcome.statistics.cap_reached);
    assert!(outcome.results.iter().any(|grid| grid.rows() == vec!["bit", "ice", "tea"]));
    for grid in &outcome.results {
        assert!(grid.is_complete());
        assert_valid_fill(&dictionary, grid);
    }
}

#[test]
fn test_results_are_distinct_and_capped() {
    let dictionary = load_fixture_dictionary();

    let all = fill_square(&dictionary, 3, &[], 1000).unwrap();
    let capped = fill_square(&dictionary, 3, &[], 2).unwrap();

    assert!(all.results.len() >= 2, "fixture should have at least two 3x3 fills");
    assert_eq!(capped.results.len(), 2);
    assert!(capped.statistics.cap_reached);

    // Same search order, so the capped run sees a prefix of the full run.
    let all_grids = all.results.into_grids();
    assert_eq!(capped.results.into_grids(), all_grids[..2].to_vec());

    let distinct: HashSet<&Grid> = all_grids.iter().collect();
    assert_eq!(distinct.len(), all_grids.len());
}

#[test]
fn test_presets_are_never_overwritten() {
    let dictionary = load_fixture_dictionary();
    let presets: Vec<Preset> = vec!["0-a=bit".parse().unwrap(), "2-d=tea".parse().unwrap()];

    let outcome = fill_square(&dictionary, 3, &presets, 1000).unwrap();

    assert!(!outcome.results.is_empty());
    for grid in &outcome.results {
        assert_eq!(grid.rows()[0], "bit");
        assert_eq!(grid.straight(Entry::down(2)).iter().flatten().collect::<String>(), "tea");
        assert_valid_fill(&dictionary, grid);
    }
}

#[test]
fn test_search_leaves_board_untouched() {
    let dictionary = load_fixture_dictionary();
    let mut board = Board::new(&dictionary, 3);
    board.preset_entry("ice", Entry::across(1)).unwrap();
    let before = board.clone();

    let outcome = find_fills(&mut board, 1000);

    assert!(!outcome.results.is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_no_fill_without_words_of_the_right_length() {
    let dictionary = DictionaryIndex::from_words(["abc", "bca", "cab"]);

    let outcome = fill_square(&dictionary, 2, &[], 10).unwrap();

    assert!(outcome.results.is_empty());
    assert_eq!(outcome.statistics.dead_ends, 1);
}

#[test]
fn test_preset_outside_dictionary_is_rejected() {
    let dictionary = load_fixture_dictionary();
    let presets: Vec<Preset> = vec!["0-a=zzz".parse().unwrap()];

    let err = fill_square(&dictionary, 3, &presets, 10).unwrap_err();

    assert_eq!(
        err,
        ConflictError::NotInDictionary { entry: Entry::across(0), word: "zzz".to_string() }
    );
}

#[test]
fn test_preset_with_no_completion_yields_no_fills() {
    let dictionary = load_fixture_dictionary();
    // Column 2 would have to be "bit", and no row word ends in 'i'.
    let presets: Vec<Preset> = vec!["0-a=tab".parse().unwrap()];

    let outcome = fill_square(&dictionary, 3, &presets, 10).unwrap();

    assert!(outcome.results.is_empty());
    assert!(!outcome.statistics.cap_reached);
}
