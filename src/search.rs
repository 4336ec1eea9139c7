use std::ops::ControlFlow;

use instant::{Duration, Instant};

use crate::board::Board;
use crate::results::ResultSet;

/// A struct tracking statistics about the filling process.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Search nodes visited, including leaves.
    pub states: u64,
    /// Trial assignments undone.
    pub backtracks: u64,
    /// Nodes where no dictionary word fit the entry.
    pub dead_ends: u64,
    pub solutions: usize,
    /// Did the search stop early because `max_results` grids were found?
    pub cap_reached: bool,
    pub duration: Duration,
}

/// Everything a fill run produced.
#[derive(Debug, Clone)]
pub struct FillOutcome {
    pub results: ResultSet,
    pub statistics: Statistics,
}

/// Exhaustively fill the board's remaining entries by depth-first search, collecting up to
/// `max_results` complete grids. Running out of options isn't an error; it just means the
/// outcome holds fewer (possibly zero) grids.
///
/// The board is mutated in place during the search and is back in its starting state when this
/// returns.
pub fn find_fills(board: &mut Board, max_results: usize) -> FillOutcome {
    let start = Instant::now();
    let mut results = ResultSet::new(max_results);
    let mut statistics = Statistics::default();

    log::info!(
        "Filling a {0}x{0} grid: {1} entries to decide, up to {2} results",
        board.size(),
        board.entry_order().len(),
        max_results
    );

    board.begin_search();
    let flow = fill_from_cursor(board, &mut results, &mut statistics);

    statistics.cap_reached = flow.is_break();
    statistics.solutions = results.len();
    statistics.duration = start.elapsed();

    log::info!(
        "Found {} grids ({} states, {} backtracks, {} dead ends) in {:?}{}",
        statistics.solutions,
        statistics.states,
        statistics.backtracks,
        statistics.dead_ends,
        statistics.duration,
        if statistics.cap_reached { ", stopped at the result cap" } else { "" }
    );

    FillOutcome { results, statistics }
}

/// Decide the entry at the board's cursor and everything after it. `Break` means the result cap
/// was hit and every caller up the stack should stop (after reverting its own trial).
fn fill_from_cursor(
    board: &mut Board,
    results: &mut ResultSet,
    statistics: &mut Statistics,
) -> ControlFlow<()> {
    if results.is_full() {
        return ControlFlow::Break(());
    }

    statistics.states += 1;

    if board.is_resolved() {
        let grid = board.snapshot();
        if results.push(grid) {
            log::debug!("Found grid #{}:\n{}", results.len(), board.grid());
        }
        return if results.is_full() { ControlFlow::Break(()) } else { ControlFlow::Continue(()) };
    }

    let entry = board.current_entry();

    // This has to be a copy: trying each candidate overwrites the same cells.
    let original_straight = board.read_straight(entry);
    let mut candidates = board.candidates(&original_straight).peekable();

    if candidates.peek().is_none() {
        statistics.dead_ends += 1;
        log::trace!("No candidates for {} ({:?})", entry, original_straight);
        return ControlFlow::Continue(());
    }

    for candidate in candidates {
        board.write_straight(candidate.cells(), entry);
        board.advance();

        let flow = fill_from_cursor(board, results, statistics);

        board.write_straight(original_straight.iter().copied(), entry);
        board.rewind(entry);
        statistics.backtracks += 1;

        if flow.is_break() {
            return flow;
        }
    }

    ControlFlow::Continue(())
}
