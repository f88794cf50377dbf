//! Single-pass algorithms over integer sequences.
//!
//! Every operation accepts an optional sequence. An absent sequence is passed through as
//! `Ok(None)`, while inputs that break an operation's precondition (unsorted input to
//! deduplication, non-binary input to streak counting, negative input to digit counting,
//! overflowing squares) are reported as errors. Read-only operations never mutate their
//! input; `*_inplace` variants only write after the whole input has been validated.

use eyre::{Report, Result};

pub use dedup::{remove_duplicates_sorted, remove_duplicates_sorted_inplace, unique_runs};
pub use digits::count_even_digit_count;
pub use square::{square_even, square_even_inplace};
pub use streak::{longest_run, max_consecutive_ones};

mod dedup;
mod digits;
mod square;
mod streak;

fn absent<R>(operation: &str) -> Result<Option<R>> {
    log::debug!("{operation}: absent sequence, nothing to process");
    Ok(None)
}

fn violation(operation: &str, report: Report) -> Report {
    log::warn!("{operation}: {report}");
    report
}
