//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`] — Closed-tour 2-opt segment reversal

mod two_opt;

pub use two_opt::{tour_length, two_opt_improve, MAX_TWO_OPT_PASSES};
