pub mod algo;
pub mod config;
pub mod error;

pub use algo::sorting::{
    selection_sort, selection_sort_range, Order, SelectionSorter, Sorted, RECURSION_LIMIT,
};
pub use algo::stats::{Report, Stats};
pub use error::{ParseOrderError, SortError};
