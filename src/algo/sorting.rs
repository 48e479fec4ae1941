use std::ops::Range;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::algo::stats::{Report, Stats};
use crate::error::{ParseOrderError, SortError};

/// Longest range `sort_recursive` recurses over; longer ranges use the loop.
pub const RECURSION_LIMIT: usize = 1024;

/// Direction of the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /// true when `candidate` is strictly more extremal than `current`:
    /// smaller for `Ascending`, larger for `Descending`.
    pub fn prefers<T: Ord>(self, candidate: &T, current: &T) -> bool {
        match self {
            Order::Ascending => candidate < current,
            Order::Descending => candidate > current,
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::Ascending
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            _ => Err(ParseOrderError(s.to_owned())),
        }
    }
}

/// A sorted copy of the input together with the counters of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted<T> {
    pub elements: Vec<T>,
    pub stats: Stats,
    /// the half-open range that was sorted
    pub range: Range<usize>,
}

impl<T> Sorted<T> {
    pub fn report(&self) -> Report {
        Report::new(self.range.len(), &self.stats)
    }

    pub fn log_report(&self) {
        let report = self.report();
        tracing::info!(
            len = report.len,
            expected_compares = report.expected_compares,
            actual_compares = report.actual_compares,
            expected_exchanges = report.expected_exchanges,
            actual_exchanges = report.actual_exchanges,
            "selection sort report"
        );
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

/// Selection sort configured with an order and an optional index range.
///
/// Every outer step performs exactly one exchange, including the degenerate
/// exchange of an element with itself, so a range of `n` elements always
/// costs `n * (n - 1) / 2` compares and `n - 1` exchanges.
///
/// ```
/// use selection::{Order, SelectionSorter};
///
/// let sorted = SelectionSorter::new(Order::Ascending)
///     .sort(&[6, 5, 4, 3, 2, 0, 1])
///     .unwrap();
/// assert_eq!(sorted.elements, vec![0, 1, 2, 3, 4, 5, 6]);
/// assert_eq!((sorted.stats.compares, sorted.stats.exchanges), (21, 6));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSorter {
    order: Order,
    range: Option<(usize, usize)>,
    require_non_empty: bool,
}

impl SelectionSorter {
    pub fn new(order: Order) -> SelectionSorter {
        SelectionSorter {
            order,
            range: None,
            require_non_empty: false,
        }
    }

    /// Restrict sorting to `range`; positions outside it are left as they are.
    pub fn with_range(mut self, range: Range<usize>) -> SelectionSorter {
        self.range = Some((range.start, range.end));
        self
    }

    pub fn require_non_empty(mut self) -> SelectionSorter {
        self.require_non_empty = true;
        self
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn sort<T: Ord + Clone>(&self, elements: &[T]) -> Result<Sorted<T>, SortError> {
        let range = self.resolve_range(elements.len())?;
        let (elements, stats) = run(elements.to_vec(), range.clone(), self.order);
        tracing::debug!(
            order = ?self.order,
            start = range.start,
            end = range.end,
            compares = stats.compares,
            exchanges = stats.exchanges,
            "selection sort finished"
        );
        Ok(Sorted {
            elements,
            stats,
            range,
        })
    }

    /// Same result and counters as [`SelectionSorter::sort`], driven by
    /// recursion on the sorted/unsorted boundary instead of a loop.
    ///
    /// Ranges longer than [`RECURSION_LIMIT`] are sorted by the loop so the
    /// stack depth stays bounded.
    pub fn sort_recursive<T: Ord + Clone>(&self, elements: &[T]) -> Result<Sorted<T>, SortError> {
        let range = self.resolve_range(elements.len())?;
        if range.len() > RECURSION_LIMIT {
            tracing::debug!(len = range.len(), "range too long to recurse, using the loop");
            return self.sort(elements);
        }
        let (elements, stats) = run_rec(
            elements.to_vec(),
            range.start,
            range.end,
            self.order,
            Stats::default(),
        );
        tracing::debug!(
            order = ?self.order,
            start = range.start,
            end = range.end,
            compares = stats.compares,
            exchanges = stats.exchanges,
            "recursive selection sort finished"
        );
        Ok(Sorted {
            elements,
            stats,
            range,
        })
    }

    // the default end depends on the input, so it is resolved here
    fn resolve_range(&self, len: usize) -> Result<Range<usize>, SortError> {
        if self.require_non_empty && len == 0 {
            return Err(SortError::EmptyInput);
        }
        let (start, end) = self.range.unwrap_or((0, len));
        if start > end || end > len {
            return Err(SortError::InvalidRange { start, end, len });
        }
        Ok(start..end)
    }
}

/// Sort the whole of `elements` into a new vector.
pub fn selection_sort<T: Ord + Clone>(elements: &[T], order: Order) -> Vec<T> {
    run(elements.to_vec(), 0..elements.len(), order).0
}

pub fn selection_sort_range<T: Ord + Clone>(
    elements: &[T],
    order: Order,
    range: Range<usize>,
) -> Result<Vec<T>, SortError> {
    SelectionSorter::new(order)
        .with_range(range)
        .sort(elements)
        .map(Sorted::into_elements)
}

fn run<T: Ord>(mut vec: Vec<T>, range: Range<usize>, order: Order) -> (Vec<T>, Stats) {
    let mut stats = Stats::default();
    for focus in range.start..range.end.saturating_sub(1) {
        let chosen = select(&vec, focus, range.end, order, &mut stats);
        exchange(&mut vec, focus, chosen, &mut stats);
    }
    (vec, stats)
}

fn run_rec<T: Ord>(
    mut vec: Vec<T>,
    focus: usize,
    end: usize,
    order: Order,
    mut stats: Stats,
) -> (Vec<T>, Stats) {
    if focus + 1 >= end {
        (vec, stats)
    } else {
        let chosen = select(&vec, focus, end, order, &mut stats);
        exchange(&mut vec, focus, chosen, &mut stats);
        run_rec(vec, focus + 1, end, order, stats)
    }
}

// index of the most extremal element in vec[focus..end]; earliest wins on ties
fn select<T: Ord>(vec: &[T], focus: usize, end: usize, order: Order, stats: &mut Stats) -> usize {
    let mut chosen = focus;
    for j in (focus + 1)..end {
        stats.record_compare();
        if order.prefers(&vec[j], &vec[chosen]) {
            chosen = j;
        }
    }
    chosen
}

// counted even when focus == chosen
fn exchange<T>(vec: &mut [T], focus: usize, chosen: usize, stats: &mut Stats) {
    stats.record_exchange();
    vec.swap(focus, chosen);
}

#[cfg(test)]
mod tests {
    use crate::algo::sorting::{
        selection_sort, selection_sort_range, Order, SelectionSorter, RECURSION_LIMIT,
    };
    use crate::algo::stats::Stats;
    use crate::error::SortError;
    use std::cmp::Ordering;

    #[test]
    fn playground_array() {
        let sorted = SelectionSorter::new(Order::Ascending)
            .sort(&[6, 5, 4, 3, 2, 0, 1])
            .unwrap();
        assert_eq!(sorted.elements, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(
            sorted.stats,
            Stats {
                compares: 21,
                exchanges: 6
            }
        );
        assert!(sorted.report().matches_expected());
    }

    #[test]
    fn descending() {
        let v = vec![3, 9, 1, 7, 7, 0];
        assert_eq!(selection_sort(&v, Order::Descending), vec![9, 7, 7, 3, 1, 0]);
        assert_eq!(selection_sort(&v, Order::Ascending), vec![0, 1, 3, 7, 7, 9]);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(selection_sort::<i8>(&[], Order::Ascending), Vec::<i8>::new());
        assert_eq!(selection_sort(&[42], Order::Descending), vec![42]);
        let sorted = SelectionSorter::default().sort::<i8>(&[]).unwrap();
        assert_eq!(sorted.stats, Stats::default());
        let sorted = SelectionSorter::default().sort(&[1]).unwrap();
        assert_eq!(sorted.stats, Stats::default());
    }

    #[test]
    fn require_non_empty() {
        let sorter = SelectionSorter::new(Order::Ascending).require_non_empty();
        assert_eq!(sorter.sort::<u8>(&[]), Err(SortError::EmptyInput));
        assert_eq!(sorter.sort(&[2, 1]).unwrap().elements, vec![1, 2]);
    }

    #[test]
    fn bounded_range_leaves_the_rest() {
        let arr = [1, 6, 43, 50, 3, 2, 2, 5, 67, 54, 0, 9, 5];
        let sorted = selection_sort_range(&arr, Order::Ascending, 0..3).unwrap();
        assert_eq!(sorted, arr.to_vec());

        let sorted = SelectionSorter::new(Order::Ascending)
            .with_range(1..4)
            .sort(&[5, 4, 3, 2, 1])
            .unwrap();
        assert_eq!(sorted.elements, vec![5, 2, 3, 4, 1]);
        assert_eq!(
            sorted.stats,
            Stats {
                compares: 3,
                exchanges: 2
            }
        );
        assert!(sorted.report().matches_expected());
    }

    #[test]
    fn empty_range_is_a_no_op() {
        let sorted = SelectionSorter::new(Order::Descending)
            .with_range(2..2)
            .sort(&[1, 2, 3, 4])
            .unwrap();
        assert_eq!(sorted.elements, vec![1, 2, 3, 4]);
        assert_eq!(sorted.stats, Stats::default());
    }

    #[test]
    fn invalid_ranges() {
        let arr = [3, 2, 1];
        let reversed = 2..1;
        assert_eq!(
            selection_sort_range(&arr, Order::Ascending, reversed),
            Err(SortError::InvalidRange {
                start: 2,
                end: 1,
                len: 3
            })
        );
        assert_eq!(
            selection_sort_range(&arr, Order::Ascending, 0..4),
            Err(SortError::InvalidRange {
                start: 0,
                end: 4,
                len: 3
            })
        );
        assert!(SelectionSorter::default()
            .with_range(0..4)
            .sort_recursive(&arr)
            .is_err());
        assert_eq!(selection_sort_range(&arr, Order::Ascending, 0..3), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn recursive_matches_iterative() {
        let arr = [1, 6, 43, 50, 3, 2, 2, 5, 67, 54, 0, 9, 5];
        for order in [Order::Ascending, Order::Descending].iter() {
            for range in [0..13, 0..3, 4..11, 12..13].iter() {
                let sorter = SelectionSorter::new(*order).with_range(range.clone());
                assert_eq!(sorter.sort(&arr), sorter.sort_recursive(&arr));
            }
        }
    }

    #[test]
    fn recursive_past_the_limit() {
        let arr: Vec<u8> = (0..RECURSION_LIMIT + 1).map(|i| (i * 7 % 251) as u8).collect();
        let sorter = SelectionSorter::new(Order::Descending);
        assert_eq!(sorter.sort(&arr), sorter.sort_recursive(&arr));

        let arr: Vec<u8> = (0..20_000).map(|i| (i * 31 % 256) as u8).collect();
        let sorted = SelectionSorter::new(Order::Ascending)
            .sort_recursive(&arr)
            .unwrap();
        assert!(sorted.elements.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorted.stats.exchanges, 19_999);
        assert!(sorted.report().matches_expected());
    }

    #[test]
    fn sorter_is_copy() {
        let sorter = SelectionSorter::new(Order::Descending).with_range(1..3);
        let copy = sorter;
        assert_eq!(sorter.sort(&[1, 2, 3, 4]), copy.sort(&[1, 2, 3, 4]));
        assert_eq!(copy.order(), Order::Descending);
    }

    #[derive(Debug, Clone)]
    struct Tagged {
        key: u8,
        tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn all_equal_keep_their_order() {
        let arr: Vec<Tagged> = (0..6).map(|tag| Tagged { key: 7, tag }).collect();
        for order in [Order::Ascending, Order::Descending].iter() {
            let sorted = SelectionSorter::new(*order).sort(&arr).unwrap();
            let tags: Vec<usize> = sorted.elements.iter().map(|t| t.tag).collect();
            assert_eq!(tags, vec![0, 1, 2, 3, 4, 5]);
            assert_eq!(sorted.stats.exchanges, 5);
        }
    }

    #[test]
    fn earliest_extremal_wins() {
        let arr = vec![
            Tagged { key: 3, tag: 0 },
            Tagged { key: 1, tag: 1 },
            Tagged { key: 1, tag: 2 },
        ];
        let sorted = selection_sort(&arr, Order::Ascending);
        assert_eq!(sorted[0].tag, 1);
    }

    #[test]
    fn strings_and_chars() {
        let arr = ["rust", "python", "java", "c++"];
        assert_eq!(
            selection_sort(&arr, Order::Ascending),
            vec!["c++", "java", "python", "rust"]
        );
        let arr = ['z', 'a', 'm', 'b', 'y'];
        assert_eq!(
            selection_sort(&arr, Order::Descending),
            vec!['z', 'y', 'm', 'b', 'a']
        );
    }

    #[test]
    fn parse_order() {
        assert_eq!("asc".parse::<Order>(), Ok(Order::Ascending));
        assert_eq!("Descending".parse::<Order>(), Ok(Order::Descending));
        assert!("sideways".parse::<Order>().is_err());
    }
}
