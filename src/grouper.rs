use crate::{
    config::GroupConfig,
    error::PairSumError,
    input,
    pair::{Pair, PairSum, Sum, Value},
};
use log::debug;
use rayon::prelude::*;
use std::{collections::HashMap, time::Instant};

/// Below this many elements two pairs cannot be formed without sharing both
/// positions, so the scan is skipped altogether.
pub const MIN_ELEMENTS: usize = 4;

/// A sum is only reported when at least this many pairs reach it.
pub const MIN_PAIRS_PER_SUM: usize = 2;

type Buckets = HashMap<Sum, Vec<Pair>>;

/// # Description
///
/// Result of grouping a sequence: every qualifying sum mapped to the pairs
/// that reach it. Each bucket holds at least `MIN_PAIRS_PER_SUM` pairs.
///
/// Sums are not kept in any particular order. Use `sorted` for an
/// ascending-sum view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSumGroups {
    groups: Buckets,
    pairs_examined: usize,
}

impl PairSumGroups {
    pub fn get(&self, sum: Sum) -> Option<&[Pair]> {
        self.groups.get(&sum).map(Vec::as_slice)
    }

    /// Value-pairs for `sum`, in discovery order.
    pub fn value_pairs(&self, sum: Sum) -> Option<Vec<(Value, Value)>> {
        self.get(sum)
            .map(|pairs| pairs.iter().map(|p| p.values).collect())
    }

    pub fn contains_sum(&self, sum: Sum) -> bool {
        self.groups.contains_key(&sum)
    }

    /// Number of qualifying sums.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sum, &[Pair])> {
        self.groups.iter().map(|(sum, pairs)| (*sum, pairs.as_slice()))
    }

    /// Number of position pairs visited while building the groups. Zero when
    /// the short-input fast path was taken, `n * (n - 1) / 2` otherwise.
    pub fn pairs_examined(&self) -> usize {
        self.pairs_examined
    }

    /// Qualifying sums in ascending order.
    pub fn sorted(&self) -> Vec<PairSum> {
        let mut results: Vec<PairSum> = self
            .groups
            .iter()
            .map(|(sum, pairs)| PairSum {
                sum: *sum,
                pairs: pairs.clone(),
            })
            .collect();
        results.sort_by_key(|pair_sum| pair_sum.sum);
        results
    }

    pub fn into_map(self) -> HashMap<Sum, Vec<Pair>> {
        self.groups
    }
}

/// # Description
///
/// Owns an input sequence and groups its pairs by sum. The sequence is never
/// mutated, so repeated calls to `group` return equal results.
#[derive(Debug, Clone)]
pub struct PairSumGrouper {
    values: Vec<Value>,
    config: GroupConfig,
}

impl PairSumGrouper {
    pub fn new(values: Vec<Value>) -> Self {
        Self::with_config(values, GroupConfig::default())
    }

    pub fn with_config(values: Vec<Value>, config: GroupConfig) -> Self {
        PairSumGrouper { values, config }
    }

    /// Build a grouper from untyped tokens, failing with `InvalidInput` if
    /// any token is not an integer.
    pub fn from_tokens<S: AsRef<str>>(
        tokens: &[S],
        config: GroupConfig,
    ) -> Result<Self, PairSumError> {
        Ok(Self::with_config(input::parse_tokens(tokens)?, config))
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn group(&self) -> PairSumGroups {
        group_with_config(&self.values, self.config)
    }

    /// Qualifying sums in ascending order, ready for display.
    pub fn formatted_results(&self) -> Vec<PairSum> {
        self.group().sorted()
    }
}

/// Group all pairs of `values` by sum with the default (sequential) config.
pub fn group(values: &[Value]) -> PairSumGroups {
    group_with_config(values, GroupConfig::default())
}

/// # Description
///
/// Enumerate every pair of distinct positions exactly once, bucket them by
/// sum, and keep only sums reached by at least two pairs.
///
/// The scan runs over a value-sorted view of the input. Pairs keep their
/// original positions, so the sort only affects the order in which pairs are
/// discovered, which is deterministic for equal inputs.
pub fn group_with_config(values: &[Value], config: GroupConfig) -> PairSumGroups {
    if values.len() < MIN_ELEMENTS {
        debug!(
            "sequence has {} elements (< {MIN_ELEMENTS}), cannot form two pairs",
            values.len()
        );
        return PairSumGroups::default();
    }

    let start = Instant::now();
    let order = sorted_positions(values);

    let mut buckets = if config.parallel {
        scan_parallel(values, &order)
    } else {
        scan_sequential(values, &order)
    };

    let pairs_examined: usize = buckets.values().map(Vec::len).sum();
    buckets.retain(|_, pairs| pairs.len() >= MIN_PAIRS_PER_SUM);

    debug!(
        "examined {pairs_examined} pairs, {} qualifying sums (parallel: {}) in {:.6} seconds",
        buckets.len(),
        config.parallel,
        start.elapsed().as_secs_f64()
    );

    PairSumGroups {
        groups: buckets,
        pairs_examined,
    }
}

/// Positions of `values` in ascending value order. The sort is stable, so
/// equal values keep their input order.
fn sorted_positions(values: &[Value]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by_key(|&pos| values[pos]);
    order
}

/// Push every pair `(order[row], order[j])` with `j > row` into `buckets`.
fn scan_row(values: &[Value], order: &[usize], row: usize, buckets: &mut Buckets) {
    let pos_a = order[row];
    let val_a = values[pos_a];
    for &pos_b in &order[row + 1..] {
        let pair = Pair::new(pos_a, val_a, pos_b, values[pos_b]);
        buckets.entry(pair.sum()).or_default().push(pair);
    }
}

fn scan_sequential(values: &[Value], order: &[usize]) -> Buckets {
    let mut buckets = Buckets::new();
    for row in 0..order.len() {
        scan_row(values, order, row, &mut buckets);
    }
    buckets
}

/// Rows are split into contiguous chunks, scanned independently, and merged
/// back in chunk order so every bucket ends up in the same order as with
/// `scan_sequential`.
fn scan_parallel(values: &[Value], order: &[usize]) -> Buckets {
    let rows: Vec<usize> = (0..order.len()).collect();
    let chunk_size = (rows.len() / (rayon::current_num_threads() * 4)).max(1);

    let partials: Vec<Buckets> = rows
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut partial = Buckets::new();
            for &row in chunk {
                scan_row(values, order, row, &mut partial);
            }
            partial
        })
        .collect();

    let mut buckets = Buckets::new();
    for partial in partials {
        for (sum, pairs) in partial {
            buckets.entry(sum).or_default().extend(pairs);
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const PROPTEST_CASES: u32 = 64;

    /// Straightforward O(n^2) reference over the unsorted input.
    fn brute_force(values: &[Value]) -> HashMap<Sum, HashSet<(usize, usize)>> {
        let mut all: HashMap<Sum, HashSet<(usize, usize)>> = HashMap::new();
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                let sum = Sum::from(values[i]) + Sum::from(values[j]);
                all.entry(sum).or_default().insert((i, j));
            }
        }
        all.retain(|_, pairs| pairs.len() >= MIN_PAIRS_PER_SUM);
        all
    }

    #[test]
    fn test_short_inputs_are_empty() {
        assert!(group(&[]).is_empty());
        assert!(group(&[1]).is_empty());
        assert!(group(&[1, 2, 3]).is_empty());
        assert_eq!(group(&[1, 2, 3]).pairs_examined(), 0);
    }

    #[test]
    fn test_four_distinct_elements_without_match() {
        // Sums: 3, 5, 9, 6, 10, 12
        let groups = group(&[1, 2, 4, 8]);
        assert!(groups.is_empty());
        assert_eq!(groups.pairs_examined(), 6);
    }

    #[test]
    fn test_all_equal_values_are_distinct_pairs() {
        let groups = group(&[5, 5, 5, 5]);
        let pairs = groups.get(10).unwrap();
        assert_eq!(pairs.len(), 6);

        let positions: HashSet<(usize, usize)> = pairs.iter().map(|p| p.positions).collect();
        assert_eq!(positions.len(), 6);
        assert!(pairs.iter().all(|p| p.values == (5, 5)));
    }

    #[test]
    fn test_discovery_follows_sorted_order() {
        let groups = group(&[8, 1, 7, 2]);
        assert_eq!(groups.value_pairs(9).unwrap(), vec![(1, 8), (2, 7)]);
        let positions: Vec<(usize, usize)> =
            groups.get(9).unwrap().iter().map(|p| p.positions).collect();
        assert_eq!(positions, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_overlapping_pairs_are_allowed() {
        // (0, 2) and (0, 3) share position 0 but are separate pairs.
        let groups = group(&[1, 9, 3, 3]);
        assert_eq!(groups.value_pairs(4).unwrap(), vec![(1, 3), (1, 3)]);
        assert_eq!(groups.value_pairs(12).unwrap(), vec![(3, 9), (3, 9)]);
    }

    #[test]
    fn test_sorted_is_ascending() {
        let groups = group(&[3, 5, 7, 8, 9, 10, 12, 14]);
        let sums: Vec<Sum> = groups.sorted().iter().map(|p| p.sum).collect();
        let mut expected = sums.clone();
        expected.sort();
        assert_eq!(sums, expected);
        assert_eq!(sums.len(), groups.len());
    }

    #[test]
    fn test_grouper_from_tokens() {
        let grouper =
            PairSumGrouper::from_tokens(&["1", "2", "3", "4"], GroupConfig::default()).unwrap();
        assert_eq!(grouper.values(), &[1, 2, 3, 4]);
        assert_eq!(grouper.group().value_pairs(5).unwrap(), vec![(1, 4), (2, 3)]);

        let err = PairSumGrouper::from_tokens(&["1", "x"], GroupConfig::default()).unwrap_err();
        assert!(matches!(err, PairSumError::InvalidInput { .. }));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let groups = group(&[Value::MAX, Value::MAX, Value::MIN, Value::MIN]);
        assert_eq!(groups.get(-1).unwrap().len(), 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

        #[test]
        fn every_pair_sums_to_its_bucket(values in prop::collection::vec(-50i64..50, 0..40)) {
            let groups = group(&values);
            for (sum, pairs) in groups.iter() {
                prop_assert!(pairs.len() >= MIN_PAIRS_PER_SUM);
                for pair in pairs {
                    prop_assert_eq!(pair.sum(), sum);
                    prop_assert!(pair.positions.0 < pair.positions.1);
                    prop_assert_eq!(values[pair.positions.0].min(values[pair.positions.1]), pair.values.0);
                    prop_assert_eq!(values[pair.positions.0].max(values[pair.positions.1]), pair.values.1);
                }
            }
        }

        #[test]
        fn matches_brute_force(values in prop::collection::vec(-20i64..20, 4..30)) {
            let groups = group(&values);
            let expected = brute_force(&values);
            let n = values.len();
            prop_assert_eq!(groups.pairs_examined(), n * (n - 1) / 2);
            prop_assert_eq!(groups.len(), expected.len());
            for (sum, pairs) in groups.iter() {
                let positions: HashSet<(usize, usize)> = pairs.iter().map(|p| p.positions).collect();
                prop_assert_eq!(positions.len(), pairs.len());
                prop_assert_eq!(Some(&positions), expected.get(&sum));
            }
        }

        #[test]
        fn grouping_is_idempotent(values in prop::collection::vec(any::<i64>(), 0..30)) {
            let grouper = PairSumGrouper::new(values);
            prop_assert_eq!(grouper.group(), grouper.group());
        }

        #[test]
        fn parallel_matches_sequential(values in prop::collection::vec(-30i64..30, 0..60)) {
            let sequential = group_with_config(&values, GroupConfig::sequential());
            let parallel = group_with_config(&values, GroupConfig::parallel());
            prop_assert_eq!(sequential, parallel);
        }
    }
}
