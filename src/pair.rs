use serde::Serialize;
use std::fmt;

/// Element type of an input sequence.
pub type Value = i64;

/// Sum of two `Value`s. Wide enough that no pair of inputs can overflow it.
pub type Sum = i128;

/// # Description
///
/// An unordered combination of two distinct positions in the input sequence.
///
/// Identity is given by `positions`, so two pairs with equal values are still
/// different pairs if they come from different positions. `values` is the
/// canonical `(min, max)` rendering of the elements at those positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pair {
    /// Positions in the original (unsorted) input, smaller index first.
    pub positions: (usize, usize),
    /// Values at `positions`, smaller value first.
    pub values: (Value, Value),
}

impl Pair {
    pub fn new(pos_a: usize, val_a: Value, pos_b: usize, val_b: Value) -> Self {
        Pair {
            positions: (pos_a.min(pos_b), pos_a.max(pos_b)),
            values: (val_a.min(val_b), val_a.max(val_b)),
        }
    }

    pub fn sum(&self) -> Sum {
        Sum::from(self.values.0) + Sum::from(self.values.1)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {})", self.values.0, self.values.1)
    }
}

/// # Description
///
/// A qualifying sum together with every pair that reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairSum {
    pub sum: Sum,
    pub pairs: Vec<Pair>,
}

impl PairSum {
    /// Value-pairs only, in discovery order.
    pub fn value_pairs(&self) -> Vec<(Value, Value)> {
        self.pairs.iter().map(|p| p.values).collect()
    }
}

impl fmt::Display for PairSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs_str: Vec<String> = self.pairs.iter().map(|p| p.to_string()).collect();
        write!(f, "Pairs : {} have sum : {}", pairs_str.join(" "), self.sum)
    }
}
