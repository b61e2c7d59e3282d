use core::{hash::Hash, marker::PhantomData};
use std::collections::HashSet;

use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[must_use = "transducers do nothing unless applied"]
pub struct Dedupe<T> {
    _item: PhantomData<fn(T)>,
}

impl<T> Clone for Dedupe<T> {
    fn clone(&self) -> Self {
        dedupe()
    }
}

/// Forwards the first occurrence of every distinct value.
///
/// Every value forwarded during a run is remembered for the rest of that run,
/// so memory grows with the number of distinct values.
pub fn dedupe<T>() -> Dedupe<T> {
    Dedupe { _item: PhantomData }
}

pub struct DedupeReducer<R, T> {
    next: R,
    seen: HashSet<T>,
}

impl<R, T> Transducer<R> for Dedupe<T> {
    type Output = DedupeReducer<R, T>;

    fn apply(&self, next: R) -> Self::Output {
        DedupeReducer {
            next,
            seen: HashSet::new(),
        }
    }
}

impl<T, R> Reducer<T> for DedupeReducer<R, T>
where
    T: Eq + Hash + Clone,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.seen.contains(&item) {
            return Step::Continue(acc);
        }
        self.seen.insert(item.clone());
        self.next.reduce(acc, item)
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::dedupe;
    use crate::transform::tests::collect_vec;

    #[test]
    fn keeps_first_occurrences() {
        let out: Vec<i32> = collect_vec(&dedupe(), [1, 1, 2, 1, 3, 3]);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn seen_set_is_per_run() {
        let xform = dedupe();
        let first: Vec<&str> = collect_vec(&xform, ["x", "y", "x"]);
        let second: Vec<&str> = collect_vec(&xform, ["x"]);
        assert_eq!(first, vec!["x", "y"]);
        assert_eq!(second, vec!["x"]);
    }

    proptest! {
        #[test]
        fn output_is_distinct_in_first_seen_order(input in proptest::collection::vec(0u8..16, 0..64)) {
            let out: Vec<u8> = collect_vec(&dedupe(), input.clone());
            let mut expected = Vec::new();
            for x in input {
                if !expected.contains(&x) {
                    expected.push(x);
                }
            }
            prop_assert_eq!(out, expected);
        }
    }
}
