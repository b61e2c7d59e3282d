use crate::{
    probe::{ByHead, ByValue, Probe},
    reducer::Reducer,
    step::Step,
    transducer::Transducer,
};

#[derive(Clone)]
#[must_use = "transducers do nothing unless applied"]
pub struct Filter<P> {
    pub(super) probe: P,
    pub(super) retain: bool,
}

/// Forwards values for which `predicate` holds.
pub fn filter<P>(predicate: P) -> Filter<ByValue<P, bool>> {
    Filter {
        probe: ByValue::new(predicate),
        retain: true,
    }
}

/// Forwards nested sequences whose head satisfies `predicate`.
///
/// The nested sequence is split to reach its head and forwarded whole. Empty
/// nested sequences have no head and are dropped.
pub fn filter_head<P>(predicate: P) -> Filter<ByHead<P, bool>> {
    Filter {
        probe: ByHead::new(predicate),
        retain: true,
    }
}

/// Forwards values for which `predicate` does not hold.
pub fn remove<P>(predicate: P) -> Filter<ByValue<P, bool>> {
    Filter {
        probe: ByValue::new(predicate),
        retain: false,
    }
}

pub struct FilterReducer<R, P> {
    next: R,
    probe: P,
    retain: bool,
}

impl<R, P: Clone> Transducer<R> for Filter<P> {
    type Output = FilterReducer<R, P>;

    fn apply(&self, next: R) -> Self::Output {
        FilterReducer {
            next,
            probe: self.probe.clone(),
            retain: self.retain,
        }
    }
}

impl<T, R, P> Reducer<T> for FilterReducer<R, P>
where
    P: Probe<T, Verdict = bool>,
    R: Reducer<P::Value>,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    #[inline]
    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let (value, verdict) = self.probe.probe(item);
        if verdict == Some(self.retain) {
            self.next.reduce(acc, value)
        } else {
            Step::Continue(acc)
        }
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_head, remove};
    use crate::{
        comp,
        sequence::{Chunk, SequenceExt, Split},
        transform::{chunk_by, map, tests::collect_vec},
    };

    #[test]
    fn filter_and_remove_partition_input() {
        let kept: Vec<i32> = collect_vec(&filter(|x: &i32| x % 3 == 0), 0..10);
        let removed: Vec<i32> = collect_vec(&remove(|x: &i32| x % 3 == 0), 0..10);
        assert_eq!(kept, vec![0, 3, 6, 9]);
        assert_eq!(removed, vec![1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn head_predicate_classifies_runs() {
        let xform = comp!(
            chunk_by(|x: &i32| *x < 0),
            filter_head(|head: &i32| *head >= 0),
            map(|run: Split<Chunk<i32>>| run.iter().collect::<Vec<i32>>())
        );
        let out: Vec<Vec<i32>> = collect_vec(&xform, [1, 2, -1, -2, 3]);
        assert_eq!(out, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn empty_nested_sequence_is_dropped() {
        let xform = comp!(
            filter_head(|_: &u8| true),
            map(|split: Split<Chunk<u8>>| split.iter().count())
        );
        let input = vec![Chunk::from(vec![1u8]), Chunk::from(Vec::new())];
        let out: Vec<usize> = collect_vec(&xform, input);
        assert_eq!(out, vec![1]);
    }
}
