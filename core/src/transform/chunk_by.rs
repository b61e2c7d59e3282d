use core::{marker::PhantomData, mem};

use tracing::trace;

use crate::{
    probe::{ByHead, ByValue, Probe, ProbeKey},
    reducer::Reducer,
    sequence::Chunk,
    step::Step,
    transducer::Transducer,
};

#[must_use = "transducers do nothing unless applied"]
pub struct ChunkBy<P, V> {
    probe: P,
    _value: PhantomData<fn(V)>,
}

impl<P: Clone, V> Clone for ChunkBy<P, V> {
    fn clone(&self) -> Self {
        Self {
            probe: self.probe.clone(),
            _value: PhantomData,
        }
    }
}

/// Groups consecutive values that `classify` maps to the same key.
///
/// Each run is forwarded as a [`Chunk`] once a value with a different key
/// arrives; the last run is flushed at completion.
pub fn chunk_by<F, K, V>(classify: F) -> ChunkBy<ByValue<F, K>, V> {
    ChunkBy {
        probe: ByValue::new(classify),
        _value: PhantomData,
    }
}

/// Like [`chunk_by`] for nested sequence values, classified by their head.
///
/// An empty nested sequence has no key and joins the current run.
pub fn chunk_by_head<F, K, V>(classify: F) -> ChunkBy<ByHead<F, K>, V> {
    ChunkBy {
        probe: ByHead::new(classify),
        _value: PhantomData,
    }
}

pub struct ChunkByReducer<R, P, K, V> {
    next: R,
    probe: P,
    key: Option<K>,
    run: Vec<V>,
    terminated: bool,
}

impl<R, P, V> Transducer<R> for ChunkBy<P, V>
where
    P: Clone + ProbeKey,
{
    type Output = ChunkByReducer<R, P, P::Key, V>;

    fn apply(&self, next: R) -> Self::Output {
        ChunkByReducer {
            next,
            probe: self.probe.clone(),
            key: None,
            run: Vec::new(),
            terminated: false,
        }
    }
}

impl<T, R, P, K, V> Reducer<T> for ChunkByReducer<R, P, K, V>
where
    P: Probe<T, Value = V, Verdict = K>,
    K: PartialEq,
    R: Reducer<Chunk<V>>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, mut acc: R::Acc, item: T) -> Step<R::Acc> {
        let (value, verdict) = self.probe.probe(item);
        if let Some(key) = verdict {
            let boundary = matches!(&self.key, Some(current) if *current != key);
            self.key = Some(key);
            if boundary && !self.run.is_empty() {
                let run = mem::take(&mut self.run);
                match self.next.reduce(acc, Chunk::from(run)) {
                    Step::Continue(next) => acc = next,
                    Step::Done(next) => {
                        self.terminated = true;
                        return Step::Done(next);
                    }
                }
            }
        }
        self.run.push(value);
        Step::Continue(acc)
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        let acc = if self.run.is_empty() || self.terminated {
            acc
        } else {
            let run = mem::take(&mut self.run);
            trace!(len = run.len(), "flushing pending run");
            self.next.reduce(acc, Chunk::from(run)).into_inner()
        };
        self.next.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::{chunk_by, chunk_by_head};
    use crate::{
        comp,
        sequence::{Chunk, SequenceExt, Split},
        transform::{chunk, map, take, tests::collect_vec},
    };

    #[test]
    fn splits_on_key_change() {
        let xform = comp!(
            chunk_by(|x: &i32| x % 2),
            map(|c: Chunk<i32>| c.into_vec())
        );
        let out: Vec<Vec<i32>> = collect_vec(&xform, [1, 3, 2, 4, 6, 5]);
        assert_eq!(out, vec![vec![1, 3], vec![2, 4, 6], vec![5]]);
    }

    #[test]
    fn empty_input_forwards_nothing() {
        let out: Vec<Chunk<i32>> = collect_vec(&chunk_by(|x: &i32| *x), Vec::new());
        assert!(out.is_empty());
    }

    #[test]
    fn termination_drops_pending_run() {
        let xform = comp!(chunk_by(|c: &char| c.is_ascii_digit()), take(1));
        let out: Vec<Chunk<char>> = collect_vec(&xform, "ab12c".chars());
        assert_eq!(out, vec![vec!['a', 'b']]);
    }

    #[test]
    fn head_classification_regroups_windows() {
        let xform = comp!(
            chunk(2).unwrap(),
            chunk_by_head(|head: &i32| *head < 4),
            map(|group: Chunk<Split<Chunk<i32>>>| {
                group
                    .into_iter()
                    .flat_map(|window| window.iter())
                    .collect::<Vec<i32>>()
            })
        );
        let out: Vec<Vec<i32>> = collect_vec(&xform, 0..7);
        assert_eq!(out, vec![vec![0, 1, 2, 3], vec![4, 5, 6]]);
    }
}
