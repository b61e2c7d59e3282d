//! Runs independent pipeline instantiations over disjoint parts of a slice.
//!
//! A single assembled pipeline is never shared between threads. Instead every
//! part gets its own pipeline, applied from the same reusable transducer, so
//! stateful transformations keep per-part state: a `take(3)` takes three
//! values from every part.

use std::{panic, slice, sync::Barrier, thread};

use tracing::debug;
use transduce_core::{
    execution::{assemble, reduce, run},
    reducer::Reducer,
    sequence::{IntoSequence, IteratorSequence, Sequence},
    transducer::Transducer,
    Error, Result,
};

pub trait IndexedParallelSequence {
    type Sequence: Sequence;

    type Parts: Iterator<Item = Self::Sequence>;

    /// Splits into at most `n` contiguous, non-empty parts.
    fn split_into(self, n: usize) -> Result<Self::Parts>;
}

pub struct Parts<'slice, T> {
    slice: &'slice [T],
    step: usize,
    n: usize,
}

impl<'slice, T> Iterator for Parts<'slice, T> {
    type Item = IteratorSequence<slice::Iter<'slice, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.n >= self.slice.len() {
            return None;
        }
        let end = self.slice.len().min(self.n + self.step);
        let part = &self.slice[self.n..end];
        self.n = end;
        Some(part.iter().into())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.slice.len() - self.n).div_ceil(self.step);
        (size, Some(size))
    }
}

impl<'slice, T> ExactSizeIterator for Parts<'slice, T> {}

impl<'slice, T> IndexedParallelSequence for &'slice [T] {
    type Sequence = IteratorSequence<slice::Iter<'slice, T>>;

    type Parts = Parts<'slice, T>;

    fn split_into(self, n: usize) -> Result<Self::Parts> {
        if n == 0 {
            return Err(Error::InvalidParallelism(n));
        }
        Ok(Parts {
            slice: self,
            step: self.len().div_ceil(n).max(1),
            n: 0,
        })
    }
}

pub type Acc<'slice, T, X, R> = <<X as Transducer<R>>::Output as Reducer<&'slice T>>::Acc;

/// Runs one pipeline per part of `slice` on scoped threads and merges the
/// per-part accumulators in part order.
///
/// `make_reducer` supplies the terminal reducer of each pipeline. Every part
/// assembles its pipeline before any part starts pulling values. An empty
/// slice runs a single pipeline over no values.
///
/// # Examples
///
/// ```
/// use transduce_core::{reducer::fold, transform::map};
/// use transduce_parallel::run_split;
///
/// let values: Vec<u64> = (1..=100).collect();
/// let sum = run_split(
///     &values,
///     4,
///     &map(|x: &u64| x * 2),
///     || fold(0, |acc: u64, x: u64| acc + x),
///     |a, b| a + b,
/// )?;
/// assert_eq!(sum, 10100);
/// # Ok::<(), transduce_core::Error>(())
/// ```
pub fn run_split<'slice, T, X, R, M, F>(
    slice: &'slice [T],
    n: usize,
    xform: &X,
    make_reducer: M,
    merge: F,
) -> Result<Acc<'slice, T, X, R>>
where
    T: Sync,
    X: Transducer<R> + Sync,
    X::Output: Reducer<&'slice T>,
    Acc<'slice, T, X, R>: Send,
    M: Fn() -> R + Sync,
    F: FnMut(Acc<'slice, T, X, R>, Acc<'slice, T, X, R>) -> Acc<'slice, T, X, R>,
{
    let parts = slice.split_into(n)?;
    debug!(parts = parts.len(), len = slice.len(), "dispatching pipelines");
    let assembled = Barrier::new(parts.len());

    let results = thread::scope(|scope| {
        let handles: Vec<_> = parts
            .map(|part| {
                let make_reducer = &make_reducer;
                let assembled = &assembled;
                scope.spawn(move || {
                    let reducer = assemble(xform, make_reducer());
                    assembled.wait();
                    reduce(part, reducer)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(acc) => acc,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect::<Vec<_>>()
    });

    let merged = results.into_iter().reduce(merge);
    Ok(match merged {
        Some(acc) => acc,
        None => {
            let empty: &'slice [T] = &[];
            run(empty.iter().into_sequence(), make_reducer(), xform)
        }
    })
}
