//! Pipeline assembly and the drivers that pull values through it.

pub mod reduce_stream;

pub use reduce_stream::{reduce_stream, ReduceStream};

use tracing::trace;

use crate::{reducer::Reducer, sequence::Sequence, step::Step, transducer::Transducer};

/// Wraps `reducer` in `xform`, invoking each factory exactly once.
#[inline]
pub fn assemble<X, R>(xform: &X, reducer: R) -> X::Output
where
    X: Transducer<R> + ?Sized,
{
    xform.apply(reducer)
}

/// Pulls every value of `sequence` into `reducer`.
///
/// Pulling stops at exhaustion or as soon as a reduction returns
/// [`Step::Done`]; values the sequence still holds at that point are left
/// unconsumed. `complete` runs exactly once on either path.
pub fn reduce<S, R>(mut sequence: S, mut reducer: R) -> R::Acc
where
    S: Sequence,
    R: Reducer<S::Item>,
{
    let mut acc = reducer.init();
    let mut pulled = 0usize;
    let mut terminated = false;

    while let Some(item) = sequence.next() {
        pulled += 1;
        match reducer.reduce(acc, item) {
            Step::Continue(next) => acc = next,
            Step::Done(next) => {
                acc = next;
                terminated = true;
                break;
            }
        }
    }

    trace!(pulled, terminated, "sequence drained, completing reduction");
    reducer.complete(acc)
}

/// Assembles `xform` around `reducer` and drives `sequence` through it.
///
/// # Examples
///
/// ```
/// use transduce_core::{comp, prelude::*, reducer::fold, transform::{map, take}};
///
/// let sum = run(
///     (1..).into_sequence(),
///     fold(0, |acc: u64, x: u64| acc + x),
///     &comp!(map(|x: u64| x * x), take(3)),
/// );
/// assert_eq!(sum, 1 + 4 + 9);
/// ```
pub fn run<S, R, X>(sequence: S, reducer: R, xform: &X) -> <X::Output as Reducer<S::Item>>::Acc
where
    S: Sequence,
    X: Transducer<R> + ?Sized,
    X::Output: Reducer<S::Item>,
{
    reduce(sequence, assemble(xform, reducer))
}
