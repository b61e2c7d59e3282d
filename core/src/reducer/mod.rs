//! The reduction-step protocol and the terminal reducers a pipeline ends in.

pub mod collect;
pub mod completing;
pub mod count;
pub mod fold;

pub use collect::{collect, Collect};
pub use completing::{completing, Completing};
pub use count::{count, Count};
pub use fold::{fold, from_fn, Fold, FromFn};

use crate::step::Step;

/// One link of a reduction chain.
///
/// Transformations produce reducers that wrap and exclusively own the next
/// reducer; the chain ends in a terminal reducer that folds values into the
/// accumulator. `complete` is invoked exactly once per run, after the last
/// `reduce`, and wrapping reducers must forward it downstream.
pub trait Reducer<T> {
    type Acc;

    fn init(&mut self) -> Self::Acc;

    fn reduce(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc>;

    fn complete(&mut self, acc: Self::Acc) -> Self::Acc;
}

impl<T, R: Reducer<T> + ?Sized> Reducer<T> for &mut R {
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> Self::Acc {
        R::init(*self)
    }

    #[inline]
    fn reduce(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        R::reduce(*self, acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        R::complete(*self, acc)
    }
}

impl<T, R: Reducer<T> + ?Sized> Reducer<T> for Box<R> {
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> Self::Acc {
        R::init(self)
    }

    #[inline]
    fn reduce(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        R::reduce(self, acc, item)
    }

    #[inline]
    fn complete(&mut self, acc: Self::Acc) -> Self::Acc {
        R::complete(self, acc)
    }
}
