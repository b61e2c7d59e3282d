use core::marker::PhantomData;

use super::Reducer;
use crate::step::Step;

/// Folds with a reducing function starting from an explicit seed.
#[derive(Clone)]
#[must_use = "reducers do nothing unless driven"]
pub struct Fold<A, F> {
    seed: A,
    f: F,
}

/// Folds values into `seed` with `f`, e.g. a running sum.
pub fn fold<A, F>(seed: A, f: F) -> Fold<A, F> {
    Fold { seed, f }
}

impl<T, A, F> Reducer<T> for Fold<A, F>
where
    A: Clone,
    F: FnMut(A, T) -> A,
{
    type Acc = A;

    fn init(&mut self) -> A {
        self.seed.clone()
    }

    fn reduce(&mut self, acc: A, item: T) -> Step<A> {
        Step::Continue((self.f)(acc, item))
    }

    fn complete(&mut self, acc: A) -> A {
        acc
    }
}

/// A bare reducing function.
///
/// The initial accumulator is `A::default()` and completion is the identity.
#[must_use = "reducers do nothing unless driven"]
pub struct FromFn<F, A> {
    f: F,
    _acc: PhantomData<fn() -> A>,
}

pub fn from_fn<A, F>(f: F) -> FromFn<F, A> {
    FromFn {
        f,
        _acc: PhantomData,
    }
}

impl<F: Clone, A> Clone for FromFn<F, A> {
    fn clone(&self) -> Self {
        from_fn(self.f.clone())
    }
}

impl<T, A, F> Reducer<T> for FromFn<F, A>
where
    A: Default,
    F: FnMut(A, T) -> A,
{
    type Acc = A;

    fn init(&mut self) -> A {
        A::default()
    }

    fn reduce(&mut self, acc: A, item: T) -> Step<A> {
        Step::Continue((self.f)(acc, item))
    }

    fn complete(&mut self, acc: A) -> A {
        acc
    }
}
