use core::marker::PhantomData;

use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[derive(Debug, Clone)]
#[must_use = "transducers do nothing unless applied"]
pub struct Mapcat<F> {
    f: F,
}

/// Explodes every value with `f` and forwards the produced elements one by
/// one. A downstream termination stops the drain immediately.
///
/// `f` may return any iterable, including the sequences of
/// [`sequence`](crate::sequence) such as [`from_fn`](crate::sequence::from_fn).
pub fn mapcat<F>(f: F) -> Mapcat<F> {
    Mapcat { f }
}

pub struct MapcatReducer<R, F> {
    next: R,
    f: F,
}

impl<R, F: Clone> Transducer<R> for Mapcat<F> {
    type Output = MapcatReducer<R, F>;

    fn apply(&self, next: R) -> Self::Output {
        MapcatReducer {
            next,
            f: self.f.clone(),
        }
    }
}

/// Feeds every element of `values` downstream until one of them terminates.
#[inline]
fn drain<I, R>(next: &mut R, mut acc: R::Acc, values: I) -> Step<R::Acc>
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    for value in values {
        match next.reduce(acc, value) {
            Step::Continue(more) => acc = more,
            done @ Step::Done(_) => return done,
        }
    }
    Step::Continue(acc)
}

impl<T, U, R, F> Reducer<T> for MapcatReducer<R, F>
where
    F: FnMut(T) -> U,
    U: IntoIterator,
    R: Reducer<U::Item>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let values = (self.f)(item);
        drain(&mut self.next, acc, values)
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}

#[must_use = "transducers do nothing unless applied"]
pub struct Cat<T> {
    _item: PhantomData<fn(T)>,
}

impl<T> Clone for Cat<T> {
    fn clone(&self) -> Self {
        cat()
    }
}

/// Flattens nested values: `mapcat` with the identity explosion.
pub fn cat<T>() -> Cat<T> {
    Cat { _item: PhantomData }
}

pub struct CatReducer<R, T> {
    next: R,
    _item: PhantomData<fn(T)>,
}

impl<R, T> Transducer<R> for Cat<T> {
    type Output = CatReducer<R, T>;

    fn apply(&self, next: R) -> Self::Output {
        CatReducer {
            next,
            _item: PhantomData,
        }
    }
}

impl<T, R> Reducer<T> for CatReducer<R, T>
where
    T: IntoIterator,
    R: Reducer<T::Item>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        drain(&mut self.next, acc, item)
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}
