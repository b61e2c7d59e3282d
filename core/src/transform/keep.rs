use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[derive(Debug, Clone)]
#[must_use = "transducers do nothing unless applied"]
pub struct Keep<F> {
    f: F,
}

/// Forwards `f(value)` unless it is `None`.
pub fn keep<F>(f: F) -> Keep<F> {
    Keep { f }
}

pub struct KeepReducer<R, F> {
    next: R,
    f: F,
}

impl<R, F: Clone> Transducer<R> for Keep<F> {
    type Output = KeepReducer<R, F>;

    fn apply(&self, next: R) -> Self::Output {
        KeepReducer {
            next,
            f: self.f.clone(),
        }
    }
}

impl<T, U, R, F> Reducer<T> for KeepReducer<R, F>
where
    R: Reducer<U>,
    F: FnMut(T) -> Option<U>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        match (self.f)(item) {
            Some(value) => self.next.reduce(acc, value),
            None => Step::Continue(acc),
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}

#[derive(Debug, Clone)]
#[must_use = "transducers do nothing unless applied"]
pub struct KeepIndexed<F> {
    f: F,
}

/// Like [`keep`], but `f` also receives a zero-based call index that advances
/// on every value, kept or not.
pub fn keep_indexed<F>(f: F) -> KeepIndexed<F> {
    KeepIndexed { f }
}

pub struct KeepIndexedReducer<R, F> {
    next: R,
    f: F,
    index: usize,
}

impl<R, F: Clone> Transducer<R> for KeepIndexed<F> {
    type Output = KeepIndexedReducer<R, F>;

    fn apply(&self, next: R) -> Self::Output {
        KeepIndexedReducer {
            next,
            f: self.f.clone(),
            index: 0,
        }
    }
}

impl<T, U, R, F> Reducer<T> for KeepIndexedReducer<R, F>
where
    R: Reducer<U>,
    F: FnMut(usize, T) -> Option<U>,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let index = self.index;
        self.index += 1;
        match (self.f)(index, item) {
            Some(value) => self.next.reduce(acc, value),
            None => Step::Continue(acc),
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}
