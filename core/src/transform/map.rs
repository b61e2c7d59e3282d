use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[derive(Debug, Clone)]
#[must_use = "transducers do nothing unless applied"]
pub struct Map<F> {
    pub(super) f: F,
}

/// Replaces every value with `f(value)`.
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

pub struct MapReducer<R, F> {
    next: R,
    f: F,
}

impl<R, F: Clone> Transducer<R> for Map<F> {
    type Output = MapReducer<R, F>;

    fn apply(&self, next: R) -> Self::Output {
        MapReducer {
            next,
            f: self.f.clone(),
        }
    }
}

impl<T, U, R, F> Reducer<T> for MapReducer<R, F>
where
    R: Reducer<U>,
    F: FnMut(T) -> U,
{
    type Acc = R::Acc;

    #[inline]
    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    #[inline]
    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        self.next.reduce(acc, (self.f)(item))
    }

    #[inline]
    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}
