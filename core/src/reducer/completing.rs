use super::Reducer;
use crate::step::Step;

/// Runs `f` on the accumulator after the wrapped reducer has completed.
#[derive(Clone)]
#[must_use = "reducers do nothing unless driven"]
pub struct Completing<R, F> {
    reducer: R,
    f: F,
}

pub fn completing<R, F>(reducer: R, f: F) -> Completing<R, F> {
    Completing { reducer, f }
}

impl<T, R, F> Reducer<T> for Completing<R, F>
where
    R: Reducer<T>,
    F: FnMut(R::Acc) -> R::Acc,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.reducer.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        self.reducer.reduce(acc, item)
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        let acc = self.reducer.complete(acc);
        (self.f)(acc)
    }
}
