use crate::{
    error::{Error, Result},
    reducer::Reducer,
    step::Step,
    transducer::Transducer,
};

#[derive(Debug, Clone, Copy)]
#[must_use = "transducers do nothing unless applied"]
pub struct TakeNth {
    step: usize,
}

/// Forwards the 1st, `step + 1`th, `2 * step + 1`th, ... value.
pub fn take_nth(step: usize) -> Result<TakeNth> {
    if step == 0 {
        return Err(Error::InvalidInterval(step));
    }
    Ok(TakeNth { step })
}

pub struct TakeNthReducer<R> {
    next: R,
    step: usize,
    i: usize,
}

impl<R> Transducer<R> for TakeNth {
    type Output = TakeNthReducer<R>;

    fn apply(&self, next: R) -> Self::Output {
        TakeNthReducer {
            next,
            step: self.step,
            i: 0,
        }
    }
}

impl<T, R: Reducer<T>> Reducer<T> for TakeNthReducer<R> {
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.i == 0 {
            self.i = self.step - 1;
            self.next.reduce(acc, item)
        } else {
            self.i -= 1;
            Step::Continue(acc)
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}
