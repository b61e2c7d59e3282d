use super::Reducer;
use crate::step::Step;

/// Counts the values that reach the end of the chain.
#[derive(Debug, Clone, Copy, Default)]
#[must_use = "reducers do nothing unless driven"]
pub struct Count;

pub fn count() -> Count {
    Count
}

impl<T> Reducer<T> for Count {
    type Acc = usize;

    fn init(&mut self) -> usize {
        0
    }

    fn reduce(&mut self, acc: usize, _: T) -> Step<usize> {
        Step::Continue(acc + 1)
    }

    fn complete(&mut self, acc: usize) -> usize {
        acc
    }
}
