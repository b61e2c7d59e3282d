use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[derive(Debug, Clone)]
#[must_use = "transducers do nothing unless applied"]
pub struct TakeWhile<P> {
    predicate: P,
}

/// Forwards values while `predicate` holds and terminates on the first value
/// that fails it. That value is not forwarded.
pub fn take_while<P>(predicate: P) -> TakeWhile<P> {
    TakeWhile { predicate }
}

pub struct TakeWhileReducer<R, P> {
    next: R,
    predicate: P,
}

impl<R, P: Clone> Transducer<R> for TakeWhile<P> {
    type Output = TakeWhileReducer<R, P>;

    fn apply(&self, next: R) -> Self::Output {
        TakeWhileReducer {
            next,
            predicate: self.predicate.clone(),
        }
    }
}

impl<T, R, P> Reducer<T> for TakeWhileReducer<R, P>
where
    R: Reducer<T>,
    P: FnMut(&T) -> bool,
{
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if (self.predicate)(&item) {
            self.next.reduce(acc, item)
        } else {
            Step::Done(acc)
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::take_while;
    use crate::transform::tests::collect_vec;

    #[test]
    fn stops_at_first_failure() {
        let out: Vec<i32> = collect_vec(&take_while(|x: &i32| *x < 3), [1, 2, 3, 1, 2]);
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn unbounded_input_terminates() {
        let out: Vec<u64> = collect_vec(&take_while(|x: &u64| x * x < 20), 0..);
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
    }
}
