use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[derive(Debug, Clone, Copy)]
#[must_use = "transducers do nothing unless applied"]
pub struct Take {
    n: usize,
}

/// Forwards the first `n` values and terminates together with the `n`th.
///
/// `take(0)` terminates on the first value without forwarding it.
pub fn take(n: usize) -> Take {
    Take { n }
}

pub struct TakeReducer<R> {
    next: R,
    remaining: usize,
}

impl<R> Transducer<R> for Take {
    type Output = TakeReducer<R>;

    fn apply(&self, next: R) -> Self::Output {
        TakeReducer {
            next,
            remaining: self.n,
        }
    }
}

impl<T, R: Reducer<T>> Reducer<T> for TakeReducer<R> {
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.remaining == 0 {
            return Step::Done(acc);
        }
        self.remaining -= 1;
        let step = self.next.reduce(acc, item);
        if self.remaining == 0 {
            step.done()
        } else {
            step
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::take;
    use crate::{
        comp,
        transform::{map, tests::collect_vec},
    };

    #[test]
    fn boundary_value_is_forwarded() {
        let out: Vec<i32> = collect_vec(&take(3), [10, 20, 30, 40, 50]);
        assert_eq!(out, vec![10, 20, 30]);
    }

    #[test]
    fn zero_forwards_nothing() {
        let out: Vec<i32> = collect_vec(&take(0), [1, 2]);
        assert!(out.is_empty());
    }

    #[test]
    fn nested_takes_use_the_smaller_bound() {
        let xform = comp!(take(4), map(|x: i32| x * 2), take(2));
        let out: Vec<i32> = collect_vec(&xform, 0..);
        assert_eq!(out, vec![0, 2]);
    }

    proptest! {
        #[test]
        fn length_is_min_of_bound_and_input(n in 0usize..20, len in 0usize..20) {
            let out: Vec<usize> = collect_vec(&take(n), 0..len);
            prop_assert_eq!(out.len(), n.min(len));
        }
    }
}
