use crate::{reducer::Reducer, step::Step, transducer::Transducer};

#[derive(Debug, Clone, Copy)]
#[must_use = "transducers do nothing unless applied"]
pub struct DropFirst {
    n: usize,
}

/// Discards the first `n` values and forwards the rest.
pub fn drop(n: usize) -> DropFirst {
    DropFirst { n }
}

pub struct DropFirstReducer<R> {
    next: R,
    remaining: usize,
}

impl<R> Transducer<R> for DropFirst {
    type Output = DropFirstReducer<R>;

    fn apply(&self, next: R) -> Self::Output {
        DropFirstReducer {
            next,
            remaining: self.n,
        }
    }
}

impl<T, R: Reducer<T>> Reducer<T> for DropFirstReducer<R> {
    type Acc = R::Acc;

    fn init(&mut self) -> R::Acc {
        self.next.init()
    }

    fn reduce(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Step::Continue(acc)
        } else {
            self.next.reduce(acc, item)
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Acc {
        self.next.complete(acc)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::drop;
    use crate::transform::tests::collect_vec;

    #[test_case(0, vec![1, 2, 3] ; "nothing")]
    #[test_case(2, vec![3] ; "prefix")]
    #[test_case(5, vec![] ; "everything")]
    fn discards_prefix(n: usize, expected: Vec<i32>) {
        let out: Vec<i32> = collect_vec(&drop(n), [1, 2, 3]);
        assert_eq!(out, expected);
    }
}
